use async_trait::async_trait;

use crate::{
    error::RepositoryError,
    models::{
        Engineer, EngineerId, Timesheet, TimesheetDraft, TimesheetId, WorkItem, WorkItemDraft,
    },
};

/// Outbound port to the timesheet store.
///
/// Implementations are created per signed-in user and hold that user's
/// credentials themselves, so no method takes a token. The production
/// implementation is an HTTP client; tests use the in-memory
/// [`mock`](crate::mock).
#[async_trait]
pub trait TimesheetRepository: Send + Sync + 'static {
    /// Every timesheet visible to the caller. The store does not scope
    /// this to the caller; see
    /// [`summary::filter_by_ownership`](crate::summary::filter_by_ownership).
    async fn list_timesheets(&self) -> Result<Vec<Timesheet>, RepositoryError>;

    /// One timesheet with its engineers and work items.
    async fn get_timesheet(&self, id: TimesheetId) -> Result<Timesheet, RepositoryError>;

    /// Persist a validated draft; the store assigns the id.
    async fn create_timesheet(&self, draft: &TimesheetDraft)
        -> Result<Timesheet, RepositoryError>;

    /// Persist a validated work item against its timesheet.
    async fn create_work_item(&self, draft: &WorkItemDraft) -> Result<WorkItem, RepositoryError>;

    /// The full engineer roster.
    async fn list_engineers(&self) -> Result<Vec<Engineer>, RepositoryError>;

    /// One engineer record.
    async fn get_engineer(&self, id: EngineerId) -> Result<Engineer, RepositoryError>;
}
