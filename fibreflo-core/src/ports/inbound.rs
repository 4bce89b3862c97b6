use async_trait::async_trait;
use time::Date;

use crate::{
    error::TimesheetError,
    models::{Engineer, ExternalUserId, Timesheet, TimesheetId, WorkItem, WorkItemId},
    validate::{TimesheetForm, WorkItemForm},
};

/// Inbound port: the use cases a presentation layer invokes.
///
/// Implemented by [`Timesheets`](crate::services::Timesheets), which
/// orchestrates validation and the outbound repository.
#[async_trait]
pub trait TimesheetService: Send + Sync + 'static {
    /// Timesheets with `user` among the assigned engineers.
    async fn timesheets_for_user(
        &self,
        user: &ExternalUserId,
    ) -> Result<Vec<Timesheet>, TimesheetError>;

    /// `user`'s timesheets dated exactly `day` (the day-picker view).
    async fn timesheets_on(
        &self,
        user: &ExternalUserId,
        day: Date,
    ) -> Result<Vec<Timesheet>, TimesheetError>;

    /// One timesheet with its engineers and work items.
    async fn timesheet(&self, id: TimesheetId) -> Result<Timesheet, TimesheetError>;

    /// Validate a timesheet form and persist it.
    async fn create_timesheet(&self, form: &TimesheetForm) -> Result<Timesheet, TimesheetError>;

    /// Validate a work-item form against its timesheet's rate card and
    /// persist it.
    async fn add_work_item(&self, form: &WorkItemForm) -> Result<WorkItem, TimesheetError>;

    /// One work item, located on its fetched timesheet.
    async fn work_item(
        &self,
        timesheet_id: TimesheetId,
        work_item_id: WorkItemId,
    ) -> Result<WorkItem, TimesheetError>;

    /// The full engineer roster.
    async fn engineers(&self) -> Result<Vec<Engineer>, TimesheetError>;
}
