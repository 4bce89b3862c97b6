//! In-memory repository for tests and offline development hosts.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::{
    error::RepositoryError,
    models::{
        Engineer, EngineerId, Timesheet, TimesheetDraft, TimesheetId, TimesheetStatus, WorkItem,
        WorkItemDraft, WorkItemId,
    },
    ports::outbound::TimesheetRepository,
};

/// Mock timesheet repository backed by in-memory vectors.
///
/// Ids are assigned one past the current maximum, like the dev store the
/// mobile client ran against.
#[derive(Clone, Default)]
pub struct MockTimesheetRepository {
    timesheets: Arc<RwLock<Vec<Timesheet>>>,
    engineers: Arc<RwLock<Vec<Engineer>>>,
}

impl MockTimesheetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed timesheets.
    pub fn with_timesheets(self, timesheets: Vec<Timesheet>) -> Self {
        self.timesheets.write().unwrap().extend(timesheets);
        self
    }

    /// Seed the engineer roster.
    pub fn with_engineers(self, engineers: Vec<Engineer>) -> Self {
        self.engineers.write().unwrap().extend(engineers);
        self
    }

    pub fn timesheet_count(&self) -> usize {
        self.timesheets.read().unwrap().len()
    }
}

#[async_trait]
impl TimesheetRepository for MockTimesheetRepository {
    async fn list_timesheets(&self) -> Result<Vec<Timesheet>, RepositoryError> {
        Ok(self.timesheets.read().unwrap().clone())
    }

    async fn get_timesheet(&self, id: TimesheetId) -> Result<Timesheet, RepositoryError> {
        self.timesheets
            .read()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("timesheet {id}")))
    }

    async fn create_timesheet(
        &self,
        draft: &TimesheetDraft,
    ) -> Result<Timesheet, RepositoryError> {
        let engineers = {
            let roster = self.engineers.read().unwrap();
            draft
                .engineer_ids
                .iter()
                .map(|id| {
                    roster
                        .iter()
                        .find(|e| e.id == *id)
                        .cloned()
                        .ok_or_else(|| RepositoryError::NotFound(format!("engineer {id}")))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut timesheets = self.timesheets.write().unwrap();
        let next_id = timesheets
            .iter()
            .map(|t| t.id.as_i32())
            .max()
            .unwrap_or(0)
            + 1;

        let sheet = Timesheet {
            id: TimesheetId::new(next_id),
            work_provider: draft.work_provider,
            date_of_work: draft.date_of_work,
            notes: draft.notes.clone(),
            status: TimesheetStatus::Submitted,
            created_at: OffsetDateTime::now_utc(),
            engineers,
            work_items: Vec::new(),
        };
        timesheets.push(sheet.clone());
        Ok(sheet)
    }

    async fn create_work_item(&self, draft: &WorkItemDraft) -> Result<WorkItem, RepositoryError> {
        let mut timesheets = self.timesheets.write().unwrap();
        let next_id = timesheets
            .iter()
            .flat_map(|t| &t.work_items)
            .map(|w| w.id.as_i32())
            .max()
            .unwrap_or(0)
            + 1;

        let sheet = timesheets
            .iter_mut()
            .find(|t| t.id == draft.timesheet_id)
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("timesheet {}", draft.timesheet_id))
            })?;

        let item = WorkItem {
            id: WorkItemId::new(next_id),
            name: draft.name.clone(),
            quantity: draft.quantity,
            work_area: draft.work_area.clone(),
            notes: draft.notes.clone(),
            timesheet_id: draft.timesheet_id,
        };
        sheet.work_items.push(item.clone());
        Ok(item)
    }

    async fn list_engineers(&self) -> Result<Vec<Engineer>, RepositoryError> {
        Ok(self.engineers.read().unwrap().clone())
    }

    async fn get_engineer(&self, id: EngineerId) -> Result<Engineer, RepositoryError> {
        self.engineers
            .read()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("engineer {id}")))
    }
}
