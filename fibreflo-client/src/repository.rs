use async_trait::async_trait;

use fibreflo_core::{
    Engineer, EngineerId, RepositoryError, Timesheet, TimesheetDraft, TimesheetId,
    TimesheetRepository, WorkItem, WorkItemDraft,
};

use crate::{client::FetchError, FibrefloClient};

/// The HTTP client is the production implementation of the core's
/// repository port.
#[async_trait]
impl TimesheetRepository for FibrefloClient {
    async fn list_timesheets(&self) -> Result<Vec<Timesheet>, RepositoryError> {
        self.fetch_timesheets().await.map_err(map_fetch_error)
    }

    async fn get_timesheet(&self, id: TimesheetId) -> Result<Timesheet, RepositoryError> {
        self.fetch_timesheet(id)
            .await
            .map_err(|err| named_not_found(err, format!("timesheet {id}")))
    }

    async fn create_timesheet(
        &self,
        draft: &TimesheetDraft,
    ) -> Result<Timesheet, RepositoryError> {
        self.post_timesheet(draft).await.map_err(map_fetch_error)
    }

    async fn create_work_item(&self, draft: &WorkItemDraft) -> Result<WorkItem, RepositoryError> {
        self.post_work_item(draft)
            .await
            .map_err(|err| named_not_found(err, format!("timesheet {}", draft.timesheet_id)))
    }

    async fn list_engineers(&self) -> Result<Vec<Engineer>, RepositoryError> {
        self.fetch_engineers().await.map_err(map_fetch_error)
    }

    async fn get_engineer(&self, id: EngineerId) -> Result<Engineer, RepositoryError> {
        self.fetch_engineer(id)
            .await
            .map_err(|err| named_not_found(err, format!("engineer {id}")))
    }
}

fn map_fetch_error(err: FetchError) -> RepositoryError {
    match err {
        FetchError::Unauthorized => RepositoryError::Unauthorized,
        FetchError::NotFound => RepositoryError::NotFound("not found".to_string()),
        FetchError::ResponseError(msg)
        | FetchError::ParsingError(msg)
        | FetchError::Other(msg) => RepositoryError::unknown(msg),
    }
}

/// Like [`map_fetch_error`], but names what was missing.
fn named_not_found(err: FetchError, what: String) -> RepositoryError {
    match err {
        FetchError::NotFound => RepositoryError::NotFound(what),
        other => map_fetch_error(other),
    }
}
