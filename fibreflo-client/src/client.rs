use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::instrument;

use fibreflo_core::{
    Engineer, EngineerId, Timesheet, TimesheetDraft, TimesheetId, WorkItem, WorkItemDraft,
};

use crate::{conversions, wire, ApiUrl, Credentials};

/// Errors from talking to the FibreFlo API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("response error: {0}")]
    ResponseError(String),
    #[error("parsing error: {0}")]
    ParsingError(String),
    #[error("{0}")]
    Other(String),
}

/// HTTP client for the FibreFlo timesheet API.
///
/// One instance per signed-in user: it holds that user's bearer
/// [`Credentials`] for every call.
#[derive(Debug, Clone)]
pub struct FibrefloClient {
    credentials: Credentials,
    base_url: ApiUrl,
    http: reqwest::Client,
}

impl FibrefloClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, ApiUrl::from_env())
    }

    pub fn with_base_url(credentials: Credentials, base_url: ApiUrl) -> Self {
        Self {
            credentials,
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// `GET /timesheets`. Unscoped: the API returns every timesheet and
    /// ownership filtering happens in the core.
    #[instrument(name = "fetch_timesheets", skip(self))]
    pub async fn fetch_timesheets(&self) -> Result<Vec<Timesheet>, FetchError> {
        let url = self.base_url.append_path("timesheets");
        let payloads: Vec<wire::TimesheetPayload> = self.get(url).await?;
        Ok(conversions::to_domain_timesheets(payloads))
    }

    /// `GET /timesheets/{id}`.
    #[instrument(name = "fetch_timesheet", skip(self))]
    pub async fn fetch_timesheet(&self, id: TimesheetId) -> Result<Timesheet, FetchError> {
        let url = self.base_url.append_path(&format!("timesheets/{id}"));
        let payload: wire::TimesheetPayload = self.get(url).await?;
        conversions::to_domain_timesheet(payload)
    }

    /// `POST /timesheets`. The API answers with the new record's bare id;
    /// the full record is fetched right after, matching the mobile app's
    /// create-then-open flow.
    #[instrument(name = "post_timesheet", skip(self, draft))]
    pub async fn post_timesheet(&self, draft: &TimesheetDraft) -> Result<Timesheet, FetchError> {
        let url = self.base_url.append_path("timesheets");
        let id: i32 = self.post(url, draft).await?;
        self.fetch_timesheet(TimesheetId::new(id)).await
    }

    /// `POST /workitems`.
    #[instrument(
        name = "post_work_item",
        skip(self, draft),
        fields(timesheet_id = %draft.timesheet_id)
    )]
    pub async fn post_work_item(&self, draft: &WorkItemDraft) -> Result<WorkItem, FetchError> {
        let url = self.base_url.append_path("workitems");
        let payload: wire::WorkItemPayload = self.post(url, draft).await?;
        conversions::to_domain_work_item(payload)
    }

    /// `GET /engineers`.
    #[instrument(name = "fetch_engineers", skip(self))]
    pub async fn fetch_engineers(&self) -> Result<Vec<Engineer>, FetchError> {
        let url = self.base_url.append_path("engineers");
        let payloads: Vec<wire::EngineerPayload> = self.get(url).await?;
        Ok(conversions::to_domain_engineers(payloads))
    }

    /// `GET /engineers/{id}`.
    #[instrument(name = "fetch_engineer", skip(self))]
    pub async fn fetch_engineer(&self, id: EngineerId) -> Result<Engineer, FetchError> {
        let url = self.base_url.append_path(&format!("engineers/{id}"));
        let payload: wire::EngineerPayload = self.get(url).await?;
        Ok(conversions::to_domain_engineer(payload))
    }

    async fn get<T: DeserializeOwned>(&self, url: impl AsRef<str>) -> Result<T, FetchError> {
        let response = self
            .http
            .get(url.as_ref())
            .header("Authorization", self.credentials.as_bearer_header())
            .send()
            .await
            .map_err(|err| FetchError::ResponseError(err.to_string()))?;

        Self::decode(response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
        body: &B,
    ) -> Result<T, FetchError> {
        let response = self
            .http
            .post(url.as_ref())
            .header("Authorization", self.credentials.as_bearer_header())
            .json(body)
            .send()
            .await
            .map_err(|err| FetchError::ResponseError(err.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
        let status = response.status();
        if status == 401 || status == 403 {
            return Err(FetchError::Unauthorized);
        }
        if status == 404 {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::ResponseError(format!(
                "unexpected status code: {status}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| FetchError::ParsingError(format!("failed to parse response: {err}")))
    }
}
