//! Raw payloads exactly as the API serves them.
//!
//! User-controlled dates (`dateOfWork`, `birthDate`) travel as strings: the
//! store holds whatever the mobile pickers posted over the years, so
//! parsing is deferred to [`conversions`](crate::conversions), where a
//! malformed value can be handled per field instead of failing the whole
//! payload.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerPayload {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// The one field the API serializes in snake_case.
    #[serde(rename = "user_id")]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemPayload {
    pub id: i32,
    pub name: String,
    /// `i64` on the wire: the store does not enforce a range, so legacy
    /// rows can carry values a `u32` cannot.
    pub quantity: i64,
    pub work_area: String,
    pub notes: String,
    pub timesheet_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetPayload {
    pub id: i32,
    pub work_provider: String,
    pub date_of_work: String,
    pub notes: String,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub engineers: Vec<EngineerPayload>,
    pub work_items: Vec<WorkItemPayload>,
}
