use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::{EngineerId, ExternalUserId};

/// A field worker who can be assigned to timesheets.
///
/// Records come exclusively from the repository's read path; the core never
/// creates or mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engineer {
    pub id: EngineerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Display-only; `None` when the upstream record carries a malformed
    /// date.
    #[serde(default)]
    pub birth_date: Option<Date>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// The API serializes this one field in snake_case.
    #[serde(rename = "user_id")]
    pub user_id: ExternalUserId,
}

impl Engineer {
    /// Roster display form, `"First Last"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
