use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::{Engineer, EngineerId, ExternalUserId, TimesheetId, WorkItem, WorkProvider};

/// Lifecycle state reported by the API for a timesheet.
///
/// The set is open-ended upstream, so unknown states are carried through
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimesheetStatus {
    Submitted,
    Approved,
    Rejected,
    Other(String),
}

impl From<String> for TimesheetStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "submitted" | "Submitted" => Self::Submitted,
            "approved" | "Approved" => Self::Approved,
            "rejected" | "Rejected" => Self::Rejected,
            _ => Self::Other(value),
        }
    }
}

impl From<TimesheetStatus> for String {
    fn from(value: TimesheetStatus) -> Self {
        match value {
            TimesheetStatus::Submitted => "submitted".to_string(),
            TimesheetStatus::Approved => "approved".to_string(),
            TimesheetStatus::Rejected => "rejected".to_string(),
            TimesheetStatus::Other(other) => other,
        }
    }
}

impl fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimesheetStatus::Submitted => write!(f, "Submitted"),
            TimesheetStatus::Approved => write!(f, "Approved"),
            TimesheetStatus::Rejected => write!(f, "Rejected"),
            TimesheetStatus::Other(other) => write!(f, "{other}"),
        }
    }
}

/// The record of a day's work by one or more engineers for one work
/// provider.
///
/// Mutated only by appending work items; there is no delete operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    pub id: TimesheetId,
    pub work_provider: WorkProvider,
    pub date_of_work: Date,
    pub notes: String,
    pub status: TimesheetStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub engineers: Vec<Engineer>,
    pub work_items: Vec<WorkItem>,
}

impl Timesheet {
    /// Whether `user` is one of the assigned engineers.
    pub fn is_assigned_to(&self, user: &ExternalUserId) -> bool {
        self.engineers.iter().any(|e| &e.user_id == user)
    }
}

/// A validated, id-less timesheet ready for submission.
///
/// Guaranteed a non-empty, duplicate-free `engineer_ids` and a date no
/// later than the day it was validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetDraft {
    pub work_provider: WorkProvider,
    pub date_of_work: Date,
    pub notes: String,
    pub engineer_ids: Vec<EngineerId>,
}
