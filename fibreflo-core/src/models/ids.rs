use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a [`Timesheet`](super::Timesheet) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimesheetId(i32);

impl TimesheetId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for TimesheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for TimesheetId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<TimesheetId> for i32 {
    fn from(id: TimesheetId) -> Self {
        id.0
    }
}

/// Identifier of a [`WorkItem`](super::WorkItem) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkItemId(i32);

impl WorkItemId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for WorkItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for WorkItemId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<WorkItemId> for i32 {
    fn from(id: WorkItemId) -> Self {
        id.0
    }
}

/// Identifier of an [`Engineer`](super::Engineer) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngineerId(i32);

impl EngineerId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for EngineerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for EngineerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<EngineerId> for i32 {
    fn from(id: EngineerId) -> Self {
        id.0
    }
}

/// Identifier assigned to an engineer by the external auth provider.
///
/// Opaque to this crate; it only ever gets compared for equality when
/// filtering timesheets by ownership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalUserId(String);

impl ExternalUserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalUserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ExternalUserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ExternalUserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for ExternalUserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
