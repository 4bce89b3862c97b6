use serde::{Deserialize, Serialize};

use super::{TimesheetId, WorkItemId};

/// One billable line entry on a timesheet.
///
/// `name` is a rate-card code for the owning timesheet's work provider, not
/// free text; validation enforces that before a draft ever exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: WorkItemId,
    pub name: String,
    pub quantity: u32,
    pub work_area: String,
    pub notes: String,
    pub timesheet_id: TimesheetId,
}

/// A validated, id-less work item ready for submission.
///
/// Only [`validate::work_item`](crate::validate::work_item) produces these,
/// so holding one means the fields already passed the rate-card rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemDraft {
    pub name: String,
    pub quantity: u32,
    pub work_area: String,
    pub notes: String,
    pub timesheet_id: TimesheetId,
}
