//! Read-side views over timesheets and work items.
//!
//! Pure functions over already-fetched records; nothing here mutates state
//! or talks to the repository.

use itertools::Itertools;
use serde::Serialize;
use time::Date;

use crate::models::{Engineer, ExternalUserId, Timesheet, WorkItem};

/// One label/value row of a details view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

fn row(label: &'static str, value: impl Into<String>) -> SummaryRow {
    SummaryRow {
        label,
        value: value.into(),
    }
}

/// The timesheet details rows, in display order.
pub fn summary_rows(sheet: &Timesheet) -> Vec<SummaryRow> {
    vec![
        row("Date of Work", format_date(sheet.date_of_work)),
        row("Work Provider", sheet.work_provider.to_string()),
        row("Notes", sheet.notes.clone()),
        row("Engineers", roster(&sheet.engineers)),
    ]
}

/// The work-item details rows, in display order.
pub fn work_item_rows(item: &WorkItem) -> Vec<SummaryRow> {
    vec![
        row("Type", item.name.clone()),
        row("Quantity", item.quantity.to_string()),
        row("Work Area", item.work_area.clone()),
        row("Notes", item.notes.clone()),
    ]
}

/// `dd/mm/yyyy`, as the tables render dates.
pub fn format_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// Engineer roster as `"First Last"` names joined by `", "`, in stored
/// order.
pub fn roster(engineers: &[Engineer]) -> String {
    engineers.iter().map(Engineer::display_name).join(", ")
}

/// Keep timesheets dated exactly on `day`.
///
/// Dates are civil calendar days, so this is plain equality and filtering
/// an already filtered list again changes nothing.
pub fn filter_by_date(timesheets: Vec<Timesheet>, day: Date) -> Vec<Timesheet> {
    timesheets
        .into_iter()
        .filter(|t| t.date_of_work == day)
        .collect()
}

/// Keep timesheets with `user` among the assigned engineers.
///
/// Display convenience only. The upstream API returns every timesheet and
/// the consumer narrows locally; a deployment that needs real access
/// control must scope the data server-side instead.
pub fn filter_by_ownership(timesheets: Vec<Timesheet>, user: &ExternalUserId) -> Vec<Timesheet> {
    timesheets
        .into_iter()
        .filter(|t| t.is_assigned_to(user))
        .collect()
}

/// Summed quantity for one work-item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemTotal {
    pub name: String,
    pub quantity: u64,
}

/// Sum quantities across items sharing a rate-card code.
///
/// Totals appear in first-occurrence order; the name-to-quantity
/// associations themselves do not depend on input order. Quantities are
/// widened to `u64` so a long list cannot overflow.
pub fn totals_by_work_item_type(items: &[WorkItem]) -> Vec<WorkItemTotal> {
    let mut totals: Vec<WorkItemTotal> = Vec::new();
    for item in items {
        match totals.iter_mut().find(|t| t.name == item.name) {
            Some(total) => total.quantity += u64::from(item.quantity),
            None => totals.push(WorkItemTotal {
                name: item.name.clone(),
                quantity: u64::from(item.quantity),
            }),
        }
    }
    totals
}
