//! Form validation for timesheets and work items.
//!
//! Both validators collect every applicable error rather than
//! short-circuiting, so a form layer can mark all offending fields in one
//! pass. Errors are pushed in field order, making the output deterministic
//! for identical input.

use itertools::Itertools;
use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

use crate::{
    catalog,
    error::ValidationError,
    models::{EngineerId, TimesheetDraft, TimesheetId, WorkItemDraft, WorkProvider},
};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Raw work-item form state, exactly as a form produces it: `quantity`
/// arrives as text from a numeric input.
#[derive(Debug, Clone)]
pub struct WorkItemForm {
    pub name: String,
    pub quantity: String,
    pub work_area: String,
    pub notes: String,
    pub timesheet_id: TimesheetId,
}

/// Raw timesheet form state.
///
/// `date_of_work` is an ISO `YYYY-MM-DD` string from the date picker;
/// `None` means the picker was never touched.
#[derive(Debug, Clone)]
pub struct TimesheetForm {
    pub work_provider: String,
    pub date_of_work: Option<String>,
    pub notes: String,
    pub engineer_ids: Vec<EngineerId>,
}

/// Validate raw work-item input against `provider`'s rate card.
///
/// `provider` is the owning timesheet's provider; whether that timesheet
/// exists is the caller's concern. On success the draft carries the trimmed
/// fields and the parsed quantity.
pub fn work_item(
    form: &WorkItemForm,
    provider: WorkProvider,
) -> Result<WorkItemDraft, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if !catalog::is_valid_code(provider, name) {
        errors.push(ValidationError::InvalidWorkItemType(name.to_string()));
    }

    let quantity = parse_quantity(&form.quantity);
    if quantity.is_none() {
        errors.push(ValidationError::InvalidQuantity);
    }

    let work_area = form.work_area.trim();
    if work_area.is_empty() {
        errors.push(ValidationError::MissingWorkArea);
    }

    let notes = form.notes.trim();
    if notes.is_empty() {
        errors.push(ValidationError::MissingNotes);
    }

    match quantity {
        Some(quantity) if errors.is_empty() => Ok(WorkItemDraft {
            name: name.to_string(),
            quantity,
            work_area: work_area.to_string(),
            notes: notes.to_string(),
            timesheet_id: form.timesheet_id,
        }),
        _ => Err(errors),
    }
}

/// Validate raw timesheet input.
///
/// `today` is passed in rather than read from the clock so the future-date
/// rule stays deterministic; callers use
/// [`time_utils::today`](crate::time_utils::today). Whether the assigned
/// engineers exist is the caller's concern.
pub fn timesheet(
    form: &TimesheetForm,
    today: Date,
) -> Result<TimesheetDraft, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let work_provider = form.work_provider.parse::<WorkProvider>().ok();
    if work_provider.is_none() {
        errors.push(ValidationError::InvalidWorkProvider(
            form.work_provider.clone(),
        ));
    }

    let date_of_work = parse_date_of_work(form.date_of_work.as_deref(), today);
    if date_of_work.is_none() {
        errors.push(ValidationError::InvalidDate);
    }

    // Set semantics: duplicates collapse, first occurrence wins.
    let engineer_ids: Vec<EngineerId> = form.engineer_ids.iter().copied().unique().collect();
    if engineer_ids.is_empty() {
        errors.push(ValidationError::MissingEngineers);
    }

    let notes = form.notes.trim();
    if notes.is_empty() {
        errors.push(ValidationError::MissingNotes);
    }

    match (work_provider, date_of_work) {
        (Some(work_provider), Some(date_of_work)) if errors.is_empty() => Ok(TimesheetDraft {
            work_provider,
            date_of_work,
            notes: notes.to_string(),
            engineer_ids,
        }),
        _ => Err(errors),
    }
}

/// `Some` only for whole numbers strictly greater than zero.
fn parse_quantity(raw: &str) -> Option<u32> {
    let parsed: i64 = raw.trim().parse().ok()?;
    u32::try_from(parsed).ok().filter(|q| *q > 0)
}

/// A timesheet cannot be dated in the future.
fn parse_date_of_work(raw: Option<&str>, today: Date) -> Option<Date> {
    let date = Date::parse(raw?.trim(), ISO_DATE).ok()?;
    (date <= today).then_some(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 03 - 14);

    fn work_item_form() -> WorkItemForm {
        WorkItemForm {
            name: "DUCT-LAY".to_string(),
            quantity: "12".to_string(),
            work_area: "Heol-y-Cyw phase 2".to_string(),
            notes: "54m in grass verge".to_string(),
            timesheet_id: TimesheetId::new(7),
        }
    }

    fn timesheet_form() -> TimesheetForm {
        TimesheetForm {
            work_provider: "Wessex".to_string(),
            date_of_work: Some("2026-03-13".to_string()),
            notes: "Traffic lights until 15:00".to_string(),
            engineer_ids: vec![EngineerId::new(1), EngineerId::new(4)],
        }
    }

    #[test]
    fn valid_work_item_becomes_a_trimmed_draft() {
        let mut form = work_item_form();
        form.work_area = "  Heol-y-Cyw phase 2 ".to_string();
        form.quantity = " 12 ".to_string();

        let draft = work_item(&form, WorkProvider::Wessex).unwrap();
        assert_eq!(draft.name, "DUCT-LAY");
        assert_eq!(draft.quantity, 12);
        assert_eq!(draft.work_area, "Heol-y-Cyw phase 2");
        assert_eq!(draft.timesheet_id, TimesheetId::new(7));
    }

    #[test]
    fn work_item_code_must_be_on_the_providers_own_card() {
        // Valid for Gigaclear, but the owning timesheet is Wessex.
        let mut form = work_item_form();
        form.name = "CABLE-BLOW".to_string();

        let errors = work_item(&form, WorkProvider::Wessex).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidWorkItemType("CABLE-BLOW".to_string())]
        );
    }

    #[test]
    fn work_item_quantity_must_be_a_positive_integer() {
        for bad in ["0", "-3", "2.5", "twelve", ""] {
            let mut form = work_item_form();
            form.quantity = bad.to_string();

            let errors = work_item(&form, WorkProvider::Wessex).unwrap_err();
            assert_eq!(errors, vec![ValidationError::InvalidQuantity], "input {bad:?}");
        }
    }

    #[test]
    fn work_item_rejects_whitespace_only_fields() {
        let mut form = work_item_form();
        form.work_area = "   ".to_string();
        form.notes = "\t".to_string();

        let errors = work_item(&form, WorkProvider::Wessex).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingWorkArea,
                ValidationError::MissingNotes,
            ]
        );
    }

    #[test]
    fn work_item_errors_arrive_together_in_field_order() {
        let form = WorkItemForm {
            name: "NOT-A-CODE".to_string(),
            quantity: "zero".to_string(),
            work_area: String::new(),
            notes: String::new(),
            timesheet_id: TimesheetId::new(7),
        };

        let errors = work_item(&form, WorkProvider::Wessex).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidWorkItemType("NOT-A-CODE".to_string()),
                ValidationError::InvalidQuantity,
                ValidationError::MissingWorkArea,
                ValidationError::MissingNotes,
            ]
        );

        // Same input, same output.
        assert_eq!(work_item(&form, WorkProvider::Wessex).unwrap_err(), errors);
    }

    #[test]
    fn valid_timesheet_becomes_a_draft() {
        let draft = timesheet(&timesheet_form(), TODAY).unwrap();
        assert_eq!(draft.work_provider, WorkProvider::Wessex);
        assert_eq!(draft.date_of_work, date!(2026 - 03 - 13));
        assert_eq!(
            draft.engineer_ids,
            vec![EngineerId::new(1), EngineerId::new(4)]
        );
    }

    #[test]
    fn minimal_form_keeps_notes_and_engineer_ids_verbatim() {
        let form = TimesheetForm {
            work_provider: "Wessex".to_string(),
            date_of_work: Some("2024-03-01".to_string()),
            notes: "ok".to_string(),
            engineer_ids: vec![EngineerId::new(1)],
        };

        let draft = timesheet(&form, TODAY).unwrap();
        assert_eq!(draft.notes, "ok");
        assert_eq!(draft.engineer_ids, vec![EngineerId::new(1)]);
    }

    #[test]
    fn timesheet_dated_today_is_accepted() {
        let mut form = timesheet_form();
        form.date_of_work = Some("2026-03-14".to_string());

        let draft = timesheet(&form, TODAY).unwrap();
        assert_eq!(draft.date_of_work, TODAY);
    }

    #[test]
    fn timesheet_dated_tomorrow_is_rejected() {
        let mut form = timesheet_form();
        form.date_of_work = Some("2026-03-15".to_string());

        let errors = timesheet(&form, TODAY).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidDate]);
    }

    #[test]
    fn timesheet_rejects_a_missing_or_malformed_date() {
        for bad in [None, Some("14/03/2026".to_string()), Some("soon".to_string())] {
            let mut form = timesheet_form();
            form.date_of_work = bad.clone();

            let errors = timesheet(&form, TODAY).unwrap_err();
            assert_eq!(errors, vec![ValidationError::InvalidDate], "input {bad:?}");
        }
    }

    #[test]
    fn timesheet_provider_must_be_recognized() {
        let mut form = timesheet_form();
        form.work_provider = "Openreach".to_string();

        let errors = timesheet(&form, TODAY).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidWorkProvider("Openreach".to_string())]
        );
    }

    #[test]
    fn timesheet_needs_at_least_one_engineer() {
        let mut form = timesheet_form();
        form.engineer_ids.clear();

        let errors = timesheet(&form, TODAY).unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingEngineers]);
    }

    #[test]
    fn duplicate_engineers_collapse_keeping_first_occurrence_order() {
        let mut form = timesheet_form();
        form.engineer_ids = vec![
            EngineerId::new(4),
            EngineerId::new(1),
            EngineerId::new(4),
            EngineerId::new(1),
        ];

        let draft = timesheet(&form, TODAY).unwrap();
        assert_eq!(
            draft.engineer_ids,
            vec![EngineerId::new(4), EngineerId::new(1)]
        );
    }

    #[test]
    fn timesheet_errors_arrive_together_in_field_order() {
        let form = TimesheetForm {
            work_provider: "BT".to_string(),
            date_of_work: None,
            notes: "  ".to_string(),
            engineer_ids: Vec::new(),
        };

        let errors = timesheet(&form, TODAY).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidWorkProvider("BT".to_string()),
                ValidationError::InvalidDate,
                ValidationError::MissingEngineers,
                ValidationError::MissingNotes,
            ]
        );
    }
}
