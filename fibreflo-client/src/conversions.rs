//! Wire-to-domain conversions.
//!
//! List conversions skip records that cannot be represented, logging each
//! one; single-record conversions surface the problem to the caller
//! instead.

use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    Date, OffsetDateTime,
};

use fibreflo_core::{
    time_utils, Engineer, EngineerId, ExternalUserId, Timesheet, TimesheetId, TimesheetStatus,
    WorkItem, WorkItemId, WorkProvider,
};

use crate::{client::FetchError, wire};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Accept the two shapes the store has accumulated: an RFC3339 timestamp
/// (reduced to the user's local day) or a plain `YYYY-MM-DD`.
fn parse_day(raw: &str) -> Option<Date> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(time_utils::local_day(dt));
    }
    Date::parse(raw, ISO_DATE).ok()
}

pub fn to_domain_timesheet(payload: wire::TimesheetPayload) -> Result<Timesheet, FetchError> {
    let work_provider: WorkProvider = payload.work_provider.parse().map_err(|_| {
        FetchError::ParsingError(format!(
            "timesheet {} has unknown work provider {:?}",
            payload.id, payload.work_provider
        ))
    })?;

    let date_of_work = parse_day(&payload.date_of_work).ok_or_else(|| {
        FetchError::ParsingError(format!(
            "timesheet {} has unparseable dateOfWork {:?}",
            payload.id, payload.date_of_work
        ))
    })?;

    let work_items = payload
        .work_items
        .into_iter()
        .filter_map(|item| {
            to_domain_work_item(item)
                .map_err(|err| tracing::warn!("skipping work item: {err}"))
                .ok()
        })
        .collect();

    Ok(Timesheet {
        id: TimesheetId::new(payload.id),
        work_provider,
        date_of_work,
        notes: payload.notes,
        status: TimesheetStatus::from(payload.status),
        created_at: payload.created_at,
        engineers: payload.engineers.into_iter().map(to_domain_engineer).collect(),
        work_items,
    })
}

/// Convert a whole listing, dropping records the domain cannot represent.
pub fn to_domain_timesheets(payloads: Vec<wire::TimesheetPayload>) -> Vec<Timesheet> {
    payloads
        .into_iter()
        .filter_map(|payload| {
            to_domain_timesheet(payload)
                .map_err(|err| tracing::warn!("skipping timesheet: {err}"))
                .ok()
        })
        .collect()
}

pub fn to_domain_work_item(payload: wire::WorkItemPayload) -> Result<WorkItem, FetchError> {
    let quantity = u32::try_from(payload.quantity).map_err(|_| {
        FetchError::ParsingError(format!(
            "work item {} has out-of-range quantity {}",
            payload.id, payload.quantity
        ))
    })?;

    Ok(WorkItem {
        id: WorkItemId::new(payload.id),
        name: payload.name,
        quantity,
        work_area: payload.work_area,
        notes: payload.notes,
        timesheet_id: TimesheetId::new(payload.timesheet_id),
    })
}

/// Infallible: a malformed birth date degrades to `None` rather than
/// dropping the engineer from rosters.
pub fn to_domain_engineer(payload: wire::EngineerPayload) -> Engineer {
    let birth_date = payload.birth_date.as_deref().and_then(parse_day);
    if payload.birth_date.is_some() && birth_date.is_none() {
        tracing::warn!(engineer = payload.id, "unparseable birthDate, dropping it");
    }

    Engineer {
        id: EngineerId::new(payload.id),
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        birth_date,
        created_at: payload.created_at,
        user_id: ExternalUserId::new(payload.user_id),
    }
}

pub fn to_domain_engineers(payloads: Vec<wire::EngineerPayload>) -> Vec<Engineer> {
    payloads.into_iter().map(to_domain_engineer).collect()
}
