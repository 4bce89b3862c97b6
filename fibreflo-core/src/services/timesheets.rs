use async_trait::async_trait;
use time::Date;

use crate::{
    error::{RepositoryError, TimesheetError},
    models::{Engineer, ExternalUserId, Timesheet, TimesheetId, WorkItem, WorkItemId},
    ports::{inbound::TimesheetService, outbound::TimesheetRepository},
    summary, time_utils, validate,
    validate::{TimesheetForm, WorkItemForm},
};

/// Implementation of the [`TimesheetService`] inbound port.
///
/// Validators deliberately check fields only; this layer adds the
/// cross-record checks that need the repository, such as whether assigned
/// engineers are on the roster.
pub struct Timesheets<R> {
    repository: R,
    /// Source of "today" for the future-date rule; swappable so tests can
    /// pin the clock.
    today: fn() -> Date,
}

impl<R> Timesheets<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            today: time_utils::today,
        }
    }

    pub fn with_today_source(mut self, today: fn() -> Date) -> Self {
        self.today = today;
        self
    }
}

#[async_trait]
impl<R: TimesheetRepository> TimesheetService for Timesheets<R> {
    async fn timesheets_for_user(
        &self,
        user: &ExternalUserId,
    ) -> Result<Vec<Timesheet>, TimesheetError> {
        let all = self.repository.list_timesheets().await?;
        Ok(summary::filter_by_ownership(all, user))
    }

    async fn timesheets_on(
        &self,
        user: &ExternalUserId,
        day: Date,
    ) -> Result<Vec<Timesheet>, TimesheetError> {
        let mine = self.timesheets_for_user(user).await?;
        Ok(summary::filter_by_date(mine, day))
    }

    async fn timesheet(&self, id: TimesheetId) -> Result<Timesheet, TimesheetError> {
        Ok(self.repository.get_timesheet(id).await?)
    }

    async fn create_timesheet(&self, form: &TimesheetForm) -> Result<Timesheet, TimesheetError> {
        let draft = validate::timesheet(form, (self.today)()).map_err(TimesheetError::Invalid)?;

        // The one check the validator cannot do: every assigned engineer
        // must be on the roster.
        let roster = self.repository.list_engineers().await?;
        for id in &draft.engineer_ids {
            if !roster.iter().any(|e| e.id == *id) {
                tracing::warn!(%id, "timesheet rejected, engineer not on roster");
                return Err(RepositoryError::NotFound(format!("engineer {id}")).into());
            }
        }

        tracing::debug!(
            provider = %draft.work_provider,
            date = %draft.date_of_work,
            engineers = draft.engineer_ids.len(),
            "creating timesheet"
        );
        Ok(self.repository.create_timesheet(&draft).await?)
    }

    async fn add_work_item(&self, form: &WorkItemForm) -> Result<WorkItem, TimesheetError> {
        // The owning timesheet decides which rate card applies; fetching it
        // doubles as the existence check.
        let sheet = self.repository.get_timesheet(form.timesheet_id).await?;
        let draft =
            validate::work_item(form, sheet.work_provider).map_err(TimesheetError::Invalid)?;

        tracing::debug!(
            timesheet_id = %draft.timesheet_id,
            code = %draft.name,
            quantity = draft.quantity,
            "adding work item"
        );
        Ok(self.repository.create_work_item(&draft).await?)
    }

    async fn work_item(
        &self,
        timesheet_id: TimesheetId,
        work_item_id: WorkItemId,
    ) -> Result<WorkItem, TimesheetError> {
        let sheet = self.repository.get_timesheet(timesheet_id).await?;
        sheet
            .work_items
            .into_iter()
            .find(|w| w.id == work_item_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("work item {work_item_id}")).into())
    }

    async fn engineers(&self) -> Result<Vec<Engineer>, TimesheetError> {
        Ok(self.repository.list_engineers().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ValidationError,
        mock::MockTimesheetRepository,
        models::{EngineerId, TimesheetStatus, WorkProvider},
    };
    use time::macros::{date, datetime};

    const TODAY: Date = date!(2026 - 03 - 14);

    fn pinned_today() -> Date {
        TODAY
    }

    fn engineer(id: i32, user_id: &str) -> Engineer {
        Engineer {
            id: EngineerId::new(id),
            first_name: "Dai".to_string(),
            last_name: "Prothero".to_string(),
            email: "dai.prothero@fibreflo.com".to_string(),
            birth_date: None,
            created_at: datetime!(2023-05-02 08:30:00 UTC),
            user_id: ExternalUserId::new(user_id),
        }
    }

    fn service(
        repo: MockTimesheetRepository,
    ) -> Timesheets<MockTimesheetRepository> {
        Timesheets::new(repo).with_today_source(pinned_today)
    }

    fn timesheet_form() -> TimesheetForm {
        TimesheetForm {
            work_provider: "Wessex".to_string(),
            date_of_work: Some("2026-03-13".to_string()),
            notes: "Traffic lights until 15:00".to_string(),
            engineer_ids: vec![EngineerId::new(1)],
        }
    }

    fn work_item_form(timesheet_id: TimesheetId) -> WorkItemForm {
        WorkItemForm {
            name: "DUCT-LAY".to_string(),
            quantity: "12".to_string(),
            work_area: "Heol-y-Cyw phase 2".to_string(),
            notes: "54m in grass verge".to_string(),
            timesheet_id,
        }
    }

    #[tokio::test]
    async fn create_timesheet_persists_a_valid_form() {
        let repo = MockTimesheetRepository::new()
            .with_engineers(vec![engineer(1, "auth0|64f1")]);
        let service = service(repo);

        let sheet = service.create_timesheet(&timesheet_form()).await.unwrap();
        assert_eq!(sheet.work_provider, WorkProvider::Wessex);
        assert_eq!(sheet.date_of_work, date!(2026 - 03 - 13));
        assert_eq!(sheet.status, TimesheetStatus::Submitted);
    }

    #[tokio::test]
    async fn create_timesheet_reports_every_field_error() {
        let service = service(MockTimesheetRepository::new());
        let form = TimesheetForm {
            work_provider: "BT".to_string(),
            date_of_work: Some("2026-03-15".to_string()),
            notes: String::new(),
            engineer_ids: Vec::new(),
        };

        let err = service.create_timesheet(&form).await.unwrap_err();
        match err {
            TimesheetError::Invalid(errors) => assert_eq!(
                errors,
                vec![
                    ValidationError::InvalidWorkProvider("BT".to_string()),
                    ValidationError::InvalidDate,
                    ValidationError::MissingEngineers,
                    ValidationError::MissingNotes,
                ]
            ),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_timesheet_rejects_engineers_missing_from_the_roster() {
        // Roster holds engineer 1 only; the form also assigns 9.
        let repo = MockTimesheetRepository::new()
            .with_engineers(vec![engineer(1, "auth0|64f1")]);
        let service = service(repo);

        let mut form = timesheet_form();
        form.engineer_ids.push(EngineerId::new(9));

        let err = service.create_timesheet(&form).await.unwrap_err();
        assert!(matches!(
            err,
            TimesheetError::Repository(RepositoryError::NotFound(msg)) if msg == "engineer 9"
        ));
    }

    #[tokio::test]
    async fn add_work_item_validates_against_the_owning_sheets_card() {
        let repo = MockTimesheetRepository::new()
            .with_engineers(vec![engineer(1, "auth0|64f1")]);
        let service = service(repo);
        let sheet = service.create_timesheet(&timesheet_form()).await.unwrap();

        // Wessex sheet, Gigaclear-only code.
        let mut form = work_item_form(sheet.id);
        form.name = "CABLE-BLOW".to_string();

        let err = service.add_work_item(&form).await.unwrap_err();
        assert!(matches!(
            err,
            TimesheetError::Invalid(errors)
                if errors == vec![ValidationError::InvalidWorkItemType("CABLE-BLOW".to_string())]
        ));
    }

    #[tokio::test]
    async fn add_work_item_persists_and_is_readable_back() {
        let repo = MockTimesheetRepository::new()
            .with_engineers(vec![engineer(1, "auth0|64f1")]);
        let service = service(repo);
        let sheet = service.create_timesheet(&timesheet_form()).await.unwrap();

        let item = service.add_work_item(&work_item_form(sheet.id)).await.unwrap();
        let found = service.work_item(sheet.id, item.id).await.unwrap();
        assert_eq!(found, item);
    }

    #[tokio::test]
    async fn add_work_item_to_an_unknown_timesheet_fails_before_validation() {
        let service = service(MockTimesheetRepository::new());

        // Invalid form too, but the missing sheet wins.
        let mut form = work_item_form(TimesheetId::new(41));
        form.quantity = "zero".to_string();

        let err = service.add_work_item(&form).await.unwrap_err();
        assert!(matches!(
            err,
            TimesheetError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn work_item_lookup_misses_cleanly() {
        let repo = MockTimesheetRepository::new()
            .with_engineers(vec![engineer(1, "auth0|64f1")]);
        let service = service(repo);
        let sheet = service.create_timesheet(&timesheet_form()).await.unwrap();

        let err = service
            .work_item(sheet.id, WorkItemId::new(99))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TimesheetError::Repository(RepositoryError::NotFound(msg)) if msg == "work item 99"
        ));
    }

    #[tokio::test]
    async fn timesheets_on_narrows_by_owner_then_day() {
        let dai = engineer(1, "auth0|64f1");
        let sian = engineer(2, "auth0|a2c9");
        let repo = MockTimesheetRepository::new()
            .with_engineers(vec![dai.clone(), sian.clone()]);
        let service = service(repo);

        let mut form = timesheet_form();
        service.create_timesheet(&form).await.unwrap();

        form.date_of_work = Some("2026-03-12".to_string());
        service.create_timesheet(&form).await.unwrap();

        form.date_of_work = Some("2026-03-13".to_string());
        form.engineer_ids = vec![EngineerId::new(2)];
        service.create_timesheet(&form).await.unwrap();

        let mine = service
            .timesheets_on(&ExternalUserId::new("auth0|64f1"), date!(2026 - 03 - 13))
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].date_of_work, date!(2026 - 03 - 13));
        assert!(mine[0].is_assigned_to(&ExternalUserId::new("auth0|64f1")));
    }

    #[tokio::test]
    async fn engineers_lists_the_roster() {
        let repo = MockTimesheetRepository::new()
            .with_engineers(vec![engineer(1, "auth0|64f1"), engineer(2, "auth0|a2c9")]);
        let service = service(repo);

        assert_eq!(service.engineers().await.unwrap().len(), 2);
    }
}
