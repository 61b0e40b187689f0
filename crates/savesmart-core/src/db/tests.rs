//! Database tests

use super::*;
use crate::models::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn add(db: &Database, title: &str, price: f64) -> i64 {
        db.add_goal(&NewGoal::new(title, price).with_emoji("🎯"))
            .unwrap()
    }

    #[test]
    fn test_in_memory_db() {
        let db = Database::in_memory().unwrap();
        assert!(db.list_goals(None).unwrap().is_empty());
        assert!(db.path().contains("savesmart_test_"));
    }

    #[test]
    fn test_schema_exists() {
        let db = Database::in_memory().unwrap();
        let conn = db.conn().unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
                 AND name IN ('profile', 'goals', 'savings', 'reminders')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 4);
    }

    #[test]
    fn test_profile_seeded_with_defaults() {
        let db = Database::in_memory().unwrap();
        assert_eq!(db.get_profile().unwrap(), IncomeProfile::default());
    }

    #[test]
    fn test_update_profile_persists() {
        let db = Database::in_memory().unwrap();
        let update = ProfileUpdate {
            income_amount: Some(22000.0),
            income_period: Some(IncomePeriod::Weekly),
            ..Default::default()
        };
        let updated = db.update_profile(&update).unwrap();
        assert_eq!(updated.income_amount, 22000.0);

        let stored = db.get_profile().unwrap();
        assert_eq!(stored, updated);
        assert_eq!(stored.income_period, IncomePeriod::Weekly);
        assert_eq!(stored.hours_per_day, 8.0);
    }

    #[test]
    fn test_update_profile_rejects_negative() {
        let db = Database::in_memory().unwrap();
        let update = ProfileUpdate {
            work_days_per_month: Some(-2.0),
            ..Default::default()
        };
        assert!(matches!(
            db.update_profile(&update),
            Err(Error::InvalidData(_))
        ));
        assert_eq!(db.get_profile().unwrap().work_days_per_month, 22.0);
    }

    #[test]
    fn test_unknown_stored_period_is_invalid_data() {
        let db = Database::in_memory().unwrap();
        db.conn()
            .unwrap()
            .execute("UPDATE profile SET income_period = 'fortnightly'", [])
            .unwrap();
        assert!(matches!(db.get_profile(), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_goal_crud() {
        let db = Database::in_memory().unwrap();

        let target = now().date_naive() + Duration::days(60);
        let id = db
            .add_goal(
                &NewGoal::new("  Headphones ", 4000.0)
                    .with_emoji("🎧")
                    .with_necessity(9)
                    .with_target_date(target),
            )
            .unwrap();
        assert!(id > 0);

        let goal = db.get_goal(id).unwrap().unwrap();
        assert_eq!(goal.title, "Headphones");
        assert_eq!(goal.necessity, 5);
        assert_eq!(goal.category, "Other");
        assert_eq!(goal.target_date, Some(target));
        assert_eq!(goal.status, GoalStatus::Active);

        assert!(db.get_goal(9999).unwrap().is_none());
    }

    #[test]
    fn test_add_goal_requires_picture() {
        let db = Database::in_memory().unwrap();
        let result = db.add_goal(&NewGoal::new("Desk", 9000.0));
        assert!(matches!(result, Err(Error::InvalidData(_))));
        assert!(db.list_goals(None).unwrap().is_empty());
    }

    #[test]
    fn test_list_goals_newest_first_and_filters() {
        let db = Database::in_memory().unwrap();
        let a = add(&db, "A", 100.0);
        let b = add(&db, "B", 200.0);
        let c = add(&db, "C", 300.0);

        db.update_goal_status(b, GoalStatus::Achieved).unwrap();
        db.delete_goal(c).unwrap();

        let all: Vec<i64> = db.list_goals(None).unwrap().iter().map(|g| g.id).collect();
        assert_eq!(all, vec![b, a]);

        let achieved = db.list_goals(Some(GoalStatus::Achieved)).unwrap();
        assert_eq!(achieved.len(), 1);
        assert_eq!(achieved[0].id, b);

        // Soft delete keeps the row
        let deleted = db.list_goals(Some(GoalStatus::Deleted)).unwrap();
        assert_eq!(deleted[0].id, c);
        assert!(db.get_goal(c).unwrap().is_some());
    }

    #[test]
    fn test_update_missing_goal_is_not_found() {
        let db = Database::in_memory().unwrap();
        assert!(matches!(
            db.update_goal_status(42, GoalStatus::Achieved),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_count_goals_by_status() {
        let db = Database::in_memory().unwrap();
        add(&db, "A", 1.0);
        add(&db, "B", 1.0);
        let c = add(&db, "C", 1.0);
        db.update_goal_status(c, GoalStatus::Snoozed).unwrap();

        let counts = db.count_goals_by_status().unwrap();
        assert!(counts.contains(&(GoalStatus::Active, 2)));
        assert!(counts.contains(&(GoalStatus::Snoozed, 1)));
    }

    #[test]
    fn test_savings_totals() {
        let db = Database::in_memory().unwrap();
        let a = add(&db, "Bike", 3000.0);
        let b = add(&db, "Book", 400.0);

        db.add_saving(a, 1000.0, "first").unwrap();
        db.add_saving(a, 200.0, "").unwrap();
        db.add_saving(b, 50.0, "coins").unwrap();

        assert_eq!(db.savings_total(a).unwrap(), 1200.0);
        assert_eq!(db.savings_total(b).unwrap(), 50.0);
        assert_eq!(db.total_saved().unwrap(), 1250.0);

        let records = db.list_savings(Some(a)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].amount, 200.0);
        assert_eq!(db.list_savings(None).unwrap().len(), 3);

        // Deleted goals drop out of the overall total
        db.delete_goal(b).unwrap();
        assert_eq!(db.total_saved().unwrap(), 1200.0);
    }

    #[test]
    fn test_savings_total_without_records() {
        let db = Database::in_memory().unwrap();
        let a = add(&db, "Bike", 3000.0);
        assert_eq!(db.savings_total(a).unwrap(), 0.0);
    }

    #[test]
    fn test_add_saving_validation() {
        let db = Database::in_memory().unwrap();
        let a = add(&db, "Bike", 3000.0);

        assert!(matches!(
            db.add_saving(a, 0.0, ""),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            db.add_saving(a, -5.0, ""),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            db.add_saving(999, 10.0, ""),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_reminder_due_and_snooze() {
        let db = Database::in_memory().unwrap();
        let a = add(&db, "Phone", 15000.0);

        let id = db
            .set_reminder(a, now() - Duration::hours(1), Recurrence::None)
            .unwrap();
        assert!(db.is_goal_due(a, now()).unwrap());

        let due = db.due_reminders(now()).unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].goal_title.as_deref(), Some("Phone"));

        let snoozed = db.snooze_reminder(id, 7).unwrap();
        assert_eq!(snoozed.remind_at, now() - Duration::hours(1) + Duration::days(7));
        assert!(!db.is_goal_due(a, now()).unwrap());
        assert!(db.due_reminders(now()).unwrap().is_empty());

        assert!(db.snooze_reminder(id, 0).is_err());
    }

    #[test]
    fn test_disable_reminder() {
        let db = Database::in_memory().unwrap();
        let a = add(&db, "Phone", 15000.0);
        let id = db.set_reminder(a, now(), Recurrence::None).unwrap();

        db.disable_reminder(id).unwrap();
        assert!(!db.get_reminder(id).unwrap().unwrap().enabled);
        assert!(!db.is_goal_due(a, now()).unwrap());

        assert!(matches!(
            db.disable_reminder(999),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_complete_reminder() {
        let db = Database::in_memory().unwrap();
        let a = add(&db, "Phone", 15000.0);

        let once = db.set_reminder(a, now(), Recurrence::None).unwrap();
        let done = db.complete_reminder(once, now()).unwrap();
        assert!(!done.enabled);

        // Weekly reminder three weeks overdue jumps past now
        let weekly = db
            .set_reminder(a, now() - Duration::days(20), Recurrence::Weekly)
            .unwrap();
        let rolled = db.complete_reminder(weekly, now()).unwrap();
        assert!(rolled.enabled);
        assert_eq!(rolled.remind_at, now() + Duration::days(1));

        let monthly = db
            .set_reminder(a, now(), Recurrence::Monthly)
            .unwrap();
        let rolled = db.complete_reminder(monthly, now()).unwrap();
        assert_eq!(
            rolled.remind_at,
            Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap()
        );

        assert!(!db.is_goal_due(a, now()).unwrap());
    }

    #[test]
    fn test_reminders_hidden_for_deleted_goals() {
        let db = Database::in_memory().unwrap();
        let a = add(&db, "Phone", 15000.0);
        db.set_reminder(a, now(), Recurrence::None).unwrap();
        db.delete_goal(a).unwrap();

        assert!(db.due_reminders(now()).unwrap().is_empty());
        assert!(matches!(
            db.set_reminder(a, now(), Recurrence::None),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_snooze_goal() {
        let db = Database::in_memory().unwrap();
        let a = add(&db, "Console", 18000.0);

        let reminder = db.snooze_goal(a, None, now()).unwrap();
        assert_eq!(reminder.remind_at, now() + Duration::days(DEFAULT_SNOOZE_DAYS));
        assert_eq!(reminder.recurring, Recurrence::None);
        assert_eq!(
            db.get_goal(a).unwrap().unwrap().status,
            GoalStatus::Snoozed
        );

        assert!(!db.is_goal_due(a, now()).unwrap());
        assert!(db.is_goal_due(a, now() + Duration::days(10)).unwrap());

        assert!(db.snooze_goal(a, Some(-1), now()).is_err());
    }

    #[test]
    fn test_snooze_rejects_days_beyond_calendar() {
        let db = Database::in_memory().unwrap();
        let a = add(&db, "Console", 18000.0);

        for days in [1_000_000_000, i64::MAX, 3_000_000] {
            assert!(matches!(
                db.snooze_goal(a, Some(days), now()),
                Err(Error::InvalidData(_))
            ));
        }
        // Nothing scheduled and the goal is untouched
        assert!(db.list_reminders(Some(a)).unwrap().is_empty());
        assert_eq!(db.get_goal(a).unwrap().unwrap().status, GoalStatus::Active);

        let id = db.set_reminder(a, now(), Recurrence::None).unwrap();
        assert!(matches!(
            db.snooze_reminder(id, 1_000_000_000),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            db.snooze_reminder(id, i64::MAX),
            Err(Error::InvalidData(_))
        ));
        assert_eq!(db.get_reminder(id).unwrap().unwrap().remind_at, now());

        // A long but storable snooze still works
        let far = db.snooze_reminder(id, 365 * 100).unwrap();
        assert_eq!(far.remind_at, now() + Duration::days(365 * 100));
    }

    #[test]
    fn test_start_savings_plan() {
        let db = Database::in_memory().unwrap();
        let a = add(&db, "Bike", 3000.0);

        let reminder = db.start_savings_plan(a, now()).unwrap();
        assert_eq!(reminder.recurring, Recurrence::Weekly);
        assert_eq!(reminder.remind_at, now() + Duration::days(PLAN_CHECK_IN_DAYS));
        assert_eq!(db.list_reminders(Some(a)).unwrap().len(), 1);
        // Planning does not change the goal's status
        assert_eq!(db.get_goal(a).unwrap().unwrap().status, GoalStatus::Active);
    }

    #[test]
    fn test_dashboard_stats() {
        let db = Database::in_memory().unwrap();
        let a = add(&db, "A", 100.0);
        let b = add(&db, "B", 100.0);
        let c = add(&db, "C", 100.0);
        db.update_goal_status(b, GoalStatus::Achieved).unwrap();
        db.snooze_goal(c, Some(1), now() - Duration::days(2)).unwrap();
        db.add_saving(a, 40.0, "").unwrap();

        let stats = db.dashboard_stats(now()).unwrap();
        assert_eq!(stats.currency, "THB");
        assert_eq!(stats.active_goals, 1);
        assert_eq!(stats.achieved_goals, 1);
        assert_eq!(stats.snoozed_goals, 1);
        assert_eq!(stats.total_saved, 40.0);
        assert_eq!(stats.due_reminders, 1);
        assert!(stats.hourly_rate.is_some());
    }

    #[test]
    fn test_goal_source_impl() {
        use crate::advisor::GoalSource;

        let db = Database::in_memory().unwrap();
        let a = add(&db, "Bike", 3000.0);
        db.add_saving(a, 500.0, "").unwrap();

        let source: &dyn GoalSource = &db;
        assert_eq!(source.sum_savings(a).unwrap(), 500.0);
        assert_eq!(source.list_goals(None).unwrap().len(), 1);
        assert!(!source.is_due_for_reminder(a, now()).unwrap());
    }

    #[test]
    fn test_encrypted_database_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enc.db");
        let path = path.to_str().unwrap();

        {
            let db = Database::new_with_key(path, Some("correct horse")).unwrap();
            add(&db, "Secret", 10.0);
        }

        let db = Database::new_with_key(path, Some("correct horse")).unwrap();
        assert_eq!(db.list_goals(None).unwrap().len(), 1);
    }
}
