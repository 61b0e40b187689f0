//! Integration tests for savesmart-core
//!
//! These tests exercise the full profile → goal → evaluation → advice workflow.

use chrono::{DateTime, Duration, TimeZone, Utc};
use savesmart_core::{
    db::Database,
    evaluate_goals,
    models::{GoalStatus, IncomePeriod, NewGoal, ProfileUpdate},
    AffordabilityBadge, Recommendation, SortCriterion,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Profile used by the worked example: 22000 per month over 22 eight-hour days
fn setup_db() -> Database {
    let db = Database::in_memory().expect("Failed to create in-memory database");
    db.update_profile(&ProfileUpdate {
        income_amount: Some(22000.0),
        income_period: Some(IncomePeriod::Monthly),
        hours_per_day: Some(8.0),
        work_days_per_month: Some(22.0),
        ..Default::default()
    })
    .expect("Failed to update profile");
    db
}

// =============================================================================
// End-to-end advice
// =============================================================================

#[test]
fn test_worked_example_buy_now() {
    let db = setup_db();
    db.add_goal(
        &NewGoal::new("Running shoes", 1000.0)
            .with_emoji("👟")
            .with_necessity(5),
    )
    .expect("Failed to add goal");

    let evals = evaluate_goals(&db, None, SortCriterion::Newest, now()).unwrap();
    assert_eq!(evals.len(), 1);

    let eval = &evals[0];
    assert_eq!(eval.metrics.hourly_rate, Some(125.0));
    assert_eq!(eval.metrics.hours_needed, Some(8.0));
    assert_eq!(eval.metrics.affordability_badge, AffordabilityBadge::Cheap);

    let pct = eval.metrics.percent_of_month.unwrap();
    assert!((pct - 4.545).abs() < 0.001, "percent was {pct}");

    let decision = eval.decision.as_ref().unwrap();
    assert_eq!(decision.recommendation, Recommendation::BuyNow);
    assert!(decision
        .explanation
        .starts_with("This purchase has a low impact and aligns well with your priorities."));
}

#[test]
fn test_savings_progress_and_plans() {
    let db = setup_db();
    let target = now().date_naive() + Duration::days(30);
    let bike = db
        .add_goal(
            &NewGoal::new("Bike", 3000.0)
                .with_emoji("🚲")
                .with_target_date(target),
        )
        .unwrap();

    db.add_saving(bike, 1000.0, "bonus").unwrap();
    db.add_saving(bike, 500.0, "").unwrap();

    let evals = evaluate_goals(&db, None, SortCriterion::Newest, now()).unwrap();
    let eval = &evals[0];
    assert_eq!(eval.saved, 1500.0);
    assert_eq!(eval.remaining, 1500.0);
    assert_eq!(eval.progress, 0.5);
    assert_eq!(eval.savings_plan.days_until, Some(30));
    assert_eq!(eval.savings_plan.monthly_needed, Some(3000.0));
    assert_eq!(eval.remaining_plan.monthly_needed, Some(1500.0));
}

#[test]
fn test_snooze_workflow_marks_goal_due_later() {
    let db = setup_db();
    let phone = db
        .add_goal(&NewGoal::new("Phone", 25000.0).with_emoji("📱").with_necessity(2))
        .unwrap();

    db.snooze_goal(phone, None, now()).unwrap();

    let snoozed = evaluate_goals(&db, Some(GoalStatus::Snoozed), SortCriterion::Newest, now())
        .unwrap();
    assert_eq!(snoozed.len(), 1);
    assert!(!snoozed[0].reminder_due);

    let later = now() + Duration::days(11);
    let snoozed =
        evaluate_goals(&db, Some(GoalStatus::Snoozed), SortCriterion::Newest, later).unwrap();
    assert!(snoozed[0].reminder_due);

    let due = db.due_reminders(later).unwrap();
    assert_eq!(due.len(), 1);
    db.complete_reminder(due[0].id, later).unwrap();
    assert!(db.due_reminders(later).unwrap().is_empty());
}

#[test]
fn test_ranking_across_stored_goals() {
    let db = setup_db();
    let cheap = db
        .add_goal(&NewGoal::new("Book", 300.0).with_emoji("📚").with_necessity(3))
        .unwrap();
    let pricey = db
        .add_goal(&NewGoal::new("Laptop", 40000.0).with_emoji("💻").with_necessity(5))
        .unwrap();
    let mid = db
        .add_goal(&NewGoal::new("Chair", 4500.0).with_emoji("🪑").with_necessity(4))
        .unwrap();

    let ids = |sort| -> Vec<i64> {
        evaluate_goals(&db, None, sort, now())
            .unwrap()
            .iter()
            .map(|e| e.goal.id)
            .collect()
    };

    assert_eq!(ids(SortCriterion::Newest), vec![mid, pricey, cheap]);
    assert_eq!(ids(SortCriterion::Price), vec![cheap, mid, pricey]);
    assert_eq!(ids(SortCriterion::Hours), vec![cheap, mid, pricey]);
    assert_eq!(ids(SortCriterion::Percent), vec![pricey, mid, cheap]);
    // 3 * 100 / 3.4 = 88.24 beats 4 * 100 / 37 = 10.81
    assert_eq!(ids(SortCriterion::Priority), vec![cheap, mid, pricey]);
}

#[test]
fn test_unusable_profile_yields_unknowns() {
    let db = Database::in_memory().unwrap();
    db.update_profile(&ProfileUpdate {
        hours_per_day: Some(0.0),
        ..Default::default()
    })
    .unwrap();
    db.add_goal(&NewGoal::new("Lamp", 800.0).with_emoji("💡"))
        .unwrap();

    let evals = evaluate_goals(&db, None, SortCriterion::Priority, now()).unwrap();
    let eval = &evals[0];
    assert_eq!(eval.metrics.hours_needed, None);
    assert_eq!(eval.metrics.affordability_badge, AffordabilityBadge::Unknown);
    assert_eq!(eval.metrics.priority_score, 0.0);
    assert!(eval.decision.is_none());
    // Share of income does not depend on hours
    assert!(eval.metrics.percent_of_month.is_some());
}

#[test]
fn test_export_after_workflow() {
    let db = setup_db();
    let goal = db
        .add_goal(&NewGoal::new("Camera", 12000.0).with_emoji("📷"))
        .unwrap();
    db.add_saving(goal, 2000.0, "").unwrap();

    let goals_csv = db.export_goals_csv().unwrap();
    assert_eq!(goals_csv.lines().count(), 2);
    assert!(goals_csv.contains("Camera"));

    let savings_csv = db.export_savings_csv().unwrap();
    assert_eq!(savings_csv.lines().count(), 2);
}
