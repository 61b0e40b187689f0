//! SaveSmart Core Library
//!
//! Shared functionality for the SaveSmart purchase planner:
//! - Work-hour conversion, savings pacing and purchase advice (`advisor`)
//! - Database access and migrations
//! - Reminder scheduling for snoozed goals and savings plans
//! - CSV export

pub mod advisor;
pub mod db;
pub mod error;
pub mod export;
pub mod models;

pub use advisor::{
    decide, evaluate_goal, evaluate_goals, evaluate_stored, quote, AffordabilityBadge, Decision,
    GoalEvaluation, GoalMetrics, GoalSource, Level, Quote, Recommendation, SavingsPlan,
    SortCriterion, DEFAULT_MONTHLY_CONTRIBUTION,
};
pub use db::Database;
pub use error::{Error, Result};
pub use export::{GoalExportRow, SavingExportRow};
