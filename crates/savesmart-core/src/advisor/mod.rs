//! Financial conversion and purchase advice
//!
//! Everything in this module is a pure function of its inputs: the income
//! profile, the goal, the amount saved and an explicit `today`. Storage is
//! reached only through the [`GoalSource`] trait.
//!
//! Pipeline:
//!
//! ```text
//! IncomeProfile -> rate -> metrics / planner -> decision -> ranker
//! ```

pub mod decision;
pub mod engine;
pub mod metrics;
pub mod planner;
pub mod ranker;
pub mod rate;

pub use decision::{decide, Decision, Level, Recommendation};
pub use engine::{
    evaluate_goal, evaluate_goals, evaluate_stored, quote, GoalEvaluation, GoalSource, Quote,
};
pub use metrics::{
    days_needed, hours_needed, monthly_income, percent_of_monthly_income, priority_score,
    AffordabilityBadge, GoalMetrics,
};
pub use planner::{
    months_at_contribution, plan, plan_pair, PlanPair, SavingsPlan, DEFAULT_MONTHLY_CONTRIBUTION,
};
pub use ranker::{rank, Rankable, SortCriterion};
pub use rate::{hourly_rate, hours_per_period};
