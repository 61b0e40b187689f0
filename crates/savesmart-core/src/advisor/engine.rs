//! Goal evaluation: ties the calculators together for stored goals

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use super::decision::{decide, Decision};
use super::metrics::GoalMetrics;
use super::planner::{
    months_at_contribution, plan_pair, progress, remaining_amount, SavingsPlan,
    DEFAULT_MONTHLY_CONTRIBUTION,
};
use super::ranker::{rank, Rankable, SortCriterion};
use crate::models::{Goal, GoalStatus, IncomeProfile};
use crate::Result;

/// Where the engine reads profiles, goals and savings from
pub trait GoalSource {
    fn get_profile(&self) -> Result<IncomeProfile>;

    /// Goals newest first; `None` means every goal that is not deleted
    fn list_goals(&self, status: Option<GoalStatus>) -> Result<Vec<Goal>>;

    fn sum_savings(&self, goal_id: i64) -> Result<f64>;

    fn is_due_for_reminder(&self, goal_id: i64, now: DateTime<Utc>) -> Result<bool>;
}

/// A goal with every derived figure attached
#[derive(Debug, Clone, Serialize)]
pub struct GoalEvaluation {
    #[serde(flatten)]
    pub goal: Goal,
    pub saved: f64,
    pub remaining: f64,
    /// Fraction saved, `0.0..=1.0`
    pub progress: f64,
    #[serde(flatten)]
    pub metrics: GoalMetrics,
    /// Pacing for the full price
    pub savings_plan: SavingsPlan,
    /// Pacing for what is left after savings
    pub remaining_plan: SavingsPlan,
    /// Months to cover `remaining` at `DEFAULT_MONTHLY_CONTRIBUTION`
    pub months_at_default_contribution: Option<f64>,
    /// `None` when the hourly rate is unavailable. The effort axis drives
    /// every rule, so a known share of income alone yields no decision.
    pub decision: Option<Decision>,
    pub reminder_due: bool,
}

impl Rankable for GoalEvaluation {
    fn creation_order(&self) -> i64 {
        self.goal.id
    }

    fn price(&self) -> f64 {
        self.goal.price
    }

    fn hours_needed(&self) -> Option<f64> {
        self.metrics.hours_needed
    }

    fn priority_score(&self) -> f64 {
        self.metrics.priority_score
    }

    fn percent_of_month(&self) -> Option<f64> {
        self.metrics.percent_of_month
    }
}

/// Evaluate a single goal against a profile
pub fn evaluate_goal(
    goal: Goal,
    profile: &IncomeProfile,
    saved: f64,
    reminder_due: bool,
    today: NaiveDate,
) -> GoalEvaluation {
    let necessity = i64::from(goal.necessity);
    let metrics = GoalMetrics::compute(goal.price, necessity, profile);
    let plans = plan_pair(goal.price, saved, goal.target_date, today);

    let decision = match metrics.hours_needed {
        Some(hours) => Some(decide(hours, metrics.percent_of_month, necessity)),
        None => {
            debug!(goal_id = goal.id, "No decision: hours needed unavailable");
            None
        }
    };

    let remaining = remaining_amount(goal.price, saved);

    GoalEvaluation {
        saved,
        remaining,
        months_at_default_contribution: months_at_contribution(
            remaining,
            DEFAULT_MONTHLY_CONTRIBUTION,
        ),
        progress: progress(goal.price, saved),
        metrics,
        savings_plan: plans.gross,
        remaining_plan: plans.remaining,
        decision,
        reminder_due,
        goal,
    }
}

/// Evaluate one already loaded goal with figures from `source`
pub fn evaluate_stored(
    source: &dyn GoalSource,
    goal: Goal,
    now: DateTime<Utc>,
) -> Result<GoalEvaluation> {
    let profile = source.get_profile()?;
    let saved = source.sum_savings(goal.id)?;
    let due = source.is_due_for_reminder(goal.id, now)?;
    Ok(evaluate_goal(goal, &profile, saved, due, now.date_naive()))
}

/// Load, evaluate and rank goals from `source`
pub fn evaluate_goals(
    source: &dyn GoalSource,
    status: Option<GoalStatus>,
    sort: SortCriterion,
    now: DateTime<Utc>,
) -> Result<Vec<GoalEvaluation>> {
    let profile = source.get_profile()?;
    let today = now.date_naive();

    let mut evaluations = source
        .list_goals(status)?
        .into_iter()
        .map(|goal| {
            let saved = source.sum_savings(goal.id)?;
            let due = source.is_due_for_reminder(goal.id, now)?;
            Ok(evaluate_goal(goal, &profile, saved, due, today))
        })
        .collect::<Result<Vec<_>>>()?;

    rank(&mut evaluations, sort);
    Ok(evaluations)
}

/// Figures for a price that is not stored as a goal
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub currency: String,
    pub price: f64,
    pub necessity: u8,
    #[serde(flatten)]
    pub metrics: GoalMetrics,
    /// `None` whenever `hours_needed` is, even with a known share of income
    pub decision: Option<Decision>,
}

/// Convert a price into working time without saving anything
pub fn quote(price: f64, necessity: i64, profile: &IncomeProfile) -> Quote {
    let metrics = GoalMetrics::compute(price, necessity, profile);
    let decision = metrics
        .hours_needed
        .map(|hours| decide(hours, metrics.percent_of_month, necessity));

    Quote {
        currency: profile.currency.clone(),
        price,
        necessity: crate::models::clamp_necessity(necessity),
        metrics,
        decision,
    }
}
