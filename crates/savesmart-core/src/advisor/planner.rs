//! Savings pacing toward a target date
//!
//! Two flavours are exposed: the gross plan paces the full price, the
//! remaining plan paces whatever is left after money already saved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days used as one month when pacing
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Days used as one week when pacing
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Flat contribution schedule that reaches an amount by a target date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlan {
    pub has_plan: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_needed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_needed: Option<f64>,
}

impl SavingsPlan {
    /// No target date, or the target date is not in the future
    pub fn none() -> Self {
        Self {
            has_plan: false,
            days_until: None,
            monthly_needed: None,
            weekly_needed: None,
        }
    }
}

/// Pace `amount` over the calendar days between `today` and `target_date`
pub fn plan(amount: f64, target_date: Option<NaiveDate>, today: NaiveDate) -> SavingsPlan {
    let Some(target) = target_date else {
        return SavingsPlan::none();
    };

    let days = (target - today).num_days();
    if days <= 0 {
        return SavingsPlan::none();
    }

    let days_f = days as f64;
    SavingsPlan {
        has_plan: true,
        days_until: Some(days),
        monthly_needed: Some(amount / (days_f / DAYS_PER_MONTH)),
        weekly_needed: Some(amount / (days_f / DAYS_PER_WEEK)),
    }
}

/// Amount still to save, never negative
pub fn remaining_amount(price: f64, saved: f64) -> f64 {
    (price - saved).max(0.0)
}

/// Fraction of the price already saved, in `0.0..=1.0`
pub fn progress(price: f64, saved: f64) -> f64 {
    if price <= 0.0 {
        return 0.0;
    }
    (saved / price).clamp(0.0, 1.0)
}

/// Monthly contribution used for the "at this pace" hint
pub const DEFAULT_MONTHLY_CONTRIBUTION: f64 = 500.0;

/// Months needed to cover `remaining` at a fixed monthly contribution
pub fn months_at_contribution(remaining: f64, monthly_contribution: f64) -> Option<f64> {
    if monthly_contribution <= 0.0 {
        return None;
    }
    Some(remaining.max(0.0) / monthly_contribution)
}

/// Gross and remaining pacing for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPair {
    /// Paces the full price, ignoring savings
    pub gross: SavingsPlan,
    /// Paces `price - saved`
    pub remaining: SavingsPlan,
}

pub fn plan_pair(
    price: f64,
    saved: f64,
    target_date: Option<NaiveDate>,
    today: NaiveDate,
) -> PlanPair {
    PlanPair {
        gross: plan(price, target_date, today),
        remaining: plan(remaining_amount(price, saved), target_date, today),
    }
}
