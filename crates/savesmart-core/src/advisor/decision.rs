//! Purchase recommendation with a plain-language explanation
//!
//! Three axes are classified independently:
//!
//! - **effort**: hours of work the price represents
//! - **finance**: share of one month of income (unknown when income is
//!   unavailable)
//! - **need**: the user's necessity rating
//!
//! and combined through a fixed decision table. The explanation is the
//! branch summary followed by one sentence per known axis.

use serde::{Deserialize, Serialize};

use super::metrics::{CHEAP_MAX_HOURS, MODERATE_MAX_HOURS};

/// Share of monthly income at or below which the cost is minor
pub const FINANCE_LOW_MAX_PERCENT: f64 = 15.0;

/// Share of monthly income at or below which the cost is noticeable
pub const FINANCE_MEDIUM_MAX_PERCENT: f64 = 30.0;

/// Classification of a single axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What to do about a purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Buy Now")]
    BuyNow,
    #[serde(rename = "Consider Delaying")]
    ConsiderDelaying,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BuyNow => "Buy Now",
            Self::ConsiderDelaying => "Consider Delaying",
            Self::NotRecommended => "Not Recommended",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recommendation and the reasons behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub recommendation: Recommendation,
    pub explanation: String,
    pub effort: Level,
    /// `None` when the share of income could not be computed
    pub finance: Option<Level>,
    pub need: Level,
}

pub fn effort_level(hours_needed: f64) -> Level {
    if hours_needed <= CHEAP_MAX_HOURS {
        Level::Low
    } else if hours_needed <= MODERATE_MAX_HOURS {
        Level::Medium
    } else {
        Level::High
    }
}

pub fn finance_level(percent_of_month: Option<f64>) -> Option<Level> {
    percent_of_month.map(|pct| {
        if pct <= FINANCE_LOW_MAX_PERCENT {
            Level::Low
        } else if pct <= FINANCE_MEDIUM_MAX_PERCENT {
            Level::Medium
        } else {
            Level::High
        }
    })
}

pub fn need_level(necessity: i64) -> Level {
    if necessity >= 4 {
        Level::High
    } else if necessity == 3 {
        Level::Medium
    } else {
        Level::Low
    }
}

fn effort_reason(level: Level) -> &'static str {
    match level {
        Level::Low => "It requires only a small amount of working time.",
        Level::Medium => "It requires a moderate amount of working time.",
        Level::High => "It requires a significant amount of working time.",
    }
}

fn finance_reason(level: Level) -> &'static str {
    match level {
        Level::Low => "The cost represents a small portion of your monthly income.",
        Level::Medium => "The cost represents a noticeable portion of your monthly income.",
        Level::High => "The cost represents a large portion of your monthly income.",
    }
}

fn need_reason(level: Level) -> &'static str {
    match level {
        Level::High => "You marked this item as highly necessary.",
        Level::Medium => "You marked this item as moderately necessary.",
        Level::Low => "You marked this item as low necessity.",
    }
}

/// Apply the decision table to already classified axes
pub fn recommend(
    effort: Level,
    finance: Option<Level>,
    need: Level,
) -> (Recommendation, &'static str) {
    let finance_high = finance == Some(Level::High);

    if effort == Level::Low && finance == Some(Level::Low) && need == Level::High {
        (
            Recommendation::BuyNow,
            "This purchase has a low impact and aligns well with your priorities.",
        )
    } else if effort == Level::High || finance_high {
        if need == Level::Low {
            (
                Recommendation::NotRecommended,
                "This purchase has a high opportunity cost and is not essential.",
            )
        } else {
            (
                Recommendation::ConsiderDelaying,
                "This purchase may be important, but delaying could reduce pressure.",
            )
        }
    } else {
        (
            Recommendation::ConsiderDelaying,
            "This purchase is feasible, but waiting may improve balance.",
        )
    }
}

/// Recommend buying now, delaying, or skipping a purchase
///
/// Total over its inputs: every combination yields exactly one
/// recommendation and a non-empty explanation.
pub fn decide(hours_needed: f64, percent_of_month: Option<f64>, necessity: i64) -> Decision {
    let effort = effort_level(hours_needed);
    let finance = finance_level(percent_of_month);
    let need = need_level(necessity);

    let (recommendation, summary) = recommend(effort, finance, need);

    let mut sentences = vec![summary, effort_reason(effort)];
    if let Some(level) = finance {
        sentences.push(finance_reason(level));
    }
    sentences.push(need_reason(need));

    Decision {
        recommendation,
        explanation: sentences.join(" "),
        effort,
        finance,
        need,
    }
}
