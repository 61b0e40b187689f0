//! Per-goal figures: hours and days of work, share of monthly income,
//! affordability badge and priority score

use serde::{Deserialize, Serialize};

use super::rate::{hourly_rate, WEEKS_PER_YEAR};
use crate::models::{clamp_necessity, IncomePeriod, IncomeProfile};

/// Hours at or below which a purchase counts as cheap
pub const CHEAP_MAX_HOURS: f64 = 8.0;

/// Hours at or below which a purchase counts as moderate
pub const MODERATE_MAX_HOURS: f64 = 40.0;

/// Work time needed to pay `price` at `rate` per hour
pub fn hours_needed(price: f64, rate: Option<f64>) -> Option<f64> {
    match rate {
        Some(r) if r > 0.0 => Some(price / r),
        _ => None,
    }
}

/// Working days equivalent of `hours_needed`
pub fn days_needed(hours_needed: Option<f64>, hours_per_day: f64) -> Option<f64> {
    if hours_per_day <= 0.0 {
        return None;
    }
    hours_needed.map(|h| h / hours_per_day)
}

/// Income normalized to one month
pub fn monthly_income(profile: &IncomeProfile) -> Option<f64> {
    let amount = profile.income_amount;
    let monthly = match profile.income_period {
        IncomePeriod::Monthly => amount,
        IncomePeriod::Weekly => amount * WEEKS_PER_YEAR / 12.0,
        IncomePeriod::Daily => amount * profile.work_days_per_month,
        IncomePeriod::Yearly => amount / 12.0,
    };
    (monthly > 0.0).then_some(monthly)
}

/// Price as a percentage of one month of income
pub fn percent_of_monthly_income(price: f64, profile: &IncomeProfile) -> Option<f64> {
    monthly_income(profile).map(|monthly| price / monthly * 100.0)
}

/// Coarse effort classification shown next to a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffordabilityBadge {
    Cheap,
    Moderate,
    Expensive,
    Unknown,
}

impl AffordabilityBadge {
    pub fn from_hours(hours_needed: Option<f64>) -> Self {
        match hours_needed {
            None => Self::Unknown,
            Some(h) if h <= CHEAP_MAX_HOURS => Self::Cheap,
            Some(h) if h <= MODERATE_MAX_HOURS => Self::Moderate,
            Some(_) => Self::Expensive,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cheap => "Cheap",
            Self::Moderate => "Moderate",
            Self::Expensive => "Expensive",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for AffordabilityBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Necessity-weighted, effort-discounted urgency
///
/// `necessity * 100 / (1 + hours_needed)`, rounded to two decimals. The
/// score is not capped: it ranges from 0 up to 500 (necessity 5, zero
/// hours). Unavailable or negative hours score 0.
pub fn priority_score(necessity: i64, hours_needed: Option<f64>) -> f64 {
    let necessity = clamp_necessity(necessity) as f64;
    match hours_needed {
        Some(h) if h >= 0.0 => round2(necessity * (1.0 / (1.0 + h)) * 100.0),
        _ => 0.0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Everything derived from a goal's price and necessity under one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalMetrics {
    pub hourly_rate: Option<f64>,
    pub hours_needed: Option<f64>,
    pub days_needed: Option<f64>,
    pub percent_of_month: Option<f64>,
    pub affordability_badge: AffordabilityBadge,
    pub priority_score: f64,
}

impl GoalMetrics {
    pub fn compute(price: f64, necessity: i64, profile: &IncomeProfile) -> Self {
        let rate = hourly_rate(profile);
        let hours = hours_needed(price, rate);

        Self {
            hourly_rate: rate,
            hours_needed: hours,
            days_needed: days_needed(hours, profile.hours_per_day),
            percent_of_month: percent_of_monthly_income(price, profile),
            affordability_badge: AffordabilityBadge::from_hours(hours),
            priority_score: priority_score(necessity, hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monthly_profile(amount: f64) -> IncomeProfile {
        IncomeProfile {
            income_amount: amount,
            income_period: IncomePeriod::Monthly,
            hours_per_day: 8.0,
            work_days_per_month: 22.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_hours_needed_example() {
        let hours = hours_needed(4000.0, Some(113.64)).unwrap();
        assert!((hours - 35.2).abs() < 0.01);
    }

    #[test]
    fn test_hours_needed_unavailable_rate() {
        assert_eq!(hours_needed(4000.0, None), None);
        assert_eq!(hours_needed(4000.0, Some(0.0)), None);
        assert_eq!(hours_needed(4000.0, Some(-3.0)), None);
    }

    #[test]
    fn test_hours_needed_monotonic() {
        let rate = Some(50.0);
        let prices = [0.0, 10.0, 99.5, 1000.0, 25000.0];
        for pair in prices.windows(2) {
            assert!(hours_needed(pair[0], rate) < hours_needed(pair[1], rate));
        }
        let rates = [1.0, 10.0, 55.5, 400.0];
        for pair in rates.windows(2) {
            assert!(hours_needed(1000.0, Some(pair[0])) > hours_needed(1000.0, Some(pair[1])));
        }
    }

    #[test]
    fn test_days_needed() {
        assert_eq!(days_needed(Some(20.0), 8.0), Some(2.5));
        assert_eq!(days_needed(Some(20.0), 0.0), None);
        assert_eq!(days_needed(None, 8.0), None);
    }

    #[test]
    fn test_zero_price_is_zero_hours_not_unavailable() {
        assert_eq!(hours_needed(0.0, Some(100.0)), Some(0.0));
        assert_eq!(AffordabilityBadge::from_hours(Some(0.0)), AffordabilityBadge::Cheap);
    }

    #[test]
    fn test_monthly_income_normalization() {
        assert_eq!(monthly_income(&monthly_profile(20000.0)), Some(20000.0));

        let weekly = IncomeProfile {
            income_amount: 1200.0,
            income_period: IncomePeriod::Weekly,
            ..Default::default()
        };
        assert_eq!(monthly_income(&weekly), Some(5200.0));

        let daily = IncomeProfile {
            income_amount: 500.0,
            income_period: IncomePeriod::Daily,
            work_days_per_month: 20.0,
            ..Default::default()
        };
        assert_eq!(monthly_income(&daily), Some(10000.0));

        let yearly = IncomeProfile {
            income_amount: 120000.0,
            income_period: IncomePeriod::Yearly,
            ..Default::default()
        };
        assert_eq!(monthly_income(&yearly), Some(10000.0));

        assert_eq!(monthly_income(&monthly_profile(0.0)), None);
    }

    #[test]
    fn test_percent_of_monthly_income() {
        let pct = percent_of_monthly_income(1000.0, &monthly_profile(22000.0)).unwrap();
        assert!((pct - 4.545).abs() < 0.001);
        assert_eq!(percent_of_monthly_income(1000.0, &monthly_profile(0.0)), None);
    }

    #[test]
    fn test_badge_boundaries_inclusive() {
        use AffordabilityBadge::*;
        assert_eq!(AffordabilityBadge::from_hours(Some(8.0)), Cheap);
        assert_eq!(AffordabilityBadge::from_hours(Some(8.01)), Moderate);
        assert_eq!(AffordabilityBadge::from_hours(Some(40.0)), Moderate);
        assert_eq!(AffordabilityBadge::from_hours(Some(40.01)), Expensive);
        assert_eq!(AffordabilityBadge::from_hours(None), Unknown);
    }

    #[test]
    fn test_priority_score_values() {
        assert_eq!(priority_score(5, Some(0.0)), 500.0);
        assert_eq!(priority_score(1, Some(1.0)), 50.0);
        assert_eq!(priority_score(3, Some(2.0)), 100.0);
        // 4 * 100 / 36.2 = 11.049...
        assert_eq!(priority_score(4, Some(35.2)), 11.05);
    }

    #[test]
    fn test_priority_score_unavailable_or_negative() {
        assert_eq!(priority_score(5, None), 0.0);
        assert_eq!(priority_score(5, Some(-1.0)), 0.0);
    }

    #[test]
    fn test_priority_score_clamps_necessity() {
        assert_eq!(priority_score(0, Some(0.0)), priority_score(1, Some(0.0)));
        assert_eq!(priority_score(12, Some(0.0)), 500.0);
    }

    #[test]
    fn test_priority_score_monotonic() {
        let hours = [0.0, 0.5, 8.0, 40.0, 300.0];
        for pair in hours.windows(2) {
            assert!(priority_score(3, Some(pair[0])) > priority_score(3, Some(pair[1])));
        }
        for n in 1..5 {
            assert!(priority_score(n, Some(10.0)) < priority_score(n + 1, Some(10.0)));
        }
    }

    #[test]
    fn test_compute_with_unusable_profile() {
        let mut profile = monthly_profile(20000.0);
        profile.hours_per_day = 0.0;
        let metrics = GoalMetrics::compute(1000.0, 5, &profile);
        assert_eq!(metrics.hourly_rate, None);
        assert_eq!(metrics.hours_needed, None);
        assert_eq!(metrics.days_needed, None);
        assert_eq!(metrics.affordability_badge, AffordabilityBadge::Unknown);
        assert_eq!(metrics.priority_score, 0.0);
        // Percent only depends on income
        assert!(metrics.percent_of_month.is_some());
    }
}
