//! Hourly earning rate derived from an income profile

use tracing::debug;

use crate::models::{IncomePeriod, IncomeProfile};

/// Weeks used to turn a weekly schedule into a yearly one
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Working hours covered by one income period of the profile
pub fn hours_per_period(profile: &IncomeProfile) -> f64 {
    let hpd = profile.hours_per_day;
    match profile.income_period {
        IncomePeriod::Daily => hpd,
        IncomePeriod::Weekly => hpd * profile.work_days_per_week,
        IncomePeriod::Monthly => hpd * profile.work_days_per_month,
        IncomePeriod::Yearly => hpd * profile.work_days_per_week * WEEKS_PER_YEAR,
    }
}

/// Income earned per working hour
///
/// Returns `None` when the profile has no income or implies no working
/// hours for its period.
pub fn hourly_rate(profile: &IncomeProfile) -> Option<f64> {
    let total_hours = hours_per_period(profile);
    if total_hours <= 0.0 {
        debug!(
            period = %profile.income_period,
            total_hours, "Hourly rate unavailable: no working hours"
        );
        return None;
    }
    if profile.income_amount <= 0.0 {
        debug!("Hourly rate unavailable: no income");
        return None;
    }
    Some(profile.income_amount / total_hours)
}
