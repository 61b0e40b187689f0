//! Domain models for SaveSmart

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Currency used when a profile is first created
pub const DEFAULT_CURRENCY: &str = "THB";

/// Category used when a goal is added without one
pub const DEFAULT_CATEGORY: &str = "Other";

/// Lowest and highest necessity rating
pub const MIN_NECESSITY: u8 = 1;
pub const MAX_NECESSITY: u8 = 5;

/// How often the profile's income amount is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomePeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl IncomePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::str::FromStr for IncomePeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(format!("Unknown income period: {}", s)),
        }
    }
}

impl std::fmt::Display for IncomePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The user's income and working-time parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeProfile {
    pub currency: String,
    /// Income received per `income_period`
    pub income_amount: f64,
    pub income_period: IncomePeriod,
    pub hours_per_day: f64,
    pub work_days_per_week: f64,
    pub work_days_per_month: f64,
    /// Informational only, not used by any calculation
    pub fixed_expenses: f64,
}

impl Default for IncomeProfile {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            income_amount: 20000.0,
            income_period: IncomePeriod::Monthly,
            hours_per_day: 8.0,
            work_days_per_week: 5.0,
            work_days_per_month: 22.0,
            fixed_expenses: 0.0,
        }
    }
}

/// Partial profile update; `None` fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub currency: Option<String>,
    pub income_amount: Option<f64>,
    pub income_period: Option<IncomePeriod>,
    pub hours_per_day: Option<f64>,
    pub work_days_per_week: Option<f64>,
    pub work_days_per_month: Option<f64>,
    pub fixed_expenses: Option<f64>,
}

impl ProfileUpdate {
    /// Apply the update on top of an existing profile, rejecting negative
    /// or non-finite numbers
    pub fn apply_to(&self, profile: &IncomeProfile) -> Result<IncomeProfile> {
        let mut updated = profile.clone();

        if let Some(currency) = &self.currency {
            let currency = currency.trim();
            if currency.is_empty() {
                return Err(Error::InvalidData("currency must not be empty".into()));
            }
            updated.currency = currency.to_uppercase();
        }
        if let Some(period) = self.income_period {
            updated.income_period = period;
        }

        let fields = [
            ("income_amount", self.income_amount, &mut updated.income_amount),
            ("hours_per_day", self.hours_per_day, &mut updated.hours_per_day),
            (
                "work_days_per_week",
                self.work_days_per_week,
                &mut updated.work_days_per_week,
            ),
            (
                "work_days_per_month",
                self.work_days_per_month,
                &mut updated.work_days_per_month,
            ),
            ("fixed_expenses", self.fixed_expenses, &mut updated.fixed_expenses),
        ];
        for (name, value, slot) in fields {
            if let Some(v) = value {
                *slot = non_negative(name, v)?;
            }
        }

        Ok(updated)
    }

    pub fn is_empty(&self) -> bool {
        self.currency.is_none()
            && self.income_amount.is_none()
            && self.income_period.is_none()
            && self.hours_per_day.is_none()
            && self.work_days_per_week.is_none()
            && self.work_days_per_month.is_none()
            && self.fixed_expenses.is_none()
    }
}

fn non_negative(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidData(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )));
    }
    Ok(value)
}

/// Clamp a user-supplied necessity rating into 1..=5
pub fn clamp_necessity(necessity: i64) -> u8 {
    necessity.clamp(MIN_NECESSITY as i64, MAX_NECESSITY as i64) as u8
}

/// Lifecycle status of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Snoozed,
    Achieved,
    /// Soft-delete marker; rows are never removed
    Deleted,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Snoozed => "snoozed",
            Self::Achieved => "achieved",
            Self::Deleted => "deleted",
        }
    }
}

impl std::str::FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "snoozed" => Ok(Self::Snoozed),
            "achieved" => Ok(Self::Achieved),
            "deleted" => Ok(Self::Deleted),
            _ => Err(format!("Unknown goal status: {}", s)),
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Something the user wants to buy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Row id; also the creation order
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub emoji: Option<String>,
    pub image_path: Option<String>,
    pub category: String,
    /// 1 (nice to have) to 5 (essential)
    pub necessity: u8,
    pub created_at: DateTime<Utc>,
    pub target_date: Option<NaiveDate>,
    pub status: GoalStatus,
}

/// A goal to be added (before DB insertion)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewGoal {
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Clamped into 1..=5 on insert
    #[serde(default = "default_necessity")]
    pub necessity: i64,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

fn default_necessity() -> i64 {
    3
}

impl NewGoal {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
            necessity: default_necessity(),
            ..Default::default()
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_necessity(mut self, necessity: i64) -> Self {
        self.necessity = necessity;
        self
    }

    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    /// Check the goal can be stored: a title, a usable price, and an emoji
    /// or image to show next to it
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidData("goal title must not be empty".into()));
        }
        non_negative("price", self.price)?;

        let has_emoji = self.emoji.as_deref().is_some_and(|e| !e.trim().is_empty());
        let has_image = self
            .image_path
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty());
        if !has_emoji && !has_image {
            return Err(Error::InvalidData(
                "goal needs an emoji or an image".into(),
            ));
        }
        Ok(())
    }
}

/// A manual deposit toward a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingRecord {
    pub id: i64,
    pub goal_id: i64,
    pub amount: f64,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

/// How a reminder repeats once it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl std::str::FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(format!("Unknown recurrence: {}", s)),
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A prompt to reconsider a goal at a given time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    pub goal_id: i64,
    /// Title of the goal, joined in for display
    pub goal_title: Option<String>,
    pub remind_at: DateTime<Utc>,
    pub recurring: Recurrence,
    pub enabled: bool,
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub currency: String,
    pub income_amount: f64,
    pub income_period: IncomePeriod,
    pub hours_per_day: f64,
    pub work_days_per_month: f64,
    pub hourly_rate: Option<f64>,
    pub active_goals: i64,
    pub snoozed_goals: i64,
    pub achieved_goals: i64,
    pub total_saved: f64,
    pub due_reminders: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_period_round_trip_strings() {
        for period in [
            IncomePeriod::Daily,
            IncomePeriod::Weekly,
            IncomePeriod::Monthly,
            IncomePeriod::Yearly,
        ] {
            assert_eq!(period.as_str().parse::<IncomePeriod>().unwrap(), period);
        }
        assert!("fortnightly".parse::<IncomePeriod>().is_err());
        assert!("annual".parse::<IncomePeriod>().is_err());
        assert_eq!("MONTHLY".parse::<IncomePeriod>().unwrap(), IncomePeriod::Monthly);
    }

    #[test]
    fn test_goal_status_rejects_unknown() {
        assert_eq!("snoozed".parse::<GoalStatus>().unwrap(), GoalStatus::Snoozed);
        let err = "archived".parse::<GoalStatus>().unwrap_err();
        assert!(err.contains("archived"));
    }

    #[test]
    fn test_recurrence_serde_uses_literal_values() {
        let json = serde_json::to_string(&Recurrence::Weekly).unwrap();
        assert_eq!(json, "\"weekly\"");
        let parsed: Recurrence = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, Recurrence::None);
    }

    #[test]
    fn test_clamp_necessity() {
        assert_eq!(clamp_necessity(-3), 1);
        assert_eq!(clamp_necessity(0), 1);
        assert_eq!(clamp_necessity(3), 3);
        assert_eq!(clamp_necessity(9), 5);
    }

    #[test]
    fn test_profile_update_applies_fields() {
        let update = ProfileUpdate {
            currency: Some("usd".into()),
            income_amount: Some(5000.0),
            income_period: Some(IncomePeriod::Weekly),
            ..Default::default()
        };
        let updated = update.apply_to(&IncomeProfile::default()).unwrap();
        assert_eq!(updated.currency, "USD");
        assert_eq!(updated.income_amount, 5000.0);
        assert_eq!(updated.income_period, IncomePeriod::Weekly);
        // Untouched fields keep their value
        assert_eq!(updated.hours_per_day, 8.0);
    }

    #[test]
    fn test_profile_update_rejects_negative_and_nan() {
        let negative = ProfileUpdate {
            hours_per_day: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            negative.apply_to(&IncomeProfile::default()),
            Err(Error::InvalidData(_))
        ));

        let nan = ProfileUpdate {
            income_amount: Some(f64::NAN),
            ..Default::default()
        };
        assert!(nan.apply_to(&IncomeProfile::default()).is_err());
    }

    #[test]
    fn test_new_goal_validation() {
        assert!(NewGoal::new("Headphones", 4000.0)
            .with_emoji("🎧")
            .validate()
            .is_ok());
        assert!(NewGoal::new("Desk", 9000.0)
            .with_image("uploads/desk.png")
            .validate()
            .is_ok());

        // Missing picture
        assert!(NewGoal::new("Desk", 9000.0).validate().is_err());
        // Blank emoji does not count
        assert!(NewGoal::new("Desk", 9000.0)
            .with_emoji("  ")
            .validate()
            .is_err());
        // Blank title
        assert!(NewGoal::new("  ", 10.0).with_emoji("🛒").validate().is_err());
        // Negative price
        assert!(NewGoal::new("Refund", -5.0)
            .with_emoji("🛒")
            .validate()
            .is_err());
    }

    #[test]
    fn test_new_goal_deserialize_defaults() {
        let goal: NewGoal =
            serde_json::from_str(r#"{"title": "Shoes", "price": 2500, "emoji": "👟"}"#).unwrap();
        assert_eq!(goal.necessity, 3);
        assert!(goal.category.is_none());
        assert!(goal.target_date.is_none());
    }
}
