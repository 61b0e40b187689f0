//! Income profile operations

use rusqlite::params;
use tracing::info;

use super::Database;
use crate::error::{Error, Result};
use crate::models::{IncomePeriod, IncomeProfile, ProfileUpdate};

impl Database {
    /// Get the income profile (seeded with defaults at first open)
    pub fn get_profile(&self) -> Result<IncomeProfile> {
        let conn = self.conn()?;
        let (profile, period) = conn.query_row(
            "SELECT currency, income_amount, income_period, hours_per_day,
                    work_days_per_week, work_days_per_month, fixed_expenses
             FROM profile WHERE id = 1",
            [],
            |row| {
                let period: String = row.get(2)?;
                Ok((
                    IncomeProfile {
                        currency: row.get(0)?,
                        income_amount: row.get(1)?,
                        income_period: IncomePeriod::default(),
                        hours_per_day: row.get(3)?,
                        work_days_per_week: row.get(4)?,
                        work_days_per_month: row.get(5)?,
                        fixed_expenses: row.get(6)?,
                    },
                    period,
                ))
            },
        )?;

        let income_period = period.parse::<IncomePeriod>().map_err(Error::InvalidData)?;
        Ok(IncomeProfile {
            income_period,
            ..profile
        })
    }

    /// Apply a partial update and return the stored profile
    pub fn update_profile(&self, update: &ProfileUpdate) -> Result<IncomeProfile> {
        let current = self.get_profile()?;
        let updated = update.apply_to(&current)?;

        let conn = self.conn()?;
        conn.execute(
            "UPDATE profile SET currency = ?, income_amount = ?, income_period = ?,
                    hours_per_day = ?, work_days_per_week = ?, work_days_per_month = ?,
                    fixed_expenses = ?, updated_at = CURRENT_TIMESTAMP
             WHERE id = 1",
            params![
                updated.currency,
                updated.income_amount,
                updated.income_period.as_str(),
                updated.hours_per_day,
                updated.work_days_per_week,
                updated.work_days_per_month,
                updated.fixed_expenses,
            ],
        )?;

        info!(
            income = updated.income_amount,
            period = %updated.income_period,
            "Profile updated"
        );
        Ok(updated)
    }
}
