//! CSV export of goals and saving records

use serde::Serialize;

use crate::advisor::{hourly_rate, hours_needed, planner::progress};
use crate::db::{format_date, format_datetime, Database};
use crate::error::{Error, Result};

/// One goal as written to CSV
#[derive(Debug, Clone, Serialize)]
pub struct GoalExportRow {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub necessity: u8,
    pub status: String,
    pub target_date: Option<String>,
    pub created_at: String,
    pub saved: f64,
    pub progress: f64,
    /// Empty when the hourly rate is unavailable
    pub hours_needed: Option<f64>,
}

/// One saving record as written to CSV
#[derive(Debug, Clone, Serialize)]
pub struct SavingExportRow {
    pub id: i64,
    pub goal_id: i64,
    pub goal_title: String,
    pub amount: f64,
    pub note: String,
    pub created_at: String,
}

fn write_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidData(format!("CSV is not UTF-8: {}", e)))
}

impl Database {
    /// Goals that are not deleted, with their savings progress
    pub fn export_goal_rows(&self) -> Result<Vec<GoalExportRow>> {
        let rate = hourly_rate(&self.get_profile()?);

        self.list_goals(None)?
            .into_iter()
            .map(|goal| {
                let saved = self.savings_total(goal.id)?;
                Ok(GoalExportRow {
                    id: goal.id,
                    progress: progress(goal.price, saved),
                    hours_needed: hours_needed(goal.price, rate),
                    title: goal.title,
                    price: goal.price,
                    category: goal.category,
                    necessity: goal.necessity,
                    status: goal.status.to_string(),
                    target_date: goal.target_date.map(format_date),
                    created_at: format_datetime(goal.created_at),
                    saved,
                })
            })
            .collect()
    }

    /// Export goals as CSV (with header)
    pub fn export_goals_csv(&self) -> Result<String> {
        write_csv(&self.export_goal_rows()?)
    }

    /// Every saving record, newest first, with its goal's title
    pub fn export_saving_rows(&self) -> Result<Vec<SavingExportRow>> {
        let records = self.list_savings(None)?;
        let mut rows = Vec::with_capacity(records.len());

        for record in records {
            let goal_title = self
                .get_goal(record.goal_id)?
                .map(|g| g.title)
                .unwrap_or_default();
            rows.push(SavingExportRow {
                id: record.id,
                goal_id: record.goal_id,
                goal_title,
                amount: record.amount,
                note: record.note,
                created_at: format_datetime(record.created_at),
            });
        }

        Ok(rows)
    }

    /// Export saving records as CSV (with header)
    pub fn export_savings_csv(&self) -> Result<String> {
        write_csv(&self.export_saving_rows()?)
    }
}
