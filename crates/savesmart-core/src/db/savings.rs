//! Saving record operations

use rusqlite::params;
use tracing::info;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::SavingRecord;

impl Database {
    /// Record a deposit toward a goal, returning the record id
    pub fn add_saving(&self, goal_id: i64, amount: f64, note: &str) -> Result<i64> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidData(format!(
                "saving amount must be positive, got {}",
                amount
            )));
        }
        self.require_goal(goal_id)?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO savings (goal_id, amount, note) VALUES (?, ?, ?)",
            params![goal_id, amount, note.trim()],
        )?;

        let id = conn.last_insert_rowid();
        info!(goal_id, amount, "Saving recorded");
        Ok(id)
    }

    /// List saving records newest first, optionally for one goal
    pub fn list_savings(&self, goal_id: Option<i64>) -> Result<Vec<SavingRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, goal_id, amount, note, created_at FROM savings
             WHERE (?1 IS NULL OR goal_id = ?1)
             ORDER BY id DESC",
        )?;

        let records = stmt
            .query_map(params![goal_id], |row| {
                let created_at: String = row.get(4)?;
                Ok(SavingRecord {
                    id: row.get(0)?,
                    goal_id: row.get(1)?,
                    amount: row.get(2)?,
                    note: row.get(3)?,
                    created_at: parse_datetime(&created_at),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Total saved toward one goal
    pub fn savings_total(&self, goal_id: i64) -> Result<f64> {
        let conn = self.conn()?;
        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM savings WHERE goal_id = ?",
            params![goal_id],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Total saved toward goals that are not deleted
    pub fn total_saved(&self) -> Result<f64> {
        let conn = self.conn()?;
        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(s.amount), 0.0) FROM savings s
             JOIN goals g ON s.goal_id = g.id
             WHERE g.status != 'deleted'",
            [],
            |row| row.get(0),
        )?;
        Ok(total)
    }
}
