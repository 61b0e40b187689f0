//! Goal operations

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::{info, warn};

use super::{add_days, format_date, parse_column, parse_date, parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{
    clamp_necessity, Goal, GoalStatus, NewGoal, Recurrence, Reminder, DEFAULT_CATEGORY,
};

/// Days a goal stays snoozed when no duration is given
pub const DEFAULT_SNOOZE_DAYS: i64 = 10;

const GOAL_COLUMNS: &str =
    "id, title, price, emoji, image_path, category, necessity, created_at, target_date, status";

fn row_to_goal(row: &Row) -> rusqlite::Result<Goal> {
    let created_at: String = row.get(7)?;
    let target_date: Option<String> = row.get(8)?;
    let status: String = row.get(9)?;
    let necessity: i64 = row.get(6)?;

    Ok(Goal {
        id: row.get(0)?,
        title: row.get(1)?,
        price: row.get(2)?,
        emoji: row.get(3)?,
        image_path: row.get(4)?,
        category: row.get(5)?,
        necessity: clamp_necessity(necessity),
        created_at: parse_datetime(&created_at),
        target_date: target_date.as_deref().and_then(parse_date),
        status: parse_column(9, &status)?,
    })
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Database {
    /// Add a goal, returning its id
    pub fn add_goal(&self, goal: &NewGoal) -> Result<i64> {
        goal.validate()?;

        let category = non_blank(&goal.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let necessity = clamp_necessity(goal.necessity);
        if i64::from(necessity) != goal.necessity {
            warn!(
                given = goal.necessity,
                stored = necessity,
                "Necessity out of range, clamped"
            );
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO goals (title, price, emoji, image_path, category, necessity, target_date, status)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                goal.title.trim(),
                goal.price,
                non_blank(&goal.emoji),
                non_blank(&goal.image_path),
                category,
                necessity,
                goal.target_date.map(format_date),
                GoalStatus::Active.as_str(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        info!(goal_id = id, title = %goal.title.trim(), price = goal.price, "Goal added");
        Ok(id)
    }

    /// Get a goal by id, including deleted ones
    pub fn get_goal(&self, id: i64) -> Result<Option<Goal>> {
        let conn = self.conn()?;
        let goal = conn
            .query_row(
                &format!("SELECT {} FROM goals WHERE id = ?", GOAL_COLUMNS),
                params![id],
                row_to_goal,
            )
            .optional()?;
        Ok(goal)
    }

    /// Get a goal that has not been deleted, or fail with `NotFound`
    pub(crate) fn require_goal(&self, id: i64) -> Result<Goal> {
        match self.get_goal(id)? {
            Some(goal) if goal.status != GoalStatus::Deleted => Ok(goal),
            _ => Err(Error::NotFound(format!("Goal {}", id))),
        }
    }

    /// List goals newest first
    ///
    /// With no filter, every goal that is not deleted is returned.
    pub fn list_goals(&self, status: Option<GoalStatus>) -> Result<Vec<Goal>> {
        let conn = self.conn()?;

        let (sql, status_param) = match status {
            Some(s) => (
                format!("SELECT {} FROM goals WHERE status = ? ORDER BY id DESC", GOAL_COLUMNS),
                s.as_str(),
            ),
            None => (
                format!("SELECT {} FROM goals WHERE status != ? ORDER BY id DESC", GOAL_COLUMNS),
                GoalStatus::Deleted.as_str(),
            ),
        };

        let mut stmt = conn.prepare(&sql)?;
        let goals = stmt
            .query_map(params![status_param], row_to_goal)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(goals)
    }

    /// Change a goal's status
    pub fn update_goal_status(&self, id: i64, status: GoalStatus) -> Result<()> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE goals SET status = ? WHERE id = ?",
            params![status.as_str(), id],
        )?;

        if updated == 0 {
            return Err(Error::NotFound(format!("Goal {}", id)));
        }

        info!(goal_id = id, status = %status, "Goal status updated");
        Ok(())
    }

    /// Soft-delete a goal; its row and savings are kept
    pub fn delete_goal(&self, id: i64) -> Result<()> {
        self.update_goal_status(id, GoalStatus::Deleted)
    }

    /// Number of goals per status, deleted ones included
    pub fn count_goals_by_status(&self) -> Result<Vec<(GoalStatus, i64)>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT status, COUNT(*) FROM goals GROUP BY status ORDER BY status")?;

        let counts = stmt
            .query_map([], |row| {
                let status: String = row.get(0)?;
                let status: GoalStatus = parse_column(0, &status)?;
                let count: i64 = row.get(1)?;
                Ok((status, count))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(counts)
    }

    /// Put a goal aside: schedule a one-shot reminder and mark it snoozed
    pub fn snooze_goal(
        &self,
        goal_id: i64,
        days: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<Reminder> {
        let days = days.unwrap_or(DEFAULT_SNOOZE_DAYS);
        if days <= 0 {
            return Err(Error::InvalidData(format!(
                "snooze days must be positive, got {}",
                days
            )));
        }
        let remind_at = add_days(now, days)?;
        self.require_goal(goal_id)?;

        let reminder_id = self.set_reminder(goal_id, remind_at, Recurrence::None)?;
        self.update_goal_status(goal_id, GoalStatus::Snoozed)?;

        self.get_reminder(reminder_id)?
            .ok_or_else(|| Error::NotFound(format!("Reminder {}", reminder_id)))
    }
}
