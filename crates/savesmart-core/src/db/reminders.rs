//! Reminder operations

use chrono::{DateTime, Duration, Months, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

use super::{add_days, format_datetime, parse_column, parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{GoalStatus, Recurrence, Reminder};

/// Days until the first check-in of a new savings plan
pub const PLAN_CHECK_IN_DAYS: i64 = 7;

const REMINDER_SELECT: &str = "SELECT r.id, r.goal_id, g.title, r.remind_at, r.recurring, r.enabled
     FROM reminders r LEFT JOIN goals g ON r.goal_id = g.id";

fn row_to_reminder(row: &Row) -> rusqlite::Result<Reminder> {
    let remind_at: String = row.get(3)?;
    let recurring: String = row.get(4)?;
    let enabled: i64 = row.get(5)?;

    Ok(Reminder {
        id: row.get(0)?,
        goal_id: row.get(1)?,
        goal_title: row.get(2)?,
        remind_at: parse_datetime(&remind_at),
        recurring: parse_column(4, &recurring)?,
        enabled: enabled != 0,
    })
}

/// Next firing time after `from` for a repeating reminder
fn next_occurrence(from: DateTime<Utc>, recurring: Recurrence) -> Option<DateTime<Utc>> {
    match recurring {
        Recurrence::None => None,
        Recurrence::Daily => from.checked_add_signed(Duration::days(1)),
        Recurrence::Weekly => from.checked_add_signed(Duration::weeks(1)),
        Recurrence::Monthly => from.checked_add_months(Months::new(1)),
    }
}

impl Database {
    /// Schedule a reminder for a goal, returning its id
    pub fn set_reminder(
        &self,
        goal_id: i64,
        remind_at: DateTime<Utc>,
        recurring: Recurrence,
    ) -> Result<i64> {
        self.require_goal(goal_id)?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO reminders (goal_id, remind_at, recurring, enabled) VALUES (?, ?, ?, 1)",
            params![goal_id, format_datetime(remind_at), recurring.as_str()],
        )?;

        let id = conn.last_insert_rowid();
        info!(goal_id, reminder_id = id, %recurring, "Reminder scheduled");
        Ok(id)
    }

    /// Get a reminder by id
    pub fn get_reminder(&self, id: i64) -> Result<Option<Reminder>> {
        let conn = self.conn()?;
        let reminder = conn
            .query_row(
                &format!("{} WHERE r.id = ?", REMINDER_SELECT),
                params![id],
                row_to_reminder,
            )
            .optional()?;
        Ok(reminder)
    }

    fn require_reminder(&self, id: i64) -> Result<Reminder> {
        self.get_reminder(id)?
            .ok_or_else(|| Error::NotFound(format!("Reminder {}", id)))
    }

    /// List reminders soonest first, optionally for one goal
    pub fn list_reminders(&self, goal_id: Option<i64>) -> Result<Vec<Reminder>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE (?1 IS NULL OR r.goal_id = ?1) ORDER BY r.remind_at, r.id",
            REMINDER_SELECT
        ))?;

        let reminders = stmt
            .query_map(params![goal_id], row_to_reminder)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(reminders)
    }

    /// Enabled reminders whose time has come, for goals that are not deleted
    pub fn due_reminders(&self, now: DateTime<Utc>) -> Result<Vec<Reminder>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE r.enabled = 1 AND r.remind_at <= ? AND g.status != ?
             ORDER BY r.remind_at, r.id",
            REMINDER_SELECT
        ))?;

        let reminders = stmt
            .query_map(
                params![format_datetime(now), GoalStatus::Deleted.as_str()],
                row_to_reminder,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(reminders)
    }

    /// Whether any enabled reminder for the goal is due
    pub fn is_goal_due(&self, goal_id: i64, now: DateTime<Utc>) -> Result<bool> {
        let conn = self.conn()?;
        let due: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM reminders WHERE goal_id = ? AND enabled = 1 AND remind_at <= ?
             )",
            params![goal_id, format_datetime(now)],
            |row| row.get(0),
        )?;
        Ok(due != 0)
    }

    /// Push a reminder back by `days` from its scheduled time and re-enable it
    pub fn snooze_reminder(&self, id: i64, days: i64) -> Result<Reminder> {
        if days <= 0 {
            return Err(Error::InvalidData(format!(
                "snooze days must be positive, got {}",
                days
            )));
        }
        let reminder = self.require_reminder(id)?;
        let remind_at = add_days(reminder.remind_at, days)?;

        let conn = self.conn()?;
        conn.execute(
            "UPDATE reminders SET remind_at = ?, enabled = 1 WHERE id = ?",
            params![format_datetime(remind_at), id],
        )?;

        info!(reminder_id = id, days, "Reminder snoozed");
        Ok(Reminder {
            remind_at,
            enabled: true,
            ..reminder
        })
    }

    /// Stop a reminder from firing
    pub fn disable_reminder(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let updated = conn.execute("UPDATE reminders SET enabled = 0 WHERE id = ?", params![id])?;
        if updated == 0 {
            return Err(Error::NotFound(format!("Reminder {}", id)));
        }
        info!(reminder_id = id, "Reminder disabled");
        Ok(())
    }

    /// Acknowledge a reminder
    ///
    /// Repeating reminders move to their first occurrence after `now`;
    /// one-shot reminders are disabled.
    pub fn complete_reminder(&self, id: i64, now: DateTime<Utc>) -> Result<Reminder> {
        let reminder = self.require_reminder(id)?;

        let Some(mut next) = next_occurrence(reminder.remind_at, reminder.recurring) else {
            self.disable_reminder(id)?;
            return Ok(Reminder {
                enabled: false,
                ..reminder
            });
        };
        while next <= now {
            next = next_occurrence(next, reminder.recurring).ok_or_else(|| {
                Error::InvalidData(format!("Reminder {} cannot be rescheduled", id))
            })?;
        }

        let conn = self.conn()?;
        conn.execute(
            "UPDATE reminders SET remind_at = ?, enabled = 1 WHERE id = ?",
            params![format_datetime(next), id],
        )?;

        debug!(reminder_id = id, next = %next, "Recurring reminder rolled forward");
        Ok(Reminder {
            remind_at: next,
            enabled: true,
            ..reminder
        })
    }

    /// Start saving toward a goal: schedule a weekly check-in a week out
    pub fn start_savings_plan(&self, goal_id: i64, now: DateTime<Utc>) -> Result<Reminder> {
        let id = self.set_reminder(
            goal_id,
            add_days(now, PLAN_CHECK_IN_DAYS)?,
            Recurrence::Weekly,
        )?;
        self.require_reminder(id)
    }
}
