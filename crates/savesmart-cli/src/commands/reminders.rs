//! Reminder command implementations

use anyhow::{Context, Result};
use chrono::Utc;
use savesmart_core::db::Database;
use savesmart_core::models::Reminder;

use super::truncate;

fn print_reminder(reminder: &Reminder) {
    let state = if reminder.enabled { "" } else { " (off)" };
    println!(
        "   [{}] {} │ {:<7} │ goal {} {}{}",
        reminder.id,
        reminder.remind_at.format("%Y-%m-%d %H:%M"),
        reminder.recurring,
        reminder.goal_id,
        truncate(reminder.goal_title.as_deref().unwrap_or(""), 30),
        state
    );
}

pub fn cmd_reminders_due(db: &Database) -> Result<()> {
    let due = db.due_reminders(Utc::now())?;

    if due.is_empty() {
        println!("✅ Nothing due. Enjoy your day!");
        return Ok(());
    }

    println!();
    println!("🔔 Due Reminders");
    println!("   ─────────────────────────────────────────────────────────────");
    for reminder in &due {
        print_reminder(reminder);
    }
    println!();
    println!("   Use 'savesmart reminders done <id>' or 'savesmart reminders snooze <id>'.");

    Ok(())
}

pub fn cmd_reminders_list(db: &Database, goal_id: Option<i64>) -> Result<()> {
    let reminders = db.list_reminders(goal_id)?;

    if reminders.is_empty() {
        println!("No reminders. Snooze a goal or start a plan to create one.");
        return Ok(());
    }

    println!();
    println!("⏰ Reminders");
    println!("   ─────────────────────────────────────────────────────────────");
    for reminder in &reminders {
        print_reminder(reminder);
    }

    Ok(())
}

pub fn cmd_reminders_snooze(db: &Database, id: i64, days: i64) -> Result<()> {
    let reminder = db
        .snooze_reminder(id, days)
        .with_context(|| format!("Failed to snooze reminder {}", id))?;
    println!(
        "💤 Reminder {} moved to {}",
        id,
        reminder.remind_at.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}

pub fn cmd_reminders_disable(db: &Database, id: i64) -> Result<()> {
    db.disable_reminder(id)
        .with_context(|| format!("Failed to disable reminder {}", id))?;
    println!("🔕 Reminder {} disabled", id);
    Ok(())
}

pub fn cmd_reminders_done(db: &Database, id: i64) -> Result<()> {
    let reminder = db
        .complete_reminder(id, Utc::now())
        .with_context(|| format!("Failed to complete reminder {}", id))?;
    if reminder.enabled {
        println!(
            "✅ Done. Next {} reminder on {}",
            reminder.recurring,
            reminder.remind_at.format("%Y-%m-%d")
        );
    } else {
        println!("✅ Done. Reminder {} is finished", id);
    }
    Ok(())
}
