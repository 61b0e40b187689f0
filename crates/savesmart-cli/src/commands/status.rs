//! Status-related command implementations (status, dashboard)

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use savesmart_core::db::Database;

use super::{format_money, open_db, truncate};

pub fn cmd_status(db_path: &Path, no_encrypt: bool) -> Result<()> {
    use savesmart_core::db::DB_KEY_ENV;
    use std::fs;

    println!();
    println!("📊 SaveSmart Status");
    println!("   ─────────────────────────────────────────────────────────────");

    println!("   Database: {}", db_path.display());

    if db_path.exists() {
        if let Ok(metadata) = fs::metadata(db_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Size: (database not initialized)");
    }

    let has_key = std::env::var(DB_KEY_ENV).is_ok();
    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else if has_key {
        println!("   🔒 Encryption: ENABLED ({}=***)", DB_KEY_ENV);
    } else {
        println!("   ❌ Encryption: REQUIRED but {} not set", DB_KEY_ENV);
    }

    if db_path.exists() {
        match open_db(db_path, no_encrypt) {
            Ok(db) => {
                if let Ok(stats) = db.dashboard_stats(Utc::now()) {
                    println!();
                    println!(
                        "   Goals: {} active, {} snoozed, {} achieved",
                        stats.active_goals, stats.snoozed_goals, stats.achieved_goals
                    );
                    println!("   Reminders due: {}", stats.due_reminders);
                }
            }
            Err(e) => {
                println!();
                println!("   ❌ Error opening database: {}", e);
                if !no_encrypt && !has_key {
                    println!("      Set {} or use --no-encrypt", DB_KEY_ENV);
                } else if has_key {
                    println!("      (Check if {} is correct)", DB_KEY_ENV);
                }
            }
        }
    }

    println!();
    Ok(())
}

pub fn cmd_dashboard(db: &Database) -> Result<()> {
    let now = Utc::now();
    let stats = db.dashboard_stats(now)?;

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│         💰 SaveSmart Dashboard          │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  Income:          {} / {}",
        format_money(stats.income_amount, &stats.currency),
        stats.income_period
    );
    match stats.hourly_rate {
        Some(rate) => println!(
            "  Hourly rate:     {} / h",
            format_money(rate, &stats.currency)
        ),
        None => println!("  Hourly rate:     — (complete your profile)"),
    }
    println!();
    println!("  🎯 Active goals:   {}", stats.active_goals);
    println!("  💤 Snoozed goals:  {}", stats.snoozed_goals);
    println!("  🏆 Achieved goals: {}", stats.achieved_goals);
    println!(
        "  🐷 Total saved:    {}",
        format_money(stats.total_saved, &stats.currency)
    );
    println!();

    if stats.due_reminders > 0 {
        println!("  🔔 {} reminder(s) due:", stats.due_reminders);
        for reminder in db.due_reminders(now)? {
            println!(
                "     [{}] {}",
                reminder.id,
                truncate(reminder.goal_title.as_deref().unwrap_or("(untitled)"), 40)
            );
        }
        println!();
        println!("  Run 'savesmart reminders' to handle them.");
    }

    Ok(())
}
