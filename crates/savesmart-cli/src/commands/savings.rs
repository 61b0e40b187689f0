//! Saving record command implementations

use anyhow::{Context, Result};
use savesmart_core::db::Database;

use super::{format_money, truncate};

pub fn cmd_save(db: &Database, goal_id: i64, amount: f64, note: &str) -> Result<()> {
    db.add_saving(goal_id, amount, note)
        .context("Failed to record saving")?;

    let goal = db
        .get_goal(goal_id)?
        .ok_or_else(|| anyhow::anyhow!("Goal {} not found", goal_id))?;
    let currency = db.get_profile()?.currency;
    let saved = db.savings_total(goal_id)?;

    println!(
        "🐷 Saved {} toward {}",
        format_money(amount, &currency),
        goal.title
    );
    println!(
        "   {} of {} so far",
        format_money(saved, &currency),
        format_money(goal.price, &currency)
    );
    if saved >= goal.price {
        println!(
            "   🎉 You have enough! Mark it with 'savesmart goals achieve {}'",
            goal_id
        );
    }

    Ok(())
}

pub fn cmd_savings_list(db: &Database, goal_id: Option<i64>) -> Result<()> {
    let records = db.list_savings(goal_id)?;

    if records.is_empty() {
        println!("No savings recorded yet. Add one with:");
        println!("  savesmart save <goal-id> <amount>");
        return Ok(());
    }

    let currency = db.get_profile()?.currency;
    let total: f64 = records.iter().map(|r| r.amount).sum();

    println!();
    println!("🐷 Savings");
    println!("   ─────────────────────────────────────────────────────────────");

    for record in &records {
        println!(
            "   [{}] {} │ goal {:>4} │ {:>14} │ {}",
            record.id,
            record.created_at.format("%Y-%m-%d"),
            record.goal_id,
            format_money(record.amount, &currency),
            truncate(&record.note, 30)
        );
    }

    println!();
    println!("   Total: {}", format_money(total, &currency));

    Ok(())
}
