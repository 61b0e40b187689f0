//! Goal command implementations (list, add, show, status changes, snooze, plan)
//! and one-off price quotes

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use savesmart_core::db::Database;
use savesmart_core::models::{GoalStatus, NewGoal};
use savesmart_core::{
    evaluate_goals, evaluate_stored, quote, Decision, GoalEvaluation, SavingsPlan, SortCriterion,
    DEFAULT_MONTHLY_CONTRIBUTION,
};

use super::{format_hours, format_money, truncate};

/// Goal fields given on the command line
#[derive(Debug)]
pub struct GoalArgs {
    pub title: String,
    pub price: f64,
    pub emoji: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub necessity: i64,
    pub target: Option<String>,
}

fn load_evaluation(db: &Database, id: i64) -> Result<GoalEvaluation> {
    let goal = db
        .get_goal(id)?
        .ok_or_else(|| anyhow::anyhow!("Goal {} not found", id))?;
    Ok(evaluate_stored(db, goal, Utc::now())?)
}

fn print_decision(decision: Option<&Decision>) {
    match decision {
        Some(d) => {
            let icon = match d.recommendation {
                savesmart_core::Recommendation::BuyNow => "✅",
                savesmart_core::Recommendation::ConsiderDelaying => "⏳",
                savesmart_core::Recommendation::NotRecommended => "🛑",
            };
            println!("   {} {}", icon, d.recommendation);
            println!("      {}", d.explanation);
            let finance = d.finance.map(|l| l.to_string()).unwrap_or_else(|| "—".into());
            println!(
                "      effort: {}, finance: {}, need: {}",
                d.effort, finance, d.need
            );
        }
        None => {
            println!("   ❔ No recommendation: set your income in 'savesmart profile set'");
        }
    }
}

fn print_plan(label: &str, plan: &SavingsPlan, currency: &str) {
    if !plan.has_plan {
        return;
    }
    if let (Some(days), Some(monthly), Some(weekly)) =
        (plan.days_until, plan.monthly_needed, plan.weekly_needed)
    {
        println!(
            "   {} {} / month or {} / week ({} days left)",
            label,
            format_money(monthly, currency),
            format_money(weekly, currency),
            days
        );
    }
}

pub fn cmd_quote(db: &Database, price: f64, necessity: i64, json: bool) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        anyhow::bail!("Price must be a non-negative number");
    }

    let profile = db.get_profile()?;
    let q = quote(price, necessity, &profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&q)?);
        return Ok(());
    }

    println!();
    println!("💸 {}", format_money(q.price, &q.currency));
    println!("   ─────────────────────────────");
    println!(
        "   Working time:     {} ({})",
        format_hours(q.metrics.hours_needed),
        q.metrics.affordability_badge
    );
    if let Some(days) = q.metrics.days_needed {
        println!("   Working days:     {:.1}", days);
    }
    if let Some(pct) = q.metrics.percent_of_month {
        println!("   Share of month:   {:.1}%", pct);
    }
    println!();
    print_decision(q.decision.as_ref());

    Ok(())
}

pub fn cmd_goals_list(db: &Database, status: Option<&str>, sort: &str, json: bool) -> Result<()> {
    let status = match status {
        None | Some("all") => None,
        Some(s) => Some(s.parse::<GoalStatus>().map_err(anyhow::Error::msg)?),
    };
    let sort: SortCriterion = sort.parse().map_err(anyhow::Error::msg)?;

    let evaluations = evaluate_goals(db, status, sort, Utc::now())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&evaluations)?);
        return Ok(());
    }

    if evaluations.is_empty() {
        println!("No goals found. Add one with:");
        println!("  savesmart goals add \"Headphones\" 4000 --emoji 🎧");
        return Ok(());
    }

    let currency = db.get_profile()?.currency;

    println!();
    println!("🎯 Goals (sorted by {})", sort);
    println!("   ─────────────────────────────────────────────────────────────");

    for eval in &evaluations {
        let goal = &eval.goal;
        let icon = goal.emoji.as_deref().unwrap_or("🖼️");
        let bell = if eval.reminder_due { " 🔔" } else { "" };
        println!(
            "   [{}] {} {} │ {:>14} │ {:>9} │ {:>3.0}% saved │ {}{}",
            goal.id,
            icon,
            truncate(&goal.title, 24),
            format_money(goal.price, &currency),
            format_hours(eval.metrics.hours_needed),
            eval.progress * 100.0,
            goal.status,
            bell
        );
    }

    Ok(())
}

pub fn cmd_goals_add(db: &Database, args: GoalArgs) -> Result<()> {
    let mut goal = NewGoal::new(args.title, args.price).with_necessity(args.necessity);
    if let Some(emoji) = args.emoji {
        goal = goal.with_emoji(emoji);
    }
    if let Some(image) = args.image {
        goal = goal.with_image(image);
    }
    if let Some(category) = args.category {
        goal = goal.with_category(category);
    }
    if let Some(target) = args.target {
        let date = NaiveDate::parse_from_str(&target, "%Y-%m-%d")
            .context("Invalid --target date format (use YYYY-MM-DD)")?;
        goal = goal.with_target_date(date);
    }

    let id = db.add_goal(&goal).context("Failed to add goal")?;
    let eval = load_evaluation(db, id)?;

    println!(
        "✅ Added goal {}: {} ({})",
        id,
        eval.goal.title,
        format_hours(eval.metrics.hours_needed)
    );
    print_decision(eval.decision.as_ref());

    Ok(())
}

pub fn cmd_goals_show(db: &Database, id: i64) -> Result<()> {
    let eval = load_evaluation(db, id)?;
    let currency = db.get_profile()?.currency;
    let goal = &eval.goal;

    println!();
    println!(
        "{} {}",
        goal.emoji.as_deref().unwrap_or("🖼️"),
        goal.title
    );
    println!("   ─────────────────────────────");
    println!("   Price:          {}", format_money(goal.price, &currency));
    println!("   Category:       {}", goal.category);
    println!("   Necessity:      {}/5", goal.necessity);
    println!("   Status:         {}", goal.status);
    if let Some(date) = goal.target_date {
        println!("   Target date:    {}", date);
    }
    println!();
    println!(
        "   Working time:   {} ({})",
        format_hours(eval.metrics.hours_needed),
        eval.metrics.affordability_badge
    );
    if let Some(pct) = eval.metrics.percent_of_month {
        println!("   Share of month: {:.1}%", pct);
    }
    println!("   Priority:       {:.2}", eval.metrics.priority_score);
    println!(
        "   Saved:          {} of {} ({:.0}%)",
        format_money(eval.saved, &currency),
        format_money(goal.price, &currency),
        eval.progress * 100.0
    );
    print_plan("📅 Plan:", &eval.savings_plan, &currency);
    print_plan("📅 Still needed:", &eval.remaining_plan, &currency);
    if let Some(months) = eval.months_at_default_contribution.filter(|m| *m > 0.0) {
        println!(
            "   At {}/month you get there in ~{} months",
            format_money(DEFAULT_MONTHLY_CONTRIBUTION, &currency),
            months.ceil()
        );
    }
    if eval.reminder_due {
        println!("   🔔 A reminder for this goal is due");
    }
    println!();
    print_decision(eval.decision.as_ref());

    Ok(())
}

fn set_status(db: &Database, id: i64, status: GoalStatus) -> Result<()> {
    db.update_goal_status(id, status)
        .with_context(|| format!("Failed to mark goal {} {}", id, status))?;
    Ok(())
}

pub fn cmd_goals_achieve(db: &Database, id: i64) -> Result<()> {
    set_status(db, id, GoalStatus::Achieved)?;
    println!("🏆 Goal {} achieved. Well done!", id);
    Ok(())
}

pub fn cmd_goals_activate(db: &Database, id: i64) -> Result<()> {
    set_status(db, id, GoalStatus::Active)?;
    println!("✅ Goal {} is active again", id);
    Ok(())
}

pub fn cmd_goals_delete(db: &Database, id: i64) -> Result<()> {
    db.delete_goal(id)
        .with_context(|| format!("Failed to delete goal {}", id))?;
    println!("🗑️  Deleted goal {}", id);
    Ok(())
}

pub fn cmd_goals_snooze(db: &Database, id: i64, days: Option<i64>) -> Result<()> {
    let reminder = db.snooze_goal(id, days, Utc::now())?;
    println!(
        "💤 Snoozed goal {}. You'll be reminded on {}",
        id,
        reminder.remind_at.format("%Y-%m-%d")
    );
    Ok(())
}

pub fn cmd_goals_plan(db: &Database, id: i64) -> Result<()> {
    let reminder = db.start_savings_plan(id, Utc::now())?;
    let eval = load_evaluation(db, id)?;
    let currency = db.get_profile()?.currency;

    println!("🐷 Savings plan started for {}", eval.goal.title);
    print_plan("📅 Still needed:", &eval.remaining_plan, &currency);
    println!(
        "   Weekly check-in reminder from {} (reminder {})",
        reminder.remind_at.format("%Y-%m-%d"),
        reminder.id
    );
    Ok(())
}
