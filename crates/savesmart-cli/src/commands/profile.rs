//! Income profile command implementations

use anyhow::{Context, Result};
use savesmart_core::advisor::{hourly_rate, monthly_income};
use savesmart_core::db::Database;
use savesmart_core::models::{IncomePeriod, ProfileUpdate};

use super::format_money;

/// Profile fields given on the command line
#[derive(Debug, Default)]
pub struct ProfileArgs {
    pub currency: Option<String>,
    pub income: Option<f64>,
    pub period: Option<String>,
    pub hours_per_day: Option<f64>,
    pub days_per_week: Option<f64>,
    pub days_per_month: Option<f64>,
    pub fixed_expenses: Option<f64>,
}

pub fn cmd_profile_show(db: &Database) -> Result<()> {
    let profile = db.get_profile()?;

    println!();
    println!("👤 Income Profile");
    println!("   ─────────────────────────────");
    println!(
        "   Income:          {} / {}",
        format_money(profile.income_amount, &profile.currency),
        profile.income_period
    );
    println!("   Hours per day:   {}", profile.hours_per_day);
    println!("   Days per week:   {}", profile.work_days_per_week);
    println!("   Days per month:  {}", profile.work_days_per_month);
    println!(
        "   Fixed expenses:  {}",
        format_money(profile.fixed_expenses, &profile.currency)
    );
    println!();

    match hourly_rate(&profile) {
        Some(rate) => println!(
            "   ⏱️  Hourly rate: {} / h",
            format_money(rate, &profile.currency)
        ),
        None => {
            println!("   ⚠️  Hourly rate unavailable: income and working time must be above zero");
            println!("      Use 'savesmart profile set' to fill them in.");
        }
    }
    if let Some(monthly) = monthly_income(&profile) {
        println!(
            "   📅 Monthly income: {}",
            format_money(monthly, &profile.currency)
        );
    }

    Ok(())
}

pub fn cmd_profile_set(db: &Database, args: ProfileArgs) -> Result<()> {
    let income_period = args
        .period
        .as_deref()
        .map(str::parse::<IncomePeriod>)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let update = ProfileUpdate {
        currency: args.currency,
        income_amount: args.income,
        income_period,
        hours_per_day: args.hours_per_day,
        work_days_per_week: args.days_per_week,
        work_days_per_month: args.days_per_month,
        fixed_expenses: args.fixed_expenses,
    };

    if update.is_empty() {
        anyhow::bail!("Nothing to change. Pass at least one option, e.g. --income 30000");
    }

    let profile = db
        .update_profile(&update)
        .context("Failed to update profile")?;

    println!("✅ Profile updated");
    match hourly_rate(&profile) {
        Some(rate) => println!(
            "   Hourly rate is now {} / h",
            format_money(rate, &profile.currency)
        ),
        None => println!("   ⚠️  Hourly rate unavailable with these settings"),
    }

    Ok(())
}
