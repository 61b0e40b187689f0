//! SaveSmart CLI - Price purchases in working time
//!
//! Usage:
//!   savesmart init                  Initialize database
//!   savesmart profile set --income  Set your income
//!   savesmart quote 1200            See what something costs in hours
//!   savesmart goals add Bike 3000   Track a purchase goal
//!   savesmart serve --port 3000     Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Status => commands::cmd_status(&cli.db, cli.no_encrypt),
        Commands::Dashboard => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_dashboard(&db)
        }
        Commands::Profile { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None | Some(ProfileAction::Show) => commands::cmd_profile_show(&db),
                Some(ProfileAction::Set {
                    currency,
                    income,
                    period,
                    hours_per_day,
                    days_per_week,
                    days_per_month,
                    fixed_expenses,
                }) => commands::cmd_profile_set(
                    &db,
                    commands::ProfileArgs {
                        currency,
                        income,
                        period,
                        hours_per_day,
                        days_per_week,
                        days_per_month,
                        fixed_expenses,
                    },
                ),
            }
        }
        Commands::Quote {
            price,
            necessity,
            json,
        } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_quote(&db, price, necessity, json)
        }
        Commands::Goals { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None => commands::cmd_goals_list(&db, None, "newest", false),
                Some(GoalsAction::List { status, sort, json }) => {
                    commands::cmd_goals_list(&db, status.as_deref(), &sort, json)
                }
                Some(GoalsAction::Add {
                    title,
                    price,
                    emoji,
                    image,
                    category,
                    necessity,
                    target,
                }) => commands::cmd_goals_add(
                    &db,
                    commands::GoalArgs {
                        title,
                        price,
                        emoji,
                        image,
                        category,
                        necessity,
                        target,
                    },
                ),
                Some(GoalsAction::Show { id }) => commands::cmd_goals_show(&db, id),
                Some(GoalsAction::Achieve { id }) => commands::cmd_goals_achieve(&db, id),
                Some(GoalsAction::Activate { id }) => commands::cmd_goals_activate(&db, id),
                Some(GoalsAction::Delete { id }) => commands::cmd_goals_delete(&db, id),
                Some(GoalsAction::Snooze { id, days }) => {
                    commands::cmd_goals_snooze(&db, id, days)
                }
                Some(GoalsAction::Plan { id }) => commands::cmd_goals_plan(&db, id),
            }
        }
        Commands::Save {
            goal_id,
            amount,
            note,
        } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_save(&db, goal_id, amount, &note)
        }
        Commands::Savings { goal } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_savings_list(&db, goal)
        }
        Commands::Reminders { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None | Some(RemindersAction::Due) => commands::cmd_reminders_due(&db),
                Some(RemindersAction::List { goal }) => commands::cmd_reminders_list(&db, goal),
                Some(RemindersAction::Snooze { id, days }) => {
                    commands::cmd_reminders_snooze(&db, id, days)
                }
                Some(RemindersAction::Disable { id }) => {
                    commands::cmd_reminders_disable(&db, id)
                }
                Some(RemindersAction::Done { id }) => commands::cmd_reminders_done(&db, id),
            }
        }
        Commands::Export { export_type } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match export_type {
                ExportType::Goals { output } => commands::cmd_export_goals(&db, output),
                ExportType::Savings { output } => commands::cmd_export_savings(&db, output),
            }
        }
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            commands::cmd_serve(
                &cli.db,
                &host,
                port,
                cli.no_encrypt,
                static_dir.as_deref(),
            )
            .await
        }
    }
}
