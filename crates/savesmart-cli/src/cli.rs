//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SaveSmart - See what a purchase costs in hours of your life
#[derive(Parser)]
#[command(name = "savesmart")]
#[command(about = "Self-hosted purchase planner that prices goals in working time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "savesmart.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set SAVESMART_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Show database status (encryption, size, etc.)
    Status,

    /// Show dashboard summary
    Dashboard,

    /// Show or change the income profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },

    /// Price something in working time without saving it
    Quote {
        /// Price of the item
        price: f64,

        /// How necessary it is, 1 (nice to have) to 5 (essential)
        #[arg(short, long, default_value = "3")]
        necessity: i64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage goals (list, add, show, achieve, snooze, plan, delete)
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// Record money put aside for a goal
    Save {
        /// Goal ID
        goal_id: i64,

        /// Amount saved
        amount: f64,

        /// Optional note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// List saving records
    Savings {
        /// Only show records for this goal
        #[arg(short, long)]
        goal: Option<i64>,
    },

    /// Manage reminders (due, list, snooze, disable, done)
    Reminders {
        #[command(subcommand)]
        action: Option<RemindersAction>,
    },

    /// Export goals or saving records to CSV
    Export {
        #[command(subcommand)]
        export_type: ExportType,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the income profile and derived hourly rate
    Show,

    /// Change one or more profile fields
    Set {
        /// Currency code (e.g., THB, USD)
        #[arg(long)]
        currency: Option<String>,

        /// Income per period
        #[arg(long)]
        income: Option<f64>,

        /// Income period: daily, weekly, monthly, yearly
        #[arg(long)]
        period: Option<String>,

        /// Working hours per day
        #[arg(long)]
        hours_per_day: Option<f64>,

        /// Working days per week
        #[arg(long)]
        days_per_week: Option<f64>,

        /// Working days per month
        #[arg(long)]
        days_per_month: Option<f64>,

        /// Fixed monthly expenses
        #[arg(long)]
        fixed_expenses: Option<f64>,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// List goals with their working-time cost
    List {
        /// Status filter: active, snoozed, achieved, deleted (default: all but deleted)
        #[arg(short, long)]
        status: Option<String>,

        /// Sort order: newest, priority, hours, price, percent
        #[arg(long, default_value = "newest")]
        sort: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a goal
    Add {
        /// What you want to buy
        title: String,

        /// Price of the item
        price: f64,

        /// Emoji shown next to the goal
        #[arg(short, long)]
        emoji: Option<String>,

        /// Path to an image of the item (used when no emoji is given)
        #[arg(long)]
        image: Option<String>,

        /// Category (defaults to "Other")
        #[arg(short, long)]
        category: Option<String>,

        /// How necessary it is, 1 (nice to have) to 5 (essential)
        #[arg(short, long, default_value = "3")]
        necessity: i64,

        /// Date you would like to buy it by (YYYY-MM-DD)
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Show a goal with its full evaluation
    Show {
        /// Goal ID
        id: i64,
    },

    /// Mark a goal as achieved
    Achieve {
        /// Goal ID
        id: i64,
    },

    /// Move a goal back to active
    Activate {
        /// Goal ID
        id: i64,
    },

    /// Delete a goal (kept in the database, hidden from lists)
    Delete {
        /// Goal ID
        id: i64,
    },

    /// Put a goal aside and get reminded about it later
    Snooze {
        /// Goal ID
        id: i64,

        /// Days until the reminder (default: 10)
        #[arg(short, long)]
        days: Option<i64>,
    },

    /// Start saving for a goal with weekly check-in reminders
    Plan {
        /// Goal ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum RemindersAction {
    /// Show reminders that are due now
    Due,

    /// List all reminders
    List {
        /// Only show reminders for this goal
        #[arg(short, long)]
        goal: Option<i64>,
    },

    /// Push a reminder back
    Snooze {
        /// Reminder ID
        id: i64,

        /// Days to push it back by
        #[arg(short, long, default_value = "7")]
        days: i64,
    },

    /// Turn a reminder off
    Disable {
        /// Reminder ID
        id: i64,
    },

    /// Acknowledge a reminder (recurring reminders move to their next time)
    Done {
        /// Reminder ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ExportType {
    /// Export goals to CSV
    Goals {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export saving records to CSV
    Savings {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
