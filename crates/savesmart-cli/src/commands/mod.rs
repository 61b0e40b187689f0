//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Init and shared utilities (open_db)
//! - `export` - CSV export of goals and saving records
//! - `goals` - Goal commands and one-off price quotes
//! - `profile` - Income profile commands
//! - `reminders` - Reminder commands (due, list, snooze, disable, done)
//! - `savings` - Saving record commands
//! - `serve` - Web server command
//! - `status` - Status/dashboard commands

pub mod core;
pub mod export;
pub mod goals;
pub mod profile;
pub mod reminders;
pub mod savings;
pub mod serve;
pub mod status;

// Re-export command functions for main.rs
pub use core::*;
pub use export::*;
pub use goals::*;
pub use profile::*;
pub use reminders::*;
pub use savings::*;
pub use serve::*;
pub use status::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an amount with its currency code
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

/// Format an optional figure, showing a dash when it could not be computed
pub fn format_hours(hours: Option<f64>) -> String {
    match hours {
        Some(h) => format!("{:.1} h", h),
        None => "—".to_string(),
    }
}
