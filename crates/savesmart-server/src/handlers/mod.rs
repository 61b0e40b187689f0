//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod dashboard;
pub mod export;
pub mod goals;
pub mod profile;
pub mod reminders;
pub mod savings;

// Re-export all handlers for use in router
pub use dashboard::*;
pub use export::*;
pub use goals::*;
pub use profile::*;
pub use reminders::*;
pub use savings::*;
