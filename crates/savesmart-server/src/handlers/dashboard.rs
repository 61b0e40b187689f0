//! Dashboard handler

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::{AppError, AppState};
use savesmart_core::models::{DashboardStats, Reminder};

#[derive(Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub stats: DashboardStats,
    /// Reminders to show on top of the page
    pub due: Vec<Reminder>,
}

/// GET /api/dashboard - Headline numbers and due reminders
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardResponse>, AppError> {
    let now = Utc::now();
    let stats = state.db.dashboard_stats(now)?;
    let due = state.db.due_reminders(now)?;

    Ok(Json(DashboardResponse { stats, due }))
}
