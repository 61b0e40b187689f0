//! Reminder handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{AppError, AppState, SuccessResponse};
use savesmart_core::models::Reminder;

/// Days a reminder is pushed back when no duration is given
const DEFAULT_REMINDER_SNOOZE_DAYS: i64 = 7;

/// Query parameters for listing reminders
#[derive(Debug, Deserialize)]
pub struct ReminderQuery {
    pub goal_id: Option<i64>,
}

/// Query parameters for snoozing a reminder
#[derive(Debug, Deserialize)]
pub struct ReminderSnoozeQuery {
    pub days: Option<i64>,
}

/// GET /api/reminders - List reminders, optionally for one goal
pub async fn list_reminders(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReminderQuery>,
) -> Result<Json<Vec<Reminder>>, AppError> {
    Ok(Json(state.db.list_reminders(params.goal_id)?))
}

/// GET /api/reminders/due - Reminders whose time has come
pub async fn list_due_reminders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Reminder>>, AppError> {
    Ok(Json(state.db.due_reminders(Utc::now())?))
}

/// POST /api/reminders/:id/snooze - Push a reminder back
pub async fn snooze_reminder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(params): Query<ReminderSnoozeQuery>,
) -> Result<Json<Reminder>, AppError> {
    let days = params.days.unwrap_or(DEFAULT_REMINDER_SNOOZE_DAYS);
    Ok(Json(state.db.snooze_reminder(id, days)?))
}

/// POST /api/reminders/:id/disable - Stop a reminder
pub async fn disable_reminder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.disable_reminder(id)?;
    Ok(Json(SuccessResponse { success: true }))
}

/// POST /api/reminders/:id/complete - Acknowledge a reminder
pub async fn complete_reminder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Reminder>, AppError> {
    Ok(Json(state.db.complete_reminder(id, Utc::now())?))
}
