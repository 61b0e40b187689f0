//! Goal handlers: listing with evaluations, creation and lifecycle changes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::{AppError, AppState, SuccessResponse};
use savesmart_core::models::{GoalStatus, NewGoal, Reminder};
use savesmart_core::{evaluate_goals, evaluate_stored, GoalEvaluation, SortCriterion};

/// Query parameters for listing goals
#[derive(Debug, Deserialize)]
pub struct GoalQuery {
    /// active, snoozed, achieved, deleted or all (default: all but deleted)
    pub status: Option<String>,
    /// newest, priority, hours, price or percent (default: newest)
    pub sort: Option<String>,
}

/// Request body for changing a goal's status
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Query parameters for snoozing
#[derive(Debug, Deserialize)]
pub struct SnoozeQuery {
    pub days: Option<i64>,
}

fn parse_status_filter(status: Option<&str>) -> Result<Option<GoalStatus>, AppError> {
    match status {
        None | Some("") | Some("all") => Ok(None),
        Some(s) => s
            .parse::<GoalStatus>()
            .map(Some)
            .map_err(|e| AppError::bad_request(&e)),
    }
}

fn load_evaluation(state: &AppState, id: i64) -> Result<GoalEvaluation, AppError> {
    let goal = state
        .db
        .get_goal(id)?
        .ok_or_else(|| AppError::not_found("Goal not found"))?;
    Ok(evaluate_stored(&state.db, goal, Utc::now())?)
}

/// GET /api/goals - List goals with their evaluations
pub async fn list_goals(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GoalQuery>,
) -> Result<Json<Vec<GoalEvaluation>>, AppError> {
    let status = parse_status_filter(params.status.as_deref())?;
    let sort = match params.sort.as_deref() {
        None | Some("") => SortCriterion::default(),
        Some(s) => s
            .parse::<SortCriterion>()
            .map_err(|e| AppError::bad_request(&e))?,
    };

    let evaluations = evaluate_goals(&state.db, status, sort, Utc::now())?;
    Ok(Json(evaluations))
}

/// POST /api/goals - Create a goal
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewGoal>,
) -> Result<Json<GoalEvaluation>, AppError> {
    let id = state.db.add_goal(&req)?;
    Ok(Json(load_evaluation(&state, id)?))
}

/// GET /api/goals/:id - Get one goal with its evaluation
pub async fn get_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<GoalEvaluation>, AppError> {
    Ok(Json(load_evaluation(&state, id)?))
}

/// DELETE /api/goals/:id - Soft-delete a goal
pub async fn delete_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_goal(id)?;
    Ok(Json(SuccessResponse { success: true }))
}

/// POST /api/goals/:id/status - Mark a goal active, snoozed, achieved or deleted
pub async fn update_goal_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<GoalEvaluation>, AppError> {
    let status: GoalStatus = req
        .status
        .parse()
        .map_err(|e: String| AppError::bad_request(&e))?;

    state.db.update_goal_status(id, status)?;
    Ok(Json(load_evaluation(&state, id)?))
}

/// POST /api/goals/:id/snooze - Snooze a goal and schedule a reminder
pub async fn snooze_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(params): Query<SnoozeQuery>,
) -> Result<Json<Reminder>, AppError> {
    let reminder = state.db.snooze_goal(id, params.days, Utc::now())?;
    info!(goal_id = id, remind_at = %reminder.remind_at, "Goal snoozed");
    Ok(Json(reminder))
}

/// POST /api/goals/:id/plan - Start a savings plan with weekly check-ins
pub async fn start_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Reminder>, AppError> {
    Ok(Json(state.db.start_savings_plan(id, Utc::now())?))
}
