//! Saving record handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState};
use savesmart_core::models::SavingRecord;

/// Request body for recording a deposit
#[derive(Debug, Deserialize)]
pub struct AddSavingRequest {
    pub amount: f64,
    #[serde(default)]
    pub note: String,
}

/// GET /api/goals/:id/savings - List deposits toward a goal
pub async fn list_goal_savings(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<SavingRecord>>, AppError> {
    if state.db.get_goal(id)?.is_none() {
        return Err(AppError::not_found("Goal not found"));
    }
    Ok(Json(state.db.list_savings(Some(id))?))
}

/// POST /api/goals/:id/savings - Record a deposit
pub async fn add_saving(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<AddSavingRequest>,
) -> Result<Json<SavingRecord>, AppError> {
    let saving_id = state.db.add_saving(id, req.amount, &req.note)?;

    let record = state
        .db
        .list_savings(Some(id))?
        .into_iter()
        .find(|r| r.id == saving_id)
        .ok_or_else(|| AppError::internal("Saving not found after creation"))?;

    Ok(Json(record))
}
