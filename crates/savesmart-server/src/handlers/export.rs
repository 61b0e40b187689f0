//! CSV export handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Response, StatusCode},
};
use tracing::info;

use crate::{AppError, AppState};

fn csv_response(csv: String, filename: &str) -> Result<Response<Body>, AppError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(csv))
        .map_err(|e| AppError::internal(&e.to_string()))
}

/// GET /api/export/goals - Export goals to CSV
pub async fn export_goals(
    State(state): State<Arc<AppState>>,
) -> Result<Response<Body>, AppError> {
    let csv = state.db.export_goals_csv()?;
    info!("Exported {} goals to CSV", csv.lines().count().saturating_sub(1));
    csv_response(csv, "goals.csv")
}

/// GET /api/export/savings - Export saving records to CSV
pub async fn export_savings(
    State(state): State<Arc<AppState>>,
) -> Result<Response<Body>, AppError> {
    let csv = state.db.export_savings_csv()?;
    info!("Exported {} savings to CSV", csv.lines().count().saturating_sub(1));
    csv_response(csv, "savings.csv")
}
