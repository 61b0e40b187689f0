//! Income profile and price quote handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{AppError, AppState};
use savesmart_core::models::{IncomePeriod, IncomeProfile, ProfileUpdate};
use savesmart_core::Quote;

/// Request body for updating the profile
///
/// The period is taken as a string so unknown values get a readable 400.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub currency: Option<String>,
    pub income_amount: Option<f64>,
    pub income_period: Option<String>,
    pub hours_per_day: Option<f64>,
    pub work_days_per_week: Option<f64>,
    pub work_days_per_month: Option<f64>,
    pub fixed_expenses: Option<f64>,
}

/// Request body for quoting a price
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub price: f64,
    #[serde(default = "default_necessity")]
    pub necessity: i64,
}

fn default_necessity() -> i64 {
    3
}

/// GET /api/profile - Get the income profile
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> Result<Json<IncomeProfile>, AppError> {
    Ok(Json(state.db.get_profile()?))
}

/// PUT /api/profile - Update some or all profile fields
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<IncomeProfile>, AppError> {
    let income_period = req
        .income_period
        .as_deref()
        .map(str::parse::<IncomePeriod>)
        .transpose()
        .map_err(|e| AppError::bad_request(&e))?;

    let update = ProfileUpdate {
        currency: req.currency,
        income_amount: req.income_amount,
        income_period,
        hours_per_day: req.hours_per_day,
        work_days_per_week: req.work_days_per_week,
        work_days_per_month: req.work_days_per_month,
        fixed_expenses: req.fixed_expenses,
    };

    if update.is_empty() {
        return Err(AppError::bad_request("No profile fields to update"));
    }

    Ok(Json(state.db.update_profile(&update)?))
}

/// POST /api/quote - Convert a price into working time without saving it
pub async fn quote_price(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<Quote>, AppError> {
    if !req.price.is_finite() || req.price < 0.0 {
        return Err(AppError::bad_request("Price must be a non-negative number"));
    }

    let profile = state.db.get_profile()?;
    Ok(Json(savesmart_core::quote(req.price, req.necessity, &profile)))
}
