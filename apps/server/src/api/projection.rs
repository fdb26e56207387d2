use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, models::RetirementImpact};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use nestegg_core::projection::ProjectionParams;

/// Projects the contribution described by the query string.
#[utoipa::path(
    get,
    path = "/api/retirement-impact",
    params(
        ("currentContribution" = f64, Query, description = "Percent of salary or fixed amount per pay period"),
        ("contributionType" = String, Query, description = "percentage | fixed"),
        ("currentAge" = i32, Query, description = "Current age in whole years"),
        ("salary" = f64, Query, description = "Annual salary"),
        ("retirementAge" = i32, Query, description = "Planned retirement age in whole years"),
        ("currentSavings" = Option<f64>, Query, description = "Defaults to 0")
    ),
    responses(
        (status = 200, body = RetirementImpact),
        (status = 400, body = ErrorBody)
    )
)]
pub async fn get_retirement_impact(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ProjectionParams>, QueryRejection>,
) -> ApiResult<Json<RetirementImpact>> {
    let Query(params) = params?;
    let input = params.parse()?;
    let result = state.projection_service.project(&input);
    Ok(Json(RetirementImpact::from(result)))
}

/// Projects the stored settings against the year-to-date savings.
#[utoipa::path(
    get,
    path = "/api/retirement-impact/current",
    responses(
        (status = 200, body = RetirementImpact),
        (status = 400, body = ErrorBody)
    )
)]
pub async fn get_current_retirement_impact(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RetirementImpact>> {
    let result = state.projection_service.project_current()?;
    Ok(Json(RetirementImpact::from(result)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/retirement-impact", get(get_retirement_impact))
        .route(
            "/retirement-impact/current",
            get(get_current_retirement_impact),
        )
}
