use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{ContributionEntry, NewContributionEntry, YtdContributions},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

#[utoipa::path(get, path = "/api/ytd-contributions", responses((status = 200, body = YtdContributions)))]
pub async fn get_ytd_contributions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<YtdContributions>> {
    let ytd = state.contribution_service.get_ytd_contributions()?;
    Ok(Json(YtdContributions::from(ytd)))
}

#[utoipa::path(
    post,
    path = "/api/contributions",
    request_body = NewContributionEntry,
    responses(
        (status = 200, body = ContributionEntry),
        (status = 400, body = ErrorBody)
    )
)]
pub async fn record_contribution(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewContributionEntry>, JsonRejection>,
) -> ApiResult<Json<ContributionEntry>> {
    let Json(entry) = payload?;
    let stored = state
        .contribution_service
        .record_contribution(entry.into())
        .await?;
    Ok(Json(ContributionEntry::from(stored)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ytd-contributions", get(get_ytd_contributions))
        .route("/contributions", post(record_contribution))
}
