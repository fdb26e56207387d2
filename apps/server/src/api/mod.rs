use std::sync::Arc;

use crate::{
    config::Config,
    error::{ApiResult, ErrorBody},
    main_lib::AppState,
    models::{
        ContributionEntry, NewContributionEntry, RetirementImpact, SavedUserSettings,
        UserSettings, UserSettingsUpdate, YtdContributions,
    },
};
use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub mod contributions;
pub mod projection;
pub mod settings;

#[utoipa::path(get, path = "/api/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    state.settings_service.get_settings()?;
    Ok("ok")
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        readyz,
        settings::get_user_settings,
        settings::update_user_settings,
        contributions::get_ytd_contributions,
        contributions::record_contribution,
        projection::get_retirement_impact,
        projection::get_current_retirement_impact
    ),
    components(schemas(
        UserSettings,
        UserSettingsUpdate,
        SavedUserSettings,
        ContributionEntry,
        NewContributionEntry,
        YtdContributions,
        RetirementImpact,
        ErrorBody
    )),
    tags((name = "nestegg"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/openapi.json", get(openapi_json))
        .merge(settings::router())
        .merge(contributions::router())
        .merge(projection::router());

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
