use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{SavedUserSettings, UserSettings, UserSettingsUpdate},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};

#[utoipa::path(get, path = "/api/user-settings", responses((status = 200, body = UserSettings)))]
pub async fn get_user_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<UserSettings>> {
    let settings = state.settings_service.get_settings()?;
    Ok(Json(UserSettings::from(settings)))
}

#[utoipa::path(
    post,
    path = "/api/user-settings",
    request_body = UserSettingsUpdate,
    responses(
        (status = 200, body = SavedUserSettings),
        (status = 400, body = ErrorBody)
    )
)]
pub async fn update_user_settings(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UserSettingsUpdate>, JsonRejection>,
) -> ApiResult<Json<SavedUserSettings>> {
    let Json(update) = payload?;
    let saved = state.settings_service.update_settings(update.into()).await?;
    Ok(Json(SavedUserSettings::new(saved.into())))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/user-settings",
        get(get_user_settings).post(update_user_settings),
    )
}
