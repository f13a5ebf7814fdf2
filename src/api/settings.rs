use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use search_admin_backend::theme::{ThemeMode, THEME_SETTING_KEY};

use crate::state::AppState;

fn server_error(e: impl std::fmt::Display) -> (StatusCode, Json<Value>) {
    tracing::error!("Theme setting error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "服务器错误"})),
    )
}

async fn current_theme(state: &AppState) -> Result<ThemeMode, (StatusCode, Json<Value>)> {
    let saved = state
        .settings
        .get_setting(THEME_SETTING_KEY)
        .await
        .map_err(server_error)?;
    Ok(ThemeMode::resolve(saved.as_deref(), false))
}

async fn store_theme(state: &AppState, theme: ThemeMode) -> Result<(), (StatusCode, Json<Value>)> {
    state
        .settings
        .put_setting(THEME_SETTING_KEY, theme.as_str())
        .await
        .map_err(server_error)?;
    tracing::info!("Theme saved: {}", theme.as_str());
    Ok(())
}

/// GET /api/settings/theme - 获取主题
pub async fn get_theme(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let theme = current_theme(&state).await?;
    Ok(Json(json!({ "theme": theme })))
}

/// POST /api/settings/theme - 设置主题，接受 "dark" 或 {"theme": "dark"}
pub async fn set_theme(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let theme = ThemeMode::from_value(&body).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "无效的主题，可选值: light, dark"})),
        )
    })?;

    store_theme(&state, theme).await?;
    Ok(Json(json!({ "theme": theme })))
}

/// POST /api/settings/theme/toggle - 切换主题
pub async fn toggle_theme(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let theme = current_theme(&state).await?.toggle();
    store_theme(&state, theme).await?;
    Ok(Json(json!({ "theme": theme })))
}
