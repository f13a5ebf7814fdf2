use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use search_admin_backend::error::SearchError;

use crate::state::AppState;

/// Message shown for any store failure, details stay in the log / 存储故障时返回的通用提示
pub const SEARCH_FAILED_MESSAGE: &str = "搜索失败，请稍后重试";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: Option<String>,
}

fn search_error_response(err: &SearchError) -> (StatusCode, Json<Value>) {
    match err {
        SearchError::InvalidInput(message) => {
            (StatusCode::BAD_REQUEST, Json(json!({"error": message})))
        }
        SearchError::StoreUnavailable(_) | SearchError::Timeout(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": SEARCH_FAILED_MESSAGE})),
        ),
    }
}

/// GET /api/search?q= - 跨集合关键词搜索
pub async fn search(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let Query(params) = params.map_err(|rejection| {
        let err = SearchError::InvalidInput(rejection.body_text());
        tracing::warn!("Rejected search request: {}", err);
        search_error_response(&err)
    })?;

    let query = params.q.unwrap_or_default();

    match state.search.search(&query).await {
        Ok(results) => Ok(Json(json!({ "results": results }))),
        Err(e) => {
            tracing::error!("Search error: {}", e);
            Err(search_error_response(&e))
        }
    }
}
