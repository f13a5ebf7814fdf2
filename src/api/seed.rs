use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use search_admin_backend::seed::demo_data;

use crate::state::AppState;

/// POST /api/seed - 清空三个集合并添加测试数据
pub async fn seed(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.store.replace_all(demo_data()).await {
        Ok(data) => {
            tracing::info!(
                "Seed data inserted: {} articles, {} categories, {} users",
                data.articles.len(),
                data.categories.len(),
                data.users.len()
            );
            Ok(Json(json!({
                "message": "测试数据添加成功",
                "articles": data.articles,
                "categories": data.categories,
                "users": data.users,
            })))
        }
        Err(e) => {
            tracing::error!("Seed error: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "添加测试数据失败"})),
            ))
        }
    }
}
