pub mod search;
pub mod seed;
pub mod server;
pub mod settings;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(server::health_check))
        .route("/api/search", get(search::search))
        .route("/api/seed", post(seed::seed))
        .route("/api/settings/theme", get(settings::get_theme).post(settings::set_theme))
        .route("/api/settings/theme/toggle", post(settings::toggle_theme))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
