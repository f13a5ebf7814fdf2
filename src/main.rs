use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod db;
mod state;

use search_admin_backend::config;
use state::AppState;

/// Resolves on Ctrl-C / 等待 Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "search_admin_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / 加载配置
    let mut app_config = config::load_config().map_err(anyhow::Error::msg)?;
    app_config.apply_env();
    tracing::info!("Server will listen on {}:{}", app_config.server.host, app_config.server.port);

    let stores = db::open_stores(&app_config).await?;

    let state = Arc::new(AppState::new(
        stores.documents.clone(),
        stores.settings.clone(),
        app_config.search.options(),
    ));
    tracing::info!(
        "Search limit {} per collection, order {:?}",
        app_config.search.per_collection_limit,
        app_config.search.order
    );

    let app = api::router(state);

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server is running at http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    stores.close().await;

    Ok(())
}
