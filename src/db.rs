use anyhow::Result;
use std::sync::Arc;

use search_admin_backend::config::{AppConfig, StoreBackend};
use search_admin_backend::store::{DocumentStore, MemoryStore, SettingsStore, SqliteStore};

/// Store handles opened at startup / 启动时打开的存储句柄
pub struct Stores {
    pub documents: Arc<dyn DocumentStore>,
    pub settings: Arc<dyn SettingsStore>,
    sqlite: Option<Arc<SqliteStore>>,
}

impl Stores {
    /// Close the database pool, if any / 关闭数据库连接池
    pub async fn close(&self) {
        if let Some(ref sqlite) = self.sqlite {
            sqlite.close().await;
            tracing::info!("Database connection closed");
        }
    }
}

/// Open the configured backend and create tables / 打开配置的存储后端并建表
pub async fn open_stores(config: &AppConfig) -> Result<Stores> {
    let order = config.search.order;

    match config.database.backend {
        StoreBackend::Sqlite => {
            let data_dir = config.get_data_dir();
            if !data_dir.exists() {
                std::fs::create_dir_all(&data_dir)?;
                tracing::info!("Created data directory: {:?}", data_dir);
            }

            let database_url = std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| config.get_database_url());

            let store = SqliteStore::connect(&database_url).await?.with_order(order);
            store.init().await?;
            let store = Arc::new(store);

            Ok(Stores {
                documents: store.clone(),
                settings: store.clone(),
                sqlite: Some(store),
            })
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data is lost on exit");
            let store = Arc::new(MemoryStore::new().with_order(order));
            Ok(Stores {
                documents: store.clone(),
                settings: store,
                sqlite: None,
            })
        }
    }
}
