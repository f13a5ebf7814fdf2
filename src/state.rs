use std::sync::Arc;

use search_admin_backend::search::{SearchAggregator, SearchOptions};
use search_admin_backend::store::{DocumentStore, SettingsStore};

pub struct AppState {
    /// Document collections / 文档集合
    pub store: Arc<dyn DocumentStore>,
    /// Key/value settings (theme etc.) / 键值设置
    pub settings: Arc<dyn SettingsStore>,
    pub search: SearchAggregator,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        settings: Arc<dyn SettingsStore>,
        options: SearchOptions,
    ) -> Self {
        let search = SearchAggregator::new(store.clone()).with_options(options);
        Self {
            store,
            settings,
            search,
        }
    }
}
