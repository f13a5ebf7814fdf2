pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod seed;
pub mod store;
pub mod theme;

pub use error::{SearchError, StoreError};
pub use search::{SearchAggregator, SearchHit, SearchOptions};
pub use store::{DocumentStore, SettingsStore};
