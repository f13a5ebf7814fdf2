//! Document store - the only thing the search core reads from / 文档存储
//!
//! Implementations / 实现：
//! - `SqliteStore`: persistent, lowercase shadow columns + instr() matching
//! - `MemoryStore`: Vec-backed, for embedding and tests

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::models::{Article, Category, SeedData, User};
use crate::search::Matcher;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Order documents are taken in before a lookup is truncated to its limit / 截断前的取数顺序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrder {
    /// Creation order, oldest first / 插入顺序
    #[default]
    Insertion,
    /// By createdAt, newest first / 按创建时间倒序
    NewestFirst,
}

/// Per-collection lookups used by the search aggregator / 按集合的查询接口
///
/// Each `find_*` returns documents where any designated text field contains
/// the matcher's needle (case-insensitive), at most `limit` of them.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_articles(&self, matcher: &Matcher, limit: usize) -> StoreResult<Vec<Article>>;

    async fn find_categories(&self, matcher: &Matcher, limit: usize) -> StoreResult<Vec<Category>>;

    async fn find_users(&self, matcher: &Matcher, limit: usize) -> StoreResult<Vec<User>>;

    /// Drop every document in all three collections and insert `data` / 清空三个集合并写入数据
    async fn replace_all(&self, data: SeedData) -> StoreResult<SeedData>;
}

/// Key/value settings storage / 键值设置存储
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get_setting(&self, key: &str) -> StoreResult<Option<String>>;

    async fn put_setting(&self, key: &str, value: &str) -> StoreResult<()>;
}
