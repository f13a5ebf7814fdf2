//! Search module - keyword search across articles, categories and users / 搜索模块
//!
//! Architecture principles / 架构原则：
//! - Search only reads through the `DocumentStore` trait, it owns no connection
//! - Call direction: API → Search → Store (unidirectional) / 调用方向
//!
//! Matching / 匹配规则：
//! - Literal substring, case-insensitive, any designated field
//! - Works for Chinese, English and other scripts alike

pub mod aggregator;
pub mod matcher;
pub mod schema;

pub use aggregator::{SearchAggregator, SearchOptions, DEFAULT_LIMIT};
pub use matcher::{fold_case, Matcher};
pub use schema::SearchHit;
