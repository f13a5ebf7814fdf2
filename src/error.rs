//! Error types / 错误类型

use std::time::Duration;
use thiserror::Error;

/// Document store failure / 文档存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Search aggregation failure / 搜索聚合错误
#[derive(Debug, Error)]
pub enum SearchError {
    /// Any collection lookup failed; no partial results are returned / 任一集合查询失败
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("search timed out after {0:?}")]
    Timeout(Duration),

    /// Malformed query parameters at the transport boundary / 请求参数格式错误
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
