//! Search aggregator - fans a keyword query out over the three collections / 搜索聚合器
//!
//! - Empty query short-circuits to an empty result, the store is not touched
//! - Articles, categories and users are looked up concurrently
//! - Any failed lookup fails the whole search, no partial results
//! - Output order is fixed: articles, then categories, then users

use std::sync::Arc;
use std::time::Duration;

use crate::error::SearchError;
use crate::store::DocumentStore;

use super::matcher::Matcher;
use super::schema::SearchHit;

/// Default max hits per collection / 每个集合默认最多结果数
pub const DEFAULT_LIMIT: usize = 5;

/// Search options / 搜索选项
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Max hits contributed by each collection / 每个集合最多返回的结果数
    pub limit: usize,
    /// Deadline for all three lookups together / 三个查询的整体超时
    pub timeout: Option<Duration>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            timeout: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Cross-collection keyword search / 跨集合关键词搜索
pub struct SearchAggregator {
    store: Arc<dyn DocumentStore>,
    options: SearchOptions,
}

impl SearchAggregator {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search all collections for `query` / 在所有集合中搜索
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let Some(matcher) = Matcher::new(query) else {
            return Ok(Vec::new());
        };
        let limit = self.options.limit;

        let lookups = async {
            tokio::try_join!(
                self.store.find_articles(&matcher, limit),
                self.store.find_categories(&matcher, limit),
                self.store.find_users(&matcher, limit),
            )
        };

        // try_join drops the remaining lookups on the first error / 首个错误即取消其余查询
        let (articles, categories, users) = match self.options.timeout {
            Some(deadline) => tokio::time::timeout(deadline, lookups)
                .await
                .map_err(|_| SearchError::Timeout(deadline))??,
            None => lookups.await?,
        };

        tracing::debug!(
            "Search {:?}: {} articles, {} categories, {} users",
            query,
            articles.len().min(limit),
            categories.len().min(limit),
            users.len().min(limit)
        );

        let mut results = Vec::with_capacity(limit * 3);
        results.extend(articles.into_iter().take(limit).map(SearchHit::from));
        results.extend(categories.into_iter().take(limit).map(SearchHit::from));
        results.extend(users.into_iter().take(limit).map(SearchHit::from));
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, StoreResult};
    use crate::models::{now_timestamp, Article, Category, SeedData, User};
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn article(title: &str, content: &str) -> Article {
        Article {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: "前端".to_string(),
            created_at: now_timestamp(),
        }
    }

    fn category(name: &str, description: &str) -> Category {
        Category {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            created_at: now_timestamp(),
        }
    }

    fn user(username: &str, email: &str) -> User {
        User {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            created_at: now_timestamp(),
        }
    }

    /// Fake store: counts calls, can fail or stall a collection / 测试用存储
    #[derive(Default)]
    struct FakeStore {
        inner: MemoryStore,
        calls: AtomicUsize,
        fail_categories: bool,
        article_delay: Option<Duration>,
        user_delay: Option<Duration>,
    }

    impl FakeStore {
        fn with_data(data: SeedData) -> Self {
            Self {
                inner: MemoryStore::with_data(data),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl DocumentStore for FakeStore {
        async fn find_articles(&self, matcher: &Matcher, limit: usize) -> StoreResult<Vec<Article>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.article_delay {
                tokio::time::sleep(delay).await;
            }
            self.inner.find_articles(matcher, limit).await
        }

        async fn find_categories(&self, matcher: &Matcher, limit: usize) -> StoreResult<Vec<Category>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_categories {
                return Err(StoreError::Unavailable("connection refused".to_string()));
            }
            self.inner.find_categories(matcher, limit).await
        }

        async fn find_users(&self, matcher: &Matcher, limit: usize) -> StoreResult<Vec<User>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.user_delay {
                tokio::time::sleep(delay).await;
            }
            self.inner.find_users(matcher, limit).await
        }

        async fn replace_all(&self, data: SeedData) -> StoreResult<SeedData> {
            self.inner.replace_all(data).await
        }
    }

    fn sample_data() -> SeedData {
        SeedData {
            articles: vec![article("Vue3 入门教程", "Vue3 是一个流行的前端框架，本文介绍其基本用法...")],
            categories: vec![category("前端开发", "包含 HTML、CSS、JavaScript 等相关技术")],
            users: vec![user("admin", "admin@example.com")],
        }
    }

    #[tokio::test]
    async fn test_empty_query_skips_store() {
        let store = Arc::new(FakeStore::with_data(sample_data()));
        let aggregator = SearchAggregator::new(store.clone());

        let results = aggregator.search("").await.unwrap();
        assert!(results.is_empty());
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_sample_queries() {
        let store = Arc::new(FakeStore::with_data(sample_data()));
        let aggregator = SearchAggregator::new(store.clone());

        let results = aggregator.search("vue").await.unwrap();
        assert_eq!(results.len(), 1);
        match &results[0] {
            SearchHit::Article { title, .. } => assert_eq!(title, "Vue3 入门教程"),
            other => panic!("unexpected hit: {:?}", other),
        }
        assert_eq!(store.calls.load(Ordering::SeqCst), 3);

        let results = aggregator.search("开发").await.unwrap();
        assert_eq!(results.len(), 1);
        match &results[0] {
            SearchHit::Category { name, .. } => assert_eq!(name, "前端开发"),
            other => panic!("unexpected hit: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_limit_per_collection() {
        let data = SeedData {
            articles: (0..8).map(|i| article(&format!("rust 第{}篇", i), "")).collect(),
            categories: (0..2).map(|i| category(&format!("Rust {}", i), "")).collect(),
            users: (0..7).map(|i| user(&format!("rustacean{}", i), "r@example.com")).collect(),
        };
        let aggregator = SearchAggregator::new(Arc::new(MemoryStore::with_data(data)));

        let results = aggregator.search("RUST").await.unwrap();
        let count = |kind: &str| results.iter().filter(|h| h.kind() == kind).count();
        assert_eq!(count("article"), 5);
        assert_eq!(count("category"), 2);
        assert_eq!(count("user"), 5);
        assert_eq!(results.len(), 12);

        let aggregator = aggregator.with_options(SearchOptions::new().with_limit(2));
        let results = aggregator.search("rust").await.unwrap();
        assert_eq!(results.len(), 6);
    }

    #[tokio::test]
    async fn test_order_independent_of_completion() {
        let data = SeedData {
            articles: vec![article("shared keyword", "")],
            categories: vec![category("keyword", "")],
            users: vec![user("keyword", "k@example.com")],
        };
        let mut store = FakeStore::with_data(data);
        // 文章最后完成
        store.article_delay = Some(Duration::from_millis(50));
        let aggregator = SearchAggregator::new(Arc::new(store));

        let kinds: Vec<&str> = aggregator
            .search("keyword")
            .await
            .unwrap()
            .iter()
            .map(|h| h.kind())
            .collect();
        assert_eq!(kinds, vec!["article", "category", "user"]);
    }

    #[tokio::test]
    async fn test_any_failure_fails_search() {
        let mut store = FakeStore::with_data(sample_data());
        store.fail_categories = true;
        let aggregator = SearchAggregator::new(Arc::new(store));

        let err = aggregator.search("admin").await.unwrap_err();
        assert!(matches!(err, SearchError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_timeout_fails_search() {
        let mut store = FakeStore::with_data(sample_data());
        store.user_delay = Some(Duration::from_millis(500));
        let aggregator = SearchAggregator::new(Arc::new(store))
            .with_options(SearchOptions::new().with_timeout(Duration::from_millis(20)));

        let err = aggregator.search("admin").await.unwrap_err();
        assert!(matches!(err, SearchError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_repeat_search_is_stable() {
        let data = SeedData {
            articles: (0..4).map(|i| article(&format!("Node {}", i), "")).collect(),
            categories: vec![category("后端开发", "包含 Node.js、Python、Java 等服务器端技术")],
            users: vec![],
        };
        let aggregator = SearchAggregator::new(Arc::new(MemoryStore::with_data(data)));

        let first = aggregator.search("node").await.unwrap();
        let second = aggregator.search("node").await.unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }
}
