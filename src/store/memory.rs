//! In-memory document store / 内存文档存储

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::StoreResult;
use crate::models::{Article, Category, SeedData, Searchable, User};
use crate::search::Matcher;

use super::{DocumentStore, ResultOrder, SettingsStore};

/// Vec-backed store, documents kept in insertion order / 基于 Vec 的存储，按插入顺序保存
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<SeedData>,
    settings: RwLock<HashMap<String, String>>,
    order: ResultOrder,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: SeedData) -> Self {
        Self {
            data: RwLock::new(data),
            ..Default::default()
        }
    }

    pub fn with_order(mut self, order: ResultOrder) -> Self {
        self.order = order;
        self
    }
}

/// Pick up to `limit` matching documents in the requested order / 按顺序选取匹配文档
fn select<T: Searchable + Clone>(docs: &[T], matcher: &Matcher, limit: usize, order: ResultOrder) -> Vec<T> {
    let mut matched: Vec<&T> = docs
        .iter()
        .filter(|doc| matcher.matches_any(&doc.search_fields()))
        .collect();

    if order == ResultOrder::NewestFirst {
        // Later inserts win ties / 时间相同时后插入的优先
        matched.reverse();
        matched.sort_by(|a, b| b.created_at().cmp(a.created_at()));
    }

    matched.into_iter().take(limit).cloned().collect()
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_articles(&self, matcher: &Matcher, limit: usize) -> StoreResult<Vec<Article>> {
        Ok(select(&self.data.read().articles, matcher, limit, self.order))
    }

    async fn find_categories(&self, matcher: &Matcher, limit: usize) -> StoreResult<Vec<Category>> {
        Ok(select(&self.data.read().categories, matcher, limit, self.order))
    }

    async fn find_users(&self, matcher: &Matcher, limit: usize) -> StoreResult<Vec<User>> {
        Ok(select(&self.data.read().users, matcher, limit, self.order))
    }

    async fn replace_all(&self, data: SeedData) -> StoreResult<SeedData> {
        *self.data.write() = data.clone();
        Ok(data)
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get_setting(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.settings.read().get(key).cloned())
    }

    async fn put_setting(&self, key: &str, value: &str) -> StoreResult<()> {
        self.settings.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, username: &str, created_at: &str) -> User {
        User {
            id: id.to_string(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            created_at: created_at.to_string(),
        }
    }

    fn users() -> SeedData {
        SeedData {
            users: vec![
                user("1", "dev-old", "2024-01-01T00:00:00.000Z"),
                user("2", "dev-new", "2024-03-01T00:00:00.000Z"),
                user("3", "dev-mid", "2024-02-01T00:00:00.000Z"),
                user("4", "ops", "2024-04-01T00:00:00.000Z"),
            ],
            ..Default::default()
        }
    }

    fn ids(found: &[User]) -> Vec<&str> {
        found.iter().map(|u| u.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_insertion_order() {
        let store = MemoryStore::with_data(users());
        let matcher = Matcher::new("DEV").unwrap();
        let found = store.find_users(&matcher, 2).await.unwrap();
        assert_eq!(ids(&found), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_newest_first_order() {
        let store = MemoryStore::with_data(users()).with_order(ResultOrder::NewestFirst);
        let matcher = Matcher::new("dev").unwrap();
        let found = store.find_users(&matcher, 5).await.unwrap();
        assert_eq!(ids(&found), vec!["2", "3", "1"]);
    }

    #[tokio::test]
    async fn test_matches_second_field() {
        let store = MemoryStore::with_data(users());
        let matcher = Matcher::new("ops@EXAMPLE").unwrap();
        let found = store.find_users(&matcher, 5).await.unwrap();
        assert_eq!(ids(&found), vec!["4"]);
    }

    #[tokio::test]
    async fn test_replace_all_and_settings() {
        let store = MemoryStore::with_data(users());
        store.replace_all(SeedData::default()).await.unwrap();
        let matcher = Matcher::new("dev").unwrap();
        assert!(store.find_users(&matcher, 5).await.unwrap().is_empty());

        assert_eq!(store.get_setting("theme").await.unwrap(), None);
        store.put_setting("theme", "dark").await.unwrap();
        assert_eq!(store.get_setting("theme").await.unwrap().as_deref(), Some("dark"));
    }
}
