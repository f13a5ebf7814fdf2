use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Current time as a fixed-width RFC 3339 string, so timestamps sort lexically / 当前时间（定长 RFC 3339）
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Article document / 文章
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: String,
}

/// Category document / 分类
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

/// User document / 用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

/// Text fields a keyword query is matched against / 参与关键词匹配的文本字段
pub trait Searchable {
    fn search_fields(&self) -> [&str; 2];

    fn created_at(&self) -> &str;
}

impl Searchable for Article {
    fn search_fields(&self) -> [&str; 2] {
        [&self.title, &self.content]
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.description]
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl Searchable for User {
    fn search_fields(&self) -> [&str; 2] {
        [&self.username, &self.email]
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// Full contents of the three collections, used for seeding / 三个集合的完整数据（用于填充测试数据）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    pub articles: Vec<Article>,
    pub categories: Vec<Category>,
    pub users: Vec<User>,
}
