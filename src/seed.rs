//! Demo data for the admin frontend / 测试数据

use uuid::Uuid;

use crate::models::{now_timestamp, Article, Category, SeedData, User};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Two articles, two categories and two users with fresh ids / 生成测试数据
pub fn demo_data() -> SeedData {
    let now = now_timestamp();

    let article = |title: &str, content: &str, category: &str| Article {
        id: new_id(),
        title: title.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        created_at: now.clone(),
    };
    let category = |name: &str, description: &str| Category {
        id: new_id(),
        name: name.to_string(),
        description: description.to_string(),
        created_at: now.clone(),
    };
    let user = |username: &str, email: &str| User {
        id: new_id(),
        username: username.to_string(),
        email: email.to_string(),
        created_at: now.clone(),
    };

    SeedData {
        articles: vec![
            article("Vue3 入门教程", "Vue3 是一个流行的前端框架，本文介绍其基本用法...", "前端"),
            article(
                "Node.js 后端开发",
                "Node.js 是一个基于 Chrome V8 引擎的 JavaScript 运行环境...",
                "后端",
            ),
        ],
        categories: vec![
            category("前端开发", "包含 HTML、CSS、JavaScript 等相关技术"),
            category("后端开发", "包含 Node.js、Python、Java 等服务器端技术"),
        ],
        users: vec![
            user("admin", "admin@example.com"),
            user("developer", "dev@example.com"),
        ],
    }
}
