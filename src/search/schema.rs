//! Search result schema / 搜索结果结构

use serde::{Deserialize, Serialize};

use crate::models::{Article, Category, User};

/// One search hit, tagged by the collection it came from / 搜索结果（按来源集合打标签）
///
/// Serialized as `{ "type": "article", "id": ..., "title": ..., "content": ... }`
/// and the like; fields outside the projection are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchHit {
    Article {
        id: String,
        title: String,
        content: String,
    },
    Category {
        id: String,
        name: String,
        description: String,
    },
    User {
        id: String,
        username: String,
        email: String,
    },
}

impl SearchHit {
    /// Discriminant as it appears on the wire / 类型标签
    pub fn kind(&self) -> &'static str {
        match self {
            SearchHit::Article { .. } => "article",
            SearchHit::Category { .. } => "category",
            SearchHit::User { .. } => "user",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SearchHit::Article { id, .. } | SearchHit::Category { id, .. } | SearchHit::User { id, .. } => id,
        }
    }
}

impl From<Article> for SearchHit {
    fn from(article: Article) -> Self {
        SearchHit::Article {
            id: article.id,
            title: article.title,
            content: article.content,
        }
    }
}

impl From<Category> for SearchHit {
    fn from(category: Category) -> Self {
        SearchHit::Category {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

impl From<User> for SearchHit {
    fn from(user: User) -> Self {
        SearchHit::User {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_article_projection() {
        let article = Article {
            id: "a1".to_string(),
            title: "Vue3 入门教程".to_string(),
            content: "Vue3 是一个流行的前端框架".to_string(),
            category: "前端".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let hit = SearchHit::from(article);
        assert_eq!(hit.kind(), "article");
        assert_eq!(
            serde_json::to_value(&hit).unwrap(),
            json!({
                "type": "article",
                "id": "a1",
                "title": "Vue3 入门教程",
                "content": "Vue3 是一个流行的前端框架",
            })
        );
    }

    #[test]
    fn test_user_projection_drops_timestamp() {
        let user = User {
            id: "u1".to_string(),
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(SearchHit::from(user)).unwrap();
        assert_eq!(value["type"], "user");
        assert_eq!(value["username"], "admin");
        assert!(value.get("createdAt").is_none());
    }

    #[test]
    fn test_category_tag() {
        let value = json!({"type": "category", "id": "c1", "name": "前端开发", "description": ""});
        let hit: SearchHit = serde_json::from_value(value).unwrap();
        assert_eq!(hit.kind(), "category");
        assert_eq!(hit.id(), "c1");
    }
}
