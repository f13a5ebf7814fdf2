//! SQLite document store / SQLite 文档存储
//!
//! 存储方案：
//! - articles / categories / users 三张表，按 rowid 保存插入顺序
//! - 每个参与搜索的字段都有一个小写影子列（*_lower），写入时由 fold_case 计算
//! - 查询用 instr() 做字面子串匹配，不经过 LIKE 通配符
//! - site_settings 键值表保存主题等设置

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;

use crate::error::StoreResult;
use crate::models::{Article, Category, SeedData, User};
use crate::search::{fold_case, Matcher};

use super::{DocumentStore, ResultOrder, SettingsStore};

const ARTICLE_COLUMNS: &str = "id, title, content, category, created_at";
const CATEGORY_COLUMNS: &str = "id, name, description, created_at";
const USER_COLUMNS: &str = "id, username, email, created_at";

/// SQLite-backed store / 基于 SQLite 的存储
pub struct SqliteStore {
    db: Pool<Sqlite>,
    order: ResultOrder,
}

impl SqliteStore {
    /// Open (creating if needed) a database file in WAL mode / 打开数据库（WAL 模式）
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .synchronous(SqliteSynchronous::Normal);

        let filename = options.clone().get_filename();
        if let Some(parent) = filename.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;

        tracing::info!("Search database connected: {} (WAL mode)", database_url);
        Ok(Self::new(db))
    }

    /// Private in-memory database, one connection kept for the pool's lifetime / 内存数据库
    pub async fn connect_in_memory() -> StoreResult<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self::new(db))
    }

    /// Use an existing connection pool / 使用现有连接池
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self {
            db,
            order: ResultOrder::default(),
        }
    }

    pub fn with_order(mut self, order: ResultOrder) -> Self {
        self.order = order;
        self
    }

    /// Create tables if missing, never drops data / 初始化表结构（只在不存在时创建）
    pub async fn init(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS articles (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                category TEXT NOT NULL,
                title_lower TEXT NOT NULL,
                content_lower TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                name_lower TEXT NOT NULL,
                description_lower TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                email TEXT NOT NULL,
                username_lower TEXT NOT NULL,
                email_lower TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        for table in ["articles", "categories", "users"] {
            sqlx::query(&format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_created ON {table}(created_at)"
            ))
            .execute(&self.db)
            .await?;
        }

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS site_settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// 关闭数据库连接池 / Close database connection pool
    pub async fn close(&self) {
        self.db.close().await;
    }

    fn order_clause(&self) -> &'static str {
        match self.order {
            ResultOrder::Insertion => "rowid ASC",
            ResultOrder::NewestFirst => "created_at DESC, rowid DESC",
        }
    }

    /// SELECT for up to `limit` rows whose shadow columns contain the needle / 字面子串查询语句
    fn select_sql(&self, table: &str, columns: &str, fields: [&str; 2]) -> String {
        format!(
            "SELECT {columns} FROM {table} WHERE instr({f0}_lower, ?) > 0 OR instr({f1}_lower, ?) > 0 ORDER BY {order} LIMIT ?",
            f0 = fields[0],
            f1 = fields[1],
            order = self.order_clause(),
        )
    }
}

fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn find_articles(&self, matcher: &Matcher, limit: usize) -> StoreResult<Vec<Article>> {
        let sql = self.select_sql("articles", ARTICLE_COLUMNS, ["title", "content"]);
        let rows = sqlx::query_as::<_, Article>(&sql)
            .bind(matcher.needle())
            .bind(matcher.needle())
            .bind(sql_limit(limit))
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_categories(&self, matcher: &Matcher, limit: usize) -> StoreResult<Vec<Category>> {
        let sql = self.select_sql("categories", CATEGORY_COLUMNS, ["name", "description"]);
        let rows = sqlx::query_as::<_, Category>(&sql)
            .bind(matcher.needle())
            .bind(matcher.needle())
            .bind(sql_limit(limit))
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_users(&self, matcher: &Matcher, limit: usize) -> StoreResult<Vec<User>> {
        let sql = self.select_sql("users", USER_COLUMNS, ["username", "email"]);
        let rows = sqlx::query_as::<_, User>(&sql)
            .bind(matcher.needle())
            .bind(matcher.needle())
            .bind(sql_limit(limit))
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn replace_all(&self, data: SeedData) -> StoreResult<SeedData> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM articles").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM categories").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM users").execute(&mut *tx).await?;

        for article in &data.articles {
            sqlx::query(
                "INSERT INTO articles (id, title, content, category, title_lower, content_lower, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)"
            )
            .bind(&article.id)
            .bind(&article.title)
            .bind(&article.content)
            .bind(&article.category)
            .bind(fold_case(&article.title))
            .bind(fold_case(&article.content))
            .bind(&article.created_at)
            .execute(&mut *tx)
            .await?;
        }

        for category in &data.categories {
            sqlx::query(
                "INSERT INTO categories (id, name, description, name_lower, description_lower, created_at) VALUES (?, ?, ?, ?, ?, ?)"
            )
            .bind(&category.id)
            .bind(&category.name)
            .bind(&category.description)
            .bind(fold_case(&category.name))
            .bind(fold_case(&category.description))
            .bind(&category.created_at)
            .execute(&mut *tx)
            .await?;
        }

        for user in &data.users {
            sqlx::query(
                "INSERT INTO users (id, username, email, username_lower, email_lower, created_at) VALUES (?, ?, ?, ?, ?, ?)"
            )
            .bind(&user.id)
            .bind(&user.username)
            .bind(&user.email)
            .bind(fold_case(&user.username))
            .bind(fold_case(&user.email))
            .bind(&user.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            "Collections replaced: {} articles, {} categories, {} users",
            data.articles.len(),
            data.categories.len(),
            data.users.len()
        );
        Ok(data)
    }
}

#[async_trait]
impl SettingsStore for SqliteStore {
    async fn get_setting(&self, key: &str) -> StoreResult<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM site_settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.db)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    async fn put_setting(&self, key: &str, value: &str) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO site_settings (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.db)
        .await?;
        Ok(())
    }
}
