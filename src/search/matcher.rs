//! Literal keyword matcher / 关键词匹配器
//!
//! The query is a plain substring, never a pattern: `.`、`*`、`%`、`_` and
//! friends match themselves. Matching is case-insensitive via per-character
//! case folding of both sides and is not anchored.

/// Fold case one character at a time, with no context rules / 逐字符折叠大小写
///
/// `str::to_lowercase` turns a word-final `Σ` into `ς` but keeps `σ` mid-word,
/// so the same letter could fold two ways. Going through uppercase per
/// character maps `Σ`, `σ` and `ς` all to `σ`.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compiled case-insensitive substring matcher / 大小写不敏感的子串匹配器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    needle: String,
}

impl Matcher {
    /// Compile a query, returns None for the empty query / 编译查询，空查询返回 None
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        Some(Self {
            needle: fold_case(query),
        })
    }

    /// Folded query, compare against `fold_case` output / 折叠后的查询串
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether `text` contains the query / 文本是否包含查询串
    pub fn is_match(&self, text: &str) -> bool {
        fold_case(text).contains(&self.needle)
    }

    /// Whether any of the fields contains the query / 任一字段包含即匹配
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        fields.iter().any(|field| self.is_match(field))
    }
}
