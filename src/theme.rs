//! Theme preference / 主题偏好
//!
//! Persisted values come from loosely typed storage: a bare `dark`, a JSON
//! string `"dark"` or an object `{"theme":"dark"}` all show up in practice.
//! Everything is normalised to the closed set {light, dark}.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Settings key the theme is stored under / 主题的设置键
pub const THEME_SETTING_KEY: &str = "big-event-theme";

/// Theme mode / 主题模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Decode a JSON value: `"dark"` or `{"theme": "dark"}` / 解析 JSON 值
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Self::from_name(name),
            Value::Object(map) => map.get("theme").and_then(Self::from_value),
            _ => None,
        }
    }

    /// Decode a raw persisted string / 解析持久化的原始字符串
    pub fn from_persisted(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_value(&value),
            // 不是 JSON，按裸字符串处理
            Err(_) => Self::from_name(raw.trim()),
        }
    }

    /// Saved valid value wins, otherwise follow the system preference / 优先使用已保存的值
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
        saved.and_then(Self::from_persisted).unwrap_or(if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        })
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}
