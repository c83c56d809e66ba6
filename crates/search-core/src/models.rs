// search-core/src/models.rs
//! 数据模型定义

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 站点显示语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language '{0}', expected 'en' or 'zh'")]
pub struct LanguageError(pub String);

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Language::En),
            "zh" | "zh-cn" | "zh-hans" | "chinese" | "中文" => Ok(Language::Zh),
            _ => Err(LanguageError(s.to_string())),
        }
    }
}

/// 双语文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub zh: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Zh => &self.zh,
        }
    }
}

/// 可搜索的内容条目（构建时固定，运行时只读）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: Localized,
    pub summary: Localized,
    pub body: Localized,
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// 条目中参与匹配的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Summary,
    Body,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Summary, Field::Body];
}

impl ContentItem {
    /// 当前语言下某个字段的文本
    pub fn text(&self, field: Field, language: Language) -> &str {
        match field {
            Field::Title => self.title.get(language),
            Field::Summary => self.summary.get(language),
            Field::Body => self.body.get(language),
        }
    }
}
