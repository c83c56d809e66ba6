// search-core/src/corpus.rs
//! 内容语料库
//!
//! 语料库在构建时通过 `include_str!` 嵌入，加载后只读。
//! 运维可以通过配置指定一个替换用的 TOML 文件，格式与内置文件相同。

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::models::ContentItem;

const BUILTIN_CORPUS: &str = include_str!("../data/corpus.toml");

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid corpus TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("corpus contains no items")]
    Empty,
    #[error("content item #{index} has an empty id")]
    MissingId { index: usize },
    #[error("duplicate content id '{0}'")]
    DuplicateId(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CorpusFile {
    items: Vec<ContentItem>,
}

/// 有序、只读的内容集合
#[derive(Debug, Clone)]
pub struct Corpus {
    items: Vec<ContentItem>,
}

impl Corpus {
    /// 校验后构建语料库：至少一个条目，id 非空且唯一
    pub fn new(items: Vec<ContentItem>) -> Result<Self, CorpusError> {
        if items.is_empty() {
            return Err(CorpusError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(CorpusError::MissingId { index });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CorpusError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self { items })
    }

    /// 内置语料库
    pub fn builtin() -> Result<Self, CorpusError> {
        Self::from_toml_str(BUILTIN_CORPUS)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CorpusError> {
        let file: CorpusFile = toml::from_str(content)?;
        Self::new(file.items)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_toml_str(&content)?;
        tracing::info!("已加载语料库 {:?}，共 {} 个条目", path, corpus.len());
        Ok(corpus)
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }
}

impl AsRef<[ContentItem]> for Corpus {
    fn as_ref(&self) -> &[ContentItem] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;
    use std::io::Write;

    const TWO_ITEMS: &str = r#"
[[items]]
id = "a"
category = "guides"
keywords = ["alpha"]
title = { en = "Alpha", zh = "甲" }
summary = { en = "First", zh = "第一" }
body = { en = "Body A", zh = "正文甲" }

[[items]]
id = "b"
category = "guides"
title = { en = "Beta", zh = "乙" }
summary = { en = "Second", zh = "第二" }
body = { en = "Body B", zh = "正文乙" }
"#;

    #[test]
    fn test_builtin_corpus_loads() {
        let corpus = Corpus::builtin().unwrap();
        assert!(corpus.len() >= 10);
        assert!(corpus.iter().all(|item| !item.keywords.is_empty()));
        assert!(corpus.iter().all(|item| !item.title.get(Language::Zh).is_empty()));
        assert_eq!(corpus.items()[0].id, "buyer-representation");
    }

    #[test]
    fn test_from_toml_keeps_order_and_defaults_keywords() {
        let corpus = Corpus::from_toml_str(TWO_ITEMS).unwrap();
        let ids: Vec<&str> = corpus.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(corpus.get("b").unwrap().keywords.is_empty());
        assert!(corpus.get("c").is_none());
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let err = Corpus::from_toml_str("items = []").unwrap_err();
        assert!(matches!(err, CorpusError::Empty));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let doubled = TWO_ITEMS.replace("id = \"b\"", "id = \"a\"");
        let err = Corpus::from_toml_str(&doubled).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_blank_id_rejected() {
        let blank = TWO_ITEMS.replace("id = \"b\"", "id = \"  \"");
        let err = Corpus::from_toml_str(&blank).unwrap_err();
        assert!(matches!(err, CorpusError::MissingId { index: 1 }));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = Corpus::from_toml_str("[[items]]\nid = ").unwrap_err();
        assert!(matches!(err, CorpusError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_ITEMS.as_bytes()).unwrap();

        let corpus = Corpus::load_from_file(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corpus::load_from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
    }
}
