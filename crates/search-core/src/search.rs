// search-core/src/search.rs
//! 关键词搜索
//!
//! 规则很简单：查询串（忽略大小写）是关键词、或当前语言标题/摘要/正文的子串，
//! 条目就命中。不分词、不打分，结果保持语料库原有顺序。
//! 语料库只有几十条，逐条扫描即可，不需要索引。

use std::ops::Range;

use crate::highlight::{find_matches, fold_case, wrap_matches};
use crate::models::{ContentItem, Field, Language};

/// 命中条目及其匹配位置
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub item: &'a ContentItem,
    pub language: Language,
    pub title: Vec<Range<usize>>,
    pub summary: Vec<Range<usize>>,
    pub body: Vec<Range<usize>>,
    /// 包含查询串的关键词
    pub matched_keywords: Vec<&'a str>,
}

impl<'a> SearchHit<'a> {
    pub fn ranges(&self, field: Field) -> &[Range<usize>] {
        match field {
            Field::Title => &self.title,
            Field::Summary => &self.summary,
            Field::Body => &self.body,
        }
    }

    /// 当前语言下的字段文本，匹配部分用 `open` / `close` 包裹
    pub fn highlighted(&self, field: Field, open: &str, close: &str) -> String {
        wrap_matches(self.item.text(field, self.language), self.ranges(field), open, close)
    }
}

/// 规范化查询：转小写，首尾空白保留并参与匹配；只含空白的查询返回 `None`
fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(fold_case(query))
    }
}

/// 条目是否命中已规范化（小写）的查询串
pub fn item_matches(item: &ContentItem, needle: &str, language: Language) -> bool {
    item.keywords
        .iter()
        .any(|keyword| fold_case(keyword).contains(needle))
        || Field::ALL
            .iter()
            .any(|field| fold_case(item.text(*field, language)).contains(needle))
}

/// 在语料库中搜索，返回命中的条目（保持原顺序）
///
/// 空查询或只含空白的查询返回空结果，而不是全部条目。
pub fn search<'a>(query: &str, language: Language, corpus: &'a [ContentItem]) -> Vec<&'a ContentItem> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    corpus
        .iter()
        .filter(|item| item_matches(item, &needle, language))
        .collect()
}

/// 同 [`search`]，额外给出每个字段中的匹配位置
pub fn search_with_highlights<'a>(
    query: &str,
    language: Language,
    corpus: &'a [ContentItem],
) -> Vec<SearchHit<'a>> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    search(query, language, corpus)
        .into_iter()
        .map(|item| SearchHit {
            item,
            language,
            title: find_matches(item.title.get(language), query),
            summary: find_matches(item.summary.get(language), query),
            body: find_matches(item.body.get(language), query),
            matched_keywords: item
                .keywords
                .iter()
                .filter(|keyword| fold_case(keyword).contains(&needle))
                .map(String::as_str)
                .collect(),
        })
        .collect()
}
