// search-core/src/lib.rs
//! 站点搜索核心库
//!
//! 提供面向中英双语内容的关键词搜索：
//! - 内置只读语料库（构建时嵌入）
//! - 忽略大小写的子串匹配
//! - 匹配位置高亮

pub mod config;
pub mod corpus;
pub mod highlight;
pub mod models;
pub mod search;

// RPC 适配层（可选功能）
#[cfg(feature = "rpc-compat")]
pub mod rpc_compat;

// 重导出核心类型
pub use config::SearchConfig;
pub use corpus::{Corpus, CorpusError};
pub use highlight::{find_matches, fold_case, highlight, wrap_matches};
pub use models::{ContentItem, Field, Language, LanguageError, Localized};
pub use search::{search, search_with_highlights, SearchHit};

/// 搜索引擎统一入口
#[derive(Debug, Clone)]
pub struct SiteSearch {
    corpus: Corpus,
    config: SearchConfig,
}

impl SiteSearch {
    pub fn new(corpus: Corpus, config: SearchConfig) -> Self {
        Self { corpus, config }
    }

    /// 使用内置语料库创建搜索引擎
    pub fn builtin(config: SearchConfig) -> Result<Self, CorpusError> {
        Ok(Self::new(Corpus::builtin()?, config))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 执行搜索
    pub fn search(&self, query: &str, language: Language) -> Vec<&ContentItem> {
        let results = search::search(query, language, self.corpus.items());
        tracing::debug!("[搜索] 查询: '{}' ({}), 命中 {} 个条目", query, language, results.len());
        results
    }

    /// 执行搜索并计算高亮位置
    pub fn search_with_highlights(&self, query: &str, language: Language) -> Vec<SearchHit<'_>> {
        let hits = search::search_with_highlights(query, language, self.corpus.items());
        tracing::debug!("[搜索] 查询: '{}' ({}), 命中 {} 个条目", query, language, hits.len());
        hits
    }

    /// 按配置的标记高亮命中条目的某个字段
    pub fn highlight(&self, hit: &SearchHit<'_>, field: Field) -> String {
        hit.highlighted(field, &self.config.highlight_open, &self.config.highlight_close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_uses_configured_markers() {
        let engine = SiteSearch::builtin(SearchConfig {
            highlight_open: "[".to_string(),
            highlight_close: "]".to_string(),
        })
        .unwrap();

        let hits = engine.search_with_highlights("bayside", Language::En);
        let bayside = hits.iter().find(|hit| hit.item.id == "bayside").unwrap();
        assert_eq!(engine.highlight(bayside, Field::Title), "[Bayside]");
    }

    #[test]
    fn test_engine_search_matches_free_function() {
        let engine = SiteSearch::builtin(SearchConfig::default()).unwrap();
        let via_engine = engine.search("投资", Language::Zh);
        let direct = search("投资", Language::Zh, engine.corpus().items());
        assert_eq!(via_engine, direct);
        assert!(!via_engine.is_empty());
    }
}
