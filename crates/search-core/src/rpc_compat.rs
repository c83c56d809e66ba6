// search-core/src/rpc_compat.rs
//! RPC 适配层 - 将 rpc crate 的类型转换为内部类型

use rpc::search::{SearchHit as RpcSearchHit, SearchRequest as RpcSearchRequest};

use crate::models::{Field, Language};
use crate::{SearchHit, SiteSearch};

/// 转换为 RPC 命中结果，按引擎配置的标记高亮标题和摘要
fn to_rpc_hit(engine: &SiteSearch, hit: &SearchHit<'_>) -> RpcSearchHit {
    RpcSearchHit {
        id: hit.item.id.clone(),
        category: hit.item.category.clone(),
        title: hit.item.title.get(hit.language).to_string(),
        summary: hit.item.summary.get(hit.language).to_string(),
        title_highlighted: engine.highlight(hit, Field::Title),
        summary_highlighted: engine.highlight(hit, Field::Summary),
        matched_keywords: hit.matched_keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// 从 RPC SearchRequest 执行搜索
///
/// 语言无法识别时返回错误信息；其余情况（包括空查询）都返回结果列表。
pub fn search_sync(engine: &SiteSearch, req: &RpcSearchRequest) -> Result<Vec<RpcSearchHit>, String> {
    let language = req.language.parse::<Language>().map_err(|e| {
        tracing::warn!("[搜索] 无效的语言参数: '{}'", req.language);
        format!("{}", e)
    })?;

    tracing::info!("[搜索] 查询: '{}' ({})", req.query, language);

    let hits = engine
        .search_with_highlights(&req.query, language)
        .iter()
        .map(|hit| to_rpc_hit(engine, hit))
        .collect::<Vec<_>>();

    tracing::info!("[搜索] 找到 {} 个结果", hits.len());
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;

    fn request(query: &str, language: &str) -> RpcSearchRequest {
        RpcSearchRequest {
            query: query.to_string(),
            language: language.to_string(),
        }
    }

    #[test]
    fn test_search_sync_highlights_with_engine_markers() {
        let engine = SiteSearch::builtin(SearchConfig::default()).unwrap();
        let hits = search_sync(&engine, &request("long island", "en")).unwrap();

        let lic = hits.iter().find(|hit| hit.id == "long-island-city").unwrap();
        assert_eq!(lic.title, "Long Island City");
        assert_eq!(lic.title_highlighted, "<mark>Long Island</mark> City");
        assert_eq!(lic.matched_keywords, vec!["long island city".to_string()]);
    }

    #[test]
    fn test_search_sync_rejects_unknown_language() {
        let engine = SiteSearch::builtin(SearchConfig::default()).unwrap();
        let err = search_sync(&engine, &request("condo", "fr")).unwrap_err();
        assert!(err.contains("fr"));
    }

    #[test]
    fn test_search_sync_empty_query() {
        let engine = SiteSearch::builtin(SearchConfig::default()).unwrap();
        assert!(search_sync(&engine, &request("  ", "zh")).unwrap().is_empty());
    }
}
