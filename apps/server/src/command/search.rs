use super::{Command, build_engine};
use crate::config::Config;
use crate::error::{Result, error};
use crate::i18n::{Label, results_found};
use search_core::{Field, Language, SiteSearch, rpc_compat};
use std::fmt::Write;

pub struct SearchCommand {
    config: Config,
    query: String,
    lang: Option<Language>,
    json: bool,
}

impl SearchCommand {
    pub fn new(cfg: Config, query: String, lang: Option<Language>, json: bool) -> Self {
        Self { config: cfg, query, lang, json }
    }
}

/// 文本格式的搜索结果，匹配部分按引擎配置的标记包裹
pub fn render_search(engine: &SiteSearch, query: &str, lang: Language) -> String {
    let hits = engine.search_with_highlights(query, lang);

    let mut out = String::new();
    if hits.is_empty() {
        let _ = writeln!(out, "{}", Label::NoResults.text(lang));
        return out;
    }

    let _ = writeln!(out, "{}", results_found(hits.len(), lang));
    for (i, hit) in hits.iter().enumerate() {
        let _ = writeln!(out, "{}. {} [{}]", i + 1, engine.highlight(hit, Field::Title), hit.item.category);
        let _ = writeln!(out, "   {}", engine.highlight(hit, Field::Summary));
        if !hit.matched_keywords.is_empty() {
            let _ = writeln!(out, "   {}: {}", Label::Keywords.text(lang), hit.matched_keywords.join(", "));
        }
    }
    out
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let engine = build_engine(&self.config)?;
        let lang = self.lang.unwrap_or(self.config.default_language);

        if self.json {
            let req = rpc::search::SearchRequest {
                query: self.query.clone(),
                language: lang.code().to_string(),
            };
            let hits = rpc_compat::search_sync(&engine, &req).map_err(|e| error!(e))?;
            println!("{}", serde_json::to_string_pretty(&hits)?);
        } else {
            print!("{}", render_search(&engine, &self.query, lang));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_core::SearchConfig;

    fn engine() -> SiteSearch {
        SiteSearch::builtin(SearchConfig {
            highlight_open: "[".to_string(),
            highlight_close: "]".to_string(),
        }).unwrap()
    }

    #[test]
    fn renders_numbered_hits() {
        let out = render_search(&engine(), "1031", Language::En);

        assert!(out.starts_with("1 result\n"));
        assert!(out.contains("1. [1031] Exchanges [investment]\n"));
        assert!(out.contains("   Keywords: 1031\n"));
    }

    #[test]
    fn renders_no_results_in_chinese() {
        let out = render_search(&engine(), "   ", Language::Zh);
        assert_eq!(out, "没有找到相关内容\n");
    }
}
