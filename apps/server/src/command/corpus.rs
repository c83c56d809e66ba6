use super::{Command, build_engine};
use crate::config::Config;
use crate::error::Result;
use crate::i18n::Label;
use search_core::{Corpus, Language};
use std::fmt::Write;

pub struct CorpusCommand {
    config: Config,
    lang: Option<Language>,
}

impl CorpusCommand {
    pub fn new(cfg: Config, lang: Option<Language>) -> Self {
        Self { config: cfg, lang }
    }
}

pub fn render_corpus(corpus: &Corpus, lang: Language) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", Label::CorpusHeading.text(lang), corpus.len());
    for item in corpus {
        let _ = writeln!(out, "  {:<24} {:<14} {}", item.id, item.category, item.title.get(lang));
    }
    out
}

#[async_trait::async_trait]
impl Command for CorpusCommand {
    async fn execute(&self) -> Result<()> {
        let engine = build_engine(&self.config)?;
        let lang = self.lang.unwrap_or(self.config.default_language);
        print!("{}", render_corpus(engine.corpus(), lang));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_items_in_order() {
        let corpus = Corpus::builtin().unwrap();
        let out = render_corpus(&corpus, Language::Zh);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), corpus.len() + 1);
        assert!(lines[0].starts_with("站点内容"));
        assert!(lines[1].contains("buyer-representation"));
        assert!(lines[1].ends_with("买方代理服务"));
    }
}
