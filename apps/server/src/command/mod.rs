pub mod calc;
pub mod corpus;
pub mod search;
pub mod serve;

use crate::config::Config;
use crate::error::{Result, WrapErr};
use search_core::{Corpus, SiteSearch};

pub use calc::RoiCommand;
pub use corpus::CorpusCommand;
pub use search::SearchCommand;
pub use serve::ServeCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// 按配置加载语料库并创建搜索引擎
pub fn build_engine(config: &Config) -> Result<SiteSearch> {
    let corpus = match &config.corpus_path {
        Some(path) => Corpus::load_from_file(path)
            .wrap_err_with(|| format!("Load corpus {:?} error", path))?,
        None => Corpus::builtin().wrap_err("Load built-in corpus error")?,
    };
    Ok(SiteSearch::new(corpus, config.search_config()))
}
