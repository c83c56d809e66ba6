use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use ::config::{create_strategy, resolve_dir, AppStrategy};
use search_core::{Language, SearchConfig};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default="default_config", deny_unknown_fields)]
pub struct Config {
    pub runtime_dir: PathBuf,
    /// 未指定 --lang 时使用的语言
    pub default_language: Language,
    /// 替换内置语料库的 TOML 文件
    pub corpus_path: Option<PathBuf>,
    pub highlight_open: String,
    pub highlight_close: String,
}


fn default_config() -> Config {
    let runtime_dir = match create_strategy() {
        Ok(strategy) => resolve_dir("RUNTIME_DIRECTORY", &strategy, |s| s.runtime_dir()),
        Err(_) => std::env::temp_dir().join(::config::constants::APP_NAME),
    };
    let search = SearchConfig::default();

    Config {
        runtime_dir,
        default_language: Language::En,
        corpus_path: None,
        highlight_open: search.highlight_open,
        highlight_close: search.highlight_close,
    }
}


impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    pub fn load() -> Result<Config> {
        let strategy = create_strategy()?;
        let config_path = strategy.config_dir().join(::config::constants::SERVER_CONFIG_FILE_NAME);

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // 配置文件不存在，创建示例配置文件
                Self::create_example_config(&config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            highlight_open: self.highlight_open.clone(),
            highlight_close: self.highlight_close.clone(),
        }
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        // 确保配置目录存在
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = r#"# realty 配置文件
#
# 此文件在首次运行时自动创建
# 配置修改后重启服务生效

# 默认显示语言: "en" 或 "zh"
default-language = "en"

# 搜索结果中匹配文本的包裹标记
highlight-open = "<mark>"
highlight-close = "</mark>"

# 可选：用自己的 TOML 文件替换内置语料库
# corpus-path = "/path/to/corpus.toml"

# 可选：自定义运行时目录（unix socket 所在位置）
# runtime-dir = "/custom/runtime/path"
"#;

        std::fs::write(config_path, example_config)?;

        tracing::info!("已创建配置文件: {:?}", config_path);
        eprintln!("已创建配置文件: {:?}", config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = Config::load_str("").unwrap();
        assert_eq!(cfg.default_language, Language::En);
        assert_eq!(cfg.corpus_path, None);
        assert_eq!(cfg.search_config(), SearchConfig::default());
    }

    #[test]
    fn kebab_case_keys() {
        let cfg = Config::load_str(r#"
default-language = "zh"
corpus-path = "/srv/realty/corpus.toml"
highlight-open = "**"
highlight-close = "**"
runtime-dir = "/run/realty"
"#).unwrap();

        assert_eq!(cfg.default_language, Language::Zh);
        assert_eq!(cfg.corpus_path, Some(PathBuf::from("/srv/realty/corpus.toml")));
        assert_eq!(cfg.runtime_dir, PathBuf::from("/run/realty"));
        assert_eq!(cfg.search_config().highlight_open, "**");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::load_str("watch-paths = []").is_err());
    }

    #[test]
    fn example_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("server.toml");

        Config::create_example_config(&path).unwrap();
        let cfg = Config::load_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cfg.default_language, Language::En);
        assert_eq!(cfg.highlight_close, "</mark>");
    }
}
