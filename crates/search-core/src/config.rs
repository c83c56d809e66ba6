// search-core/src/config.rs
//! 配置模块

use serde::{Deserialize, Serialize};

/// 搜索配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SearchConfig {
    /// 高亮开始标记
    pub highlight_open: String,
    /// 高亮结束标记
    pub highlight_close: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            highlight_open: "<mark>".to_string(),
            highlight_close: "</mark>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: SearchConfig = toml::from_str(r#"highlight-open = "**""#).unwrap();
        assert_eq!(config.highlight_open, "**");
        assert_eq!(config.highlight_close, "</mark>");
    }
}
