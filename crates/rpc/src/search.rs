use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free text, matched as a case-insensitive substring
    pub query: String,
    /// "en" or "zh"
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub category: String,
    /// Title in the requested language
    pub title: String,
    /// Summary in the requested language
    pub summary: String,
    /// Title with matches wrapped in the server's highlight markers
    pub title_highlighted: String,
    /// Summary with matches wrapped in the server's highlight markers
    pub summary_highlighted: String,
    pub matched_keywords: Vec<String>,
}
