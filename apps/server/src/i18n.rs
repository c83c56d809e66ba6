//! Localized CLI labels
//!
//! Every label carries both translations, so a missing one is a compile error
//! rather than the key leaking into the output.

use search_core::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    RoiHeading,
    PurchasePrice,
    DownPayment,
    MonthlyRent,
    MonthlyExpenses,
    AnnualRent,
    AnnualExpenses,
    NetIncome,
    CapRate,
    CashOnCashReturn,
    NoResults,
    Keywords,
    CorpusHeading,
}

impl Label {
    #[cfg(test)]
    pub const ALL: [Label; 13] = [
        Label::RoiHeading,
        Label::PurchasePrice,
        Label::DownPayment,
        Label::MonthlyRent,
        Label::MonthlyExpenses,
        Label::AnnualRent,
        Label::AnnualExpenses,
        Label::NetIncome,
        Label::CapRate,
        Label::CashOnCashReturn,
        Label::NoResults,
        Label::Keywords,
        Label::CorpusHeading,
    ];

    pub fn text(self, language: Language) -> &'static str {
        let (en, zh) = match self {
            Label::RoiHeading => ("Investment return", "投资回报"),
            Label::PurchasePrice => ("Purchase price", "购买价格"),
            Label::DownPayment => ("Down payment", "首付"),
            Label::MonthlyRent => ("Monthly rent", "月租金"),
            Label::MonthlyExpenses => ("Monthly expenses", "月支出"),
            Label::AnnualRent => ("Annual rent", "年租金"),
            Label::AnnualExpenses => ("Annual expenses", "年支出"),
            Label::NetIncome => ("Net annual income", "年净收入"),
            Label::CapRate => ("Cap rate", "资本化率"),
            Label::CashOnCashReturn => ("Cash-on-cash return", "现金回报率"),
            Label::NoResults => ("No matching content", "没有找到相关内容"),
            Label::Keywords => ("Keywords", "关键词"),
            Label::CorpusHeading => ("Site content", "站点内容"),
        };
        match language {
            Language::En => en,
            Language::Zh => zh,
        }
    }
}

/// "3 results" / "共 3 条结果"
pub fn results_found(count: usize, language: Language) -> String {
    match (language, count) {
        (Language::En, 1) => "1 result".to_string(),
        (Language::En, n) => format!("{} results", n),
        (Language::Zh, n) => format!("共 {} 条结果", n),
    }
}
