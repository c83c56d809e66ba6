use super::Command;
use crate::cli::RoiArgs;
use crate::config::Config;
use crate::error::Result;
use crate::i18n::Label;
use ::roi::{RoiInput, RoiResult, compute_roi, format_currency};
use rpc::roi::RoiReport;
use search_core::Language;
use std::fmt::Write;

pub struct RoiCommand {
    config: Config,
    args: RoiArgs,
}

impl RoiCommand {
    pub fn new(cfg: Config, args: RoiArgs) -> Self {
        Self { config: cfg, args }
    }
}

/// 文本格式的计算结果
pub fn render_report(input: &RoiInput, result: &RoiResult, lang: Language) -> String {
    let rows = [
        (Label::PurchasePrice, format_currency(input.purchase_price)),
        (Label::DownPayment, format_currency(input.down_payment)),
        (Label::MonthlyRent, format_currency(input.monthly_rent)),
        (Label::MonthlyExpenses, format_currency(input.monthly_expenses)),
        (Label::AnnualRent, format_currency(result.annual_rent)),
        (Label::AnnualExpenses, format_currency(result.annual_expenses)),
        (Label::NetIncome, format_currency(result.net_income)),
        (Label::CapRate, format!("{}%", result.cap_rate)),
        (Label::CashOnCashReturn, format!("{}%", result.cash_on_cash_return)),
    ];

    let mut out = String::new();
    let _ = writeln!(out, "{}", Label::RoiHeading.text(lang));
    for (label, value) in rows {
        let _ = writeln!(out, "  {}: {}", label.text(lang), value);
    }
    out
}

#[async_trait::async_trait]
impl Command for RoiCommand {
    async fn execute(&self) -> Result<()> {
        let args = &self.args;
        let input = RoiInput::from_text(
            &args.purchase_price,
            &args.down_payment,
            &args.monthly_rent,
            &args.monthly_expenses,
        );
        tracing::debug!("ROI 输入: {:?}", input);

        let result = compute_roi(&input);
        let lang = args.output.lang.unwrap_or(self.config.default_language);

        if args.output.json {
            println!("{}", serde_json::to_string_pretty(&RoiReport::from(result))?);
        } else {
            print!("{}", render_report(&input, &result, lang));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_report() {
        let input = RoiInput::new(750_000.0, 150_000.0, 3_500.0, 1_000.0);
        let report = render_report(&input, &compute_roi(&input), Language::En);

        assert!(report.starts_with("Investment return\n"));
        assert!(report.contains("  Annual rent: $42,000\n"));
        assert!(report.contains("  Net annual income: $30,000\n"));
        assert!(report.contains("  Cap rate: 4.00%\n"));
        assert!(report.contains("  Cash-on-cash return: 20.00%\n"));
    }

    #[test]
    fn chinese_report_with_empty_input() {
        let input = RoiInput::from_text("", "", "", "");
        let report = render_report(&input, &compute_roi(&input), Language::Zh);

        assert!(report.contains("  资本化率: 0.00%\n"));
        assert!(report.contains("  现金回报率: 0.00%\n"));
        assert!(report.contains("  年净收入: $0\n"));
    }
}
