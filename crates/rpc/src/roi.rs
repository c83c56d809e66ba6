use serde::{Serialize, Deserialize};

pub use ::roi::{RoiInput, RoiResult, Percent};

/// Calculator form fields exactly as the user typed them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoiRequest {
    pub purchase_price: String,
    pub down_payment: String,
    pub monthly_rent: String,
    pub monthly_expenses: String,
}

impl RoiRequest {
    pub fn to_input(&self) -> RoiInput {
        RoiInput::from_text(
            &self.purchase_price,
            &self.down_payment,
            &self.monthly_rent,
            &self.monthly_expenses,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiReport {
    pub annual_rent: f64,
    pub annual_expenses: f64,
    pub net_income: f64,
    /// Two decimals, e.g. "4.00"
    pub cap_rate: String,
    /// Two decimals, e.g. "20.00"
    pub cash_on_cash_return: String,
}

impl From<RoiResult> for RoiReport {
    fn from(result: RoiResult) -> Self {
        Self {
            annual_rent: result.annual_rent,
            annual_expenses: result.annual_expenses,
            net_income: result.net_income,
            cap_rate: result.cap_rate.to_string(),
            cash_on_cash_return: result.cash_on_cash_return.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_from_form_text() {
        let req = RoiRequest {
            purchase_price: "750,000".into(),
            down_payment: "150000".into(),
            monthly_rent: "3500".into(),
            monthly_expenses: "1000".into(),
        };
        let report = RoiReport::from(::roi::compute_roi(&req.to_input()));

        assert_eq!(report.net_income, 30_000.0);
        assert_eq!(report.cap_rate, "4.00");
        assert_eq!(report.cash_on_cash_return, "20.00");
    }

    #[test]
    fn empty_form_reports_zeroes() {
        let report = RoiReport::from(::roi::compute_roi(&RoiRequest::default().to_input()));

        assert_eq!(report.annual_rent, 0.0);
        assert_eq!(report.cap_rate, "0.00");
        assert_eq!(report.cash_on_cash_return, "0.00");
    }
}
