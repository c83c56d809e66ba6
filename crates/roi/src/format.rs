//! Display helpers for calculator output

/// Render a dollar amount with thousands grouping.
///
/// Whole amounts drop the cents (`$42,000`); others keep two places
/// (`-$1,200.50`). Non-finite values render as `$0`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }

    // Format from the float itself so huge amounts keep every digit
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let whole = group_thousands(whole);

    let body = if frac == "00" {
        format!("${}", whole)
    } else {
        format!("${}.{}", whole, frac)
    };

    if amount < 0.0 && fixed != "0.00" {
        format!("-{}", body)
    } else {
        body
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "$0")]
    #[case(999.0, "$999")]
    #[case(42_000.0, "$42,000")]
    #[case(1_234_567.0, "$1,234,567")]
    #[case(-1_200.5, "-$1,200.50")]
    #[case(0.07, "$0.07")]
    #[case(-0.001, "$0")]
    #[case(f64::NAN, "$0")]
    #[case(1.2e21, "$1,200,000,000,000,000,000,000")]
    #[case(-2e20, "-$200,000,000,000,000,000,000")]
    fn test_format_currency(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }
}
