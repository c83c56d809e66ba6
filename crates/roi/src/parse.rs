//! Lenient number parsing for calculator form fields

/// Currency signs accepted in front of an amount.
const CURRENCY_SIGNS: [char; 3] = ['$', '¥', '￥'];

/// Parse a free-form amount, falling back to `0.0`.
///
/// - surrounding whitespace is ignored
/// - an optional sign, then an optional currency sign (`-$1,200`)
/// - `,` and `_` are treated as digit grouping and dropped
/// - the longest leading decimal number is used, so `"3500/mo"` is `3500`
///
/// Empty text, text without a leading number, and values that overflow to
/// infinity all give `0.0`.
pub fn parse_amount(text: &str) -> f64 {
    let s = text.trim();

    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let s = s.trim_start().trim_start_matches(CURRENCY_SIGNS);

    let cleaned: String = s.chars().filter(|c| *c != ',' && *c != '_').collect();
    let prefix = numeric_prefix(&cleaned);
    if prefix.is_empty() {
        return 0.0;
    }

    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if negative { -value } else { value }
        }
        _ => 0.0,
    }
}

/// Longest prefix of `s` shaped like `digits[.digits][e[+-]digits]`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut digits = 0;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return "";
    }

    // Only consume an exponent when it is complete
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}
