//! Rupee formatting

use rust_decimal::Decimal;

/// Format a price the way `en-IN` locales do: `₹56,12,345.5`
///
/// Rounded to two decimals with trailing zeros dropped.
pub fn format_inr(value: Decimal) -> String {
    let rounded = value.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::from(if rounded.is_sign_negative() { "-₹" } else { "₹" });
    out.push_str(&group_indian(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Indian digit grouping: last three digits, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// `₹12.34M`
pub fn format_millions(value: f64) -> String {
    format!("₹{:.2}M", value / 1_000_000.0)
}

/// `₹12.34B`
pub fn format_billions(value: f64) -> String {
    format!("₹{:.2}B", value / 1_000_000_000.0)
}
