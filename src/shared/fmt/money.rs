//! Rupee formatting for `Decimal` amounts.
//!
//! Amounts are rounded to two decimal places, trailing zeros are trimmed and the
//! integer part uses Indian digit grouping (`12,34,567`), which is how the
//! storefront renders every price, subtotal and order total.

use rust_decimal::Decimal;

/// Currency symbol prefixed to every displayed amount.
pub const RUPEE: &str = "₹";

/// Format an amount without the currency symbol, e.g. `129999` → `"1,29,999"`.
pub fn format_rupees(amount: &Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let formatted = rounded.to_string();

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };

    let mut parts = unsigned.splitn(2, '.');
    let integer_part = parts.next().unwrap_or("0");
    let fraction_part = parts.next();

    let grouped = group_indian(integer_part);
    match fraction_part {
        Some(fraction) if !fraction.is_empty() => format!("{}{}.{}", sign, grouped, fraction),
        _ => format!("{}{}", sign, grouped),
    }
}

/// Format an amount with the rupee symbol, e.g. `99` → `"₹99"`.
pub fn rupees(amount: &Decimal) -> String {
    format!("{}{}", RUPEE, format_rupees(amount))
}

/// Last three digits form one group, every two digits before that another.
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
