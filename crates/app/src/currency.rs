//! Vietnamese Dong formatting (`vi-VN`).
//!
//! VND has no minor unit, so amounts print as whole numbers with `.` as the
//! thousands separator.

use storefront_core::Money;

/// No-break space between the number and the currency sign.
const NBSP: char = '\u{a0}';

/// `15000` → `"15.000 ₫"` (no-break space before the sign).
pub fn format_currency(amount: Money) -> String {
    format!("{}{NBSP}₫", group_thousands(amount.amount()))
}

/// `15000` → `"15.000 đ"` (plain space, letter dong sign).
pub fn format_currency_alt(amount: Money) -> String {
    format!("{} đ", group_thousands(amount.amount()))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
