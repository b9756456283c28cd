//! Indonesian-locale presentation helpers.
//!
//! These only produce strings; callers keep the numeric and ISO values.

use chrono::{Locale, NaiveDate};

/// Locale used for every user-facing date and amount.
pub const LOCALE: Locale = Locale::id_ID;

const CURRENCY_SYMBOL: &str = "Rp";
const NBSP: char = '\u{a0}';

/// Formats an amount as whole rupiah, e.g. `Rp 4.500`.
///
/// Fractions are rounded half away from zero; thousands are grouped with `.`.
pub fn format_idr(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits, '.');

    if rounded < 0.0 {
        format!("-{CURRENCY_SYMBOL}{NBSP}{grouped}")
    } else {
        format!("{CURRENCY_SYMBOL}{NBSP}{grouped}")
    }
}

/// Long-form date, e.g. `23 Desember 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format_localized("%-d %B %Y", LOCALE).to_string()
}

/// Localized month name for `month` in 1..=12.
pub fn month_name(month: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(2000, month, 1)
        .map(|date| date.format_localized("%B", LOCALE).to_string())
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
