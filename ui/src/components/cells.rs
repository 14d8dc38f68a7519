//! Per-column cell formatters. The formatting functions are pure and
//! side-effect-free; the components wrap them in table cells.

use dioxus::prelude::*;

/// Inserts thousands separators into a bare digit string.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a price or volume as a localized decimal number: thousands
/// grouping, at most 3 fraction digits, trailing zeros trimmed.
pub fn format_money(value: f64) -> String {
    let s = format!("{:.3}", value.abs());
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && s != "0.000" { "-" } else { "" };

    let grouped = group_thousands(int_part);
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Formats a fractional change as a percentage: `value * 100` with exactly
/// two fraction digits and a trailing `%`.
pub fn format_percent(value: f64) -> String {
    let scaled = value * 100.0;
    let s = format!("{:.2}", scaled.abs());
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let sign = if scaled < 0.0 && s != "0.00" { "-" } else { "" };

    format!("{sign}{}.{frac_part}%", group_thousands(int_part))
}

/// Whether a change value gets the affirmative (green) styling.
/// Zero counts as non-positive.
pub fn is_affirmative(value: f64) -> bool {
    value > 0.0
}

/// The symbol column: the composite pair symbol rendered as a badge.
#[component]
pub fn CoinCell(symbol: String) -> Element {
    rsx! {
        td {
            kbd { "{symbol}" }
        }
    }
}

/// A money column: right-aligned localized decimal.
#[component]
pub fn MoneyCell(value: f64) -> Element {
    rsx! {
        td {
            style: "text-align: right;",
            "{format_money(value)}"
        }
    }
}

/// The percent-change column: right-aligned, green when strictly positive,
/// red otherwise.
#[component]
pub fn PercentCell(value: f64) -> Element {
    let color = if is_affirmative(value) {
        "var(--pico-ins-color)"
    } else {
        "var(--pico-del-color)"
    };

    rsx! {
        td {
            style: "text-align: right; color: {color};",
            "{format_percent(value)}"
        }
    }
}
