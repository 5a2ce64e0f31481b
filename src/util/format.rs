// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Display formatting for credit fields.
//!
//! Every function here is total: malformed input degrades to a best-effort
//! string instead of failing. Output follows the Brazilian Portuguese
//! conventions used by the credit API.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const CURRENCY_SYMBOL: &str = "R$";

/// No-break space placed between the currency symbol and the amount.
const CURRENCY_SEPARATOR: char = '\u{a0}';

const DATE_OUTPUT_FORMAT: &str = "%d/%m/%Y";

/// Formats an ISO-8601 date (or date-time) as `DD/MM/YYYY`.
///
/// Empty input yields an empty string and input that cannot be parsed is
/// returned unchanged.
pub(crate) fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    match parse_calendar_date(raw) {
        Some(date) => date.format(DATE_OUTPUT_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

// The calendar date is taken as written, no timezone conversion is applied.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|date_time| date_time.date())
}

/// Formats a monetary amount as Brazilian Real, e.g. `R$ 1.234,56`.
///
/// Missing and non-finite amounts yield an empty string.
pub(crate) fn format_currency(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return String::new();
    };

    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!(
        "{sign}{CURRENCY_SYMBOL}{CURRENCY_SEPARATOR}{},{fraction}",
        group_thousands(whole)
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped
}

/// Formats a percentage rate with two decimal places, e.g. `12.50%`.
pub(crate) fn format_rate(value: Option<f64>) -> String {
    match value {
        Some(rate) => format!("{:.2}%", rate),
        None => String::new(),
    }
}

/// Renders the simplified regime flag as `Sim` or `Não`.
pub(crate) fn format_boolean_flag(flag: bool) -> String {
    let token = if flag { "Sim" } else { "Não" };
    token.to_string()
}

pub(crate) fn format_category_code(code: &str) -> String {
    code.to_uppercase()
}

/// Returns true only when `text` is one or more ASCII decimal digits.
pub(crate) fn is_numeric_only(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
