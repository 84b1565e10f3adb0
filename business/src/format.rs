//! Display helpers for the employees table and form.

use chrono::NaiveDate;

use crate::employee::SalaryField;

/// Format a salary for display: `₹` prefix plus en-IN digit grouping
/// (last three digits, then groups of two).
///
/// Mirrors the backend's leniency: a missing/empty value renders as an empty
/// string and non-numeric text is shown unchanged.
pub fn format_salary(salary: Option<&SalaryField>) -> String {
    match salary {
        None => String::new(),
        Some(SalaryField::Number(n)) => format_rupees(*n),
        Some(SalaryField::Text(s)) => {
            if s.trim().is_empty() {
                String::new()
            } else {
                match s.trim().parse::<f64>() {
                    Ok(n) => format_rupees(n),
                    Err(_) => s.clone(),
                }
            }
        }
    }
}

fn format_rupees(n: f64) -> String {
    let sign = if n.is_sign_negative() { "-" } else { "" };
    // Round the whole value once, then split, so a fraction that rounds up
    // carries into the grouped integral part.
    let text = format!("{:.3}", n.abs());
    let (integral, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let grouped = group_indian(integral);

    // Up to three fractional digits, trailing zeros trimmed.
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("₹ {sign}{grouped}")
    } else {
        format!("₹ {sign}{grouped}.{fraction}")
    }
}

/// en-IN grouping: `1234567` -> `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Fixed three-letter month table for the backend's `D-MMM-YYYY` dates.
/// An unrecognized month falls back to January, matching the backend's
/// own leniency.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Normalize a date value into the editable ISO `YYYY-MM-DD` form.
///
/// - empty input -> empty string
/// - already ISO -> returned unchanged
/// - a handful of common formats -> parsed and reformatted
/// - `D-MMM-YYYY` (what the list endpoint sends) -> reassembled
/// - anything else -> empty string, silently
pub fn to_input_date(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }

    if is_iso_date(value) {
        return value.to_owned();
    }

    if let Some(iso) = parse_generic(value) {
        return iso;
    }

    if let Some(iso) = parse_day_mon_year(value) {
        return iso;
    }

    String::new()
}

fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

fn parse_generic(value: &str) -> Option<String> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc2822(value) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }
    for pattern in ["%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, pattern) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    None
}

fn parse_day_mon_year(value: &str) -> Option<String> {
    let mut parts = value.splitn(3, '-');
    let day = parts.next()?;
    let mon = parts.next()?;
    let year = parts.next()?;

    if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if mon.len() != 3 || !mon.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month = MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(mon))
        .map(|i| i + 1)
        .unwrap_or(1);

    Some(format!("{year}-{month:02}-{day:0>2}"))
}
