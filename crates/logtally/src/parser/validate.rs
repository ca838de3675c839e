//! Validate — date and method sanity checks on extracted records.

use super::model::Record;

/// Recognized 3-letter month abbreviations.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Accepted HTTP methods.
const METHODS: [&str; 7] = [
    "GET", "PUT", "POST", "HEAD", "DELETE", "CONNECT", "OPTIONS",
];

/// Check a record's date and method fields against known-valid ranges.
///
/// The date must be `day/month/year`: day a 1–2 digit integer in [1, 31]
/// (no per-month day-count check, deliberately), month one of the fixed
/// 3-letter abbreviations. Returns pass/fail only; there is no partial
/// correction, and failing records are dropped before aggregation.
pub fn is_valid(rec: &Record) -> bool {
    let parts: Vec<&str> = rec.date.split('/').collect();
    if parts.len() != 3 {
        return false;
    }
    let (day, month) = (parts[0], parts[1]);

    if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match day.parse::<u32>() {
        Ok(d) if (1..=31).contains(&d) => {}
        _ => return false,
    }

    if !MONTHS.contains(&month) {
        return false;
    }

    METHODS.contains(&rec.method.as_str())
}

// ── Tests ───────────────────────────────────────────────────────
