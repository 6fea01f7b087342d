//! Field-level parsing for bibliographic records
//!
//! Source data is noisy: year columns mix timestamps, bare years and floats,
//! venue columns use several spellings of "missing". Every function here maps
//! bad input to an absent/blank value instead of failing.

use regex::Regex;
use std::sync::LazyLock;

/// Lower-cased venue tokens that mean "no venue"
pub const BLANK_VENUES: [&str; 7] = ["", "nan", "none", "null", "n/a", "na", "n.a."];

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(19|20)\d{2}").expect("year pattern is a valid regex"));

/// Extract a year from a raw field.
///
/// Prefers the first `19xx`/`20xx` run anywhere in the text, so full
/// timestamps like `2021-03-04 10:00:00` resolve to 2021. Falls back to a
/// numeric parse of the whole value (`"2019.0"` -> 2019).
pub fn parse_year(raw: Option<&str>) -> Option<i32> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(m) = YEAR_PATTERN.find(text) {
        return m.as_str().parse().ok();
    }

    if let Ok(year) = text.parse::<i32>() {
        return Some(year);
    }

    let value = text.parse::<f64>().ok()?;
    if !value.is_finite() || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i32)
}

/// True when a venue string is one of the "no venue" spellings
pub fn is_blank_venue(venue: &str) -> bool {
    let lowered = venue.trim().to_lowercase();
    BLANK_VENUES.contains(&lowered.as_str())
}

/// Trimmed venue, or an empty string for blank-equivalent values
pub fn clean_venue(raw: Option<&str>) -> String {
    match raw {
        Some(v) if !is_blank_venue(v) => v.trim().to_string(),
        _ => String::new(),
    }
}

/// Split a `;`-delimited author field into distinct trimmed names.
///
/// Order of first appearance is preserved.
pub fn split_authors(raw: Option<&str>) -> Vec<String> {
    let Some(text) = raw else {
        return Vec::new();
    };

    let mut names: Vec<String> = Vec::new();
    for part in text.split(';') {
        let name = part.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
