// src/domain/normalize.rs

use crate::domain::listing::{CleanListing, UNKNOWN_MAKE};
use crate::domain::vocab::{corrected_make, NOISE_PATTERNS};
use crate::scraper::RawListing;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

const EDGE_CHARS: &[char] = &['-', ',', ':', ';', '.', ' '];

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid regex");
    static ref AWD: Regex = Regex::new(r"(?i)\bawd\b").expect("valid regex");
    static ref ENGINE: Regex = Regex::new(r"(?i)\bv\d\b").expect("valid regex");
    static ref YEAR: Regex = Regex::new(r"^[0-9]{4}$").expect("valid regex");
}

/// Turns one raw listing into an output row. Never fails: anything that
/// cannot be made sense of becomes `None` (or `UNKNOWN` for the make).
pub fn normalize_listing(raw: &RawListing) -> CleanListing {
    let name = clean_name(raw.name.as_deref());
    let make = normalize_make(extract_make(name.as_deref()));

    CleanListing {
        price: parse_price(raw.price()),
        location: raw
            .locality()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string),
        make,
        latitude: coordinate(raw.latitude()),
        longitude: coordinate(raw.longitude()),
        name,
    }
}

/// Strips noise phrases and stray punctuation from a seller's title and
/// title-cases what is left.
///
/// `" Clean Title 2016 Honda Civic AWD Automatic "` becomes
/// `"2016 Honda Civic AWD"`. Running it on its own output changes nothing.
pub fn clean_name(raw: Option<&str>) -> Option<String> {
    let mut name = raw?.trim().to_string();

    // Removing one phrase can bring two halves of another together, so keep
    // going until a full pass removes nothing.
    loop {
        let before = name.len();
        for pattern in NOISE_PATTERNS.iter() {
            name = pattern.replace_all(&name, "").into_owned();
        }
        if name.len() == before {
            break;
        }
    }

    let name = WHITESPACE.replace_all(&name, " ");
    let name = title_case(name.trim_matches(EDGE_CHARS));
    let name = AWD.replace_all(&name, "AWD");
    let name = ENGINE.replace_all(&name, |caps: &regex::Captures| caps[0].to_uppercase());

    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Make is the token after a leading model year, otherwise the first token.
pub fn extract_make(clean_name: Option<&str>) -> Option<&str> {
    let mut tokens = clean_name?.split_whitespace();
    let first = tokens.next()?;

    if YEAR.is_match(first) {
        tokens.next()
    } else {
        Some(first)
    }
}

pub fn normalize_make(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return UNKNOWN_MAKE.to_string();
    };

    let title = title_case(raw);
    let make = match corrected_make(&title) {
        Some(canonical) => canonical.to_string(),
        None => title.to_uppercase(),
    };

    if YEAR.is_match(&make) || make.chars().count() <= 1 {
        return UNKNOWN_MAKE.to_string();
    }
    make
}

/// Accepts `"$12,500"`, `"12500.00"`, `12500` and friends. Anything that is
/// not a number once `$` and `,` are gone is `None`.
pub fn parse_price(raw: Option<&Value>) -> Option<f64> {
    let text = match raw? {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let cleaned: String = text.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    // "$ 12,500" leaves a space behind once the symbol is gone.
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|p| p.is_finite())
}

fn coordinate(raw: Option<&Value>) -> Option<f64> {
    match raw? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|c| c.is_finite()),
        _ => None,
    }
}

/// Uppercases the first letter of every run of letters and lowercases the
/// rest. Digits and punctuation break runs, so `"f-150"` is `"F-150"` and
/// `"4runner"` is `"4Runner"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                // 'ß' uppercases to "SS"; keep only the first letter capital.
                let mut upper = ch.to_uppercase();
                out.extend(upper.next());
                out.extend(upper.flat_map(char::to_lowercase));
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
