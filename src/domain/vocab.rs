// src/domain/vocab.rs

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Condition, transmission and sale-pitch words sellers pad titles with.
/// Drivetrain and engine tokens (AWD, V6, ...) are part of the trim and stay.
///
/// Phrases are removed in this order.
pub const NOISE_PHRASES: &[&str] = &[
    "clean title",
    "clear title",
    "salvage title",
    "rebuilt title",
    "title in hand",
    "one owner",
    "1 owner",
    "low miles",
    "low mileage",
    "high miles",
    "new tires",
    "new brakes",
    "cold ac",
    "runs and drives",
    "runs great",
    "runs good",
    "drives great",
    "must see",
    "must sell",
    "like new",
    "fully loaded",
    "loaded",
    "no accidents",
    "excellent condition",
    "great condition",
    "good condition",
    "automatic",
    "manual",
    "obo",
    "cash only",
];

/// Misspellings, nicknames and partial names mapped to the canonical make.
/// Keys are title-cased, the way lookups are normalized.
const MAKE_CORRECTIONS: &[(&str, &str)] = &[
    ("Chevy", "CHEVROLET"),
    ("Chev", "CHEVROLET"),
    ("Chevolet", "CHEVROLET"),
    ("Chevrolete", "CHEVROLET"),
    ("Vw", "VOLKSWAGEN"),
    ("Volkswagon", "VOLKSWAGEN"),
    ("Volkwagen", "VOLKSWAGEN"),
    ("Mercedes", "MERCEDES-BENZ"),
    ("Mercedes-Benz", "MERCEDES-BENZ"),
    ("Mercedesbenz", "MERCEDES-BENZ"),
    ("Benz", "MERCEDES-BENZ"),
    ("Mb", "MERCEDES-BENZ"),
    ("Land", "LAND ROVER"),
    ("Landrover", "LAND ROVER"),
    ("Range", "LAND ROVER"),
    ("Alfa", "ALFA ROMEO"),
    ("Aston", "ASTON MARTIN"),
    ("Infinity", "INFINITI"),
    ("Porche", "PORSCHE"),
    ("Toyta", "TOYOTA"),
    ("Toyoto", "TOYOTA"),
    ("Hyundia", "HYUNDAI"),
    ("Hundai", "HYUNDAI"),
    ("Mitsu", "MITSUBISHI"),
    ("Nissian", "NISSAN"),
    ("Suburu", "SUBARU"),
    ("Caddy", "CADILLAC"),
    ("Cadilac", "CADILLAC"),
    ("Olds", "OLDSMOBILE"),
    ("Lexis", "LEXUS"),
    ("Mazada", "MAZDA"),
];

lazy_static! {
    pub static ref NOISE_PATTERNS: Vec<Regex> = NOISE_PHRASES
        .iter()
        .map(|phrase| whole_phrase_pattern(phrase))
        .collect();
    static ref CORRECTIONS: HashMap<&'static str, &'static str> =
        MAKE_CORRECTIONS.iter().copied().collect();
}

/// Canonical make for a title-cased spelling, if the table knows it.
pub fn corrected_make(title_cased: &str) -> Option<&'static str> {
    CORRECTIONS.get(title_cased).copied()
}

// Case-insensitive, whole words only; inner spaces accept any whitespace run.
fn whole_phrase_pattern(phrase: &str) -> Regex {
    let body = phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    Regex::new(&format!(r"(?i)\b{body}\b")).expect("noise phrase pattern is valid")
}
