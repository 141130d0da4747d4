//! Lenient numeric coercion for model-written figures.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Longer suffixes first so "bn" is not read as "b" + garbage.
    static ref MONEY: Regex =
        Regex::new(r"(-?\d+(?:\.\d+)?)(?:(trillion|billion|million|thousand|bn|mm|[kmbt])\b)?").unwrap();
    static ref NUMBER: Regex = Regex::new(r"-?\d+(?:\.\d+)?").unwrap();
}

/// Parse a money string such as `"$1.2B"`, `"USD 350 million"` or
/// `"1,250,000"` into whole US dollars. Anything unusable becomes 0.
pub fn parse_money_to_usd(raw: &str) -> u64 {
    let cleaned: String = raw
        .to_lowercase()
        .replace("usd", "")
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '€' | '£') && !c.is_whitespace())
        .collect();

    let Some(caps) = MONEY.captures(&cleaned) else {
        return 0;
    };

    let amount: f64 = caps[1].parse().unwrap_or(0.0);
    let multiplier = match caps.get(2).map(|m| m.as_str()) {
        Some("k" | "thousand") => 1e3,
        Some("m" | "mm" | "million") => 1e6,
        Some("b" | "bn" | "billion") => 1e9,
        Some("t" | "trillion") => 1e12,
        _ => 1.0,
    };

    to_whole(amount * multiplier)
}

/// First number in the string, rounded to the nearest integer; 0 otherwise.
pub fn parse_count(raw: &str) -> u64 {
    let cleaned = raw.replace(',', "");
    NUMBER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(to_whole)
        .unwrap_or(0)
}

/// Round to two decimals, clamping negatives and non-finite values to 0.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value.max(0.0) * 100.0).round() / 100.0
}

/// Round to the nearest whole number; negative or non-finite values become 0.
pub fn to_whole(value: f64) -> u64 {
    let rounded = value.round();
    if rounded.is_finite() && rounded > 0.0 {
        rounded as u64
    } else {
        0
    }
}
