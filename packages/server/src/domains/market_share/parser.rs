//! Recover `(name, percent)` pairs from a model reply.
//!
//! Strategies, in priority order:
//! 1. a fenced JSON block (list of `{name, value}` / `[name, value]`, or an
//!    object keyed by name)
//! 2. loose `Name: 12.5%` lines
//!
//! Names are left as written; bucketing happens in the coalescer.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::models::DistItem;
use crate::common::structured_text::{find_fenced_json, find_field, non_empty_lines};
use crate::common::{first_success, Strategy};

lazy_static! {
    static ref SHARE_LINE: Regex =
        Regex::new(r"^[-*•]?\s*([^:]+?)\s*[:\-]\s*([0-9]+(?:\.[0-9]+)?)\s*%?\s*$").unwrap();
    static ref TOTAL_LABEL: Regex = Regex::new(r"(?i)^total\b").unwrap();
}

const STRATEGIES: [Strategy<DistItem>; 2] = [parse_fenced_block, parse_share_lines];

/// Extract share mentions, or `None` when no strategy finds any.
pub fn extract_shares(text: &str) -> Option<Vec<DistItem>> {
    first_success(&STRATEGIES, text)
}

fn parse_fenced_block(text: &str) -> Option<Vec<DistItem>> {
    let items = match find_fenced_json(text)? {
        Value::Array(entries) => entries.iter().filter_map(entry_to_item).collect(),
        Value::Object(map) => map
            .iter()
            .filter_map(|(name, value)| Some(DistItem::new(name.as_str(), coerce_percent(value)?)))
            .collect(),
        _ => return None,
    };
    Some(items)
}

fn entry_to_item(entry: &Value) -> Option<DistItem> {
    match entry {
        Value::Object(object) => {
            let name = find_field(object, |k| k == "name" || k == "company")?.as_str()?;
            let value = find_field(object, |k| {
                matches!(k, "value" | "share" | "percent" | "percentage")
            })?;
            Some(DistItem::new(name, coerce_percent(value)?))
        }
        Value::Array(pair) if pair.len() >= 2 => {
            Some(DistItem::new(pair[0].as_str()?, coerce_percent(&pair[1])?))
        }
        _ => None,
    }
}

/// Numbers, or numeric strings with an optional trailing `%`.
fn coerce_percent(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn parse_share_lines(text: &str) -> Option<Vec<DistItem>> {
    let items: Vec<DistItem> = non_empty_lines(text)
        .filter_map(|line| {
            let line = line.replace("**", "");
            let caps = SHARE_LINE.captures(&line)?;
            let name = caps[1].trim();
            if TOTAL_LABEL.is_match(name) {
                return None;
            }
            let value: f64 = caps[2].parse().ok()?;
            Some(DistItem::new(name, value))
        })
        .collect();
    Some(items)
}
