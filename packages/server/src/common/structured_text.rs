//! Helpers for recovering structure from free-form model output.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    // ```lang\n body ``` ; the language tag is optional
    static ref FENCE: Regex = Regex::new(r"(?s)```[ \t]*([A-Za-z0-9_-]*)[ \t]*\r?\n?(.*?)```").unwrap();
}

/// A single parsing strategy: `None` (or an empty list) means "try the next one".
pub type Strategy<T> = fn(&str) -> Option<Vec<T>>;

/// Run strategies in priority order and return the first non-empty result.
pub fn first_success<T>(strategies: &[Strategy<T>], text: &str) -> Option<Vec<T>> {
    strategies
        .iter()
        .find_map(|strategy| strategy(text).filter(|records| !records.is_empty()))
}

/// First fenced block whose body parses as JSON.
///
/// Blocks tagged with another language are still tried; models often label
/// JSON as `javascript` or leave the tag off entirely.
pub fn find_fenced_json(text: &str) -> Option<Value> {
    FENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(2))
        .find_map(|body| {
            serde_json::from_str::<Value>(body.as_str().trim())
                .ok()
                .filter(|value| value.is_array() || value.is_object())
        })
}

/// First field of `object` whose lowercased key satisfies `matches`.
pub fn find_field<'a>(
    object: &'a serde_json::Map<String, Value>,
    matches: impl Fn(&str) -> bool,
) -> Option<&'a Value> {
    object
        .iter()
        .find(|(key, _)| matches(&key.to_lowercase()))
        .map(|(_, value)| value)
}

/// Split text into trimmed, non-empty lines.
pub fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_tagged_fence() {
        let text = "Here you go:\n```json\n[{\"name\": \"Zeiss\", \"value\": 30}]\n```\nThanks";
        let value = find_fenced_json(text).unwrap();
        assert_eq!(value[0]["name"], "Zeiss");
    }

    #[test]
    fn test_skips_non_json_fence() {
        let text = "```\n| Company | Share |\n|---|---|\n```\n\n```JSON\n{\"Canon\": 20}\n```";
        let value = find_fenced_json(text).unwrap();
        assert_eq!(value["Canon"], 20);
    }

    #[test]
    fn test_scalar_fence_is_ignored() {
        assert!(find_fenced_json("```json\n42\n```").is_none());
        assert!(find_fenced_json("no fences at all").is_none());
    }

    #[test]
    fn test_find_field_is_case_insensitive() {
        let value: Value = serde_json::json!({"Company": "Canon", "Revenue (USD)": "$2B"});
        let object = value.as_object().unwrap();

        assert_eq!(find_field(object, |k| k.contains("revenue")).unwrap(), "$2B");
        assert_eq!(find_field(object, |k| k == "company").unwrap(), "Canon");
        assert!(find_field(object, |k| k.contains("patent")).is_none());
    }

    #[test]
    fn test_first_success_skips_empty_results() {
        fn nothing(_: &str) -> Option<Vec<u32>> {
            None
        }
        fn empty(_: &str) -> Option<Vec<u32>> {
            Some(Vec::new())
        }
        fn length(text: &str) -> Option<Vec<u32>> {
            Some(vec![text.len() as u32])
        }
        fn never(_: &str) -> Option<Vec<u32>> {
            panic!("strategies after a success must not run")
        }

        let strategies: [Strategy<u32>; 4] = [nothing, empty, length, never];
        assert_eq!(first_success(&strategies, "abc"), Some(vec![3]));
        assert_eq!(first_success(&strategies[..2], "abc"), None);
    }
}
