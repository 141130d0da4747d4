//! Post-processing for tweet-length article summaries.

/// Hard ceiling for a summary, in characters.
pub const MAX_SUMMARY_CHARS: usize = 280;
const MAX_BULLETS: usize = 3;
const TRIM_STEP: usize = 5;

/// Reduce a model reply to at most three bullets within 280 characters.
///
/// Leading `-`, `*` and `•` markers are stripped. When the joined text is
/// too long the third bullet is shortened (then dropped), then the second,
/// and finally only the first bullet is kept, shortened to fit.
pub fn condense_bullets(raw: &str) -> String {
    let bullets: Vec<String> = raw
        .lines()
        .map(|line| line.trim().trim_start_matches(['-', '*', '•']).trim_start())
        .filter(|line| !line.is_empty())
        .take(MAX_BULLETS)
        .map(str::to_string)
        .collect();

    let joined = join(&bullets[..]);
    if char_len(&joined) <= MAX_SUMMARY_CHARS {
        return joined;
    }

    let first = bullets.first().cloned().unwrap_or_default();
    let mut second = bullets.get(1).cloned().unwrap_or_default();
    let mut third = bullets.get(2).cloned().unwrap_or_default();

    while !third.is_empty() && too_long(&[&first, &second, &third]) {
        third = shorten(&third);
    }
    if !too_long(&[&first, &second, &third]) {
        return join(&[first, second, third]);
    }

    while !second.is_empty() && too_long(&[&first, &second]) {
        second = shorten(&second);
    }
    if !too_long(&[&first, &second]) {
        return join(&[first, second]);
    }

    let mut first = first;
    while char_len(&first) > MAX_SUMMARY_CHARS {
        first = shorten(&first);
    }
    first
}

/// Join non-empty bullets with newlines.
fn join<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|part| part.as_ref())
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>()
        .join("\n")
}

fn too_long(parts: &[&String]) -> bool {
    char_len(&join(parts)) > MAX_SUMMARY_CHARS
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Drop the last few characters and any trailing whitespace.
fn shorten(text: &str) -> String {
    let keep = char_len(text).saturating_sub(TRIM_STEP);
    text.chars()
        .take(keep)
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markers_and_keeps_three() {
        let raw = "- First point\n\n* Second point\n• Third point\n- Fourth point";
        assert_eq!(condense_bullets(raw), "First point\nSecond point\nThird point");
    }

    #[test]
    fn test_short_reply_untouched() {
        assert_eq!(condense_bullets("  Only one  "), "Only one");
        assert_eq!(condense_bullets(""), "");
    }

    #[test]
    fn test_third_bullet_trimmed_first() {
        let first = "a".repeat(100);
        let second = "b".repeat(100);
        let third = "c".repeat(100);
        let out = condense_bullets(&format!("{first}\n{second}\n{third}"));

        assert!(out.chars().count() <= MAX_SUMMARY_CHARS);
        assert!(out.starts_with(&format!("{first}\n{second}\n")));
        assert!(out.ends_with('c'));
    }

    #[test]
    fn test_second_bullet_trimmed_when_third_cannot_fit() {
        let first = "a".repeat(200);
        let second = "b".repeat(200);
        let out = condense_bullets(&format!("{first}\n{second}\nccc"));

        assert!(out.chars().count() <= MAX_SUMMARY_CHARS);
        assert!(out.starts_with(&format!("{first}\n")));
        assert!(!out.contains('c'));
    }

    #[test]
    fn test_falls_back_to_first_bullet() {
        let out = condense_bullets(&format!("{}\nsecond", "x".repeat(400)));
        assert!(out.chars().count() <= MAX_SUMMARY_CHARS);
        assert!(out.chars().all(|c| c == 'x'));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let bullet = "é".repeat(90);
        let raw = format!("{bullet}\n{bullet}\n{bullet}");
        // 272 chars but far more bytes: nothing to trim
        assert_eq!(condense_bullets(&raw), raw);
    }
}
