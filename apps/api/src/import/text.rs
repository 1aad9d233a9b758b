//! Text cleaning shared by the import and enrichment parsers.

use regex::Regex;

/// Decodes the common HTML entities, collapses whitespace runs and trims.
/// Returns `None` when nothing is left.
///
/// Decoding is a single pass, so double-encoded input (`&amp;amp;`) only loses
/// one layer per call and is not idempotent.
pub fn clean_text(value: &str) -> Option<String> {
    let decoded = value
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">");
    normalize_whitespace(&decoded)
}

/// Collapses whitespace runs to a single space and trims. No entity decoding.
pub fn normalize_whitespace(value: &str) -> Option<String> {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}

/// First value that is present and not blank.
pub fn first_non_empty<I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    values
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

/// Runs `pattern` against `text` and returns capture `group`, cleaned.
pub fn capture_clean(pattern: &Regex, text: &str, group: usize) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(group))
        .and_then(|m| clean_text(m.as_str()))
}

/// Keeps at most `max` characters (not bytes).
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_and_trims() {
        assert_eq!(
            clean_text("  Senior \n\t Engineer  "),
            Some("Senior Engineer".to_string())
        );
    }

    #[test]
    fn test_clean_text_decodes_entities() {
        assert_eq!(
            clean_text("Procter &amp; Gamble &quot;R&amp;D&quot; &#39;EU&#39; &lt;team&gt;"),
            Some("Procter & Gamble \"R&D\" 'EU' <team>".to_string())
        );
    }

    #[test]
    fn test_clean_text_blank_is_none() {
        assert_eq!(clean_text(""), None);
        assert_eq!(clean_text(" \n\t "), None);
    }

    #[test]
    fn test_clean_text_is_idempotent() {
        for input in [
            "Software Engineer",
            "  Backend   Engineer\n at  Deloitte ",
            "Thessaloniki, Central Macedonia, Greece",
            "R&amp;D Lead",
        ] {
            let once = clean_text(input).unwrap();
            assert_eq!(clean_text(&once), Some(once.clone()), "input: {input:?}");
        }
    }

    #[test]
    fn test_clean_text_double_encoded_decodes_one_layer() {
        let once = clean_text("A &amp;amp; B").unwrap();
        assert_eq!(once, "A &amp; B");
        assert_eq!(clean_text(&once), Some("A & B".to_string()));
    }

    #[test]
    fn test_normalize_whitespace_keeps_entities() {
        assert_eq!(
            normalize_whitespace(" A &amp;  B "),
            Some("A &amp; B".to_string())
        );
    }

    #[test]
    fn test_first_non_empty_skips_blank_and_missing() {
        let picked = first_non_empty([None, Some("  ".to_string()), Some("EY".to_string())]);
        assert_eq!(picked, Some("EY".to_string()));
        assert_eq!(first_non_empty([None, None]), None);
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("€€€€", 2), "€€");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
