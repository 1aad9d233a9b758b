//! Ordered keyword rules: the first pattern that matches decides the value.

use regex::Regex;

/// Pattern/result pairs evaluated top to bottom.
pub type RuleSet<T> = Vec<(Regex, T)>;

/// Compiles literal rule patterns. Panics on an invalid literal.
pub fn compile_rules<T: Copy>(rules: &[(&str, T)]) -> RuleSet<T> {
    rules
        .iter()
        .map(|(pattern, value)| {
            (
                Regex::new(pattern).expect("static rule pattern must compile"),
                *value,
            )
        })
        .collect()
}

/// Value of the first rule matching `text`, else `fallback`.
pub fn first_match<T: Copy>(rules: &[(Regex, T)], text: &str, fallback: T) -> T {
    rules
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, value)| *value)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earlier_rule_wins() {
        let rules = compile_rules(&[(r"(?i)\bhybrid\b", 1), (r"(?i)\bremote\b", 2)]);
        assert_eq!(first_match(&rules, "Remote or hybrid", 0), 1);
        assert_eq!(first_match(&rules, "fully remote", 0), 2);
        assert_eq!(first_match(&rules, "office", 0), 0);
    }

    #[test]
    fn test_empty_rules_return_fallback() {
        let rules: RuleSet<u8> = Vec::new();
        assert_eq!(first_match(&rules, "anything", 7), 7);
    }
}
