//! `${NAME}` / `$NAME` substitution inside variable file values.
//!
//! Both forms are matched in a single left-to-right pass; substituted text is
//! never rescanned. Bare names are letters, digits, and underscores, not
//! starting with a digit. Braced names may contain anything except `}`.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}|\$([A-Za-z_][A-Za-z0-9_]*)").expect("static regex must compile")
});

/// Replace every reference in `value` with the result of `resolve`.
///
/// Unresolved names become the empty string.
pub(crate) fn interpolate<F>(value: &str, resolve: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if !value.contains('$') {
        return value.to_string();
    }

    REFERENCE_RE
        .replace_all(value, |caps: &Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            resolve(name).unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_bare_and_braced_references() {
        let resolve = lookup(&[("HOST", "localhost"), ("PORT", "5432")]);
        assert_eq!(
            interpolate("postgres://$HOST:${PORT}/db", resolve),
            "postgres://localhost:5432/db"
        );
    }

    #[test]
    fn test_unknown_names_become_empty() {
        let resolve = lookup(&[]);
        assert_eq!(interpolate("a${MISSING}b$ALSO_MISSING", resolve), "ab");
    }

    #[test]
    fn test_bare_name_stops_at_non_word_character() {
        let resolve = lookup(&[("A", "1")]);
        assert_eq!(interpolate("$A-2", resolve), "1-2");
    }

    #[test]
    fn test_dollar_without_name_is_literal() {
        let resolve = lookup(&[("A", "1")]);
        assert_eq!(interpolate("cost: $5 and $", &resolve), "cost: $5 and $");
        assert_eq!(interpolate("${}", &resolve), "${}");
    }

    #[test]
    fn test_substituted_text_is_not_rescanned() {
        let resolve = lookup(&[("OUTER", "$INNER"), ("INNER", "nope")]);
        assert_eq!(interpolate("${OUTER}", resolve), "$INNER");
    }

    #[test]
    fn test_braced_name_allows_any_character_but_brace() {
        let resolve = lookup(&[("weird name", "ok")]);
        assert_eq!(interpolate("${weird name}", resolve), "ok");
    }
}
