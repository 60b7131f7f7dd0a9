//! Token substitution for item HTML templates
//!
//! Handles `{TOKEN}` placeholders such as `{URL}` and `{PAGE_NUMBER}`.
//! Substitution is literal: values are inserted as-is with no escaping.

use crate::types::TokenMap;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching template tokens: {UPPER_SNAKE}
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Z][A-Z0-9_]*)\}").expect("token regex is valid"));

/// Render a template string, replacing every known `{TOKEN}`
///
/// Unknown tokens are left untouched so that literal braces in user
/// templates survive.
pub fn render_token_template(template: &str, tokens: &TokenMap) -> String {
    if tokens.is_empty() || !has_tokens(template) {
        return template.to_string();
    }

    TOKEN_REGEX
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            match tokens.get(name) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Check if a string contains template tokens
pub fn has_tokens(s: &str) -> bool {
    TOKEN_REGEX.is_match(s)
}

/// Extract all token names from a template, in order of appearance
pub fn extract_tokens(template: &str) -> Vec<String> {
    TOKEN_REGEX
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pairs: &[(&str, &str)]) -> TokenMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let t = tokens(&[("URL", "/page/2/")]);
        let result = render_token_template(r#"<a href="{URL}"></a>"#, &t);
        assert_eq!(result, r#"<a href="/page/2/"></a>"#);
    }

    #[test]
    fn test_multiple_substitutions() {
        let t = tokens(&[("CURRENT_PAGE", "3"), ("TOTAL_PAGES", "12")]);
        let result = render_token_template("Page {CURRENT_PAGE} of {TOTAL_PAGES}", &t);
        assert_eq!(result, "Page 3 of 12");
    }

    #[test]
    fn test_repeated_token() {
        let t = tokens(&[("PAGE_NUMBER", "7")]);
        let result = render_token_template("{PAGE_NUMBER}-{PAGE_NUMBER}", &t);
        assert_eq!(result, "7-7");
    }

    #[test]
    fn test_unknown_token_left_as_is() {
        let t = tokens(&[("URL", "/x")]);
        let result = render_token_template("{URL} {FOO} {lower}", &t);
        assert_eq!(result, "/x {FOO} {lower}");
    }

    #[test]
    fn test_values_not_rescanned() {
        // A value that itself looks like a token must not be expanded again
        let t = tokens(&[("URL", "{PAGE_NUMBER}"), ("PAGE_NUMBER", "1")]);
        assert_eq!(render_token_template("{URL}", &t), "{PAGE_NUMBER}");
    }

    #[test]
    fn test_no_tokens() {
        let t = tokens(&[("URL", "/x")]);
        let result = render_token_template("<li>...</li>", &t);
        assert_eq!(result, "<li>...</li>");
    }

    #[test]
    fn test_has_tokens() {
        assert!(has_tokens("{URL}"));
        assert!(has_tokens("prefix {PAGE_NUMBER} suffix"));
        assert!(!has_tokens("no tokens here"));
        assert!(!has_tokens("{ not a token }"));
        assert!(!has_tokens("{{ config.key }}"));
    }

    #[test]
    fn test_extract_tokens() {
        let vars = extract_tokens(r#"<a href="{URL}">{PAGE_NUMBER}</a>"#);
        assert_eq!(vars, vec!["URL", "PAGE_NUMBER"]);
    }
}
