//! Guess what kind of text was pasted into the editor.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref CURL_RE: Regex = Regex::new(r"(?i)^\s*curl\b").unwrap();
    static ref FETCH_RE: Regex =
        Regex::new(r"(?i)(\bfetch\s*\(|\baxios\s*\(|\bawait\s+fetch\s*\(|\.then\s*\()").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Curl,
    Fetch,
    Json,
    Plaintext,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Curl => "curl",
            Classification::Fetch => "fetch",
            Classification::Json => "json",
            Classification::Plaintext => "plaintext",
        }
    }

    /// Language id an editor would highlight this text with.
    pub fn editor_language(&self) -> &'static str {
        match self {
            Classification::Curl => "bash",
            Classification::Fetch => "javascript",
            Classification::Json => "json",
            Classification::Plaintext => "plaintext",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_curl(text: &str) -> bool {
    CURL_RE.is_match(text.trim())
}

pub fn is_fetch(text: &str) -> bool {
    FETCH_RE.is_match(text)
}

/// A bracketed object or array that actually parses.
pub fn is_json(text: &str) -> bool {
    let t = text.trim();
    let bracketed =
        (t.starts_with('{') && t.ends_with('}')) || (t.starts_with('[') && t.ends_with(']'));
    bracketed && serde_json::from_str::<serde_json::Value>(t).is_ok()
}

/// Checks run in order: curl, then fetch-like code, then JSON.
pub fn classify(text: &str) -> Classification {
    if is_curl(text) {
        Classification::Curl
    } else if is_fetch(text) {
        Classification::Fetch
    } else if is_json(text) {
        Classification::Json
    } else {
        Classification::Plaintext
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::generic_parse;
    use rstest::*;

    #[rstest]
    #[case("curl https://x.com", Classification::Curl)]
    #[case("\n\t  CURL -X POST x", Classification::Curl)]
    #[case("curly braces", Classification::Plaintext)]
    #[case("fetch('https://x.com')", Classification::Fetch)]
    #[case("const r = await fetch (url)", Classification::Fetch)]
    #[case("axios({ url })", Classification::Fetch)]
    #[case("promise.then(x => x)", Classification::Fetch)]
    #[case("prefetch(x)", Classification::Plaintext)]
    #[case(r#"{"a": [1, 2]}"#, Classification::Json)]
    #[case("  [1, 2, 3]  ", Classification::Json)]
    #[case("{not json}", Classification::Plaintext)]
    #[case(r#""just a string""#, Classification::Plaintext)]
    #[case("", Classification::Plaintext)]
    #[case(r#"{"cmd": "fetch(x)"}"#, Classification::Fetch)]
    fn test_classify(#[case] input: &str, #[case] expected: Classification) {
        generic_parse(classify, input, expected);
    }

    #[test]
    fn test_curl_checked_before_json() {
        // Looks like a curl command to the regex even though the rest is JSON-ish.
        let text = r#"curl ["a"]"#;
        assert!(is_curl(text));
        assert_eq!(classify(text), Classification::Curl);
    }

    #[test]
    fn test_names() {
        assert_eq!(Classification::Curl.to_string(), "curl");
        assert_eq!(Classification::Curl.editor_language(), "bash");
        assert_eq!(Classification::Fetch.editor_language(), "javascript");
        assert_eq!(
            serde_json::to_string(&Classification::Plaintext).unwrap(),
            r#""plaintext""#
        );
    }
}
