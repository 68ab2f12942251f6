//! Pull method, URL and options back out of pasted fetch code (or a curl
//! command), for titling tabs and pre-filling editors.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::{classify::is_curl, curl::interpreter::parse_curl};

lazy_static! {
    static ref METHOD_RE: Regex =
        Regex::new(r#"(?i)method["']?\s*:\s*["']([a-zA-Z]+)["']"#).unwrap();
    static ref OPTIONS_OBJECT_RE: Regex =
        Regex::new(r"(?i)fetch\s*\(\s*[^,]+,\s*(\{[\s\S]*?\})\s*\)").unwrap();
    static ref BODY_KEY_RE: Regex = Regex::new(r"(?i)\bbody\s*:").unwrap();
    static ref DOUBLE_QUOTED_URL_RE: Regex = Regex::new(r#"fetch\("([^"]+)""#).unwrap();
    static ref SINGLE_QUOTED_URL_RE: Regex = Regex::new(r"fetch\('([^']+)'").unwrap();
    static ref QUOTED_URL_RE: Regex = Regex::new(r#"fetch\s*\(\s*["']([^"']+)["']"#).unwrap();
    static ref TEMPLATE_URL_RE: Regex = Regex::new(r"fetch\s*\(\s*`([^`]+)`").unwrap();
    static ref OPTIONS_RE: Regex =
        Regex::new(r#"fetch\s*\(\s*['"`][^'"`]+['"`]\s*,\s*(\{[\s\S]*\})\s*\)"#).unwrap();
}

/// URL and options text found in a request snippet. Either is empty when
/// nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchDetails {
    pub url: String,
    pub options: String,
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// The HTTP method a snippet will use, when it can be told.
pub fn extract_http_method(code: &str) -> Option<String> {
    if is_curl(code) {
        return Some(parse_curl(code).descriptor.options.method);
    }
    if let Some(method) = first_capture(&METHOD_RE, code) {
        return Some(method.to_uppercase());
    }
    // An options object carrying a body means fetch will be asked to POST.
    let options = first_capture(&OPTIONS_OBJECT_RE, code)?;
    BODY_KEY_RE.is_match(&options).then(|| "POST".to_string())
}

/// Last non-empty path segment of a URL; `None` for the root path.
pub fn last_path_segment(url: &str) -> Option<String> {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .path()
            .split('/')
            .filter(|part| !part.is_empty())
            .next_back()
            .map(str::to_string),
        Err(_) => {
            let last = url.split('/').filter(|part| !part.is_empty()).next_back()?;
            let last = last.split_once('?').map_or(last, |(head, _)| head);
            (!last.is_empty() && !last.contains('.')).then(|| last.to_string())
        }
    }
}

/// Last path segment of the URL a snippet requests.
pub fn extract_url_path(code: &str) -> Option<String> {
    let url = if is_curl(code) {
        parse_curl(code).descriptor.url
    } else {
        first_capture(&DOUBLE_QUOTED_URL_RE, code)
            .or_else(|| first_capture(&SINGLE_QUOTED_URL_RE, code))?
    };
    if url.is_empty() {
        return None;
    }
    last_path_segment(&url)
}

/// The leading `{ ... }` of `text` with balanced braces, or all of it.
fn balanced_object(text: &str) -> &str {
    let mut depth = 0i32;
    for (i, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return &text[..=i];
                }
            }
            _ => {}
        }
    }
    text
}

pub fn extract_fetch_details(code: &str) -> FetchDetails {
    if is_curl(code) {
        let parsed = parse_curl(code);
        // A string map always serializes.
        let options = serde_json::to_string_pretty(&parsed.descriptor.options).unwrap_or_default();
        return FetchDetails {
            url: parsed.descriptor.url,
            options,
        };
    }

    let url = first_capture(&QUOTED_URL_RE, code)
        .or_else(|| first_capture(&TEMPLATE_URL_RE, code))
        .unwrap_or_default();
    let options = first_capture(&OPTIONS_RE, code)
        .map(|text| balanced_object(&text).to_string())
        .unwrap_or_default();
    tracing::debug!(%url, options_len = options.len(), "extracted fetch details");

    FetchDetails { url, options }
}
