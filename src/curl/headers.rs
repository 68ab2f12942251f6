//! Header bookkeeping: the names a browser refuses to set, and the pass that
//! moves `Referer`/`User-Agent` out of the map into their own fields.

use super::descriptor::Headers;

/// Headers that a browser request API manages itself (connection management,
/// client hints, fetch metadata, HTTP/2 pseudo-headers).
pub const FORBIDDEN_HEADERS: &[&str] = &[
    "accept-encoding",
    "content-length",
    "host",
    "connection",
    "keep-alive",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "sec-fetch-dest",
    "sec-fetch-mode",
    "sec-fetch-site",
    "sec-ch-ua",
    "sec-ch-ua-mobile",
    "sec-ch-ua-platform",
    ":authority",
    ":method",
    ":path",
    ":scheme",
];

pub const CONTENT_TYPE: &str = "Content-Type";
pub const COOKIE: &str = "Cookie";
pub const USER_AGENT: &str = "User-Agent";
pub const AUTHORIZATION: &str = "Authorization";

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded;charset=UTF-8";
pub const JSON: &str = "application/json;charset=UTF-8";

pub fn is_forbidden(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    FORBIDDEN_HEADERS.contains(&lower.as_str()) || lower == "origin"
}

/// Insert with trimmed name and value; the same literal name overwrites in place.
pub fn set_header(headers: &mut Headers, name: &str, value: &str) {
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    headers.insert(name.into(), value.trim().into());
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    find_header(headers, name).is_some()
}

pub fn find_header<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Headers left after dropping forbidden names and pulling out `Referer` and
/// `User-Agent`. A header only fills a field the flags left empty.
#[derive(Debug, Default, PartialEq)]
pub struct Normalized {
    pub headers: Headers,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

pub fn normalize(
    headers: Headers,
    referrer: Option<String>,
    user_agent: Option<String>,
) -> Normalized {
    let mut out = Normalized {
        headers: Headers::with_capacity(headers.len()),
        referrer,
        user_agent,
    };

    for (name, value) in headers {
        if is_forbidden(&name) {
            tracing::debug!(header = %name, "dropping browser-managed header");
            continue;
        }
        match name.to_ascii_lowercase().as_str() {
            "referer" => {
                if out.referrer.is_none() && !value.is_empty() {
                    out.referrer = Some(value);
                }
            }
            "user-agent" => {
                if out.user_agent.is_none() && !value.is_empty() {
                    out.user_agent = Some(value);
                }
            }
            _ => {
                out.headers.insert(name, value);
            }
        }
    }
    out
}
