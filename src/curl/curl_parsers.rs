use base64::{Engine as _, engine::general_purpose::STANDARD};
use nom::{
    IResult,
    bytes::complete::take_until,
    character::complete::char,
    combinator::rest,
    error::context,
    sequence::separated_pair,
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves alone, on top of ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Split `name: value` at the first colon.
pub fn header_line_parse(input: &str) -> IResult<&str, (&str, &str)> {
    context(
        "header line parse",
        separated_pair(take_until(":"), char(':'), rest),
    )(input)
}

/// Split `key=value` at the first equals sign.
pub fn form_pair_parse(input: &str) -> IResult<&str, (&str, &str)> {
    context(
        "form pair parse",
        separated_pair(take_until("="), char('='), rest),
    )(input)
}

/// Trimmed header name and value, or `None` when there is no colon or no name.
pub fn split_header(raw: &str) -> Option<(String, String)> {
    let (_rest, (name, value)) = header_line_parse(raw).ok()?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.into(), value.trim().into()))
}

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Encode one `--data-urlencode` value: key and value separately, or the
/// whole thing when it carries no `=`.
pub fn encode_form_fragment(raw: &str) -> String {
    match form_pair_parse(raw) {
        Ok((_rest, (key, value))) => format!(
            "{}={}",
            encode_uri_component(key),
            encode_uri_component(value)
        ),
        Err(_) => encode_uri_component(raw),
    }
}

/// `Basic` credentials for a `-u user[:password]` value.
pub fn basic_authorization(user: &str) -> String {
    format!("Basic {}", STANDARD.encode(user.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::generic_parse;
    use rstest::*;

    #[rstest]
    #[case("Accept: */*", Some(("Accept", "*/*")))]
    #[case("  X-A :  b  ", Some(("X-A", "b")))]
    #[case("Referer: http://www.sse.com.cn/", Some(("Referer", "http://www.sse.com.cn/")))]
    #[case("X-Empty:", Some(("X-Empty", "")))]
    #[case("no separator", None)]
    #[case(": orphan value", None)]
    #[case("", None)]
    fn test_split_header(#[case] input: &str, #[case] expected: Option<(&str, &str)>) {
        let expected = expected.map(|(k, v)| (k.to_string(), v.to_string()));
        generic_parse(split_header, input, expected);
    }

    #[test]
    fn test_header_line_parse_keeps_later_colons() {
        let (_rest, (name, value)) = header_line_parse("Host: a.com:8080").unwrap();
        assert_eq!(name, "Host");
        assert_eq!(value, " a.com:8080");
    }

    #[rstest]
    #[case("a b", "a%20b")]
    #[case("-_.!~*'()", "-_.!~*'()")]
    #[case("a&b=c/d?", "a%26b%3Dc%2Fd%3F")]
    #[case("ü", "%C3%BC")]
    fn test_encode_uri_component(#[case] input: &str, #[case] expected: &str) {
        generic_parse(encode_uri_component, input, expected.to_string());
    }

    #[rstest]
    #[case("name=John Doe", "name=John%20Doe")]
    #[case("q=a=b", "q=a%3Db")]
    #[case("hello world", "hello%20world")]
    #[case("=bare", "=bare")]
    #[case("k&x=v&y", "k%26x=v%26y")]
    fn test_encode_form_fragment(#[case] input: &str, #[case] expected: &str) {
        generic_parse(encode_form_fragment, input, expected.to_string());
    }

    #[test]
    fn test_basic_authorization() {
        assert_eq!(basic_authorization("user:pass"), "Basic dXNlcjpwYXNz");
    }
}
