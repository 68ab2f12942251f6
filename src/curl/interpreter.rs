use tracing::debug;

use super::{
    Curl,
    curl_parsers::{basic_authorization, encode_form_fragment, split_header},
    descriptor::{Credentials, Headers, ParsedCurl, Redirect, RequestDescriptor, RequestOptions},
    headers::{
        self, AUTHORIZATION, CONTENT_TYPE, COOKIE, FORM_URLENCODED, JSON, USER_AGENT, find_header,
        has_header, set_header,
    },
    parser::lex,
    sample::{NOT_CURL_SNIPPET, render_fetch_code},
};
use crate::error::{Diagnostic, Result};

const CURL_CMD: &str = "curl";

/// Everything the flags say, before bodies, methods and headers are settled.
#[derive(Debug, Default)]
struct Accumulator {
    url: String,
    method: String,
    headers: Headers,
    data: Vec<String>,
    form: Vec<String>,
    cookie: Option<String>,
    has_cookie_flag: bool,
    user_agent: Option<String>,
    referrer: Option<String>,
    user: Option<String>,
    follow: bool,
    compressed: bool,
    diagnostics: Vec<Diagnostic>,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl Accumulator {
    fn apply(&mut self, flag: Curl, value: &str) {
        match flag {
            Curl::Url => {
                if !value.is_empty() {
                    self.url = value.into();
                }
            }
            // An empty method falls back to inference.
            Curl::Method => self.method = value.to_uppercase(),
            Curl::Header => match split_header(value) {
                Some((name, v)) => set_header(&mut self.headers, &name, &v),
                None if value.is_empty() => {}
                None => self
                    .diagnostics
                    .push(Diagnostic::MalformedHeader(value.into())),
            },
            Curl::Cookie => {
                self.has_cookie_flag = true;
                self.cookie = non_empty(value).or(self.cookie.take());
            }
            Curl::UserAgent => self.user_agent = non_empty(value).or(self.user_agent.take()),
            Curl::Referer => self.referrer = non_empty(value).or(self.referrer.take()),
            Curl::User => self.user = non_empty(value).or(self.user.take()),
            Curl::Location => self.follow = true,
            Curl::Compressed => self.compressed = true,
            Curl::Data => self.data.push(value.into()),
            Curl::DataUrlencode => self.form.push(encode_form_fragment(value)),
        }
    }

    /// Join the data fragments into a body, defaulting `Content-Type` on the way.
    fn build_body(&mut self) -> Option<String> {
        let mut body = None;
        let mut has_content_type = has_header(&self.headers, CONTENT_TYPE);

        if !self.form.is_empty() {
            body = Some(self.form.join("&"));
            if !has_content_type {
                set_header(&mut self.headers, CONTENT_TYPE, FORM_URLENCODED);
                has_content_type = true;
            }
        }

        if !self.data.is_empty() {
            let joined = self.data.join("&");
            let content_type = find_header(&self.headers, CONTENT_TYPE)
                .unwrap_or_default()
                .to_ascii_lowercase();
            let trimmed = joined.trim();
            let looks_json = trimmed.starts_with('{') || trimmed.starts_with('[');

            if content_type.contains("application/json") || (looks_json && !has_content_type) {
                body = Some(joined);
                if !has_content_type {
                    set_header(&mut self.headers, CONTENT_TYPE, JSON);
                }
            } else if content_type.contains("application/x-www-form-urlencoded") || body.is_none()
            {
                body = Some(match body {
                    Some(existing) if !existing.is_empty() => format!("{existing}&{joined}"),
                    _ => joined,
                });
                if !has_content_type {
                    set_header(&mut self.headers, CONTENT_TYPE, FORM_URLENCODED);
                }
            } else {
                // Opaque payload under a caller-chosen content type.
                body = Some(joined);
            }
        }

        body
    }

    fn finish(mut self) -> ParsedCurl {
        let body = self.build_body();
        let method = if self.method.is_empty() {
            let inferred = if body.is_some() { "POST" } else { "GET" };
            inferred.to_string()
        } else {
            self.method
        };

        if let Some(user) = &self.user {
            if !has_header(&self.headers, AUTHORIZATION) {
                set_header(&mut self.headers, AUTHORIZATION, &basic_authorization(user));
            }
        }

        let normalized = headers::normalize(self.headers, self.referrer, self.user_agent);
        let mut headers = normalized.headers;
        if let Some(cookie) = self.cookie {
            headers.insert(COOKIE.into(), cookie);
        }
        let credentials =
            (self.has_cookie_flag || has_header(&headers, COOKIE)).then_some(Credentials::Include);
        if let Some(user_agent) = normalized.user_agent {
            headers.insert(USER_AGENT.into(), user_agent);
        }

        let descriptor = RequestDescriptor {
            url: self.url,
            options: RequestOptions {
                method,
                headers,
                referrer: normalized.referrer,
                redirect: self.follow.then_some(Redirect::Follow),
                body,
                credentials,
            },
        };
        debug!(
            url = %descriptor.url,
            method = %descriptor.options.method,
            headers = descriptor.options.headers.len(),
            compressed = self.compressed,
            diagnostics = self.diagnostics.len(),
            "interpreted curl command"
        );

        ParsedCurl {
            sample_code: render_fetch_code(&descriptor),
            descriptor,
            diagnostics: self.diagnostics,
        }
    }
}

fn not_curl() -> ParsedCurl {
    ParsedCurl {
        descriptor: RequestDescriptor::default(),
        sample_code: NOT_CURL_SNIPPET.into(),
        diagnostics: vec![Diagnostic::NotCurl],
    }
}

/// Interpret already-split words. Anything not starting with the literal
/// `curl` yields an empty descriptor.
pub fn interpret<S: AsRef<str>>(tokens: &[S]) -> ParsedCurl {
    let rest = match tokens.split_first() {
        Some((first, rest)) if AsRef::<str>::as_ref(first) == CURL_CMD => rest,
        _ => return not_curl(),
    };

    let mut acc = Accumulator::default();
    let mut rest = rest.iter().map(AsRef::<str>::as_ref);
    while let Some(token) = rest.next() {
        if !token.starts_with('-') && acc.url.is_empty() {
            acc.url = token.into();
            continue;
        }
        let Some(flag) = Curl::new(token) else {
            debug!(token, "ignoring unrecognized argument");
            continue;
        };
        let value = if flag.takes_value() {
            rest.next().unwrap_or_else(|| {
                acc.diagnostics.push(Diagnostic::MissingValue {
                    flag: token.into(),
                });
                ""
            })
        } else {
            ""
        };
        acc.apply(flag, value);
    }

    acc.finish()
}

/// Tokenize and interpret a pasted curl command. Never fails; see
/// [`ParsedCurl::diagnostics`] for what had to be guessed.
pub fn parse_curl(command: &str) -> ParsedCurl {
    let words = lex(command);
    let unterminated = words
        .iter()
        .find(|w| w.is_unterminated())
        .and_then(|w| w.quote);
    let tokens: Vec<String> = words.into_iter().map(|w| w.text).collect();

    let mut parsed = interpret(&tokens);
    if let Some(quote) = unterminated {
        parsed
            .diagnostics
            .insert(0, Diagnostic::UnterminatedQuote { quote });
    }
    parsed
}

/// Like [`parse_curl`], but refuses input that needed any fallback.
pub fn parse_curl_strict(command: &str) -> Result<ParsedCurl> {
    parse_curl(command).into_strict()
}
