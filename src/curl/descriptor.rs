use indexmap::IndexMap;
use serde::Serialize;

use super::headers::find_header;
use crate::error::{Diagnostic, Error, Result};

/// Header names to values, in the order they were first set.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Redirect {
    Follow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Credentials {
    Include,
}

/// The fetch-style options of a request. Optional members are left out of
/// the serialized object entirely when they do not apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestOptions {
    pub method: String,
    pub headers: Headers,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Redirect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: "GET".into(),
            headers: Headers::new(),
            referrer: None,
            redirect: None,
            body: None,
            credentials: None,
        }
    }
}

impl RequestOptions {
    /// Look a header up by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestDescriptor {
    pub url: String,
    pub options: RequestOptions,
}

impl RequestDescriptor {
    pub fn method(&self) -> &str {
        &self.options.method
    }

    pub fn headers(&self) -> &Headers {
        &self.options.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.options.body.as_deref()
    }
}

/// Everything one parse produces: the descriptor, an equivalent fetch
/// snippet, and notes about input that was read by fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCurl {
    #[serde(flatten)]
    pub descriptor: RequestDescriptor,
    pub sample_code: String,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedCurl {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Fail with the first diagnostic, if there is one.
    pub fn into_strict(self) -> Result<Self> {
        match self.diagnostics.first() {
            Some(d) => Err(Error::Rejected(d.clone())),
            None => Ok(self),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
