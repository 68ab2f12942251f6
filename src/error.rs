//! Error types for curlfetch
//!
//! Interpretation itself never fails. Whatever had to be read by fallback is
//! reported as a [`Diagnostic`], and only callers that opt into strict parsing
//! see those turned into an [`Error`].

use thiserror::Error;

/// Result type alias for curlfetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// A non-fatal finding about input that was interpreted by fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The first word was not `curl`
    #[error("not a curl command")]
    NotCurl,

    /// A quoted word ran to the end of input
    #[error("unterminated {quote} quote, consumed to end of input")]
    UnterminatedQuote { quote: char },

    /// A flag that takes a value was the last word
    #[error("flag {flag} expects a value")]
    MissingValue { flag: String },

    /// A `-H` value without a `name: value` shape
    #[error("header '{0}' has no ':' separator, skipped")]
    MalformedHeader(String),
}

/// Main error type for curlfetch
#[derive(Error, Debug)]
pub enum Error {
    /// Strict parsing refused input that needed a fallback
    #[error("rejected curl command: {0}")]
    Rejected(Diagnostic),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The diagnostic behind a rejection, if any
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Error::Rejected(d) => Some(d),
            _ => None,
        }
    }
}

impl From<Diagnostic> for Error {
    fn from(d: Diagnostic) -> Self {
        Error::Rejected(d)
    }
}
