//! Turn pasted curl commands into fetch-style request descriptors.
//!
//! ```
//! use curlfetch::parse_curl;
//!
//! let parsed = parse_curl(r#"curl -d '{"a":1}' https://x.com"#);
//! assert_eq!(parsed.descriptor.method(), "POST");
//! assert_eq!(
//!     parsed.descriptor.options.header("Content-Type"),
//!     Some("application/json;charset=UTF-8")
//! );
//! ```

pub mod classify;
pub mod curl;
pub mod error;
pub mod fetch;
pub mod json;
#[cfg(test)]
mod test_util;

pub use classify::{Classification, classify};
pub use curl::descriptor::{
    Credentials, Headers, ParsedCurl, Redirect, RequestDescriptor, RequestOptions,
};
pub use curl::interpreter::{interpret, parse_curl, parse_curl_strict};
pub use curl::parser::tokenize;
pub use error::{Diagnostic, Error, Result};
