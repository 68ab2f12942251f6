pub mod curl_parsers;
pub mod descriptor;
pub mod headers;
pub mod interpreter;
pub mod parser;
pub mod sample;

/// The curl flags the interpreter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curl {
    Url,
    Method,
    Header,
    Cookie,
    UserAgent,
    Referer,
    User,
    Location,
    Compressed,
    Data,
    DataUrlencode,
}

impl Curl {
    pub fn new(identifier: &str) -> Option<Self> {
        match identifier {
            "--url" => Some(Curl::Url),
            "-X" | "--request" => Some(Curl::Method),
            "-H" | "--header" => Some(Curl::Header),
            "-b" | "--cookie" => Some(Curl::Cookie),
            "-A" | "--user-agent" => Some(Curl::UserAgent),
            "-e" | "--referer" => Some(Curl::Referer),
            "-u" | "--user" => Some(Curl::User),
            "-L" | "--location" => Some(Curl::Location),
            "--compressed" => Some(Curl::Compressed),
            "-d" | "--data" | "--data-raw" | "--data-binary" => Some(Curl::Data),
            "--data-urlencode" => Some(Curl::DataUrlencode),
            _ => None,
        }
    }

    /// Whether the flag consumes the following word as its value.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Curl::Location | Curl::Compressed)
    }
}
