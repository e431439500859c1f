use std::error::Error;
use std::fmt;

/// Transport-class failures of the dashboard client. A reply that parses but reports a
/// non-success status is not an error at this level; the controller handles it.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    InvalidUrl(String),
    Network(String),
    JsonParse(String),
    Io(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            ClientError::Network(msg) => write!(f, "Network error: {msg}"),
            ClientError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            ClientError::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl Error for ClientError {}
