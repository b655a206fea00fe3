use std::fmt;

/// Errors from handle/profile resolution against the Bluesky API
#[derive(Debug)]
pub enum ResolveError {
    /// The request could not be sent or the connection failed
    Http(reqwest::Error),
    /// The API answered with a non-success status (unknown handle, rate limit)
    Status(u16),
    /// The API answered 200 but the body did not parse
    Malformed(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Http(err) => write!(f, "HTTP error: {}", err),
            ResolveError::Status(code) => write!(f, "Unexpected status: {}", code),
            ResolveError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ResolveError {
    fn from(err: reqwest::Error) -> Self {
        ResolveError::Http(err)
    }
}
