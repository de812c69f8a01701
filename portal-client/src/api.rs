use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything a call against the portal API can fail with.
/// `status()` together with the `Display` text is what callers surface.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Network(#[from] reqwest::Error),
    #[error("Request to '{path}' failed with status {status}: {message}")]
    Http {
        path: String,
        status: u16,
        message: String,
    },
    #[error("Malformed response body: '{0}'")]
    Parse(#[from] serde_json::Error),
    #[error("Credentials unavailable: '{0}'")]
    Credentials(#[from] std::io::Error),
    #[error("Invalid configuration: '{0}'")]
    Config(String),
}

impl Error {
    /// HTTP status of the failed call, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Network(e) => e.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
