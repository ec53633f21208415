use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("a personal access token is required to {operation}")]
    MissingCredential { operation: &'static str },

    #[error("failed to serialize request body")]
    Serialize(#[source] serde_json::Error),

    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),

    #[error("unexpected response status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("`{0}` is not a valid account or repository name")]
    InvalidName(String),

    #[error("API URL `{0}` can not take a path")]
    BaseUrl(url::Url),

    #[error(transparent)]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    /// Classifies a reqwest failure, keeping timeouts apart from other network errors.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
