use thiserror::Error;

pub const BLANK_USERNAME: &str = "Please enter a username";
pub const USER_NOT_FOUND: &str = "User not found";
pub const REPOSITORIES_FAILED: &str = "Failed to fetch repositories";

/// Why a search attempt ended without a snapshot. The `Display` output is the
/// exact text shown in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{}", BLANK_USERNAME)]
    BlankUsername,
    /// Non-success status on the profile lookup, carrying the API message.
    #[error("{0}")]
    Profile(String),
    #[error("{}", REPOSITORIES_FAILED)]
    Repositories,
    /// Network or decode failure on either request.
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}
