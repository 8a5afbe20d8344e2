use thiserror::Error;

/// Fixed message shown when no API credential is configured.
pub const MISSING_KEY_MESSAGE: &str =
    "Weather API key is missing. Run `skycast configure` to set one.";

/// Fixed message for HTTP-level request failures.
pub const REQUEST_FAILED_MESSAGE: &str = "City not found or API error";

/// Everything that can go wrong with one fetch attempt.
///
/// Both variants are caught at the fetch boundary and converted to view
/// state; neither propagates to the host environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Credential missing. Detected before any network call is issued and
    /// fatal to that attempt; no retry is offered.
    #[error("{0}")]
    Configuration(String),

    /// HTTP non-2xx response, or a JSON parse/shape failure. Recoverable by
    /// submitting a new search.
    #[error("{0}")]
    Request(String),
}

impl FetchError {
    pub fn missing_key() -> Self {
        FetchError::Configuration(MISSING_KEY_MESSAGE.to_string())
    }

    pub fn request_failed() -> Self {
        FetchError::Request(REQUEST_FAILED_MESSAGE.to_string())
    }

    /// The user-facing message, regardless of variant.
    pub fn message(&self) -> &str {
        match self {
            FetchError::Configuration(msg) | FetchError::Request(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_user_facing_message() {
        let err = FetchError::request_failed();
        assert_eq!(err.to_string(), REQUEST_FAILED_MESSAGE);
        assert_eq!(err.message(), REQUEST_FAILED_MESSAGE);

        let err = FetchError::missing_key();
        assert!(err.to_string().contains("skycast configure"));
    }
}
