//! Idea API-specific error types.

/// Errors that can occur while talking to the idea API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request could not be completed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server refused the request with a readable reason
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Server refused the request without a readable reason
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Successful response without a `data` payload
    #[error("Response did not contain any data")]
    MissingData,

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Return the text shown to the user for this failure. Server-provided
    /// messages are passed through untouched.
    ///
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
