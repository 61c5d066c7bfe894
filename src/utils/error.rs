use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Request never completed (connection refused, DNS, timeout)
    Transport(String),
    /// Request completed but the server answered with a non-success status
    Api(String),
    /// Response body could not be decoded into the expected shape
    UnexpectedResponse(String),
    /// Client-side validation rejected the request before sending
    InvalidRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Transport(msg) => write!(f, "Network error: {}", msg),
            AppError::Api(msg) => write!(f, "Server error: {}", msg),
            AppError::UnexpectedResponse(msg) => write!(f, "Unexpected response: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            AppError::Transport(err.to_string())
        } else if err.is_decode() {
            AppError::UnexpectedResponse(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}
