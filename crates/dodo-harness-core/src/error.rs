//! Harness Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Shown when nothing better is available
pub const FALLBACK_MESSAGE: &str = "Unknown error occurred";

/// Errors surfaced by the harness
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// Backend answered with a non-2xx status
    #[error("Backend returned {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api {
        status: u16,
        /// Server-provided `detail`, if the body carried one
        detail: Option<String>,
    },

    /// Request never produced a response (DNS, refused, CORS, ...)
    #[error("Network error: {0}")]
    Transport(String),

    /// Response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// Amount field is not a decimal number
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HarnessError {
    /// Text shown to the user in the result panel.
    ///
    /// Prefers the server's detail, then the transport message, and never
    /// returns an empty string.
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Api { status, detail: None } => {
                format!("Request failed with status code {status}")
            }
            Self::Transport(msg) | Self::Decode(msg) | Self::Config(msg) => msg.clone(),
            Self::InvalidAmount(_) => self.to_string(),
        };

        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// HTTP status, if the backend answered at all
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HarnessError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_wins() {
        let err = HarnessError::Api {
            status: 500,
            detail: Some("Failed to create payment checkout: boom".into()),
        };
        assert_eq!(err.user_message(), "Failed to create payment checkout: boom");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_status_without_detail() {
        let err = HarnessError::Api { status: 502, detail: None };
        assert_eq!(err.user_message(), "Request failed with status code 502");
    }

    #[test]
    fn test_blank_messages_fall_back() {
        assert_eq!(
            HarnessError::Transport("  ".into()).user_message(),
            FALLBACK_MESSAGE
        );
        assert_eq!(
            HarnessError::Api { status: 500, detail: Some(String::new()) }.user_message(),
            FALLBACK_MESSAGE
        );
    }

    #[test]
    fn test_invalid_amount_message() {
        let msg = HarnessError::InvalidAmount("ten".into()).user_message();
        assert!(msg.contains("ten"));
    }
}
