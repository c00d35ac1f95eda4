//! Unified SDK error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] HttpError),

    #[error("Rejected by exchange: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}

impl HttpError {
    /// Whether the request reached the broker and was refused for domain
    /// reasons, as opposed to a transport failure that never completed.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            HttpError::ServerError { .. } | HttpError::NotFound(_) | HttpError::BadRequest(_)
        )
    }

    /// The broker's human-readable error message, if the response body
    /// carried one (`{"status": "error", "message": "..."}`).
    pub fn backend_message(&self) -> Option<String> {
        let body = match self {
            HttpError::ServerError { body, .. } => body,
            HttpError::NotFound(body) | HttpError::BadRequest(body) => body,
            _ => return None,
        };
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Local pre-check failures. Never dispatched to the broker — surfaced
/// inline and immediately recoverable by user correction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Insufficient balance! Cost: ${cost:.2}, you have: ${balance:.2}")]
    InsufficientBalance { cost: Decimal, balance: Decimal },

    #[error("Insufficient coins! You have {coins:.2} coins")]
    InsufficientCoins { coins: Decimal },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InsufficientBalance {
            cost: dec!(120),
            balance: dec!(100),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance! Cost: $120.00, you have: $100.00"
        );

        let err = ValidationError::InsufficientCoins { coins: dec!(3) };
        assert_eq!(err.to_string(), "Insufficient coins! You have 3.00 coins");
    }

    #[test]
    fn test_backend_message_parsed_from_body() {
        let err = HttpError::BadRequest(
            r#"{"status": "error", "message": "Insufficient balance. Need $120.00, have $100.00"}"#
                .to_string(),
        );
        assert_eq!(
            err.backend_message().as_deref(),
            Some("Insufficient balance. Need $120.00, have $100.00")
        );
    }

    #[test]
    fn test_backend_message_absent_for_non_json_body() {
        let err = HttpError::BadRequest("<html>bad gateway</html>".to_string());
        assert_eq!(err.backend_message(), None);
    }

    #[test]
    fn test_backend_message_absent_for_timeout() {
        assert_eq!(HttpError::Timeout.backend_message(), None);
    }

    #[test]
    fn test_is_rejection() {
        assert!(HttpError::BadRequest(String::new()).is_rejection());
        assert!(HttpError::NotFound(String::new()).is_rejection());
        assert!(HttpError::ServerError {
            status: 500,
            body: String::new()
        }
        .is_rejection());
        assert!(!HttpError::Timeout.is_rejection());
    }

    #[test]
    fn test_rejected_display_with_and_without_message() {
        let err = SdkError::Rejected {
            message: Some("User not found".to_string()),
        };
        assert_eq!(err.to_string(), "Rejected by exchange: User not found");

        let err = SdkError::Rejected { message: None };
        assert_eq!(err.to_string(), "Rejected by exchange: no reason given");
    }
}
