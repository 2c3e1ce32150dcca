use thiserror::Error;

pub const SERVER_NOT_REACHABLE: &str = "Server not reachable";
pub const INVALID_JSON: &str = "Invalid JSON";

/// A form rule that failed before any request was made.
///
/// `Display` is exactly the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter email & password")]
    MissingCredentials,
    #[error("Complete all fields")]
    IncompleteSignup,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Enter registered email")]
    MissingResetEmail,
    #[error("Enter category & amount")]
    IncompleteTransaction,
    #[error("Complete goal form")]
    IncompleteGoal,
    #[error("Enter amount & date")]
    IncompleteDeposit,
    #[error("Complete all fields")]
    IncompleteGoalEdit,
    #[error("Enter a valid budget amount")]
    InvalidBudget,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected `{endpoint}` response: {reason}")]
pub struct DecodeError {
    pub endpoint: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("server not reachable: {0}")]
    Unreachable(String),
    #[error("response body is not JSON")]
    InvalidJson,
    #[error("request rejected with HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Unreachable(err.0)
    }
}

impl ApiError {
    /// Text for the notification surface; `fallback` covers rejections
    /// without a server message and malformed success payloads.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unreachable(_) => SERVER_NOT_REACHABLE.to_string(),
            ApiError::InvalidJson => INVALID_JSON.to_string(),
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Rejected { .. } | ApiError::Decode(_) | ApiError::Encode(_) => {
                fallback.to_string()
            }
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Unreachable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_prefers_server_message() {
        let err = ApiError::Rejected {
            status: 401,
            message: Some("Invalid credentials".into()),
        };
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let err = ApiError::Rejected {
            status: 500,
            message: Some("  ".into()),
        };
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn transport_and_json_failures_have_fixed_text() {
        assert_eq!(
            ApiError::Unreachable("timeout".into()).user_message("x"),
            "Server not reachable"
        );
        assert_eq!(ApiError::InvalidJson.user_message("x"), "Invalid JSON");
    }

    #[test]
    fn validation_messages_match_forms() {
        assert_eq!(
            ValidationError::IncompleteTransaction.to_string(),
            "Enter category & amount"
        );
        assert_eq!(
            ValidationError::InvalidBudget.to_string(),
            "Enter a valid budget amount"
        );
    }
}
