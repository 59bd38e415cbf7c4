//! Backend REST API errors.

use thiserror::Error;

/// Errors that can occur when talking to the marketplace backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, TLS).
    #[error("Backend request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    ///
    /// `message` holds the `error` field of the JSON body when the backend
    /// sent one and the caller asked for it.
    #[error("Backend returned HTTP {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// A 2xx response whose body did not have the expected shape.
    #[error("Backend response error: {0}")]
    Decode(String),

    /// The request URL could not be built from the configured base URL.
    #[error("Invalid backend URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Text to show the admin: the backend's own error message when present,
    /// otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status of the failed response, if there was one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Status {
            status: 400,
            message: Some("الفئة موجودة بالفعل".to_string()),
        };
        assert_eq!(err.user_message("حدث خطأ في الخادم"), "الفئة موجودة بالفعل");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_user_message_falls_back() {
        let blank = ApiError::Status {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.user_message("fallback"), "fallback");

        let transport = ApiError::Transport("connection refused".to_string());
        assert_eq!(transport.user_message("fallback"), "fallback");
        assert_eq!(transport.status(), None);
    }
}
