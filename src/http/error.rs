use thiserror::Error;

/// Generic message for failures where no server reply exists.
pub const TRANSPORT_MESSAGE: &str = "A network error occurred and the request did not complete.";

#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// The server answered with 4xx/5xx; its message is surfaced verbatim.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a server reply.
    #[error("{0}")]
    Transport(String),

    #[error("Malformed server response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn is_application(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(TRANSPORT_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_surfaces_server_message_verbatim() {
        let err = ApiError::status(500, "댓글 작성에 실패하였습니다.");
        assert_eq!(err.to_string(), "댓글 작성에 실패하였습니다.");
        assert!(err.is_application());
    }

    #[test]
    fn transport_error_uses_the_generic_message() {
        let err = ApiError::Transport(TRANSPORT_MESSAGE.to_string());
        assert_eq!(err.to_string(), TRANSPORT_MESSAGE);
        assert!(!err.is_application());
    }
}
