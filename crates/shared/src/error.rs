use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestErrorKind {
    /// The payload could not be serialized; nothing was sent.
    Encode,
    /// The request never produced an HTTP response.
    Transport,
    /// The service answered with a non-2xx status.
    Status { code: u16 },
    /// A 2xx body that does not match the expected schema.
    MalformedResponse,
    /// A newer submission was issued before this one settled.
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct RequestError {
    pub kind: RequestErrorKind,
    pub message: String,
}

impl RequestError {
    pub fn new(kind: RequestErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::Encode, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::Transport, message)
    }

    /// Uses the response body as the message, falling back to one naming the status code.
    pub fn status(code: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("요청 실패 (status: {code})")
        } else {
            body.to_string()
        };
        Self::new(RequestErrorKind::Status { code }, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::MalformedResponse, message)
    }

    pub fn superseded() -> Self {
        Self::new(
            RequestErrorKind::Superseded,
            "superseded by a newer submission",
        )
    }

    pub fn is_superseded(&self) -> bool {
        self.kind == RequestErrorKind::Superseded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_body_text() {
        let err = RequestError::status(500, "server down");
        assert_eq!(err.to_string(), "server down");
        assert_eq!(err.kind, RequestErrorKind::Status { code: 500 });
    }

    #[test]
    fn status_error_synthesizes_message_for_empty_body() {
        let err = RequestError::status(502, "  ");
        assert_eq!(err.message, "요청 실패 (status: 502)");
    }
}
