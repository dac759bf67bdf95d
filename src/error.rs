use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure kinds for the bridge. Decode and verification failures surface
/// directly on the HTTP exchange; feed and delivery failures are terminal
/// for the dispatched event that hit them and only observable in the log.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("error decoding request body: {0}")]
    MalformedRequest(String),

    #[error("incorrect verification token")]
    Unauthorized,

    #[error("content feed failure: {0}")]
    ContentSource(String),

    #[error("delivery failure: {0}")]
    Delivery(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::MalformedRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            // No body: nothing about the expected token leaks on a mismatch.
            RelayError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            RelayError::ContentSource(_) | RelayError::Delivery(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}
