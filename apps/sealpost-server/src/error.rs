//! Boundary error mapping.
//!
//! Every failure on the decrypt path (format violation, key unwrap, tag
//! mismatch) collapses into one identical response, so a remote caller
//! cannot distinguish a bad key from a bad tag. The specific cause is
//! logged server-side only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use sp_proto::api::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    /// The `message` field is missing or empty.
    MissingMessage,
    /// Encrypt path failed.
    EncryptFailed,
    /// Decrypt path failed, for any reason.
    DecryptFailed,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingMessage => StatusCode::BAD_REQUEST,
            ApiError::EncryptFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::DecryptFailed => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::MissingMessage => "invalid_request",
            ApiError::EncryptFailed => "encrypt_failed",
            ApiError::DecryptFailed => "decrypt_failed",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MissingMessage => {
                write!(f, "The \"message\" field is required and must be a non-empty string")
            }
            ApiError::EncryptFailed => write!(f, "Unable to encrypt message"),
            ApiError::DecryptFailed => write!(f, "Unable to decrypt message"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        });
        (status, body).into_response()
    }
}
