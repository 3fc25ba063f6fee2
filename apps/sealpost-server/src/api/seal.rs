//! Seal/open HTTP handlers.

use axum::extract::State;
use axum::Json;
use tracing::warn;

use sp_crypto::hybrid;
use sp_proto::api::{DecryptResponse, EncryptRequest, ErrorResponse};
use sp_proto::Envelope;

use crate::error::ApiError;
use crate::state::AppState;

/// Seal a plaintext message into a four-field envelope.
#[utoipa::path(
    post,
    path = "/api/encrypt",
    tag = "Sealing",
    request_body = EncryptRequest,
    responses(
        (status = 200, description = "Message sealed", body = Envelope),
        (status = 400, description = "Missing or empty message", body = ErrorResponse),
        (status = 500, description = "Encryption failed", body = ErrorResponse)
    )
)]
pub async fn encrypt_message(
    State(state): State<AppState>,
    Json(req): Json<EncryptRequest>,
) -> Result<Json<Envelope>, ApiError> {
    if req.message.is_empty() {
        return Err(ApiError::MissingMessage);
    }

    let parts = hybrid::seal(&req.message, &state.sealing_key).map_err(|err| {
        warn!(%err, "seal failed");
        ApiError::EncryptFailed
    })?;

    Ok(Json(Envelope::from_parts(&parts)))
}

/// Open an envelope and return the recovered plaintext.
///
/// All failure causes map to the same 422 response; only the server log
/// records whether the envelope was malformed, the key did not match, or
/// the tag failed verification.
#[utoipa::path(
    post,
    path = "/api/decrypt",
    tag = "Sealing",
    request_body = Envelope,
    responses(
        (status = 200, description = "Message opened", body = DecryptResponse),
        (status = 422, description = "Envelope could not be opened", body = ErrorResponse)
    )
)]
pub async fn decrypt_message(
    State(state): State<AppState>,
    Json(envelope): Json<Envelope>,
) -> Result<Json<DecryptResponse>, ApiError> {
    let parts = envelope.to_parts().map_err(|err| {
        warn!(%err, "envelope rejected");
        ApiError::DecryptFailed
    })?;

    let decrypted = hybrid::open(&parts, &state.opening_key).map_err(|err| {
        warn!(%err, "open failed");
        ApiError::DecryptFailed
    })?;

    Ok(Json(DecryptResponse { decrypted }))
}
