//! API request/response types. These map directly to JSON bodies on the
//! wire; the decrypt request body is the [`crate::Envelope`] itself.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EncryptRequest {
    /// Plaintext to seal. UTF-8, whole-message (no streaming).
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DecryptResponse {
    /// Recovered plaintext.
    pub decrypted: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_request_shape() {
        let req: EncryptRequest =
            serde_json::from_str(r#"{"message":"Hello, world!"}"#).unwrap();
        assert_eq!(req.message, "Hello, world!");
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_string(&ErrorResponse {
            error: "Unable to decrypt message".into(),
            code: "decrypt_failed".into(),
        })
        .unwrap();
        assert!(json.contains("\"code\":\"decrypt_failed\""));
    }
}
