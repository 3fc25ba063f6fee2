//! The sealed-message envelope — what crosses the wire.
//!
//! Four opaque base64 fields (standard alphabet, padded), all required for
//! opening, none individually decryptable:
//!
//! ```json
//! { "encryptedKey": "...", "iv": "...", "authTag": "...", "data": "..." }
//! ```
//!
//! The envelope carries no algorithm identifier or version; the cipher suite
//! (RSA-OAEP + AES-256-GCM) is a fixed contract between sealer and opener.
//! It is a transport payload, created by one seal call and consumed by one
//! open call — never stored or updated.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use sp_crypto::aead::{NONCE_LEN, TAG_LEN};
use sp_crypto::hybrid::SealedParts;

use crate::error::EnvelopeError;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Session key under RSA-OAEP, base64.
    pub encrypted_key: String,
    /// 12-byte GCM nonce, base64.
    pub iv: String,
    /// 16-byte GCM authentication tag, base64.
    pub auth_tag: String,
    /// AES-256-GCM ciphertext, base64.
    pub data: String,
}

impl Envelope {
    /// Encode raw sealed parts for the wire.
    pub fn from_parts(parts: &SealedParts) -> Self {
        Self {
            encrypted_key: STANDARD.encode(&parts.wrapped_key),
            iv: STANDARD.encode(parts.nonce),
            auth_tag: STANDARD.encode(parts.tag),
            data: STANDARD.encode(&parts.ciphertext),
        }
    }

    /// Decode and validate all four fields. Rejects empty fields, invalid
    /// base64, and nonce/tag size violations before any key material is
    /// involved.
    ///
    /// `data` alone may be empty: the ciphertext of the empty message is
    /// tag-only.
    pub fn to_parts(&self) -> Result<SealedParts, EnvelopeError> {
        let wrapped_key = decode_field("encryptedKey", &self.encrypted_key)?;
        let nonce = fixed::<NONCE_LEN>("iv", decode_field("iv", &self.iv)?)?;
        let tag = fixed::<TAG_LEN>("authTag", decode_field("authTag", &self.auth_tag)?)?;

        let ciphertext = if self.data.is_empty() {
            Vec::new()
        } else {
            STANDARD.decode(&self.data).map_err(|source| EnvelopeError::Base64 {
                field: "data",
                source,
            })?
        };

        Ok(SealedParts {
            wrapped_key,
            nonce,
            tag,
            ciphertext,
        })
    }
}

fn decode_field(name: &'static str, value: &str) -> Result<Vec<u8>, EnvelopeError> {
    if value.is_empty() {
        return Err(EnvelopeError::EmptyField(name));
    }
    STANDARD
        .decode(value)
        .map_err(|source| EnvelopeError::Base64 {
            field: name,
            source,
        })
}

fn fixed<const N: usize>(
    name: &'static str,
    bytes: Vec<u8>,
) -> Result<[u8; N], EnvelopeError> {
    let actual = bytes.len();
    bytes.try_into().map_err(|_| EnvelopeError::BadLength {
        field: name,
        expected: N,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parts() -> SealedParts {
        SealedParts {
            wrapped_key: vec![0xAA; 256],
            nonce: [0x01; NONCE_LEN],
            tag: [0x02; TAG_LEN],
            ciphertext: b"opaque bytes".to_vec(),
        }
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let json = serde_json::to_value(Envelope::from_parts(&sample_parts())).unwrap();
        assert!(json.get("encryptedKey").is_some());
        assert!(json.get("iv").is_some());
        assert!(json.get("authTag").is_some());
        assert!(json.get("data").is_some());
    }

    #[test]
    fn parts_roundtrip() {
        let parts = sample_parts();
        let decoded = Envelope::from_parts(&parts).to_parts().unwrap();
        assert_eq!(decoded.wrapped_key, parts.wrapped_key);
        assert_eq!(decoded.nonce, parts.nonce);
        assert_eq!(decoded.tag, parts.tag);
        assert_eq!(decoded.ciphertext, parts.ciphertext);
    }

    #[test]
    fn empty_data_decodes_to_empty_ciphertext() {
        let mut envelope = Envelope::from_parts(&sample_parts());
        envelope.data = String::new();
        assert!(envelope.to_parts().unwrap().ciphertext.is_empty());
    }

    #[test]
    fn empty_required_fields_rejected() {
        for field in ["encryptedKey", "iv", "authTag"] {
            let mut envelope = Envelope::from_parts(&sample_parts());
            match field {
                "encryptedKey" => envelope.encrypted_key = String::new(),
                "iv" => envelope.iv = String::new(),
                _ => envelope.auth_tag = String::new(),
            }
            assert!(matches!(
                envelope.to_parts(),
                Err(EnvelopeError::EmptyField(f)) if f == field
            ));
        }
    }

    #[test]
    fn invalid_base64_rejected() {
        let mut envelope = Envelope::from_parts(&sample_parts());
        envelope.data = "not base64 !!!".into();
        assert!(matches!(
            envelope.to_parts(),
            Err(EnvelopeError::Base64 { field: "data", .. })
        ));
    }

    #[test]
    fn wrong_nonce_or_tag_length_rejected() {
        let mut envelope = Envelope::from_parts(&sample_parts());
        envelope.iv = STANDARD.encode([0u8; 8]);
        assert!(matches!(
            envelope.to_parts(),
            Err(EnvelopeError::BadLength { field: "iv", expected: NONCE_LEN, actual: 8 })
        ));

        let mut envelope = Envelope::from_parts(&sample_parts());
        envelope.auth_tag = STANDARD.encode([0u8; 20]);
        assert!(matches!(
            envelope.to_parts(),
            Err(EnvelopeError::BadLength { field: "authTag", expected: TAG_LEN, actual: 20 })
        ));
    }

    #[test]
    fn missing_field_fails_deserialization() {
        let err = serde_json::from_str::<Envelope>(
            r#"{"encryptedKey":"AA==","iv":"AA==","data":"AA=="}"#,
        );
        assert!(err.is_err());
    }
}
