use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    #[error("Invalid key material: {0}")]
    InvalidKey(String),

    #[error("AEAD encryption failed")]
    AeadEncrypt,

    #[error("AEAD decryption failed (authentication tag mismatch, possible tampering)")]
    Authentication,

    #[error("Session key wrap failed")]
    KeyWrap,

    #[error("Session key unwrap failed")]
    KeyUnwrap,

    #[error("Decrypted payload is not valid UTF-8")]
    Utf8,
}
