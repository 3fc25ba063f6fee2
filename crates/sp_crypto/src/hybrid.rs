//! Hybrid sealing: AES-256-GCM for the payload, RSA-OAEP for the key.
//!
//! `seal` generates a fresh session key and nonce for every call; the key is
//! wrapped under the recipient public key and never reused or cached. `open`
//! reverses the transform and fails closed on any integrity violation.
//!
//! Both operations are single-shot and stateless; the only shared resource
//! is the OS RNG. Base64 framing lives in `sp_proto`, not here.

use zeroize::Zeroizing;

use crate::aead;
use crate::error::CryptoError;
use crate::keys::{OpeningKey, SealingKey};
use crate::keywrap;

/// Raw output of one seal operation. All four parts are required to open it;
/// none is individually meaningful.
#[derive(Debug, Clone)]
pub struct SealedParts {
    /// Session key, RSA-OAEP-encrypted under the recipient public key.
    pub wrapped_key: Vec<u8>,
    /// 12-byte GCM nonce.
    pub nonce: [u8; aead::NONCE_LEN],
    /// 16-byte GCM authentication tag.
    pub tag: [u8; aead::TAG_LEN],
    /// Ciphertext of the UTF-8 plaintext.
    pub ciphertext: Vec<u8>,
}

/// Encrypt `plaintext` for `recipient`. Whole-message; no partial output on
/// failure.
pub fn seal(plaintext: &str, recipient: &SealingKey) -> Result<SealedParts, CryptoError> {
    let session_key = aead::generate_key();
    let out = aead::encrypt(&session_key, plaintext.as_bytes())?;
    let wrapped_key = keywrap::wrap_key(recipient, &session_key)?;

    Ok(SealedParts {
        wrapped_key,
        nonce: out.nonce,
        tag: out.tag,
        ciphertext: out.ciphertext,
    })
}

/// Recover the plaintext, verifying the authentication tag. Never retried:
/// an integrity failure cannot succeed on a second attempt.
pub fn open(parts: &SealedParts, recipient: &OpeningKey) -> Result<String, CryptoError> {
    let session_key = keywrap::unwrap_key(recipient, &parts.wrapped_key)?;
    let plaintext: Zeroizing<Vec<u8>> =
        aead::decrypt(&session_key, &parts.nonce, &parts.ciphertext, &parts.tag)?;
    String::from_utf8(plaintext.to_vec()).map_err(|_| CryptoError::Utf8)
}
