//! RSA-OAEP key transport for the one-time session key.
//!
//! OAEP with SHA-256. A 2048-bit modulus gives 190 bytes of payload
//! capacity, comfortably above the 32-byte session key.

use rand::rngs::OsRng;
use rsa::Oaep;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::aead::KEY_LEN;
use crate::error::CryptoError;
use crate::keys::{OpeningKey, SealingKey};

/// Encrypt a 32-byte session key under the recipient public key.
pub fn wrap_key(recipient: &SealingKey, session_key: &[u8; KEY_LEN]) -> Result<Vec<u8>, CryptoError> {
    let mut rng = OsRng;
    recipient
        .0
        .encrypt(&mut rng, Oaep::new::<Sha256>(), session_key)
        .map_err(|_| CryptoError::KeyWrap)
}

/// Decrypt a wrapped session key. Anything other than exactly 32 recovered
/// bytes (wrong private key, corrupted blob) is an unwrap failure.
pub fn unwrap_key(
    recipient: &OpeningKey,
    wrapped: &[u8],
) -> Result<Zeroizing<[u8; KEY_LEN]>, CryptoError> {
    let recovered = Zeroizing::new(
        recipient
            .0
            .decrypt(Oaep::new::<Sha256>(), wrapped)
            .map_err(|_| CryptoError::KeyUnwrap)?,
    );
    if recovered.len() != KEY_LEN {
        return Err(CryptoError::KeyUnwrap);
    }
    let mut out = Zeroizing::new([0u8; KEY_LEN]);
    out.copy_from_slice(&recovered);
    Ok(out)
}
