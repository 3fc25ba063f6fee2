//! AES-256-GCM with detached authentication tag.
//!
//! Key: 32 bytes (fresh per message). Nonce: 12 bytes (random, fresh per
//! message). Tag: 16 bytes.
//!
//! The tag travels as its own envelope field instead of being appended to
//! the ciphertext, so encryption splits it off and decryption re-joins it
//! before handing the buffer to the cipher. No associated data is bound.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng as AeadOsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use zeroize::Zeroizing;

use crate::error::CryptoError;

pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 12;
pub const TAG_LEN: usize = 16;

/// Output of one encryption: ciphertext with the nonce and tag detached.
pub struct AeadOutput {
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LEN],
}

/// Generate a fresh 256-bit session key. Zeroized on drop.
pub fn generate_key() -> Zeroizing<[u8; KEY_LEN]> {
    let key = Aes256Gcm::generate_key(&mut AeadOsRng);
    let mut out = Zeroizing::new([0u8; KEY_LEN]);
    out.copy_from_slice(&key);
    out
}

/// Encrypt `plaintext` under `key` with a freshly generated random nonce.
pub fn encrypt(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Result<AeadOutput, CryptoError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| CryptoError::AeadEncrypt)?;

    let nonce = Aes256Gcm::generate_nonce(&mut AeadOsRng);

    let mut combined = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| CryptoError::AeadEncrypt)?;

    // The cipher appends the tag; detach it.
    let tag_vec = combined.split_off(combined.len() - TAG_LEN);
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&tag_vec);

    let mut nonce_out = [0u8; NONCE_LEN];
    nonce_out.copy_from_slice(&nonce);

    Ok(AeadOutput {
        nonce: nonce_out,
        ciphertext: combined,
        tag,
    })
}

/// Decrypt and verify. Fails closed on tag mismatch; partially decrypted
/// bytes never escape. The recovered plaintext zeroizes on drop.
pub fn decrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| CryptoError::Authentication)?;

    let mut combined = Vec::with_capacity(ciphertext.len() + TAG_LEN);
    combined.extend_from_slice(ciphertext);
    combined.extend_from_slice(tag);

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), combined.as_slice())
        .map_err(|_| CryptoError::Authentication)?;

    Ok(Zeroizing::new(plaintext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_decrypt_roundtrip() {
        let key = generate_key();
        let out = encrypt(&key, b"detached tag test").unwrap();
        assert_eq!(out.ciphertext.len(), 17);
        let plaintext = decrypt(&key, &out.nonce, &out.ciphertext, &out.tag).unwrap();
        assert_eq!(&*plaintext, b"detached tag test");
    }

    #[test]
    fn empty_plaintext_is_tag_only() {
        let key = generate_key();
        let out = encrypt(&key, b"").unwrap();
        assert!(out.ciphertext.is_empty());
        let plaintext = decrypt(&key, &out.nonce, &out.ciphertext, &out.tag).unwrap();
        assert!(plaintext.is_empty());
    }

    #[test]
    fn flipped_ciphertext_bit_fails() {
        let key = generate_key();
        let mut out = encrypt(&key, b"integrity").unwrap();
        out.ciphertext[0] ^= 0x01;
        assert!(matches!(
            decrypt(&key, &out.nonce, &out.ciphertext, &out.tag),
            Err(CryptoError::Authentication)
        ));
    }

    #[test]
    fn flipped_tag_bit_fails() {
        let key = generate_key();
        let mut out = encrypt(&key, b"integrity").unwrap();
        out.tag[TAG_LEN - 1] ^= 0x80;
        assert!(matches!(
            decrypt(&key, &out.nonce, &out.ciphertext, &out.tag),
            Err(CryptoError::Authentication)
        ));
    }

    #[test]
    fn wrong_key_fails() {
        let key = generate_key();
        let other = generate_key();
        let out = encrypt(&key, b"secret").unwrap();
        assert!(decrypt(&other, &out.nonce, &out.ciphertext, &out.tag).is_err());
    }
}
