//! sp_crypto — Sealpost hybrid encryption primitives
//!
//! # Design principles
//! - NO custom crypto; all primitives come from audited Rust crates.
//! - One fresh session key and one fresh nonce per message, never reused.
//! - Key material is passed into each call explicitly; nothing here reads
//!   the process environment or caches keys between calls.
//! - Secret buffers (session keys, recovered plaintext) are zeroized on drop.
//!
//! # Module layout
//! - `keys`    — RSA key pair handling (generation, PEM import/export)
//! - `aead`    — AES-256-GCM with detached authentication tag
//! - `keywrap` — RSA-OAEP transport of the one-time session key
//! - `hybrid`  — seal/open composition over the above
//! - `error`   — unified error type

pub mod aead;
pub mod error;
pub mod hybrid;
pub mod keys;
pub mod keywrap;

pub use error::CryptoError;
pub use hybrid::{open, seal, SealedParts};
pub use keys::{OpeningKey, SealingKey};
