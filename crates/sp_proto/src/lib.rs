//! sp_proto — Sealpost wire types
//!
//! - `envelope` — the four-field sealed-message envelope and its base64 codec
//! - `api`      — request/response JSON bodies for the HTTP boundary
//! - `error`    — envelope format errors

pub mod api;
pub mod envelope;
pub mod error;

pub use envelope::Envelope;
pub use error::EnvelopeError;
