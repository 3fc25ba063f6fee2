use thiserror::Error;

/// Envelope format violations, detected before any key is touched.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("Field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("Field `{field}` is not valid base64: {source}")]
    Base64 {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Field `{field}` must decode to {expected} bytes, got {actual}")]
    BadLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}
