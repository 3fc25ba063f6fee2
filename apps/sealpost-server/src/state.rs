use std::sync::Arc;

use sp_crypto::keys::{OpeningKey, SealingKey};

/// Shared, immutable per-process state. The keys are parsed once at startup
/// and injected into each seal/open call; no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub sealing_key: Arc<SealingKey>,
    pub opening_key: Arc<OpeningKey>,
}

impl AppState {
    pub fn new(sealing_key: SealingKey, opening_key: OpeningKey) -> Self {
        Self {
            sealing_key: Arc::new(sealing_key),
            opening_key: Arc::new(opening_key),
        }
    }
}
