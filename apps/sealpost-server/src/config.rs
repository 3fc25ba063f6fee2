//! Environment configuration.
//!
//! Key material arrives out-of-band as PEM, inline or via a file path:
//!
//!   SEALPOST_PUBLIC_KEY   / SEALPOST_PUBLIC_KEY_FILE
//!   SEALPOST_PRIVATE_KEY  / SEALPOST_PRIVATE_KEY_FILE
//!
//! plus HOST (default 0.0.0.0) and PORT (default 3000) for the bind
//! address. Keys are parsed once at startup and held in AppState; the
//! crypto layer itself never reads the environment.

use std::env;
use std::net::SocketAddr;

use anyhow::{bail, Context, Result};
use zeroize::Zeroizing;

use sp_crypto::keys::{OpeningKey, SealingKey};

pub struct Config {
    pub addr: SocketAddr,
    pub sealing_key: SealingKey,
    pub opening_key: OpeningKey,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let public_pem = load_pem("SEALPOST_PUBLIC_KEY", "SEALPOST_PUBLIC_KEY_FILE")?;
        let private_pem = load_pem("SEALPOST_PRIVATE_KEY", "SEALPOST_PRIVATE_KEY_FILE")?;

        let sealing_key =
            SealingKey::from_pem(&public_pem).context("parsing SEALPOST_PUBLIC_KEY")?;
        let opening_key =
            OpeningKey::from_pem(&private_pem).context("parsing SEALPOST_PRIVATE_KEY")?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a number")?;
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .context("parsing bind address")?;

        Ok(Self {
            addr,
            sealing_key,
            opening_key,
        })
    }
}

fn load_pem(inline_var: &str, file_var: &str) -> Result<Zeroizing<String>> {
    if let Ok(pem) = env::var(inline_var) {
        return Ok(Zeroizing::new(pem));
    }
    if let Ok(path) = env::var(file_var) {
        let pem = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {file_var} ({path})"))?;
        return Ok(Zeroizing::new(pem));
    }
    bail!("{inline_var} or {file_var} must be set");
}
