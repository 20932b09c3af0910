use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::config::{Config, FALLBACK_SECRET_KEY};
use crate::content::Catalog;

/// Shared application state injected into all route handlers via Axum
/// extractors. The catalog is built once at startup and never mutated, so
/// cloning the state per request is an `Arc` bump.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    /// Signing key for the one-shot notice cookie, derived from
    /// `Config::secret_key`. Extracted by `SignedCookieJar` via `FromRef`.
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cookie_key = derive_cookie_key(&config.secret_key);
        AppState {
            config,
            catalog: Arc::new(Catalog::new()),
            cookie_key,
        }
    }
}

/// `Key::derive_from` requires at least 32 bytes of material; the secret is
/// cycled up to 64 bytes so short keys (including the insecure default)
/// still produce a valid signing key.
fn derive_cookie_key(secret: &str) -> Key {
    let secret = if secret.is_empty() {
        FALLBACK_SECRET_KEY
    } else {
        secret
    };
    let mut material = Vec::with_capacity(64);
    while material.len() < 64 {
        material.extend_from_slice(secret.as_bytes());
    }
    Key::derive_from(&material)
}
