//! Token Store
//!
//! Holds the signed auth token the way a browser would hold a cookie: a named
//! value with a 7-day expiry, persisted to a small TOML file so a session
//! survives restarts.
//!
//! ## Role checks
//!
//! `is_logged_in` and `is_admin` are recomputed from the current token on every
//! call. Nothing is cached, so they are never stale after login or logout. The
//! admin check decodes the token claims without verifying the signature; it only
//! decides which controls to render, and the server re-validates every request.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use movie_catalog::egui_app::token_store::TokenStore;
//!
//! let store = TokenStore::open("/tmp/auth_token.toml").unwrap();
//! store.set("eyJhbGciOi...").unwrap();
//! assert!(store.is_logged_in());
//! store.remove().unwrap();
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::auth::TokenClaims;

/// Cookie name
pub const TOKEN_KEY: &str = "authToken";

/// Cookie lifetime
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Token persistence errors
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode token file: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Persisted cookie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StoredCookie {
    name: String,
    value: String,
    expires_at: DateTime<Utc>,
}

impl StoredCookie {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug)]
struct Inner {
    path: Option<PathBuf>,
    cookie: Option<StoredCookie>,
}

/// Cookie-like credential store, cheap to clone and shared with request tasks
#[derive(Debug, Clone)]
pub struct TokenStore {
    inner: Arc<RwLock<Inner>>,
}

impl TokenStore {
    /// Open a file-backed store, loading any cookie already on disk.
    ///
    /// A missing file is an empty store. A corrupt file is logged and ignored.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TokenStoreError> {
        let path = path.into();
        let cookie = match std::fs::read_to_string(&path) {
            Ok(source) => match toml::from_str::<StoredCookie>(&source) {
                Ok(cookie) if cookie.name == TOKEN_KEY => Some(cookie),
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable token file");
                    None
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(Inner { path: Some(path), cookie })),
        })
    }

    /// A store that never touches disk
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner { path: None, cookie: None })),
        }
    }

    /// Store a token with the standard 7-day expiry.
    ///
    /// The in-memory value is updated even when persisting fails.
    pub fn set(&self, token: impl Into<String>) -> Result<(), TokenStoreError> {
        self.set_with_expiry(token, Utc::now() + Duration::days(TOKEN_TTL_DAYS))
    }

    pub fn set_with_expiry(&self, token: impl Into<String>, expires_at: DateTime<Utc>) -> Result<(), TokenStoreError> {
        let cookie = StoredCookie {
            name: TOKEN_KEY.to_string(),
            value: token.into(),
            expires_at,
        };

        let mut inner = self.write();
        inner.cookie = Some(cookie.clone());
        match inner.path {
            Some(ref path) => persist(path, &cookie),
            None => Ok(()),
        }
    }

    /// The current token, unless absent or expired
    pub fn get(&self) -> Option<String> {
        let now = Utc::now();
        self.read()
            .cookie
            .as_ref()
            .filter(|cookie| cookie.is_live(now))
            .map(|cookie| cookie.value.clone())
    }

    /// Forget the token in memory and on disk
    pub fn remove(&self) -> Result<(), TokenStoreError> {
        let mut inner = self.write();
        inner.cookie = None;
        if let Some(ref path) = inner.path {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.get().map(|token| is_admin_token(&token)).unwrap_or(false)
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<PathBuf> {
        self.read().path.clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn persist(path: &Path, cookie: &StoredCookie) -> Result<(), TokenStoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let source = toml::to_string(cookie)?;
    std::fs::write(path, source)?;
    Ok(())
}

/// Read the claims of a token without verifying its signature
pub fn decode_claims(token: &str) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = jsonwebtoken::decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

/// Whether a token carries `role: "admin"`. Fails closed.
pub fn is_admin_token(token: &str) -> bool {
    match decode_claims(token) {
        Ok(claims) => claims.is_admin(),
        Err(e) => {
            tracing::warn!(error = %e, "error decoding token, treating as non-admin");
            false
        }
    }
}
