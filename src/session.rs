//! Bearer-credential storage.
//!
//! DESIGN
//! ======
//! The store is a dumb holder: it never inspects token shape or expiry.
//! Validity is discovered reactively, when the identity cache sees the server
//! reject the credential. Stores are injected rather than global so each
//! consumer (browser, CLI, tests) picks its own persistence.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

/// Error returned by [`SessionStore::set`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The credential was empty; the store was left untouched.
    #[error("refusing to store an empty credential")]
    EmptyToken,
    /// The backing storage rejected the write.
    #[error("session storage unavailable: {0}")]
    Storage(String),
}

/// Holder of the single bearer credential for this user agent.
pub trait SessionStore {
    /// Return the stored credential, if any. No side effects.
    fn get(&self) -> Option<String>;

    /// Store `token`, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for an empty or blank token and
    /// [`SessionError::Storage`] if the backing storage rejects the write.
    fn set(&self, token: &str) -> Result<(), SessionError>;

    /// Remove any stored credential. Idempotent.
    fn clear(&self);

    /// Whether [`SessionStore::get`] would return a credential.
    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

/// Reject empty or whitespace-only credentials before they reach storage.
///
/// # Errors
///
/// Returns [`SessionError::EmptyToken`] when `token` has no visible content.
pub fn ensure_non_empty(token: &str) -> Result<(), SessionError> {
    if token.trim().is_empty() {
        return Err(SessionError::EmptyToken);
    }
    Ok(())
}

/// In-process store. Clones share the same cell.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Arc::new(RwLock::new(Some(token.to_owned()))) }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        ensure_non_empty(token)?;
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        (**self).set(token)
    }

    fn clear(&self) {
        (**self).clear();
    }

    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}
