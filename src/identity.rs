//! Current-user lookup with session invalidation.
//!
//! TRADE-OFFS
//! ==========
//! Only an `Unauthorized` rejection clears the session. Timeouts and 5xx
//! responses propagate to the caller with the session intact, so a flaky
//! network never signs the user out. Nothing is cached between calls: every
//! navigation pays its own round trip and concurrent callers are not
//! coalesced.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::api::{ApiClient, ApiError, Transport};
use crate::session::SessionStore;
use crate::types::Identity;

/// Fetches the signed-in user on demand.
#[derive(Debug, Clone)]
pub struct IdentityCache<T, S> {
    api: ApiClient<T, S>,
}

impl<T: Transport, S: SessionStore> IdentityCache<T, S> {
    pub fn new(api: ApiClient<T, S>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        &self.api
    }

    /// Resolve the current user.
    ///
    /// Returns `Ok(None)` without a request when no session is stored, and
    /// `Ok(None)` after clearing the session when the server rejects the
    /// credential.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError::Validation`] and [`ApiError::Transient`]; the
    /// session is left untouched on those.
    pub async fn fetch_current(&self) -> Result<Option<Identity>, ApiError> {
        if !self.api.session().is_present() {
            return Ok(None);
        }
        match self.api.current_identity().await {
            Ok(identity) => Ok(Some(identity)),
            Err(ApiError::Unauthorized) => {
                self.api.session().clear();
                tracing::info!("stored credential rejected; session cleared");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
