//! Route-change handling: guard first, then identity refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app subscribes to the router's location signal and calls
//! [`NavigationShell::on_route_change`] for every new path. Tests and the CLI
//! drive it directly. The shell owns no view state; it reports what the
//! navigation resolved to and leaves rendering to the caller.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::api::{ApiClient, ApiError, Transport};
use crate::guard::{GuardDecision, IntentSlot, RouteGuard};
use crate::identity::IdentityCache;
use crate::session::SessionStore;
use crate::types::{AccessToken, Credentials, Identity};

/// What the identity refresh produced for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentityState {
    /// Signed in as this user.
    SignedIn(Identity),
    /// No session, or the session was just invalidated.
    Anonymous,
    /// The lookup failed transiently; the session is still stored.
    Unavailable(ApiError),
}

impl IdentityState {
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }
}

impl From<Result<Option<Identity>, ApiError>> for IdentityState {
    fn from(result: Result<Option<Identity>, ApiError>) -> Self {
        match result {
            Ok(Some(identity)) => Self::SignedIn(identity),
            Ok(None) => Self::Anonymous,
            Err(e) => Self::Unavailable(e),
        }
    }
}

/// Result of handling one route change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// The path that was requested.
    pub path: String,
    pub decision: GuardDecision,
    /// `None` when the navigation was redirected before any view mounted.
    pub identity: Option<IdentityState>,
}

/// Couples the guard, the intent slot and the identity cache.
#[derive(Debug, Clone)]
pub struct NavigationShell<T, S> {
    guard: RouteGuard,
    intents: IntentSlot,
    identity: IdentityCache<T, S>,
}

impl<T: Transport, S: SessionStore> NavigationShell<T, S> {
    pub fn new(api: ApiClient<T, S>, guard: RouteGuard, intents: IntentSlot) -> Self {
        Self { guard, intents, identity: IdentityCache::new(api) }
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        self.identity.api()
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    pub fn intents(&self) -> &IntentSlot {
        &self.intents
    }

    /// Guard `path` and, if it may render, refresh the identity.
    ///
    /// A redirect records the intent and skips the identity lookup. Any other
    /// path except the login page discards a pending intent.
    pub async fn on_route_change(&self, path: &str) -> Navigation {
        let decision = self.guard.track(self.api().session(), &self.intents, path);
        if !decision.is_allowed() {
            return Navigation { path: path.to_owned(), decision, identity: None };
        }
        let identity = IdentityState::from(self.identity.fetch_current().await);
        Navigation { path: path.to_owned(), decision, identity: Some(identity) }
    }

    /// Log in and return where to go next, consuming any pending intent.
    ///
    /// # Errors
    ///
    /// Propagates the login failure; the pending intent is kept for a retry.
    pub async fn login(&self, credentials: &Credentials) -> Result<(AccessToken, String), ApiError> {
        let token = self.api().login(credentials).await?;
        let destination = self.guard.post_login_destination(&self.intents);
        Ok((token, destination))
    }

    /// Clear the session and return the landing path.
    pub fn logout(&self) -> String {
        self.api().logout();
        self.guard.landing_path().to_owned()
    }
}
