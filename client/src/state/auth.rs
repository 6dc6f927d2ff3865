//! Signed-in user as seen by the navbar and other identity-aware chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Updated from every [`Navigation`] the shell reports. A transient identity
//! failure keeps the previous user; only an anonymous result clears it.
//! Lookups resolve out of order, so each carries a ticket from
//! [`AuthState::begin_refresh`] and only the newest one is applied.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use coursehub::shell::{IdentityState, Navigation};
use coursehub::types::Identity;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
    /// True until the first identity lookup settles.
    pub loading: bool,
    /// Set when the last lookup failed transiently.
    pub stale: bool,
    refresh: u64,
}

impl AuthState {
    pub fn new() -> Self {
        Self { user: None, loading: true, stale: false, refresh: 0 }
    }

    /// Start an identity lookup; the returned ticket supersedes older ones.
    pub fn begin_refresh(&mut self) -> u64 {
        self.refresh += 1;
        self.refresh
    }

    /// Apply a lookup started with `ticket`. Returns false, leaving the state
    /// alone, when a newer lookup or a sign-out has happened since.
    pub fn apply_current(&mut self, ticket: u64, navigation: &Navigation) -> bool {
        if ticket != self.refresh {
            return false;
        }
        self.apply(navigation);
        true
    }

    pub fn apply(&mut self, navigation: &Navigation) {
        match &navigation.identity {
            // Redirected before rendering: the session is gone.
            None | Some(IdentityState::Anonymous) => {
                self.user = None;
                self.stale = false;
            }
            Some(IdentityState::SignedIn(identity)) => {
                self.user = Some(identity.clone());
                self.stale = false;
            }
            Some(IdentityState::Unavailable(_)) => self.stale = true,
        }
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.refresh += 1;
        self.user = None;
        self.stale = false;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(Identity::display_name)
    }
}
