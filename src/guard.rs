//! Protected-navigation gate.
//!
//! DESIGN
//! ======
//! The guard is a synchronous predicate over the session store, re-run on
//! every navigation. A session cleared mid-visit therefore takes effect on the
//! next guarded navigation, not on the view already showing. The requested
//! path travels to the login page as a [`NavigationIntent`] in an
//! [`IntentSlot`], which the post-login redirect drains exactly once. Any
//! other navigation away from the login page discards it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::session::SessionStore;

/// Where unauthenticated visitors are sent.
pub const ENTRY_PATH: &str = "/login";

/// Where a login lands when no intent was recorded.
pub const LANDING_PATH: &str = "/";

/// Pages that require a session.
pub const RESTRICTED_PATHS: [&str; 2] = ["/profile", "/my-courses"];

/// The restricted path a visitor asked for before being sent to log in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    pub path: String,
}

/// Outcome of evaluating the guard for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Allowed,
    /// Go to `to` instead, remembering what was asked for.
    Redirecting { to: String, intent: NavigationIntent },
}

impl GuardDecision {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Decides whether a navigation may render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    entry_path: String,
    landing_path: String,
    restricted: Vec<String>,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(ENTRY_PATH, LANDING_PATH, &RESTRICTED_PATHS)
    }
}

impl RouteGuard {
    #[must_use]
    pub fn new(entry_path: &str, landing_path: &str, restricted: &[&str]) -> Self {
        Self {
            entry_path: entry_path.to_owned(),
            landing_path: landing_path.to_owned(),
            restricted: restricted.iter().map(|path| (*path).to_owned()).collect(),
        }
    }

    #[must_use]
    pub fn entry_path(&self) -> &str {
        &self.entry_path
    }

    #[must_use]
    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }

    /// Whether `path` (query and fragment ignored, trailing slash tolerated)
    /// is a restricted page.
    #[must_use]
    pub fn is_restricted(&self, path: &str) -> bool {
        let bare = normalize_path(path);
        self.restricted.iter().any(|restricted| restricted == bare)
    }

    /// Evaluate a navigation to a restricted destination.
    pub fn evaluate<S: SessionStore + ?Sized>(&self, session: &S, requested: &str) -> GuardDecision {
        if session.is_present() {
            return GuardDecision::Allowed;
        }
        tracing::debug!(%requested, to = %self.entry_path, "no session; redirecting");
        GuardDecision::Redirecting {
            to: self.entry_path.clone(),
            intent: NavigationIntent { path: requested.to_owned() },
        }
    }

    /// Evaluate any navigation: public paths are always allowed.
    pub fn check<S: SessionStore + ?Sized>(&self, session: &S, requested: &str) -> GuardDecision {
        if self.is_restricted(requested) {
            self.evaluate(session, requested)
        } else {
            GuardDecision::Allowed
        }
    }

    /// Guard a navigation and keep `slot` in step with it.
    ///
    /// A redirect records its intent. Arriving anywhere other than the entry
    /// path drops a pending intent, so it only survives the hop to login.
    pub fn track<S: SessionStore + ?Sized>(&self, session: &S, slot: &IntentSlot, requested: &str) -> GuardDecision {
        let decision = self.check(session, requested);
        if !decision.is_allowed() {
            slot.record(&decision);
        } else if normalize_path(requested) != self.entry_path {
            if let Some(stale) = slot.take() {
                tracing::debug!(intent = %stale.path, %requested, "navigated away; intent dropped");
            }
        }
        decision
    }

    /// Where to go after a successful login: the pending intent if any (which
    /// is consumed), else the landing path.
    #[must_use]
    pub fn post_login_destination(&self, slot: &IntentSlot) -> String {
        slot.take()
            .map_or_else(|| self.landing_path.clone(), |intent| intent.path)
    }
}

fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let bare = &path[..end];
    if bare.len() > 1 { bare.trim_end_matches('/') } else { bare }
}

/// Holds at most one pending [`NavigationIntent`]. Clones share the slot.
#[derive(Clone, Debug, Default)]
pub struct IntentSlot {
    pending: Arc<Mutex<Option<NavigationIntent>>>,
}

impl IntentSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `intent`, replacing any older one.
    pub fn store(&self, intent: NavigationIntent) {
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(intent);
    }

    /// Record the intent carried by a redirect decision; no-op for `Allowed`.
    pub fn record(&self, decision: &GuardDecision) {
        if let GuardDecision::Redirecting { intent, .. } = decision {
            self.store(intent.clone());
        }
    }

    /// Remove and return the pending intent.
    #[must_use]
    pub fn take(&self) -> Option<NavigationIntent> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}
