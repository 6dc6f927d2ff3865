//! Ready-made API clients for the browser.
//!
//! Every view builds its own short-lived client: the token lives in
//! `localStorage`, so clients carry no state worth sharing.
//!
//! ERROR HANDLING
//! ==============
//! Views never show raw transport text. [`list_failed_message`] and
//! [`submit_failed_message`] turn an `ApiError` into the sentence rendered
//! next to the failing control.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use coursehub::api::{ApiClient, ApiError};
use coursehub::guard::{IntentSlot, RouteGuard};
use coursehub::identity::IdentityCache;
use coursehub::session::SessionStore;
use coursehub::shell::NavigationShell;
use coursehub::ApiConfig;

use super::browser::{BrowserTransport, LocalStorageSession};

pub type Api = ApiClient<BrowserTransport, LocalStorageSession>;
pub type Shell = NavigationShell<BrowserTransport, LocalStorageSession>;

/// Shown when a course list cannot be loaded.
pub const LIST_FAILED: &str = "Failed to load courses. Please try again later.";

const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// API base URL baked in at build time; empty means same origin.
fn base_url() -> &'static str {
    option_env!("COURSEHUB_API_URL").unwrap_or("")
}

pub fn config() -> ApiConfig {
    ApiConfig::new(base_url())
}

pub fn api() -> Api {
    ApiClient::new(config(), BrowserTransport, LocalStorageSession)
}

pub fn identity_cache() -> IdentityCache<BrowserTransport, LocalStorageSession> {
    IdentityCache::new(api())
}

/// Shell sharing the app-wide intent slot.
pub fn shell(intents: IntentSlot) -> Shell {
    NavigationShell::new(api(), RouteGuard::default(), intents)
}

/// Where the login and register pages send a visitor who already has a
/// session; `None` lets the page render.
pub fn signed_in_redirect<S: SessionStore + ?Sized>(session: &S) -> Option<String> {
    session.is_present().then(|| RouteGuard::default().landing_path().to_owned())
}

pub fn list_failed_message(err: &ApiError) -> String {
    log_failure("list", err);
    LIST_FAILED.to_owned()
}

/// Message for a failed form submission: the server's own wording for
/// rejected input, `fallback` for anything else.
pub fn submit_failed_message(err: &ApiError, fallback: &str) -> String {
    log_failure("submit", err);
    match err {
        ApiError::Validation(message) if !message.is_empty() => message.clone(),
        ApiError::Unauthorized => SESSION_EXPIRED.to_owned(),
        _ => fallback.to_owned(),
    }
}

fn log_failure(action: &str, err: &ApiError) {
    #[cfg(feature = "csr")]
    log::warn!("{action} failed: {err}");
    #[cfg(not(feature = "csr"))]
    let _ = (action, err);
}
