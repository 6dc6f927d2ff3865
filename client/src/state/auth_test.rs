use super::*;
use coursehub::api::ApiError;
use coursehub::guard::{GuardDecision, NavigationIntent};

fn ada() -> Identity {
    Identity {
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        full_name: Some("Ada Lovelace".to_owned()),
        id: None,
    }
}

fn allowed(identity: IdentityState) -> Navigation {
    Navigation { path: "/".to_owned(), decision: GuardDecision::Allowed, identity: Some(identity) }
}

// =============================================================
// Navigation updates
// =============================================================

#[test]
fn new_state_is_loading_without_user() {
    let state = AuthState::new();
    assert!(state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn signed_in_navigation_sets_user() {
    let mut state = AuthState::new();
    state.apply(&allowed(IdentityState::SignedIn(ada())));
    assert!(!state.loading);
    assert_eq!(state.display_name(), Some("Ada Lovelace"));
}

#[test]
fn anonymous_navigation_clears_user() {
    let mut state = AuthState::new();
    state.apply(&allowed(IdentityState::SignedIn(ada())));
    state.apply(&allowed(IdentityState::Anonymous));
    assert_eq!(state.user, None);
}

#[test]
fn transient_failure_keeps_previous_user() {
    let mut state = AuthState::new();
    state.apply(&allowed(IdentityState::SignedIn(ada())));
    state.apply(&allowed(IdentityState::Unavailable(ApiError::Transient("offline".to_owned()))));
    assert!(state.stale);
    assert_eq!(state.user, Some(ada()));
}

#[test]
fn redirected_navigation_clears_user() {
    let mut state = AuthState::new();
    state.apply(&allowed(IdentityState::SignedIn(ada())));
    state.apply(&Navigation {
        path: "/profile".to_owned(),
        decision: GuardDecision::Redirecting {
            to: "/login".to_owned(),
            intent: NavigationIntent { path: "/profile".to_owned() },
        },
        identity: None,
    });
    assert_eq!(state.user, None);
    assert!(!state.loading);
}

#[test]
fn sign_out_clears_user_and_staleness() {
    let mut state = AuthState::new();
    state.apply(&allowed(IdentityState::SignedIn(ada())));
    state.sign_out();
    assert_eq!(state.display_name(), None);
    assert!(!state.stale);
}

// =============================================================
// Out-of-order lookups
// =============================================================

#[test]
fn current_ticket_is_applied() {
    let mut state = AuthState::new();
    let ticket = state.begin_refresh();
    assert!(state.apply_current(ticket, &allowed(IdentityState::SignedIn(ada()))));
    assert_eq!(state.user, Some(ada()));
}

#[test]
fn superseded_lookup_is_dropped() {
    let mut state = AuthState::new();
    let older = state.begin_refresh();
    let newer = state.begin_refresh();
    assert!(state.apply_current(newer, &allowed(IdentityState::Anonymous)));
    assert!(!state.apply_current(older, &allowed(IdentityState::SignedIn(ada()))));
    assert_eq!(state.user, None);
}

#[test]
fn lookup_resolving_after_sign_out_does_not_restore_user() {
    let mut state = AuthState::new();
    let ticket = state.begin_refresh();
    state.sign_out();
    assert!(!state.apply_current(ticket, &allowed(IdentityState::SignedIn(ada()))));
    assert_eq!(state.user, None);
}
