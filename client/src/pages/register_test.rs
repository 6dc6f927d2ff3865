use super::*;
use coursehub::session::MemorySessionStore;

#[test]
fn registration_continues_to_login() {
    assert_eq!(after_registration(), "/login");
}

#[test]
fn signed_in_visitor_skips_registration() {
    let session = MemorySessionStore::with_token("jwt");
    assert_eq!(api::signed_in_redirect(&session).as_deref(), Some("/"));
}

#[test]
fn submit_label_reflects_progress() {
    assert_eq!(submit_label(false), "Register");
    assert_eq!(submit_label(true), "Creating account...");
}
