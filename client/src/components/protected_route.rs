//! Wrapper that renders its children only when a session is present.
//!
//! Evaluated synchronously on every location change, before any restricted
//! view mounts or issues a request. A denied visit records the requested path
//! in the shared [`IntentSlot`] and replaces itself with a redirect to the
//! login route.

use coursehub::guard::{GuardDecision, IntentSlot, RouteGuard};
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::net::browser::LocalStorageSession;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let intents = expect_context::<IntentSlot>();
    let location = use_location();
    let guard = RouteGuard::default();

    move || {
        let path = location.pathname.get();
        match guard.track(&LocalStorageSession, &intents, &path) {
            GuardDecision::Allowed => children().into_any(),
            GuardDecision::Redirecting { to, .. } => view! { <Redirect path=to/> }.into_any(),
        }
    }
}
