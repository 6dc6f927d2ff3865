//! Top navigation bar with the account menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is mounted once inside the router and owns the route-change
//! subscription: every new pathname runs through the navigation shell, and
//! the resulting identity is written into the shared `AuthState`.

use coursehub::guard::IntentSlot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api;
use crate::state::auth::AuthState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let intents = expect_context::<IntentSlot>();
    let location = use_location();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);
    let go_to = RwSignal::new(None::<String>);

    let route_intents = intents.clone();
    Effect::new(move || {
        let path = location.pathname.get();
        menu_open.set(false);
        let shell = api::shell(route_intents.clone());
        let Some(ticket) = auth.try_update(AuthState::begin_refresh) else {
            return;
        };
        spawn_local(async move {
            let navigation = shell.on_route_change(&path).await;
            auth.update(|state| {
                state.apply_current(ticket, &navigation);
            });
        });
    });

    Effect::new(move || {
        if let Some(path) = go_to.get() {
            go_to.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        let landing = api::shell(intents.clone()).logout();
        auth.update(AuthState::sign_out);
        menu_open.set(false);
        go_to.set(Some(landing));
    };

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <div class="logo">
                    <a href="/">
                        <img src="/assets/logo.png" alt="CourseHub" width="164" height="42"/>
                    </a>
                </div>
                <ul class="nav-links">
                    <li><a href="/">"Courses"</a></li>
                    <li><a href="/my-courses">"My courses"</a></li>
                </ul>
            </div>
            <div class="navbar-actions">
                {move || {
                    let state = auth.get();
                    if state.loading {
                        return ().into_any();
                    }
                    let Some(user) = state.user else {
                        return view! { <a class="btn-login" href="/login">"Login"</a> }.into_any();
                    };
                    let on_logout = on_logout.clone();
                    view! {
                        <div class="user-menu">
                            <button class="btn-profile" on:click=move |_| menu_open.update(|open| *open = !*open)>
                                <span>{user.username.clone()}</span>
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="profile-dropdown">
                                    <div class="dropdown-header">
                                        <p class="dropdown-username">{user.username.clone()}</p>
                                        <p class="dropdown-email">{user.email.clone()}</p>
                                    </div>
                                    <div class="dropdown-divider"></div>
                                    <a class="dropdown-item" href="/profile">"My Profile"</a>
                                    <a class="dropdown-item" href="/my-courses">"My Courses"</a>
                                    <div class="dropdown-divider"></div>
                                    <button class="dropdown-item logout" on:click=on_logout.clone()>
                                        "Logout"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </nav>
    }
}
