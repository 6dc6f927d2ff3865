//! Login page: username + password against the token endpoint.
//!
//! On success the visitor continues to the restricted page that sent them
//! here (the pending navigation intent), or to the landing page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use coursehub::api::ApiError;
use coursehub::forms::validate_login;
use coursehub::guard::IntentSlot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::browser::LocalStorageSession;

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

fn login_failed_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Incorrect username or password.".to_owned(),
        other => api::submit_failed_message(other, LOGIN_FAILED),
    }
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Logging in..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let intents = expect_context::<IntentSlot>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let go_to = RwSignal::new(None::<String>);

    go_to.set(api::signed_in_redirect(&LocalStorageSession));

    Effect::new(move || {
        if let Some(path) = go_to.get() {
            go_to.set(None);
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let shell = api::shell(intents.clone());
        spawn_local(async move {
            match shell.login(&credentials).await {
                Ok((_, destination)) => go_to.set(Some(destination)),
                Err(e) => error.set(Some(login_failed_message(&e))),
            }
            busy.set(false);
        });
    };

    view! {
        <Title text="Login"/>
        <div class="auth-page">
            <div class="auth-container">
                <div class="auth-box">
                    <h1 class="auth-title">"Login to Your Account"</h1>
                    <p class="auth-subtitle">"Welcome back! Please enter your details."</p>
                    {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}
                    <form class="auth-form" on:submit=on_submit>
                        <div class="form-group">
                            <label for="username">"Username"</label>
                            <input
                                id="username"
                                type="text"
                                placeholder="Enter your username"
                                prop:value=move || username.get()
                                on:input=move |ev| {
                                    username.set(event_target_value(&ev));
                                    error.set(None);
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                id="password"
                                type="password"
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    password.set(event_target_value(&ev));
                                    error.set(None);
                                }
                            />
                        </div>
                        <button class="btn-submit" type="submit" disabled=move || busy.get()>
                            {move || submit_label(busy.get())}
                        </button>
                    </form>
                    <p class="auth-footer">"Don't have an account? " <a href="/register">"Register here"</a></p>
                </div>
            </div>
        </div>
    }
}
