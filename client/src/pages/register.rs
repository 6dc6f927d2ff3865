//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use coursehub::forms::{FieldErrors, RegistrationDraft, RegistrationField};
use coursehub::guard::RouteGuard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::browser::LocalStorageSession;

const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// New accounts continue to the login page.
fn after_registration() -> String {
    RouteGuard::default().entry_path().to_owned()
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Creating account..." } else { "Register" }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let draft = RwSignal::new(RegistrationDraft::default());
    let errors = RwSignal::new(FieldErrors::<RegistrationField>::new());
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let go_to = RwSignal::new(api::signed_in_redirect(&LocalStorageSession));

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
        let registration = match draft.with_untracked(RegistrationDraft::validate) {
            Ok(registration) => registration,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::new());
        banner.set(None);
        busy.set(true);
        spawn_local(async move {
            match api::api().register(&registration).await {
                Ok(_) => go_to.set(Some(after_registration())),
                Err(e) => banner.set(Some(api::submit_failed_message(&e, REGISTRATION_FAILED))),
            }
            busy.set(false);
        });
    };

    let field_error = move |field: RegistrationField| {
        move || {
            errors
                .with(|found| found.get(&field).copied())
                .map(|message| view! { <span class="form-error">{message}</span> })
        }
    };

    view! {
        <Title text="Register"/>
        <div class="auth-page">
            <div class="auth-container">
                <div class="auth-box">
                    <h1 class="auth-title">"Create an Account"</h1>
                    <p class="auth-subtitle">"Join and start publishing courses."</p>
                    {move || banner.get().map(|message| view! { <div class="error-message">{message}</div> })}
                    <form class="auth-form" on:submit=on_submit>
                        <div class="form-group">
                            <label for="username">"Username"</label>
                            <input
                                id="username"
                                type="text"
                                placeholder="3 to 50 characters"
                                prop:value=move || draft.with(|d| d.username.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.username = value);
                                }
                            />
                            {field_error(RegistrationField::Username)}
                        </div>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || draft.with(|d| d.email.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.email = value);
                                }
                            />
                            {field_error(RegistrationField::Email)}
                        </div>
                        <div class="form-group">
                            <label for="full_name">"Full name (optional)"</label>
                            <input
                                id="full_name"
                                type="text"
                                prop:value=move || draft.with(|d| d.full_name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.full_name = value);
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                id="password"
                                type="password"
                                placeholder="At least 6 characters"
                                prop:value=move || draft.with(|d| d.password.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.password = value);
                                }
                            />
                            {field_error(RegistrationField::Password)}
                        </div>
                        <button class="btn-submit" type="submit" disabled=move || busy.get()>
                            {move || submit_label(busy.get())}
                        </button>
                    </form>
                    <p class="auth-footer">"Already have an account? " <a href="/login">"Login here"</a></p>
                </div>
            </div>
        </div>
    }
}
