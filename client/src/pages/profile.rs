//! Profile page serving both `/profile` and `/my-courses`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `ProtectedRoute`, so a session is present on entry. The
//! page still resolves the identity itself: if the lookup comes back empty
//! (the token was rejected), it records its own path as the navigation intent
//! and sends the visitor to log in.

use coursehub::forms::profile_update;
use coursehub::guard::{ENTRY_PATH, IntentSlot, NavigationIntent};
use coursehub::types::{Course, Identity};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::course_card::CourseCard;
use crate::components::course_form::CourseForm;
use crate::net::api;
use crate::state::my_courses::{CourseModal, MyCoursesState, ProfileTab};

const LOAD_FAILED: &str = "Failed to load your profile. Please try again.";
const DELETE_FAILED: &str = "Failed to delete course";
const UPDATE_FAILED: &str = "Failed to update profile";

#[cfg(feature = "csr")]
fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message("Are you sure you want to delete this course?").ok())
        .unwrap_or(false)
}

#[cfg(not(feature = "csr"))]
fn confirm_delete() -> bool {
    true
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let intents = expect_context::<IntentSlot>();
    let location = use_location();
    let navigate = use_navigate();

    let user = RwSignal::new(None::<Identity>);
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let courses = RwSignal::new(MyCoursesState::default());
    let tab = RwSignal::new(ProfileTab::default());
    let notice = RwSignal::new(None::<String>);
    let go_to = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u32);

    Effect::new(move || {
        if let Some(path) = go_to.get() {
            go_to.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });

    Effect::new(move || {
        reload.track();
        let here = location.pathname.get_untracked();
        let intents = intents.clone();
        loading.set(true);
        load_error.set(None);
        spawn_local(async move {
            match api::identity_cache().fetch_current().await {
                Ok(Some(identity)) => {
                    user.set(Some(identity));
                    match api::api().my_courses().await {
                        Ok(list) => courses.update(|state| state.courses = list),
                        Err(e) => load_error.set(Some(api::submit_failed_message(&e, LOAD_FAILED))),
                    }
                }
                Ok(None) => {
                    intents.store(NavigationIntent { path: here });
                    go_to.set(Some(ENTRY_PATH.to_owned()));
                }
                Err(e) => load_error.set(Some(api::submit_failed_message(&e, LOAD_FAILED))),
            }
            loading.set(false);
        });
    });

    let on_close = Callback::new(move |()| courses.update(|state| state.modal = CourseModal::Closed));
    let on_saved = Callback::new(move |course: Course| courses.update(|state| state.saved(course)));
    let on_edit = Callback::new(move |course: Course| courses.update(|state| state.modal = CourseModal::Editing(course)));
    let on_delete = Callback::new(move |id: String| {
        if !confirm_delete() {
            return;
        }
        spawn_local(async move {
            match api::api().delete_course(&id).await {
                Ok(()) => courses.update(|state| state.remove(&id)),
                Err(e) => notice.set(Some(api::submit_failed_message(&e, DELETE_FAILED))),
            }
        });
    });
    let modal = Signal::derive(move || courses.with(|state| state.modal.clone()));

    view! {
        <Title text="My Profile"/>
        <div class="profile-page">
            <div class="container">
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="profile-loading">
                                <div class="loading-spinner"></div>
                                <p>"Loading profile..."</p>
                            </div>
                        }
                            .into_any();
                    }
                    if let Some(message) = load_error.get() {
                        return view! {
                            <div class="error">
                                <p>{message}</p>
                                <button class="btn-browse-all" on:click=move |_| reload.update(|n| *n += 1)>
                                    "Try Again"
                                </button>
                            </div>
                        }
                            .into_any();
                    }
                    let Some(identity) = user.get() else {
                        return ().into_any();
                    };
                    view! {
                        <div class="profile-header">
                            <div class="profile-info">
                                <h1 class="profile-name">{identity.display_name().to_owned()}</h1>
                                <p class="profile-email">{identity.email.clone()}</p>
                                <p class="profile-username">{format!("@{}", identity.username)}</p>
                            </div>
                            <button
                                class="btn-add-course"
                                on:click=move |_| courses.update(|state| state.modal = CourseModal::Creating)
                            >
                                "+ Add New Course"
                            </button>
                        </div>
                        {move || notice.get().map(|message| view! { <p class="profile-notice">{message}</p> })}
                        <div class="profile-tabs">
                            <button
                                class="profile-tab"
                                class:active=move || tab.get() == ProfileTab::Courses
                                on:click=move |_| tab.set(ProfileTab::Courses)
                            >
                                {move || courses.with(MyCoursesState::tab_label)}
                            </button>
                            <button
                                class="profile-tab"
                                class:active=move || tab.get() == ProfileTab::Settings
                                on:click=move |_| tab.set(ProfileTab::Settings)
                            >
                                "Settings"
                            </button>
                        </div>
                        <div class="profile-content">
                            {move || match tab.get() {
                                ProfileTab::Courses => {
                                    view! { <CourseGrid courses=courses on_edit=on_edit on_delete=on_delete/> }.into_any()
                                }
                                ProfileTab::Settings => view! { <Settings user=user notice=notice/> }.into_any(),
                            }}
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </div>
        <CourseForm modal=modal on_close=on_close on_saved=on_saved/>
    }
}

#[component]
fn CourseGrid(
    courses: RwSignal<MyCoursesState>,
    on_edit: Callback<Course>,
    on_delete: Callback<String>,
) -> impl IntoView {
    move || {
        let list = courses.with(|state| state.courses.clone());
        if list.is_empty() {
            return view! {
                <div class="empty">
                    <p>"You haven't created any courses yet."</p>
                </div>
            }
                .into_any();
        }
        view! {
            <div class="course-grid">
                {list
                    .into_iter()
                    .map(|course| view! { <CourseCard course=course on_edit=on_edit on_delete=on_delete/> })
                    .collect_view()}
            </div>
        }
            .into_any()
    }
}

#[component]
fn Settings(user: RwSignal<Option<Identity>>, notice: RwSignal<Option<String>>) -> impl IntoView {
    let editing = RwSignal::new(false);
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let start_edit = move |_| {
        if let Some(identity) = user.get_untracked() {
            full_name.set(identity.full_name.unwrap_or_default());
            email.set(identity.email);
        }
        error.set(None);
        editing.set(true);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = match profile_update(&full_name.get_untracked(), &email.get_untracked()) {
            Ok(update) => update,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        spawn_local(async move {
            match api::api().update_profile(&update).await {
                Ok(updated) => {
                    user.set(Some(updated));
                    editing.set(false);
                    notice.set(Some("Profile updated successfully!".to_owned()));
                }
                Err(e) => error.set(Some(api::submit_failed_message(&e, UPDATE_FAILED))),
            }
        });
    };

    move || {
        let identity = user.get().unwrap_or_else(|| Identity {
            username: String::new(),
            email: String::new(),
            full_name: None,
            id: None,
        });
        if !editing.get() {
            return view! {
                <div class="settings">
                    <div class="settings-row">
                        <span class="settings-label">"Username"</span>
                        <span>{identity.username.clone()}</span>
                    </div>
                    <div class="settings-row">
                        <span class="settings-label">"Email"</span>
                        <span>{identity.email.clone()}</span>
                    </div>
                    <div class="settings-row">
                        <span class="settings-label">"Full name"</span>
                        <span>{identity.full_name.clone().unwrap_or_else(|| "Not set".to_owned())}</span>
                    </div>
                    <button class="btn-edit" on:click=start_edit>"Edit Profile"</button>
                </div>
            }
                .into_any();
        }
        view! {
            <form class="settings settings-form" on:submit=on_submit>
                {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}
                <div class="form-group">
                    <label for="full_name">"Full name"</label>
                    <input
                        id="full_name"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-actions">
                    <button type="button" class="btn-cancel" on:click=move |_| editing.set(false)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-submit">"Save Changes"</button>
                </div>
            </form>
        }
            .into_any()
    }
}
