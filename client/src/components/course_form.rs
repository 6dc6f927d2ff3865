//! Modal form for creating or editing a course.
//!
//! Input is collected into a `CourseDraft`; nothing is sent until the draft
//! validates. The modal performs the create/update call itself and hands the
//! saved course back through `on_saved`.

use coursehub::catalog::FORM_CATEGORIES;
use coursehub::forms::{CourseDraft, CourseField, FieldErrors};
use coursehub::types::{Course, CourseLevel};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::api;
use crate::state::my_courses::CourseModal;

const SAVE_FAILED: &str = "Failed to save course";

#[component]
fn FieldMessage(errors: RwSignal<FieldErrors<CourseField>>, field: CourseField) -> impl IntoView {
    move || {
        errors
            .with(|found| found.get(&field).copied())
            .map(|message| view! { <span class="form-error">{message}</span> })
    }
}

#[component]
pub fn CourseForm(
    #[prop(into)] modal: Signal<CourseModal>,
    on_close: Callback<()>,
    on_saved: Callback<Course>,
) -> impl IntoView {
    let draft = RwSignal::new(CourseDraft::default());
    let errors = RwSignal::new(FieldErrors::<CourseField>::new());
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Reset the inputs every time the modal opens.
    Effect::new(move || {
        let opened = modal.get();
        let fresh = opened.editing().map_or_else(CourseDraft::default, CourseDraft::from_course);
        draft.set(fresh);
        errors.set(FieldErrors::new());
        banner.set(None);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let course = match draft.with_untracked(CourseDraft::validate) {
            Ok(course) => course,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::new());
        banner.set(None);
        busy.set(true);
        let editing_id = modal.with_untracked(|m| m.editing().map(|c| c.id.clone()));
        spawn_local(async move {
            let client = api::api();
            let saved = match editing_id {
                Some(id) => client.update_course(&id, &course).await,
                None => client.create_course(&course).await,
            };
            busy.set(false);
            match saved {
                Ok(course) => on_saved.run(course),
                Err(e) => banner.set(Some(api::submit_failed_message(&e, SAVE_FAILED))),
            }
        });
    };

    let text_input = move |field: CourseField, kind: &'static str, placeholder: &'static str| {
        let read = move || draft.with(|d| text_of(d, field).to_owned());
        view! {
            <input
                type=kind
                placeholder=placeholder
                prop:value=read
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| *text_of_mut(d, field) = value);
                    errors.update(|found| {
                        found.remove(&field);
                    });
                }
            />
            <FieldMessage errors=errors field=field/>
        }
    };

    view! {
        <Show when=move || modal.with(CourseModal::is_open)>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{move || modal.with(CourseModal::title)}</h2>
                        <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    {move || banner.get().map(|message| view! { <div class="error-message">{message}</div> })}
                    <form class="course-form" on:submit=on_submit>
                        <div class="form-group">
                            <label>"Course Title *"</label>
                            {text_input(CourseField::Title, "text", "Enter course title")}
                        </div>
                        <div class="form-group">
                            <label>"Description *"</label>
                            <textarea
                                rows="4"
                                placeholder="Enter course description"
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.description = value);
                                    errors.update(|found| {
                                        found.remove(&CourseField::Description);
                                    });
                                }
                            ></textarea>
                            <FieldMessage errors=errors field=CourseField::Description/>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label>"Category *"</label>
                                <select
                                    prop:value=move || draft.with(|d| d.category.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.category = value);
                                        errors.update(|found| {
                                            found.remove(&CourseField::Category);
                                        });
                                    }
                                >
                                    <option value="">"Select category"</option>
                                    {FORM_CATEGORIES
                                        .into_iter()
                                        .map(|category| view! { <option value=category>{category}</option> })
                                        .collect_view()}
                                </select>
                                <FieldMessage errors=errors field=CourseField::Category/>
                            </div>
                            <div class="form-group">
                                <label>"Level *"</label>
                                <select
                                    prop:value=move || draft.with(|d| d.level.as_str())
                                    on:change=move |ev| {
                                        let level = CourseLevel::parse(&event_target_value(&ev)).unwrap_or_default();
                                        draft.update(|d| d.level = level);
                                    }
                                >
                                    {CourseLevel::ALL
                                        .into_iter()
                                        .map(|level| view! { <option value=level.as_str()>{level.as_str()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label>"Duration (hours) *"</label>
                                {text_input(CourseField::Duration, "number", "e.g. 40")}
                            </div>
                            <div class="form-group">
                                <label>"Credits *"</label>
                                {text_input(CourseField::Credits, "number", "1-100")}
                            </div>
                            <div class="form-group">
                                <label>"Rating"</label>
                                {text_input(CourseField::Rating, "number", "0-5")}
                            </div>
                        </div>
                        <div class="form-group">
                            <label>"Duration Text *"</label>
                            {text_input(CourseField::DurationText, "text", "e.g. 1 Year")}
                        </div>
                        <div class="form-group">
                            <label>"Image URL *"</label>
                            {text_input(CourseField::ImageUrl, "text", "/assets/card-image.png")}
                        </div>
                        <div class="form-group form-checkbox">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.with(|d| d.published)
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        draft.update(|d| d.published = checked);
                                    }
                                />
                                " Publish course"
                            </label>
                        </div>
                        <div class="form-actions">
                            <button type="button" class="btn-cancel" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn-submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Saving..." } else { "Save Course" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Free-text inputs of the draft; select and checkbox fields are bound
/// separately.
fn text_of(draft: &CourseDraft, field: CourseField) -> &str {
    match field {
        CourseField::Title => &draft.title,
        CourseField::Description => &draft.description,
        CourseField::Category => &draft.category,
        CourseField::Duration => &draft.duration,
        CourseField::Credits => &draft.credits,
        CourseField::Rating => &draft.rating,
        CourseField::DurationText => &draft.duration_text,
        CourseField::ImageUrl => &draft.image_url,
    }
}

fn text_of_mut(draft: &mut CourseDraft, field: CourseField) -> &mut String {
    match field {
        CourseField::Title => &mut draft.title,
        CourseField::Description => &mut draft.description,
        CourseField::Category => &mut draft.category,
        CourseField::Duration => &mut draft.duration,
        CourseField::Credits => &mut draft.credits,
        CourseField::Rating => &mut draft.rating,
        CourseField::DurationText => &mut draft.duration_text,
        CourseField::ImageUrl => &mut draft.image_url,
    }
}
