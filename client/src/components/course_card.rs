//! Card rendering one course in a grid.

#[cfg(test)]
#[path = "course_card_test.rs"]
mod course_card_test;

use coursehub::types::Course;
use leptos::prelude::*;

use crate::net::api;

/// Absolute image URLs are used as-is; server-relative ones are resolved
/// against the API base.
fn image_src(base_url: &str, image_url: &str) -> String {
    if image_url.starts_with("http://") || image_url.starts_with("https://") {
        image_url.to_owned()
    } else {
        format!("{}{image_url}", base_url.trim_end_matches('/'))
    }
}

fn rating_label(rating: f64) -> String {
    format!("{rating:.1} (star)")
}

#[component]
pub fn CourseCard(
    course: Course,
    #[prop(optional)] on_edit: Option<Callback<Course>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let src = image_src(&api::config().base_url, &course.image_url);
    let editable = on_edit.is_some() || on_delete.is_some();
    let edit_target = course.clone();
    let delete_id = course.id.clone();
    let published = course.published;

    view! {
        <div class="course-card">
            <div class="course-card-image-wrapper">
                <img class="course-card-image" src=src alt=course.title.clone()/>
            </div>
            <div class="course-card-content">
                <span class="course-card-category">{course.category.clone()}</span>
                <h3 class="course-card-title">{course.title.clone()}</h3>
                <div class="course-card-meta">
                    <span class="course-meta-text">{rating_label(course.rating)}</span>
                    <span class="course-meta-text">{course.duration_text.clone()}</span>
                    <span class="course-meta-text">{format!("{} Credits", course.credits)}</span>
                    <span class="course-meta-text">{course.level.as_str()}</span>
                </div>
                <Show when=move || !published>
                    <span class="course-card-draft">"Draft"</span>
                </Show>
                <Show when=move || editable>
                    <div class="course-card-actions">
                        <button
                            class="btn-edit"
                            on:click={
                                let edit_target = edit_target.clone();
                                move |_| {
                                    if let Some(on_edit) = on_edit {
                                        on_edit.run(edit_target.clone());
                                    }
                                }
                            }
                        >
                            "Edit"
                        </button>
                        <button
                            class="btn-delete"
                            on:click={
                                let delete_id = delete_id.clone();
                                move |_| {
                                    if let Some(on_delete) = on_delete {
                                        on_delete.run(delete_id.clone());
                                    }
                                }
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
