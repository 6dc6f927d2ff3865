//! Landing banner with course search and the "Add New Course" shortcut.

use coursehub::types::Course;
use leptos::prelude::*;

use crate::components::course_form::CourseForm;
use crate::state::catalog::CatalogState;
use crate::state::my_courses::CourseModal;

#[component]
pub fn Hero() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let search = RwSignal::new(String::new());
    let modal = RwSignal::new(CourseModal::Closed);
    let notice = RwSignal::new(None::<String>);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = search.get_untracked();
        catalog.update(|c| c.search(&text));
    };
    let on_close = Callback::new(move |()| modal.set(CourseModal::Closed));
    let on_saved = Callback::new(move |course: Course| {
        modal.set(CourseModal::Closed);
        notice.set(Some(format!("Course \"{}\" created successfully!", course.title)));
        // Touch the query so the list refetches and shows the new course.
        catalog.update(|_| {});
    });

    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-text">
                        <h1 class="hero-title">
                            <span class="transform">"Transform Your Career with "</span>
                            <span class="ofqual">"Ofqual-Regulated Qualifications!"</span>
                        </h1>
                        <p class="hero-description">
                            "Earn accredited diplomas trusted by top employers. Study online, at your pace."
                        </p>
                        <div class="hero-actions">
                            <form class="search-bar" on:submit=on_search>
                                <input
                                    type="text"
                                    placeholder="Search for a course or a subject"
                                    prop:value=move || search.get()
                                    on:input=move |ev| search.set(event_target_value(&ev))
                                />
                                <button type="submit" class="search-button">"Search"</button>
                            </form>
                            <button class="btn-add-course" on:click=move |_| modal.set(CourseModal::Creating)>
                                "+ Add New Course"
                            </button>
                        </div>
                        {move || notice.get().map(|message| view! { <p class="success-message">{message}</p> })}
                    </div>
                    <div class="hero-image">
                        <img src="/assets/hero-image.png" alt="Learners studying online"/>
                    </div>
                </div>
            </div>
        </section>
        <CourseForm modal=modal on_close=on_close on_saved=on_saved/>
    }
}
