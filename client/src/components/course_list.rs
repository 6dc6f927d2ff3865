//! Home-page course grid with category tabs, paging and "browse all".
//!
//! The fetch is keyed on the shared `CatalogState` query: any filter change
//! re-runs it, and the retry button refetches the same query.

use leptos::prelude::*;

use crate::components::category_tabs::CategoryTabs;
use crate::components::course_card::CourseCard;
use crate::net::api;
use crate::state::catalog::{CatalogState, ListView};

#[component]
pub fn CourseList() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let courses = LocalResource::new(move || {
        let query = catalog.with(|c| c.query.clone());
        async move { api::api().list_courses(&query).await }
    });

    let selected = Signal::derive(move || catalog.with(|c| c.active_category().map(str::to_owned)));
    let on_select = Callback::new(move |category: String| catalog.update(|c| c.select_category(&category)));

    view! {
        <section class="category-section">
            <div class="container">
                <div class="section-title-container">
                    <h2 class="section-title">"Explore Popular " <span class="highlight">"Career Paths"</span></h2>
                </div>
                <CategoryTabs selected=selected on_select=on_select/>
                {move || {
                    let state = catalog.get();
                    let browsing_all = state.is_browsing_all();
                    match ListView::from_fetch(courses.get(), &state) {
                        ListView::Loading => {
                            view! {
                                <div class="loading">
                                    <div class="spinner"></div>
                                    <p>"Loading courses..."</p>
                                </div>
                            }
                                .into_any()
                        }
                        ListView::Failed(message) => {
                            view! {
                                <div class="error">
                                    <p>{message}</p>
                                    <button class="btn-browse-all" on:click=move |_| courses.refetch()>
                                        "Try Again"
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        ListView::Empty(message) => {
                            view! {
                                <div class="empty">
                                    <p>{message}</p>
                                    <button class="btn-contact" on:click=move |_| catalog.update(CatalogState::reset)>
                                        "View All Categories"
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        ListView::Loaded { items, pager } => {
                            let previous = pager.previous();
                            let next = pager.next();
                            view! {
                                <div class="course-grid">
                                    {items.into_iter().map(|course| view! { <CourseCard course=course/> }).collect_view()}
                                </div>
                                <Show when=move || pager.is_visible()>
                                    <div class="pagination">
                                        <button
                                            class="btn-contact"
                                            disabled=previous.is_none()
                                            on:click=move |_| {
                                                if let Some(page) = previous {
                                                    catalog.update(|c| c.go_to_page(page));
                                                }
                                            }
                                        >
                                            "Previous"
                                        </button>
                                        <span class="pagination-label">{pager.label()}</span>
                                        <button
                                            class="btn-contact"
                                            disabled=next.is_none()
                                            on:click=move |_| {
                                                if let Some(page) = next {
                                                    catalog.update(|c| c.go_to_page(page));
                                                }
                                            }
                                        >
                                            "Next"
                                        </button>
                                    </div>
                                </Show>
                                <Show when=move || !browsing_all>
                                    <div class="browse-all-container">
                                        <button class="btn-browse-all" on:click=move |_| catalog.update(CatalogState::browse_all)>
                                            "Browse all courses"
                                        </button>
                                    </div>
                                </Show>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>
        </section>
    }
}
