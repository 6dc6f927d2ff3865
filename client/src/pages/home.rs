//! Public landing page: hero banner and the filtered course list.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::course_list::CourseList;
use crate::components::hero::Hero;
use crate::state::catalog::CatalogState;

#[component]
pub fn HomePage() -> impl IntoView {
    provide_context(RwSignal::new(CatalogState::default()));

    view! {
        <Title text="Courses"/>
        <Hero/>
        <CourseList/>
    }
}
