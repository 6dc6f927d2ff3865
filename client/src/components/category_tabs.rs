//! Category tab strip above the home course list.

use coursehub::catalog::BROWSE_CATEGORIES;
use leptos::prelude::*;

fn icon_for(category: &str) -> &'static str {
    match category {
        "Health & Social Care" => "/assets/health-icon.png",
        "Information Technology" => "/assets/information-icon.png",
        "Teaching & Education" | "Accounting & Finance" => "/assets/teaching-icon.png",
        _ => "/assets/business-icon.png",
    }
}

#[component]
pub fn CategoryTabs(#[prop(into)] selected: Signal<Option<String>>, on_select: Callback<String>) -> impl IntoView {
    view! {
        <div class="category-tabs-wrapper">
            <div class="category-tabs">
                {BROWSE_CATEGORIES
                    .into_iter()
                    .map(|category| {
                        let active = move || selected.with(|s| s.as_deref() == Some(category));
                        view! {
                            <div
                                class="category-tab"
                                class:active=active
                                on:click=move |_| on_select.run(category.to_owned())
                            >
                                <img class="category-tab-icon" src=icon_for(category) alt=category/>
                                <span>{category}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
