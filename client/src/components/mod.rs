//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog chrome and forms while reading/writing shared
//! state from Leptos context providers. `navbar` hosts the route-change
//! subscription; `protected_route` gates restricted views.

pub mod category_tabs;
pub mod course_card;
pub mod course_form;
pub mod course_list;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod protected_route;
