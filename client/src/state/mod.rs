//! View state shared between pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs with pure update methods. Pages wrap them in `RwSignal`s and
//! provide them via context, so the update rules stay testable natively.

pub mod auth;
pub mod catalog;
pub mod my_courses;
