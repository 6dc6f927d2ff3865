//! Networking and persistence bindings for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` adapts `gloo-net` and `localStorage` to the core `Transport` and
//! `SessionStore` seams; `api` assembles them into ready-to-use clients and
//! holds the user-facing failure messages.

pub mod api;
pub mod browser;
