//! # coursehub
//!
//! Platform-neutral core of the course catalog client: the session lifecycle,
//! protected-navigation gate and REST client shared by the Leptos SPA in
//! `client/` and the command-line tool in `cli/`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard consults the session store before any restricted view
//! renders. Views then ask the identity cache for the current user, which
//! calls the REST client and clears the session when the server rejects the
//! credential as unauthorized. Browser and CLI builds differ only in the
//! [`api::Transport`] and [`session::SessionStore`] they plug in.

pub mod api;
pub mod catalog;
pub mod config;
pub mod forms;
pub mod guard;
pub mod identity;
pub mod session;
pub mod shell;
pub mod types;

pub use api::{ApiClient, ApiError};
pub use config::ApiConfig;
pub use guard::{GuardDecision, IntentSlot, NavigationIntent, RouteGuard};
pub use identity::IdentityCache;
pub use session::{MemorySessionStore, SessionError, SessionStore};
pub use shell::NavigationShell;
