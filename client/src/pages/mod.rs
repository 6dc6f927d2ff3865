//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Restricted pages are wrapped in `ProtectedRoute` by the
//! router; pages themselves only react to an identity lookup coming back
//! empty.

pub mod home;
pub mod login;
pub mod profile;
pub mod register;
