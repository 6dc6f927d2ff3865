//! REST client for the course and account resources.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` builds requests and decodes responses, `transport` is the seam a
//! platform plugs its HTTP stack into, `error` classifies every failure into
//! the closed [`ApiError`] set, and `scripted` is an in-memory transport for
//! tests and offline runs.

mod client;
mod error;
mod scripted;
mod transport;

pub use client::{ApiClient, courses_query_path};
pub use error::{ApiError, classify_status, extract_message};
pub use scripted::ScriptedTransport;
pub use transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport, TransportError};
