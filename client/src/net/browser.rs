//! Browser implementations of the core transport and session seams.
//!
//! Client-side (csr): real HTTP via `gloo-net`, token in `localStorage`.
//! Native builds (tests): the transport reports itself unreachable and the
//! store holds nothing, so views degrade to the logged-out state.

#![allow(clippy::unused_async)]

use async_trait::async_trait;
use coursehub::api::{HttpRequest, HttpResponse, Transport, TransportError};
use coursehub::session::{SessionError, SessionStore, ensure_non_empty};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// `fetch`-backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use coursehub::api::{Method, RequestBody};
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            let builder = request
                .headers
                .iter()
                .fold(builder, |builder, (name, value)| builder.header(name, value));
            let prepared = match request.body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(text) | RequestBody::Form(text) => builder.body(text),
            }
            .map_err(|e| TransportError::new(e.to_string()))?;
            let response = prepared.send().await.map_err(|e| TransportError::new(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| TransportError::new(e.to_string()))?;
            Ok(HttpResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::new("not available outside the browser"))
        }
    }
}

/// Token persisted in `localStorage` under [`TOKEN_KEY`]; survives reloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for LocalStorageSession {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .get_item(TOKEN_KEY)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        ensure_non_empty(token)?;
        #[cfg(feature = "csr")]
        {
            let storage = storage().ok_or_else(|| SessionError::Storage("localStorage unavailable".to_owned()))?;
            storage
                .set_item(TOKEN_KEY, token)
                .map_err(|_| SessionError::Storage("localStorage write failed".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(SessionError::Storage("localStorage unavailable".to_owned()))
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
