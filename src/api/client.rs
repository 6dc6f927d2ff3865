//! Typed request functions over a [`Transport`].
//!
//! DESIGN
//! ======
//! The client reads the session store once per request to decide whether to
//! attach `Authorization: Bearer <token>`. It never writes the store except in
//! `login` (store the issued token) and `logout` (clear it). Invalidating a
//! stale credential is the identity cache's job, not the client's.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, classify_status};
use super::transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport};
use crate::catalog::CourseQuery;
use crate::config::ApiConfig;
use crate::session::SessionStore;
use crate::types::{
    AccessToken, Account, Course, CoursePage, Credentials, Identity, NewCourse, ProfileUpdate, Registration,
};

/// Path + query for a course list request.
#[must_use]
pub fn courses_query_path(query: &CourseQuery) -> String {
    format!("/api/courses?{}", query.to_query_string())
}

/// REST client bound to one transport and one session store.
#[derive(Debug, Clone)]
pub struct ApiClient<T, S> {
    config: ApiConfig,
    transport: T,
    session: S,
}

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub fn new(config: ApiConfig, transport: T, session: S) -> Self {
        Self { config, transport, session }
    }

    /// The session store requests read their credential from.
    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // =========================================================================
    // Course resource
    // =========================================================================

    /// `GET /api/courses?...`
    ///
    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on any failure.
    pub async fn list_courses(&self, query: &CourseQuery) -> Result<CoursePage, ApiError> {
        let path = courses_query_path(query);
        self.fetch_json(Method::Get, &path, RequestBody::Empty).await
    }

    /// `GET /api/courses/{id}`
    ///
    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on any failure.
    pub async fn get_course(&self, id: &str) -> Result<Course, ApiError> {
        self.fetch_json(Method::Get, &format!("/api/courses/{id}"), RequestBody::Empty)
            .await
    }

    /// `POST /api/courses`
    ///
    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on any failure.
    pub async fn create_course(&self, course: &NewCourse) -> Result<Course, ApiError> {
        self.fetch_json(Method::Post, "/api/courses", json_body(course)?).await
    }

    /// `PUT /api/courses/{id}`
    ///
    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on any failure.
    pub async fn update_course(&self, id: &str, course: &NewCourse) -> Result<Course, ApiError> {
        self.fetch_json(Method::Put, &format!("/api/courses/{id}"), json_body(course)?)
            .await
    }

    /// `DELETE /api/courses/{id}`
    ///
    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on any failure.
    pub async fn delete_course(&self, id: &str) -> Result<(), ApiError> {
        self.exchange(Method::Delete, &format!("/api/courses/{id}"), RequestBody::Empty)
            .await
            .map(|_| ())
    }

    /// `GET /api/courses/user/my-courses`
    ///
    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on any failure.
    pub async fn my_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.fetch_json(Method::Get, "/api/courses/user/my-courses", RequestBody::Empty)
            .await
    }

    // =========================================================================
    // Account resource
    // =========================================================================

    /// `POST /api/auth/register`
    ///
    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on any failure.
    pub async fn register(&self, registration: &Registration) -> Result<Account, ApiError> {
        self.fetch_json(Method::Post, "/api/auth/register", json_body(registration)?)
            .await
    }

    /// `POST /api/auth/login` with a form-encoded body; stores the issued token.
    ///
    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on any failure, and
    /// [`ApiError::Transient`] if the session store refuses the token.
    pub async fn login(&self, credentials: &Credentials) -> Result<AccessToken, ApiError> {
        let form = serde_urlencoded::to_string(credentials).map_err(|e| ApiError::Validation(e.to_string()))?;
        let token: AccessToken = self
            .fetch_json(Method::Post, "/api/auth/login", RequestBody::Form(form))
            .await?;
        self.session.set(&token.access_token).map_err(|e| {
            tracing::warn!(error = %e, "login succeeded but the token could not be stored");
            ApiError::Transient(e.to_string())
        })?;
        tracing::info!(username = %credentials.username, "signed in");
        Ok(token)
    }

    /// Forget the stored credential. No request is made.
    pub fn logout(&self) {
        self.session.clear();
        tracing::info!("signed out");
    }

    /// `GET /api/auth/me`
    ///
    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on any failure.
    pub async fn current_identity(&self) -> Result<Identity, ApiError> {
        self.fetch_json(Method::Get, "/api/auth/me", RequestBody::Empty).await
    }

    /// `PUT /api/auth/profile`
    ///
    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on any failure.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Identity, ApiError> {
        self.fetch_json(Method::Put, "/api/auth/profile", json_body(update)?)
            .await
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    fn build_request(&self, method: Method, path: &str, body: RequestBody) -> HttpRequest {
        let mut headers = Vec::with_capacity(2);
        if let Some(content_type) = body.content_type() {
            headers.push(("Content-Type".to_owned(), content_type.to_owned()));
        }
        if let Some(token) = self.session.get() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest { method, url: self.config.url(path), headers, body }
    }

    async fn exchange(&self, method: Method, path: &str, body: RequestBody) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(method, path, body);
        tracing::debug!(method = method.as_str(), %path, "api request");
        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(method = method.as_str(), %path, error = %e, "api transport failed");
            ApiError::from(e)
        })?;
        if response.is_success() {
            return Ok(response);
        }
        let error = classify_status(response.status, &response.body);
        tracing::warn!(method = method.as_str(), %path, status = response.status, error = %error, "api request rejected");
        Err(error)
    }

    async fn fetch_json<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<R, ApiError> {
        let response = self.exchange(method, path, body).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!(%path, error = %e, "api response did not decode");
            ApiError::Transient(format!("invalid response body: {e}"))
        })
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_string(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Validation(e.to_string()))
}
