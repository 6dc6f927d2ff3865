//! Home-page course list: filter selection and what the list area shows.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use coursehub::api::ApiError;
use coursehub::catalog::{CourseQuery, DEFAULT_CATEGORY, Pager};
use coursehub::types::{Course, CoursePage};

use crate::net::api::LIST_FAILED;

/// Filters currently applied to the home list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogState {
    pub query: CourseQuery,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self { query: CourseQuery::home() }
    }
}

impl CatalogState {
    pub fn select_category(&mut self, category: &str) {
        self.query = self.query.clone().with_category(category);
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.query = self.query.clone().with_page(page);
    }

    /// Free-text search; blank input clears it.
    pub fn search(&mut self, text: &str) {
        let text = text.trim();
        self.query.search = (!text.is_empty()).then(|| text.to_owned());
        self.query.page = 1;
    }

    pub fn browse_all(&mut self) {
        self.query = self.query.clone().browse_all();
    }

    /// Back to the opening filters.
    pub fn reset(&mut self) {
        self.query = CourseQuery::home();
    }

    pub fn active_category(&self) -> Option<&str> {
        self.query.category.as_deref()
    }

    pub fn is_browsing_all(&self) -> bool {
        self.query.category.is_none()
    }
}

/// What the list area renders for the latest fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    Loading,
    Failed(String),
    Empty(String),
    Loaded { items: Vec<Course>, pager: Pager },
}

impl ListView {
    pub fn from_fetch(fetch: Option<Result<CoursePage, ApiError>>, catalog: &CatalogState) -> Self {
        match fetch {
            None => Self::Loading,
            Some(Err(_)) => Self::Failed(LIST_FAILED.to_owned()),
            Some(Ok(page)) if page.items.is_empty() => Self::Empty(empty_message(catalog)),
            Some(Ok(page)) => {
                let pager = Pager::from_page(&page);
                Self::Loaded { items: page.items, pager }
            }
        }
    }
}

pub fn empty_message(catalog: &CatalogState) -> String {
    if catalog.is_browsing_all() {
        return "No courses found".to_owned();
    }
    let category = catalog.active_category().unwrap_or(DEFAULT_CATEGORY);
    format!("No courses found for \"{category}\"")
}
