//! Course list filtering and pagination.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::types::{CourseLevel, CoursePage};

/// Categories offered as tabs on the home page.
pub const BROWSE_CATEGORIES: [&str; 5] = [
    "Business & Management",
    "Health & Social Care",
    "Information Technology",
    "Teaching & Education",
    "Accounting & Finance",
];

/// Categories selectable when creating or editing a course.
pub const FORM_CATEGORIES: [&str; 9] = [
    "Business & Management",
    "Health & Social Care",
    "Information Technology",
    "Teaching & Education",
    "Accounting & Finance",
    "Web Development",
    "Data Science",
    "Design",
    "Marketing",
];

/// Category the home list opens on.
pub const DEFAULT_CATEGORY: &str = "Business & Management";

/// Page size used by the home list.
pub const HOME_PAGE_SIZE: u32 = 6;

/// Page size used by "Browse all courses".
pub const BROWSE_ALL_PAGE_SIZE: u32 = 100;

/// Filters and paging for `GET /api/courses`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseQuery {
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    /// Free-text search over title and description.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub published: Option<bool>,
}

impl Default for CourseQuery {
    /// Server defaults: first page of ten, no filters.
    fn default() -> Self {
        Self { category: None, level: None, search: None, page: 1, limit: 10, published: None }
    }
}

impl CourseQuery {
    /// The filters the home list starts with.
    #[must_use]
    pub fn home() -> Self {
        Self {
            category: Some(DEFAULT_CATEGORY.to_owned()),
            limit: HOME_PAGE_SIZE,
            published: Some(true),
            ..Self::default()
        }
    }

    /// Switch category and return to the first page.
    #[must_use]
    pub fn with_category(self, category: &str) -> Self {
        Self { category: Some(category.to_owned()), page: 1, ..self }
    }

    /// Jump to `page`, keeping every filter. Pages below 1 clamp to 1.
    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        Self { page: page.max(1), ..self }
    }

    /// Drop the category filter and show up to [`BROWSE_ALL_PAGE_SIZE`] courses.
    #[must_use]
    pub fn browse_all(self) -> Self {
        Self { category: None, page: 1, limit: BROWSE_ALL_PAGE_SIZE, ..self }
    }

    /// Query pairs in wire order; absent or blank filters are omitted.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(6);
        if let Some(category) = self.category.as_deref().filter(|c| !c.trim().is_empty()) {
            pairs.push(("category", category.to_owned()));
        }
        if let Some(level) = self.level {
            pairs.push(("level", level.as_str().to_owned()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.trim().to_owned()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        if let Some(published) = self.published {
            pairs.push(("published", published.to_string()));
        }
        pairs
    }

    /// Form-urlencoded query string (without the leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        // Encoding a flat list of string pairs cannot fail.
        serde_urlencoded::to_string(self.pairs()).unwrap_or_default()
    }
}

/// Previous/next navigation derived from a fetched page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
}

impl Pager {
    /// A zero page count (no results) is shown as a single page.
    #[must_use]
    pub fn new(page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self { page: page.clamp(1, total_pages), total_pages }
    }

    #[must_use]
    pub fn from_page(page: &CoursePage) -> Self {
        Self::new(page.page, page.total_pages)
    }

    /// Pagination controls are only shown when there is more than one page.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    #[must_use]
    pub fn previous(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }

    #[must_use]
    pub fn next(&self) -> Option<u32> {
        (self.page < self.total_pages).then(|| self.page + 1)
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}
