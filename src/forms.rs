//! Client-side form validation.
//!
//! Drafts hold raw input exactly as typed; `validate` turns them into typed
//! request bodies or a per-field error map the views render next to inputs.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;

use crate::types::{Course, CourseLevel, Credentials, NewCourse, ProfileUpdate, Registration};

pub const DEFAULT_CREDITS: u32 = 40;
pub const DEFAULT_RATING: f64 = 4.5;
pub const DEFAULT_DURATION_TEXT: &str = "1 Year";
pub const DEFAULT_IMAGE_URL: &str = "/assets/card-image.png";

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 200;
const DESCRIPTION_MIN: usize = 10;

/// Inputs of the course modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CourseField {
    Title,
    Description,
    Category,
    Duration,
    Credits,
    Rating,
    DurationText,
    ImageUrl,
}

/// Validation messages keyed by field, in form order.
pub type FieldErrors<F> = BTreeMap<F, &'static str>;

/// Raw course modal input.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: CourseLevel,
    pub duration: String,
    pub credits: String,
    pub rating: String,
    pub duration_text: String,
    pub image_url: String,
    pub published: bool,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            level: CourseLevel::Beginner,
            duration: String::new(),
            credits: DEFAULT_CREDITS.to_string(),
            rating: DEFAULT_RATING.to_string(),
            duration_text: DEFAULT_DURATION_TEXT.to_owned(),
            image_url: DEFAULT_IMAGE_URL.to_owned(),
            published: true,
        }
    }
}

impl CourseDraft {
    /// Pre-fill the modal for editing `course`.
    #[must_use]
    pub fn from_course(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            description: course.description.clone(),
            category: course.category.clone(),
            level: course.level,
            duration: course.duration.to_string(),
            credits: course.credits.to_string(),
            rating: course.rating.to_string(),
            duration_text: course.duration_text.clone(),
            image_url: course.image_url.clone(),
            published: course.published,
        }
    }

    /// Check every field and build the request body.
    ///
    /// # Errors
    ///
    /// Returns one message per invalid field.
    pub fn validate(&self) -> Result<NewCourse, FieldErrors<CourseField>> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert(CourseField::Title, "Title is required");
        } else if title.chars().count() < TITLE_MIN {
            errors.insert(CourseField::Title, "Title must be at least 3 characters");
        } else if title.chars().count() > TITLE_MAX {
            errors.insert(CourseField::Title, "Title must be at most 200 characters");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.insert(CourseField::Description, "Description is required");
        } else if description.chars().count() < DESCRIPTION_MIN {
            errors.insert(CourseField::Description, "Description must be at least 10 characters");
        }

        if self.category.trim().is_empty() {
            errors.insert(CourseField::Category, "Category is required");
        }

        let duration = if self.duration.trim().is_empty() {
            errors.insert(CourseField::Duration, "Duration is required");
            None
        } else {
            let parsed = parse_finite(&self.duration).filter(|hours| *hours > 0.0);
            if parsed.is_none() {
                errors.insert(CourseField::Duration, "Duration must be a positive number");
            }
            parsed
        };

        let credits = self.credits.trim().parse::<u32>().ok().filter(|c| (1..=100).contains(c));
        if credits.is_none() {
            errors.insert(CourseField::Credits, "Credits must be between 1 and 100");
        }

        let rating = parse_finite(&self.rating).filter(|r| (0.0..=5.0).contains(r));
        if rating.is_none() {
            errors.insert(CourseField::Rating, "Rating must be between 0 and 5");
        }

        if self.duration_text.trim().is_empty() {
            errors.insert(CourseField::DurationText, "Duration text is required");
        }
        if self.image_url.trim().is_empty() {
            errors.insert(CourseField::ImageUrl, "Image URL is required");
        }

        match (duration, credits, rating) {
            (Some(duration), Some(credits), Some(rating)) if errors.is_empty() => Ok(NewCourse {
                title: title.to_owned(),
                description: description.to_owned(),
                category: self.category.trim().to_owned(),
                level: self.level,
                duration,
                credits,
                rating,
                duration_text: self.duration_text.trim().to_owned(),
                image_url: self.image_url.trim().to_owned(),
                published: self.published,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Validate the login form.
///
/// # Errors
///
/// Returns a message when either field is blank.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Inputs of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrationField {
    Username,
    Email,
    Password,
}

/// Raw registration input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl RegistrationDraft {
    /// # Errors
    ///
    /// Returns one message per invalid field.
    pub fn validate(&self) -> Result<Registration, FieldErrors<RegistrationField>> {
        let mut errors = FieldErrors::new();
        let username = self.username.trim();
        if !(3..=50).contains(&username.chars().count()) {
            errors.insert(RegistrationField::Username, "Username must be 3 to 50 characters");
        }
        let email = self.email.trim();
        if !looks_like_email(email) {
            errors.insert(RegistrationField::Email, "Enter a valid email address");
        }
        if !(6..=100).contains(&self.password.chars().count()) {
            errors.insert(RegistrationField::Password, "Password must be 6 to 100 characters");
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        let full_name = self.full_name.trim();
        Ok(Registration {
            username: username.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
            full_name: (!full_name.is_empty()).then(|| full_name.to_owned()),
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace),
        None => false,
    }
}

/// Build a profile update from the settings form; blank inputs are left
/// unchanged on the server.
///
/// # Errors
///
/// Returns a message when a non-blank email is malformed.
pub fn profile_update(full_name: &str, email: &str) -> Result<ProfileUpdate, &'static str> {
    let full_name = full_name.trim();
    let email = email.trim();
    if !email.is_empty() && !looks_like_email(email) {
        return Err("Enter a valid email address");
    }
    Ok(ProfileUpdate {
        full_name: (!full_name.is_empty()).then(|| full_name.to_owned()),
        email: (!email.is_empty()).then(|| email.to_owned()),
    })
}
