//! Profile page state: active tab, the owner's course list and the course
//! modal.
//!
//! List updates are applied locally as soon as the server confirms a write,
//! without refetching the whole list.

#[cfg(test)]
#[path = "my_courses_test.rs"]
mod my_courses_test;

use coursehub::types::Course;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Courses,
    Settings,
}

/// Whether the course modal is closed, creating, or editing a course.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CourseModal {
    #[default]
    Closed,
    Creating,
    Editing(Course),
}

impl CourseModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Editing(_) => "Edit Course",
            _ => "Add New Course",
        }
    }

    pub fn editing(&self) -> Option<&Course> {
        match self {
            Self::Editing(course) => Some(course),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MyCoursesState {
    pub courses: Vec<Course>,
    pub modal: CourseModal,
}

impl MyCoursesState {
    pub fn tab_label(&self) -> String {
        format!("My Courses ({})", self.courses.len())
    }

    /// Newly created courses go first.
    pub fn prepend(&mut self, course: Course) {
        self.courses.insert(0, course);
    }

    /// Replace the course with the same id in place; unknown ids are ignored.
    pub fn replace(&mut self, course: Course) {
        if let Some(slot) = self.courses.iter_mut().find(|c| c.id == course.id) {
            *slot = course;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.courses.retain(|c| c.id != id);
    }

    /// Apply a saved course from the modal and close it.
    pub fn saved(&mut self, course: Course) {
        match self.modal {
            CourseModal::Editing(_) => self.replace(course),
            _ => self.prepend(course),
        }
        self.modal = CourseModal::Closed;
    }
}
