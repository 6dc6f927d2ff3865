use super::*;
use coursehub::types::CourseLevel;

fn course(id: &str, title: &str) -> Course {
    Course {
        id: id.to_owned(),
        title: title.to_owned(),
        description: "Hands-on practice with real projects.".to_owned(),
        category: "Web Development".to_owned(),
        level: CourseLevel::Intermediate,
        duration: 20.0,
        credits: 40,
        rating: 4.5,
        duration_text: "1 Year".to_owned(),
        image_url: "/assets/card-image.png".to_owned(),
        published: true,
        created_by: Some("u1".to_owned()),
        created_at: None,
        updated_at: None,
        creator: None,
    }
}

fn state_with(ids: &[&str]) -> MyCoursesState {
    MyCoursesState { courses: ids.iter().map(|id| course(id, "Original")).collect(), modal: CourseModal::Closed }
}

fn ids(state: &MyCoursesState) -> Vec<&str> {
    state.courses.iter().map(|c| c.id.as_str()).collect()
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn profile_opens_on_course_list() {
    assert_eq!(ProfileTab::default(), ProfileTab::Courses);
}

#[test]
fn tab_label_counts_courses() {
    assert_eq!(state_with(&["a", "b"]).tab_label(), "My Courses (2)");
}

// =============================================================
// List updates
// =============================================================

#[test]
fn prepend_puts_new_course_first() {
    let mut state = state_with(&["a", "b"]);
    state.prepend(course("c", "New"));
    assert_eq!(ids(&state), ["c", "a", "b"]);
}

#[test]
fn replace_keeps_position() {
    let mut state = state_with(&["a", "b", "c"]);
    state.replace(course("b", "Renamed"));
    assert_eq!(ids(&state), ["a", "b", "c"]);
    assert_eq!(state.courses[1].title, "Renamed");
}

#[test]
fn replace_ignores_unknown_id() {
    let mut state = state_with(&["a"]);
    state.replace(course("z", "Stray"));
    assert_eq!(ids(&state), ["a"]);
}

#[test]
fn remove_drops_only_matching_course() {
    let mut state = state_with(&["a", "b", "c"]);
    state.remove("b");
    assert_eq!(ids(&state), ["a", "c"]);
}

// =============================================================
// Modal
// =============================================================

#[test]
fn modal_titles_match_mode() {
    assert_eq!(CourseModal::Creating.title(), "Add New Course");
    assert_eq!(CourseModal::Editing(course("a", "x")).title(), "Edit Course");
    assert!(!CourseModal::Closed.is_open());
}

#[test]
fn saving_from_create_prepends_and_closes() {
    let mut state = state_with(&["a"]);
    state.modal = CourseModal::Creating;
    state.saved(course("b", "Fresh"));
    assert_eq!(ids(&state), ["b", "a"]);
    assert!(!state.modal.is_open());
}

#[test]
fn saving_from_edit_replaces_and_closes() {
    let mut state = state_with(&["a", "b"]);
    state.modal = CourseModal::Editing(state.courses[1].clone());
    state.saved(course("b", "Edited"));
    assert_eq!(ids(&state), ["a", "b"]);
    assert_eq!(state.courses[1].title, "Edited");
    assert_eq!(state.modal, CourseModal::Closed);
}
