use super::*;
use coursehub::catalog::{BROWSE_ALL_PAGE_SIZE, HOME_PAGE_SIZE};
use coursehub::types::CourseLevel;

fn course(id: &str) -> Course {
    Course {
        id: id.to_owned(),
        title: format!("Course {id}"),
        description: "An introduction to the field.".to_owned(),
        category: "Design".to_owned(),
        level: CourseLevel::Beginner,
        duration: 12.0,
        credits: 40,
        rating: 4.5,
        duration_text: "1 Year".to_owned(),
        image_url: "/assets/card-image.png".to_owned(),
        published: true,
        created_by: None,
        created_at: None,
        updated_at: None,
        creator: None,
    }
}

fn design() -> CatalogState {
    let mut state = CatalogState::default();
    state.select_category("Design");
    state
}

fn page(items: Vec<Course>, page: u32, total_pages: u32) -> CoursePage {
    CoursePage { total: items.len() as u64, items, page, page_size: HOME_PAGE_SIZE, total_pages }
}

// =============================================================
// Filter changes
// =============================================================

#[test]
fn default_state_opens_on_default_category() {
    let state = CatalogState::default();
    assert_eq!(state.active_category(), Some(DEFAULT_CATEGORY));
    assert_eq!(state.query.limit, HOME_PAGE_SIZE);
    assert!(!state.is_browsing_all());
}

#[test]
fn selecting_category_returns_to_first_page() {
    let mut state = CatalogState::default();
    state.go_to_page(3);
    state.select_category("Design");
    assert_eq!(state.active_category(), Some("Design"));
    assert_eq!(state.query.page, 1);
}

#[test]
fn browse_all_drops_category_and_widens_page() {
    let mut state = CatalogState::default();
    state.browse_all();
    assert!(state.is_browsing_all());
    assert_eq!(state.query.limit, BROWSE_ALL_PAGE_SIZE);
}

#[test]
fn search_trims_and_blank_clears() {
    let mut state = CatalogState::default();
    state.go_to_page(2);
    state.search("  rust ");
    assert_eq!(state.query.search.as_deref(), Some("rust"));
    assert_eq!(state.query.page, 1);
    state.search("   ");
    assert_eq!(state.query.search, None);
}

#[test]
fn reset_restores_home_filters() {
    let mut state = CatalogState::default();
    state.browse_all();
    state.reset();
    assert_eq!(state, CatalogState::default());
}

// =============================================================
// List view
// =============================================================

#[test]
fn pending_fetch_is_loading() {
    assert_eq!(ListView::from_fetch(None, &design()), ListView::Loading);
}

#[test]
fn failed_fetch_shows_generic_message() {
    let view = ListView::from_fetch(Some(Err(ApiError::Transient("timeout".to_owned()))), &CatalogState::default());
    assert_eq!(view, ListView::Failed("Failed to load courses. Please try again later.".to_owned()));
}

#[test]
fn empty_page_names_the_category() {
    let view = ListView::from_fetch(Some(Ok(page(Vec::new(), 1, 0))), &design());
    assert_eq!(view, ListView::Empty("No courses found for \"Design\"".to_owned()));
}

#[test]
fn empty_page_while_browsing_all_names_no_category() {
    let mut state = CatalogState::default();
    state.browse_all();
    let view = ListView::from_fetch(Some(Ok(page(Vec::new(), 1, 0))), &state);
    assert_eq!(view, ListView::Empty("No courses found".to_owned()));
}

#[test]
fn loaded_page_carries_pager() {
    let view = ListView::from_fetch(Some(Ok(page(vec![course("a"), course("b")], 2, 3))), &design());
    let ListView::Loaded { items, pager } = view else {
        panic!("expected loaded view");
    };
    assert_eq!(items.len(), 2);
    assert_eq!(pager.label(), "Page 2 of 3");
    assert!(pager.is_visible());
}
