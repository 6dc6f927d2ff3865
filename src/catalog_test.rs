use super::*;

// =============================================================================
// CourseQuery encoding
// =============================================================================

#[test]
fn home_query_encodes_default_filters() {
    assert_eq!(
        CourseQuery::home().to_query_string(),
        "category=Business+%26+Management&page=1&limit=6&published=true"
    );
}

#[test]
fn category_with_ampersand_is_form_encoded() {
    let query = CourseQuery { limit: 10, ..CourseQuery::home() }
        .with_category("Health & Social Care")
        .with_page(2);
    assert_eq!(
        query.to_query_string(),
        "category=Health+%26+Social+Care&page=2&limit=10&published=true"
    );
}

#[test]
fn default_query_has_only_paging() {
    assert_eq!(CourseQuery::default().to_query_string(), "page=1&limit=10");
}

#[test]
fn level_and_search_appear_between_category_and_page() {
    let query = CourseQuery {
        category: Some("Design".to_owned()),
        level: Some(CourseLevel::Advanced),
        search: Some("  colour theory ".to_owned()),
        ..CourseQuery::default()
    };
    assert_eq!(
        query.to_query_string(),
        "category=Design&level=Advanced&search=colour+theory&page=1&limit=10"
    );
}

#[test]
fn blank_filters_are_omitted() {
    let query = CourseQuery {
        category: Some(String::new()),
        search: Some("   ".to_owned()),
        ..CourseQuery::default()
    };
    assert_eq!(query.to_query_string(), "page=1&limit=10");
}

// =============================================================================
// CourseQuery transitions
// =============================================================================

#[test]
fn with_category_resets_page() {
    let query = CourseQuery::home().with_page(4).with_category("Design");
    assert_eq!(query.page, 1);
    assert_eq!(query.category.as_deref(), Some("Design"));
    assert_eq!(query.limit, HOME_PAGE_SIZE);
}

#[test]
fn with_page_keeps_filters_and_clamps_to_one() {
    let query = CourseQuery::home().with_page(0);
    assert_eq!(query.page, 1);
    assert_eq!(query.published, Some(true));
}

#[test]
fn browse_all_clears_category_and_widens_limit() {
    let query = CourseQuery::home().with_page(3).browse_all();
    assert_eq!(query.category, None);
    assert_eq!(query.page, 1);
    assert_eq!(query.limit, BROWSE_ALL_PAGE_SIZE);
    assert_eq!(query.published, Some(true));
}

// =============================================================================
// Pager
// =============================================================================

#[test]
fn pager_first_page_has_no_previous() {
    let pager = Pager::new(1, 3);
    assert_eq!(pager.previous(), None);
    assert_eq!(pager.next(), Some(2));
    assert!(pager.is_visible());
}

#[test]
fn pager_last_page_has_no_next() {
    let pager = Pager::new(3, 3);
    assert_eq!(pager.previous(), Some(2));
    assert_eq!(pager.next(), None);
    assert_eq!(pager.label(), "Page 3 of 3");
}

#[test]
fn pager_hidden_for_single_or_empty_result() {
    assert!(!Pager::new(1, 1).is_visible());
    let empty = Pager::new(1, 0);
    assert!(!empty.is_visible());
    assert_eq!(empty.label(), "Page 1 of 1");
}

#[test]
fn pager_clamps_out_of_range_page() {
    assert_eq!(Pager::new(9, 2).page, 2);
    assert_eq!(Pager::new(0, 2).page, 1);
}

#[test]
fn browse_categories_are_a_prefix_of_form_categories() {
    assert_eq!(&FORM_CATEGORIES[..BROWSE_CATEGORIES.len()], &BROWSE_CATEGORIES[..]);
    assert_eq!(BROWSE_CATEGORIES[0], DEFAULT_CATEGORY);
}
