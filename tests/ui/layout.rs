use buscadoc::ui::layout::{contains, LayoutManager, CARD_HEIGHT};
use ratatui::layout::Rect;

#[test]
fn test_shell_layout_stacks_areas() {
    let areas = LayoutManager::shell_layout(Rect::new(0, 0, 100, 40));
    assert_eq!(areas.tabs.height, 3);
    assert_eq!(areas.search.y, 3);
    assert_eq!(areas.status.height, 1);
    assert_eq!(areas.status.y, 39);
    assert_eq!(areas.results.height, 40 - 3 - 3 - 1);
}

#[test]
fn test_card_columns_bounds() {
    assert_eq!(LayoutManager::card_columns(10), 1);
    assert_eq!(LayoutManager::card_columns(56), 2);
    assert_eq!(LayoutManager::card_columns(500), 4);
}

#[test]
fn test_card_grid_honours_first_row() {
    // Two columns, two visible rows
    let area = Rect::new(0, 0, 60, CARD_HEIGHT * 2);

    let first_page = LayoutManager::card_grid(area, 7, 0);
    assert_eq!(first_page.len(), 4);
    assert_eq!(first_page[1], Rect::new(30, 0, 30, CARD_HEIGHT));

    let second_page = LayoutManager::card_grid(area, 7, 2);
    assert_eq!(second_page.len(), 3);
    assert_eq!(second_page[0], Rect::new(0, 0, 30, CARD_HEIGHT));
}

#[test]
fn test_contains() {
    let rect = Rect::new(2, 2, 3, 3);
    assert!(contains(rect, 2, 2));
    assert!(contains(rect, 4, 4));
    assert!(!contains(rect, 5, 4));
    assert!(!contains(rect, 1, 3));
}
