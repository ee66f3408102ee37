use crate::support::key;
use buscadoc::models::DataSource;
use buscadoc::ui::components::SearchBarComponent;
use buscadoc::ui::core::{Action, Component, Focus};
use buscadoc::ui::theme::DARK;
use crossterm::event::KeyCode;

fn type_text(bar: &mut SearchBarComponent, text: &str) {
    for c in text.chars() {
        bar.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_enter_submits_against_active_source() {
    let mut bar = SearchBarComponent::new();
    bar.update_data(DataSource::Excel, true, false, &DARK);
    type_text(&mut bar, "torque");

    match bar.handle_key_events(key(KeyCode::Enter)) {
        Action::SubmitSearch { query, source } => {
            assert_eq!(query, "torque");
            assert_eq!(source, DataSource::Excel);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_cursor_editing_with_multibyte_text() {
    let mut bar = SearchBarComponent::new();
    type_text(&mut bar, "día");
    bar.handle_key_events(key(KeyCode::Left));
    bar.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(bar.input, "da");

    bar.handle_key_events(key(KeyCode::Home));
    bar.handle_key_events(key(KeyCode::Delete));
    assert_eq!(bar.input, "a");

    bar.handle_key_events(key(KeyCode::End));
    type_text(&mut bar, "ño");
    assert_eq!(bar.input, "año");
    assert_eq!(bar.cursor, 3);
}

#[test]
fn test_esc_moves_focus_to_results() {
    let mut bar = SearchBarComponent::new();
    assert!(matches!(
        bar.handle_key_events(key(KeyCode::Esc)),
        Action::SetFocus(Focus::Results)
    ));
}
