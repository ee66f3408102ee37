use crate::support::key;
use buscadoc::ui::components::DialogComponent;
use buscadoc::ui::core::{Action, Component, DialogType};
use crossterm::event::KeyCode;
use std::path::PathBuf;

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_hidden_dialog_ignores_keys() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
}

#[test]
fn test_show_and_hide() {
    let mut dialog = DialogComponent::new();
    assert!(matches!(dialog.update(Action::ShowDialog(DialogType::Help)), Action::None));
    assert_eq!(dialog.dialog_type, Some(DialogType::Help));

    assert!(matches!(dialog.update(Action::HideDialog), Action::None));
    assert!(!dialog.is_visible());

    // Unrelated actions pass through
    assert!(matches!(dialog.update(Action::ToggleTheme), Action::ToggleTheme));
}

#[test]
fn test_upload_submit_keeps_path_until_reset() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Upload));
    type_text(&mut dialog, "/tmp/plan.xlsx");

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::UploadFile(path) => assert_eq!(path, PathBuf::from("/tmp/plan.xlsx")),
        other => panic!("unexpected {:?}", other),
    }
    assert!(!dialog.is_visible());
    assert_eq!(dialog.input_buffer, "/tmp/plan.xlsx");

    dialog.reset_upload_input();
    assert!(dialog.input_buffer.is_empty());
}

#[test]
fn test_upload_with_empty_path_does_nothing() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Upload));
    type_text(&mut dialog, "   ");

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(dialog.is_visible());
}

#[test]
fn test_upload_editing_and_cancel() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Upload));
    type_text(&mut dialog, "abcd");
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "abc");

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));
}

#[test]
fn test_alert_needs_acknowledgement() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Alert("Error al limpiar los datos.".to_string())));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::HideDialog));
}

#[test]
fn test_help_and_logs_close_keys() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Down)), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog));

    dialog.update(Action::ShowDialog(DialogType::Logs));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));
}

#[test]
fn test_second_alert_waits_for_the_first() {
    let mut dialog = DialogComponent::new();
    dialog.push_alert("Error al subir el archivo: formato inválido".to_string());
    dialog.push_alert("Error al limpiar los datos.".to_string());

    assert_eq!(
        dialog.dialog_type,
        Some(DialogType::Alert("Error al subir el archivo: formato inválido".to_string()))
    );
    assert_eq!(dialog.pending_alert_count(), 1);

    dialog.update(Action::HideDialog);
    assert_eq!(dialog.dialog_type, Some(DialogType::Alert("Error al limpiar los datos.".to_string())));

    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
    assert_eq!(dialog.pending_alert_count(), 0);
}

#[test]
fn test_alert_over_upload_restores_the_upload_dialog() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Upload));
    type_text(&mut dialog, "/tmp/plan.xlsx");

    dialog.update(Action::ShowDialog(DialogType::Alert("Error al limpiar los datos.".to_string())));
    assert!(matches!(dialog.dialog_type, Some(DialogType::Alert(_))));

    // Typing goes to the alert, not the covered path input
    type_text(&mut dialog, "zz");
    assert_eq!(dialog.input_buffer, "/tmp/plan.xlsx");

    let hide = dialog.handle_key_events(key(KeyCode::Esc));
    dialog.update(hide);
    assert_eq!(dialog.dialog_type, Some(DialogType::Upload));
    assert_eq!(dialog.input_buffer, "/tmp/plan.xlsx");

    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
}
