use crate::support::buffer_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use swote::export::ExportFormat;
use swote::logger::Logger;
use swote::ui::components::DialogComponent;
use swote::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn export_dialog() -> DialogComponent {
    let mut dialog = DialogComponent::new(Logger::new());
    dialog.update(Action::ShowDialog(DialogType::Export));
    dialog
}

#[test]
fn test_dialog_creation() {
    let dialog = DialogComponent::new(Logger::new());
    assert!(dialog.dialog_type.is_none());
    assert!(!dialog.is_visible());
}

#[test]
fn test_show_and_hide() {
    let mut dialog = export_dialog();
    assert_eq!(dialog.dialog_type, Some(DialogType::Export));
    assert!(dialog.is_visible());

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));
    assert!(dialog.update(Action::HideDialog).is_none());
    assert!(!dialog.is_visible());
}

#[test]
fn test_export_menu_selection() {
    let mut dialog = export_dialog();

    dialog.handle_key_events(key(KeyCode::Down));
    assert_eq!(dialog.selected_format, 1);
    assert!(matches!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::Export(ExportFormat::Json)
    ));

    // Wraps around from the top
    dialog.handle_key_events(key(KeyCode::Up));
    dialog.handle_key_events(key(KeyCode::Up));
    assert_eq!(dialog.selected_format, ExportFormat::ALL.len() - 1);

    assert!(matches!(
        dialog.handle_key_events(key(KeyCode::Char('3'))),
        Action::Export(ExportFormat::Quiz)
    ));
    assert!(dialog.handle_key_events(key(KeyCode::Char('9'))).is_none());
}

#[test]
fn test_export_closes_and_passes_through() {
    let mut dialog = export_dialog();

    let action = dialog.update(Action::Export(ExportFormat::Markdown));
    assert!(matches!(action, Action::Export(ExportFormat::Markdown)));
    assert!(!dialog.is_visible());

    // Other actions are not the dialog's business
    assert!(matches!(dialog.update(Action::ClearAll), Action::ClearAll));
}

#[test]
fn test_logs_dialog() {
    let logger = Logger::new();
    logger.log("✅ Books: Loaded 3".to_string());
    let mut dialog = DialogComponent::new(logger);
    dialog.update(Action::ShowDialog(DialogType::Logs));

    dialog.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(dialog.scroll_offset, 1);
    dialog.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(dialog.scroll_offset, 0);

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    assert!(buffer_text(terminal.backend().buffer()).contains("Books: Loaded 3"));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::HideDialog));
}

#[test]
fn test_logs_dialog_clears_logs() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());
    let mut dialog = DialogComponent::new(logger.clone());
    dialog.update(Action::ShowDialog(DialogType::Logs));
    dialog.handle_key_events(key(KeyCode::Char('j')));

    assert!(dialog.handle_key_events(key(KeyCode::Char('c'))).is_none());
    assert!(logger.get_logs().is_empty());
    assert_eq!(dialog.scroll_offset, 0);
    assert!(dialog.is_visible());

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    assert!(buffer_text(terminal.backend().buffer()).contains("No logs available"));
}

#[test]
fn test_render_export_menu() {
    let mut dialog = export_dialog();
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

    terminal.draw(|f| dialog.render(f, f.area())).unwrap();

    let text = buffer_text(terminal.backend().buffer());
    for format in ExportFormat::ALL {
        assert!(text.contains(format.label()), "missing {}", format.label());
    }
}

#[test]
fn test_hidden_dialog_ignores_keys() {
    let mut dialog = DialogComponent::new(Logger::new());
    assert!(dialog.handle_key_events(key(KeyCode::Esc)).is_none());
}
