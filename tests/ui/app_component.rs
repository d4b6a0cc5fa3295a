use crate::support::{book, books, buffer_text, FakeBookSource, FakeColorExtractor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::{Duration, Instant};
use swote::constants::{INFO_NOTHING_TO_EXPORT, SUCCESS_CLEARED, SUCCESS_EXPORT_COPIED};
use swote::export::ExportFormat;
use swote::gesture::CellScale;
use swote::local_storage::LocalStorage;
use swote::logger::Logger;
use swote::quotes::BookSummary;
use swote::state::{AppState, RemoteState, Screen};
use swote::ui::clipboard::MemoryClipboard;
use swote::ui::core::{Action, Component, EventType};
use swote::ui::{AppComponent, AppServices};
use swote::utils::color::Rgb;

const EDGE: Rgb = Rgb::new(200, 180, 40);

fn app_with(source: FakeBookSource) -> (AppComponent, MemoryClipboard) {
    let clipboard = MemoryClipboard::default();
    let services = AppServices {
        book_source: Arc::new(source),
        color_extractor: Arc::new(FakeColorExtractor(EDGE)),
        clipboard: Box::new(clipboard.clone()),
    };
    let app = AppComponent::new(
        AppState::new(LocalStorage::in_memory()),
        services,
        CellScale::default(),
        Logger::new(),
        StdRng::seed_from_u64(3),
    );
    (app, clipboard)
}

/// An app whose books have already arrived
fn ready_app() -> (AppComponent, MemoryClipboard) {
    let (mut app, clipboard) = app_with(FakeBookSource(Ok(Vec::new())));
    app.handle_app_action(Action::BooksLoaded(books(3)));
    app.tick(Instant::now());
    (app, clipboard)
}

fn select(app: &mut AppComponent, id: &str, quote: &str) {
    app.handle_app_action(Action::SelectQuote {
        book: BookSummary::from(&book(id, &[quote])),
        quote: quote.to_string(),
    });
}

fn key_event(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> EventType {
    EventType::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn render(app: &mut AppComponent) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
}

async fn wait_until(app: &mut AppComponent, done: impl Fn(&AppComponent) -> bool) {
    for _ in 0..200 {
        app.tick(Instant::now());
        if done(app) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition never reached");
}

#[tokio::test]
async fn test_start_loads_books() {
    let (mut app, _) = app_with(FakeBookSource(Ok(books(3))));
    assert_eq!(app.state().screen(), Screen::Loading);

    app.start();
    assert!(app.state().is_hydrated());

    wait_until(&mut app, |app| app.state().screen() == Screen::Ready).await;
    assert_eq!(app.state().remote_state(), RemoteState::Ready);
    assert_eq!(app.state().books().len(), 3);
    assert_eq!(app.carousel().covers().len(), 3);
}

#[tokio::test]
async fn test_failed_fetch_still_finishes_loading() {
    let (mut app, _) = app_with(FakeBookSource(Err("offline".to_string())));

    app.start();
    wait_until(&mut app, |app| app.state().screen() == Screen::Ready).await;

    assert_eq!(app.state().remote_state(), RemoteState::Failed);
    assert!(app.carousel().covers().is_empty());
}

#[tokio::test]
async fn test_select_quote_saves_and_resolves_color() {
    let (mut app, _) = ready_app();

    select(&mut app, "b1", "Keep this one.");

    assert_eq!(app.state().saved_quotes().len(), 1);
    assert_eq!(app.state().saved_quotes()[0].quote_text, "Keep this one.");

    let cover = "https://covers.example/b1.jpg";
    assert!(app.colors().is_pending(cover));
    wait_until(&mut app, |app| app.colors().get(cover).is_some()).await;
    assert_eq!(app.colors().get(cover), Some(EDGE));
    assert_eq!(app.quote_list().cards().len(), 1);
}

#[tokio::test]
async fn test_delete_and_clear() {
    let (mut app, _) = ready_app();
    select(&mut app, "b1", "First");
    select(&mut app, "b2", "Second");

    let id = app.state().saved_quotes()[1].id.clone();
    app.handle_app_action(Action::DeleteQuote(id));
    assert_eq!(app.state().saved_quotes().len(), 1);
    assert_eq!(app.state().saved_quotes()[0].quote_text, "Second");

    app.handle_app_action(Action::ClearAll);
    assert!(app.state().saved_quotes().is_empty());
    assert_eq!(app.status_message(), Some(SUCCESS_CLEARED));
}

#[tokio::test]
async fn test_font_size_flows_to_list() {
    let (mut app, _) = ready_app();

    app.handle_app_action(Action::SetFontSize(99));
    app.tick(Instant::now());

    assert_eq!(app.state().font_size(), 20);
    assert_eq!(app.quote_list().font_size(), 20);
}

#[tokio::test]
async fn test_export_copies_to_clipboard() {
    let (mut app, clipboard) = ready_app();
    select(&mut app, "b1", "Copy me.");

    app.handle_app_action(Action::Export(ExportFormat::Markdown));

    let copied = clipboard.contents().unwrap();
    assert!(copied.contains("> Copy me."));
    assert!(app.status_message().unwrap().starts_with(SUCCESS_EXPORT_COPIED));

    // The status line clears itself
    app.tick(Instant::now() + Duration::from_secs(4));
    assert!(app.status_message().is_none());
}

#[tokio::test]
async fn test_export_with_nothing_saved() {
    let (mut app, clipboard) = ready_app();

    app.handle_app_action(Action::Export(ExportFormat::Json));

    assert!(clipboard.contents().is_none());
    assert_eq!(app.status_message(), Some(INFO_NOTHING_TO_EXPORT));
}

#[tokio::test]
async fn test_export_through_dialog_keys() {
    let (mut app, clipboard) = ready_app();
    select(&mut app, "b1", "Via the menu.");
    app.tick(Instant::now());

    app.handle_event(key_event(KeyCode::Char('e'))).unwrap();
    assert!(app.is_dialog_visible());

    // Navigation keys belong to the dialog while it is open
    app.handle_event(key_event(KeyCode::Down)).unwrap();
    app.handle_event(key_event(KeyCode::Enter)).unwrap();

    assert!(!app.is_dialog_visible());
    let copied = clipboard.contents().unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&copied).unwrap();
    assert_eq!(entries[0]["quote"], "Via the menu.");
}

#[tokio::test]
async fn test_logs_dialog_toggle() {
    let (mut app, _) = ready_app();

    app.handle_event(key_event(KeyCode::Char('G'))).unwrap();
    assert!(app.is_dialog_visible());

    // 'q' closes the dialog rather than quitting
    app.handle_event(key_event(KeyCode::Char('q'))).unwrap();
    assert!(!app.is_dialog_visible());
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_quit_while_loading() {
    let (mut app, _) = app_with(FakeBookSource(Ok(Vec::new())));

    app.handle_event(key_event(KeyCode::Char('q'))).unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_ctrl_c_quits() {
    let (mut app, _) = ready_app();

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_enter_saves_from_focused_cover() {
    let (mut app, _) = ready_app();

    app.handle_event(key_event(KeyCode::Enter)).unwrap();

    assert_eq!(app.state().saved_quotes().len(), 1);
    assert_eq!(app.state().saved_quotes()[0].quote_text, "A sentence worth keeping.");
}

#[tokio::test]
async fn test_mouse_swipe_up_on_cover() {
    let (mut app, _) = ready_app();
    // 40 rows: list on rows 0..28, carousel on 28..39, status on 39
    render(&mut app);

    app.handle_event(mouse_event(MouseEventKind::Down(MouseButton::Left), 5, 35))
        .unwrap();
    app.handle_event(mouse_event(MouseEventKind::Drag(MouseButton::Left), 5, 27))
        .unwrap();
    assert_eq!(app.carousel().covers()[0].offset_y(), -100.0);

    app.handle_event(mouse_event(MouseEventKind::Up(MouseButton::Left), 5, 27))
        .unwrap();

    assert_eq!(app.state().saved_quotes().len(), 1);
    assert!(app.carousel().covers()[0].is_animating());
}

#[tokio::test]
async fn test_focus_lost_ends_drag() {
    let (mut app, _) = ready_app();
    render(&mut app);

    app.handle_event(mouse_event(MouseEventKind::Down(MouseButton::Left), 5, 35))
        .unwrap();
    app.handle_event(mouse_event(MouseEventKind::Drag(MouseButton::Left), 5, 34))
        .unwrap();
    assert_eq!(app.carousel().covers()[0].offset_y(), -16.0);

    app.handle_event(EventType::FocusLost).unwrap();

    assert!(app.state().saved_quotes().is_empty());
    assert_eq!(app.carousel().covers()[0].offset_y(), 0.0);
    assert!(!app.carousel().has_capture());
}

#[tokio::test]
async fn test_render_screens() {
    let (mut app, _) = app_with(FakeBookSource(Ok(Vec::new())));
    let terminal = render(&mut app);
    assert!(buffer_text(terminal.backend().buffer()).contains("Loading books..."));

    let (mut app, _) = ready_app();
    select(&mut app, "b1", "Rendered quote.");
    app.tick(Instant::now());
    let terminal = render(&mut app);
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Your Quotes (1)"));
    assert!(text.contains("Rendered quote."));
    assert!(text.contains("Title b"));
}

#[tokio::test]
async fn test_delete_key_uses_event_time() {
    let (mut app, _) = ready_app();
    select(&mut app, "b1", "Short lived.");
    app.tick(Instant::now());

    app.handle_event(key_event(KeyCode::Char('d'))).unwrap();
    assert!(app.quote_list().cards()[0].phase().is_animating());
    assert_eq!(app.state().saved_quotes().len(), 1);

    app.tick(Instant::now() + Duration::from_secs(1));
    assert!(app.state().saved_quotes().is_empty());
    assert!(app.quote_list().cards().is_empty());
}

#[tokio::test]
async fn test_idle_tick_skips_sync() {
    let (mut app, _) = ready_app();
    assert!(!app.needs_sync());

    app.tick(Instant::now());
    assert!(!app.needs_sync());

    app.handle_app_action(Action::SetFontSize(16));
    assert!(app.needs_sync());
    assert_eq!(app.quote_list().font_size(), 14);

    app.tick(Instant::now());
    assert!(!app.needs_sync());
    assert_eq!(app.quote_list().font_size(), 16);
}

#[tokio::test]
async fn test_resolved_color_logged_as_hex() {
    let logger = Logger::new();
    let services = AppServices {
        book_source: Arc::new(FakeBookSource(Ok(Vec::new()))),
        color_extractor: Arc::new(FakeColorExtractor(EDGE)),
        clipboard: Box::new(MemoryClipboard::default()),
    };
    let mut app = AppComponent::new(
        AppState::new(LocalStorage::in_memory()),
        services,
        CellScale::default(),
        logger.clone(),
        StdRng::seed_from_u64(3),
    );

    app.handle_app_action(Action::EdgeColorResolved {
        cover_ref: "https://covers.example/b1.jpg".to_string(),
        color: EDGE,
    });

    assert!(logger
        .get_logs()
        .iter()
        .any(|line| line.ends_with("Colors: https://covers.example/b1.jpg is #c8b428")));
}
