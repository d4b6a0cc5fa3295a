use crate::books::BookSource;
use crate::constants::{
    CAROUSEL_SCROLL_STEP, ERROR_CLIPBOARD_FAILED, INFO_NOTHING_TO_EXPORT, STATUS_MESSAGE_TTL, SUCCESS_CLEARED,
    SUCCESS_EXPORT_COPIED,
};
use crate::cover_colors::{ColorExtractor, EdgeColorCache};
use crate::export::export;
use crate::gesture::{from_mouse_event, CellScale, Point, PointerEvent, PointerEventKind};
use crate::logger::Logger;
use crate::state::{AppState, Screen};
use crate::ui::clipboard::Clipboard;
use crate::ui::components::{CarouselComponent, DialogComponent, LoadingComponent, QuoteListComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::utils::color::rgb_to_hex;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

const CAROUSEL_HEIGHT: u16 = 11;
const KEY_HINTS: &str =
    "←/→ browse  Tab focus  Enter save  ↑/↓ scroll  d delete  +/- size  e export  C clear  G logs  q quit";

/// External collaborators the app talks to
pub struct AppServices {
    pub book_source: Arc<dyn BookSource>,
    pub color_extractor: Arc<dyn ColorExtractor>,
    pub clipboard: Box<dyn Clipboard>,
}

/// Which component owns the gesture in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerTarget {
    Carousel,
    QuoteList,
}

pub struct AppComponent {
    // Component composition
    carousel: CarouselComponent,
    quote_list: QuoteListComponent,
    dialog: DialogComponent,
    loading: LoadingComponent,

    // Application state
    state: AppState,
    colors: EdgeColorCache,

    // Services
    services: AppServices,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    rng: StdRng,

    // Simple UI state
    scale: CellScale,
    status_message: Option<(String, Instant)>,
    carousel_area: Rect,
    quote_list_area: Rect,
    pointer_owner: Option<PointerTarget>,
    last_pointer: Point,
    needs_sync: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(state: AppState, services: AppServices, scale: CellScale, logger: Logger, mut rng: StdRng) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let loading = LoadingComponent::new(&mut rng, Instant::now());

        Self {
            carousel: CarouselComponent::new(scale),
            quote_list: QuoteListComponent::new(scale),
            dialog: DialogComponent::new(logger.clone()),
            loading,
            state,
            colors: EdgeColorCache::new(),
            services,
            task_manager,
            background_action_rx,
            logger,
            rng,
            scale,
            status_message: None,
            carousel_area: Rect::default(),
            quote_list_area: Rect::default(),
            pointer_owner: None,
            last_pointer: Point::default(),
            needs_sync: true,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn colors(&self) -> &EdgeColorCache {
        &self.colors
    }

    pub fn carousel(&self) -> &CarouselComponent {
        &self.carousel
    }

    pub fn quote_list(&self) -> &QuoteListComponent {
        &self.quote_list
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(message, _)| message.as_str())
    }

    /// Whether state changed since the components last saw it
    pub fn needs_sync(&self) -> bool {
        self.needs_sync
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Hydrate from local storage and start the book fetch
    pub fn start(&mut self) {
        self.logger.log("App: Hydrating local storage".to_string());
        self.state.hydrate();

        let covers: Vec<String> = self
            .state
            .saved_quotes()
            .iter()
            .map(|quote| quote.book.cover_ref.clone())
            .collect();
        for cover_ref in covers {
            self.request_edge_color(cover_ref);
        }

        self.logger.log("App: Fetching books".to_string());
        self.task_manager.spawn_book_fetch(self.services.book_source.clone());
        self.sync_component_data();
    }

    /// Start an extraction unless the color is cached or already in flight
    fn request_edge_color(&mut self, cover_ref: String) {
        if self.colors.begin(&cover_ref) {
            self.task_manager
                .spawn_color_extraction(self.services.color_extractor.clone(), cover_ref);
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.logger.log(format!("Status: {}", message));
        self.status_message = Some((message, Instant::now()));
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.carousel.set_books(self.state.books());
        self.quote_list
            .update_data(self.state.saved_quotes(), self.state.font_size());

        let navigation_enabled = !self.dialog.is_visible();
        self.carousel.set_keyboard_enabled(navigation_enabled);
        self.quote_list.set_keyboard_enabled(navigation_enabled);
        self.needs_sync = false;
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            _ => Action::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Action {
        if self.dialog.is_visible() {
            let action = self.dialog.handle_key_events(key);
            return self.dialog.update(action);
        }
        if self.state.screen() == Screen::Loading {
            return self.handle_global_key(key);
        }

        if self.carousel.handle_nav_key(&key) {
            return Action::None;
        }
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            return self
                .carousel
                .select_focused(now, &mut self.quote_list, &mut self.rng);
        }
        if matches!(key.code, KeyCode::Delete | KeyCode::Char('d')) {
            self.quote_list.delete_top_visible(now);
            return Action::None;
        }

        let list_action = self.quote_list.handle_key_events(key);
        if !list_action.is_none() {
            return list_action;
        }
        self.handle_global_key(key)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Action {
        if self.dialog.is_visible() || self.state.screen() == Screen::Loading {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let direction = if mouse.kind == MouseEventKind::ScrollUp { -1 } else { 1 };
                if contains(self.carousel_area, mouse.column, mouse.row) {
                    let offset = self.carousel.scroll_offset() + direction as f32 * CAROUSEL_SCROLL_STEP / 2.0;
                    self.carousel.scroll_to(offset);
                } else if contains(self.quote_list_area, mouse.column, mouse.row) {
                    self.quote_list.scroll_by(direction);
                }
                return Action::None;
            }
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
                let direction = if mouse.kind == MouseEventKind::ScrollLeft { -1.0 } else { 1.0 };
                let offset = self.carousel.scroll_offset() + direction * CAROUSEL_SCROLL_STEP / 2.0;
                self.carousel.scroll_to(offset);
                return Action::None;
            }
            _ => {}
        }

        match from_mouse_event(&mouse, self.scale) {
            Some(event) => {
                self.last_pointer = event.point;
                if event.kind == PointerEventKind::Down {
                    self.pointer_owner = if contains(self.carousel_area, mouse.column, mouse.row) {
                        Some(PointerTarget::Carousel)
                    } else if contains(self.quote_list_area, mouse.column, mouse.row) {
                        Some(PointerTarget::QuoteList)
                    } else {
                        None
                    };
                }
                self.dispatch_pointer(event, now)
            }
            None => Action::None,
        }
    }

    /// Send a pointer event to whichever component owns the gesture
    fn dispatch_pointer(&mut self, event: PointerEvent, now: Instant) -> Action {
        let owner = self.pointer_owner;
        if matches!(event.kind, PointerEventKind::Up | PointerEventKind::Leave) {
            self.pointer_owner = None;
        }

        match owner {
            Some(PointerTarget::Carousel) => {
                self.carousel
                    .handle_pointer(&event, now, &mut self.quote_list, &mut self.rng)
            }
            Some(PointerTarget::QuoteList) => self.quote_list.handle_pointer(&event, now),
            None => Action::None,
        }
    }

    /// Handle app-level actions
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        if !action.is_none() {
            self.needs_sync = true;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::SelectQuote { book, quote } => {
                let now_ms = chrono::Utc::now().timestamp_millis();
                let cover_ref = book.cover_ref.clone();
                if let Some(id) = self.state.select_quote(book, &quote, now_ms) {
                    self.logger.log(format!("Quote: Saved {}", id));
                    self.request_edge_color(cover_ref);
                }
                Action::None
            }
            Action::DeleteQuote(id) => {
                if self.state.delete_quote(&id) {
                    self.logger.log(format!("Quote: Deleted {}", id));
                } else {
                    self.logger.log(format!("Quote: Nothing to delete for {}", id));
                }
                Action::None
            }
            Action::ClearAll => {
                self.state.clear_all();
                self.set_status(SUCCESS_CLEARED);
                Action::None
            }
            Action::SetFontSize(px) => {
                let size = self.state.set_font_size(px);
                self.logger.log(format!("Preferences: Font size {}", size));
                Action::None
            }
            Action::Export(format) => {
                let text = export(self.state.saved_quotes(), format);
                if text.is_empty() {
                    self.set_status(INFO_NOTHING_TO_EXPORT);
                } else {
                    match self.services.clipboard.set_text(text) {
                        Ok(()) => self.set_status(format!("{} ({})", SUCCESS_EXPORT_COPIED, format.label())),
                        Err(e) => {
                            self.logger.log(format!("❌ Clipboard: {}", e));
                            self.set_status(ERROR_CLIPBOARD_FAILED);
                        }
                    }
                }
                Action::None
            }
            Action::BooksLoaded(books) => {
                self.logger.log(format!("✅ Books: Loaded {}", books.len()));
                self.state.books_loaded(books, &mut self.rng);
                Action::None
            }
            Action::BooksFailed(error) => {
                self.logger.log(format!("❌ Books: Failed to load: {}", error));
                self.state.books_failed(&error);
                Action::None
            }
            Action::EdgeColorResolved { cover_ref, color } => {
                self.logger
                    .log(format!("Colors: {} is {}", cover_ref, rgb_to_hex(color)));
                self.colors.insert(&cover_ref, color);
                Action::None
            }
            Action::ShowStatus(message) => {
                self.set_status(message);
                Action::None
            }
            Action::ShowDialog(dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                self.dialog.update(Action::ShowDialog(dialog_type))
            }
            Action::HideDialog => {
                self.logger.log("Dialog: Hiding current dialog".to_string());
                self.dialog.update(Action::HideDialog)
            }
            Action::None => Action::None,
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        for (task_id, description) in completed_tasks {
            self.logger
                .log(format!("Background: Task {} finished ({})", task_id, description));
        }

        actions
    }

    /// Advance animations and timers, then apply whatever they produced.
    /// Returns whether anything on screen may have changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut actions = self.process_background_actions();
        let mut dirty = !actions.is_empty();

        if self.state.screen() == Screen::Loading {
            self.loading.tick(now);
            dirty = true;
        }

        self.carousel.tick(now);
        actions.extend(self.quote_list.finish_animations(now));

        if self
            .status_message
            .as_ref()
            .is_some_and(|(_, shown_at)| now.duration_since(*shown_at) >= STATUS_MESSAGE_TTL)
        {
            self.status_message = None;
            dirty = true;
        }

        dirty |= !actions.is_empty() || self.is_animating();
        for action in actions {
            self.handle_app_action(action);
        }
        if self.needs_sync {
            self.sync_component_data();
        }
        dirty
    }

    fn is_animating(&self) -> bool {
        self.pointer_owner.is_some()
            || (self.carousel.scroll_offset() - self.carousel.scroll_target()).abs() > f32::EPSILON
            || self.carousel.covers().iter().any(|cover| cover.is_animating())
            || self.quote_list.cards().iter().any(|card| card.phase().is_animating())
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<bool> {
        let now = Instant::now();
        let action = match event_type {
            EventType::Key(key) => self.handle_key(key, now),
            EventType::Mouse(mouse) => self.handle_mouse(mouse, now),
            EventType::FocusLost => {
                // Losing the terminal ends any drag the way pointer-leave does
                if self.pointer_owner.is_some() {
                    let leave = PointerEvent::mouse(PointerEventKind::Leave, self.last_pointer);
                    self.dispatch_pointer(leave, now)
                } else {
                    Action::None
                }
            }
            EventType::Tick => return Ok(self.tick(now)),
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        self.handle_app_action(action);
        self.sync_component_data();
        Ok(true)
    }

    fn render_status_bar(&self, f: &mut Frame, rect: Rect) {
        let line = match &self.status_message {
            Some((message, _)) => Line::from(Span::styled(message.clone(), Style::default().fg(Color::Yellow))),
            None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        };
        f.render_widget(Paragraph::new(line), rect);
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dialog.update(action)
    }

    fn tick(&mut self, now: Instant) -> Action {
        AppComponent::tick(self, now);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.state.screen() == Screen::Loading {
            self.loading.render(f, rect);
        } else {
            let [list_area, carousel_area, status_area] = Layout::vertical([
                Constraint::Min(0),
                Constraint::Length(CAROUSEL_HEIGHT),
                Constraint::Length(1),
            ])
            .areas(rect);

            self.quote_list_area = list_area;
            self.carousel_area = carousel_area;

            self.quote_list.render_with_colors(f, list_area, &self.colors);
            // Lifted covers draw over the list
            self.carousel.render_with_colors(f, carousel_area, &self.colors);
            self.render_status_bar(f, status_area);
        }

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
