//! Modal overlays: the export format menu and the logs viewer.
//!
//! While a dialog is visible it receives every key; the app disables the
//! carousel and list navigation bindings until it closes.

use crate::constants::{DIALOG_TITLE_EXPORT, DIALOG_TITLE_LOGS};
use crate::export::ExportFormat;
use crate::logger::Logger;
use crate::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub selected_format: usize,
    pub scroll_offset: usize,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            selected_format: 0,
            scroll_offset: 0,
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn open(&mut self, dialog_type: DialogType) {
        self.dialog_type = Some(dialog_type);
        self.selected_format = 0;
        self.scroll_offset = 0;
    }

    fn close(&mut self) {
        self.dialog_type = None;
    }

    fn handle_export_key(&mut self, key: KeyEvent) -> Action {
        let count = ExportFormat::ALL.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => Action::HideDialog,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_format = (self.selected_format + count - 1) % count;
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_format = (self.selected_format + 1) % count;
                Action::None
            }
            KeyCode::Enter => Action::Export(ExportFormat::ALL[self.selected_format]),
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(n) if (1..=count as u32).contains(&n) => Action::Export(ExportFormat::ALL[n as usize - 1]),
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_logs_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('G') => Action::HideDialog,
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset += 1;
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            KeyCode::Char('c') => {
                self.logger.clear();
                self.scroll_offset = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn modal_area(area: Rect, width_pct: u16, height: Option<u16>) -> Rect {
        let width = area.width.saturating_mul(width_pct) / 100;
        let height = height
            .unwrap_or(area.height.saturating_mul(8) / 10)
            .min(area.height);
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    fn render_export_menu(&self, f: &mut Frame, area: Rect) {
        let modal_area = Self::modal_area(area, 50, Some(ExportFormat::ALL.len() as u16 + 4));
        f.render_widget(Clear, modal_area);

        let block = Block::default()
            .title(DIALOG_TITLE_EXPORT)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black))
            .border_style(Style::default().fg(Color::Green));
        f.render_widget(block, modal_area);

        let inner = modal_area.inner(Margin {
            vertical: 1,
            horizontal: 2,
        });
        let [list_area, hint_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let items: Vec<ListItem> = ExportFormat::ALL
            .iter()
            .enumerate()
            .map(|(i, format)| {
                let style = if i == self.selected_format {
                    Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", i + 1), Style::default().fg(Color::Yellow)),
                    Span::styled(format.label(), style),
                ]))
            })
            .collect();
        f.render_widget(List::new(items), list_area);

        let hint = Paragraph::new("1-5 or Enter to copy, Esc to cancel")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hint, hint_area);
    }

    fn render_logs(&mut self, f: &mut Frame, area: Rect) {
        let modal_area = Self::modal_area(area, 80, None);
        f.render_widget(Clear, modal_area);

        let block = Block::default()
            .title(DIALOG_TITLE_LOGS)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black))
            .border_style(Style::default().fg(Color::Cyan));
        f.render_widget(block, modal_area);

        let inner = modal_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        let logs = self.logger.get_logs();
        if logs.is_empty() {
            let no_logs = Paragraph::new("No logs available")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            f.render_widget(no_logs, inner);
            return;
        }

        let visible_height = inner.height as usize;
        self.scroll_offset = self.scroll_offset.min(logs.len().saturating_sub(1));
        let end_index = (self.scroll_offset + visible_height).min(logs.len());

        let items: Vec<ListItem> = logs[self.scroll_offset..end_index]
            .iter()
            .map(|log| match log.find("] ") {
                Some(bracket_end) => {
                    let message = &log[bracket_end + 2..];
                    let message_style = if message.contains("❌") || message.contains("Failed") {
                        Style::default().fg(Color::Red)
                    } else if message.contains("✅") {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(log[..bracket_end + 2].to_string(), Style::default().fg(Color::DarkGray)),
                        Span::styled(message.to_string(), message_style),
                    ]))
                }
                None => ListItem::new(Line::from(log.clone())),
            })
            .collect();

        f.render_widget(List::new(items), inner);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.dialog_type {
            Some(DialogType::Export) => self.handle_export_key(key),
            Some(DialogType::Logs) => self.handle_logs_key(key),
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.open(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.close();
                Action::None
            }
            Action::Export(format) => {
                self.close();
                Action::Export(format)
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Export) => self.render_export_menu(f, rect),
            Some(DialogType::Logs) => self.render_logs(f, rect),
            None => {}
        }
    }
}
