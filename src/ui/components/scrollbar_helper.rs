//! Vertical scrollbar for row-scrolled content.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

/// Scrollbar state plus the layout rule for when one is shown.
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Sync with the content: `content_rows` tall, scrolled to `position`,
    /// `viewport_rows` visible.
    pub fn update_state(&mut self, content_rows: usize, position: usize, viewport_rows: usize) {
        let scrollable = content_rows.saturating_sub(viewport_rows);
        self.state = self
            .state
            .content_length(scrollable + 1)
            .viewport_content_length(viewport_rows)
            .position(position.min(scrollable));
    }

    pub fn needs_scrollbar(content_rows: usize, viewport_rows: usize) -> bool {
        content_rows > viewport_rows
    }

    /// Split `rect` into the content area and, when the content overflows, a
    /// one-column scrollbar on the right.
    pub fn calculate_areas(rect: Rect, content_rows: usize) -> (Rect, Option<Rect>) {
        if !Self::needs_scrollbar(content_rows, rect.height as usize) || rect.width < 2 {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width - 1,
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width - 1,
            width: 1,
            ..rect
        };
        (content_area, Some(scrollbar_area))
    }

    pub fn render(&mut self, buf: &mut Buffer, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            scrollbar.render(area, buf, &mut self.state);
        }
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
