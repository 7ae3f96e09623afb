//! Scroll offset and scrollbar rendering shared by the text dialogs.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Lines moved by PageUp / PageDown
const PAGE_LINES: usize = 10;

/// Scroll position over a block of text lines plus its scrollbar state.
///
/// The offset is allowed to run past the end while keys are pressed; it is
/// clamped against the real content length every time a window is taken.
#[derive(Debug, Default)]
pub struct ScrollbarHelper {
    offset: usize,
    state: ScrollbarState,
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.state = ScrollbarState::new(0);
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(PAGE_LINES);
    }

    pub fn page_down(&mut self) {
        self.offset = self.offset.saturating_add(PAGE_LINES);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = usize::MAX;
    }

    /// Whether `total` lines overflow a viewport of `height` lines
    pub fn needs_scrollbar(total: usize, height: usize) -> bool {
        total > height
    }

    /// Clamp the offset to the content and return the visible slice of lines
    pub fn window<'a>(&mut self, lines: &'a [String], height: usize) -> &'a [String] {
        let max_offset = lines.len().saturating_sub(height);
        self.offset = self.offset.min(max_offset);
        self.state = self
            .state
            .content_length(lines.len())
            .viewport_content_length(height)
            .position(self.offset);
        let end = (self.offset + height).min(lines.len());
        &lines[self.offset..end]
    }

    /// Draw the scrollbar along the right edge of `area` when the content overflows
    pub fn render(&mut self, f: &mut Frame, area: Rect, total: usize, height: usize) {
        if !Self::needs_scrollbar(total, height) {
            return;
        }
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));
        f.render_stateful_widget(scrollbar, area, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn window_clamps_offset_past_end() {
        let content = lines(30);
        let mut scroll = ScrollbarHelper::new();
        scroll.scroll_to_bottom();
        let visible = scroll.window(&content, 10);
        assert_eq!(visible.len(), 10);
        assert_eq!(visible[0], "line 20");
        assert_eq!(scroll.offset(), 20);
    }

    #[test]
    fn short_content_never_scrolls() {
        let content = lines(3);
        let mut scroll = ScrollbarHelper::new();
        scroll.page_down();
        assert_eq!(scroll.window(&content, 10).len(), 3);
        assert_eq!(scroll.offset(), 0);
        assert!(!ScrollbarHelper::needs_scrollbar(3, 10));
    }
}
