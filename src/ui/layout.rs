//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the tab strip, borders included
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into tab strip, body and a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// Split a tab body into a form column and a wider result column
    #[must_use]
    pub fn form_layout(area: Rect, form_width: u16) -> [Rect; 2] {
        let form_width = form_width.min(area.width / 2).max(area.width.min(24));
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(form_width), Constraint::Min(0)])
            .split(area);
        [chunks[0], chunks[1]]
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Dialog width in percent; narrow terminals get a wider share
    #[must_use]
    pub fn dialog_width(screen_width: u16) -> u16 {
        if screen_width < 80 {
            90
        } else {
            60
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_layout_reserves_tabs_and_status() {
        let [tabs, body, status] = LayoutManager::main_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(tabs.height, TAB_BAR_HEIGHT);
        assert_eq!(status.height, 1);
        assert_eq!(body.height, 40 - TAB_BAR_HEIGHT - 1);
        assert_eq!(status.y, 39);
    }

    #[test]
    fn centered_rect_lines_is_inside_area() {
        let area = Rect::new(0, 0, 100, 30);
        let popup = LayoutManager::centered_rect_lines(50, 8, area);
        assert_eq!(popup.height, 8);
        assert!(popup.x >= 24 && popup.right() <= 76);
    }
}
