//! Status bar component

use crate::constants::STATUS_PROCESSING;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text for the bar: running jobs win over the last status message,
    /// which wins over the active tab's key hints
    pub fn status_text(jobs: &[String], message: Option<&str>, hints: &str) -> (String, Color) {
        if let Some(first) = jobs.first() {
            let more = if jobs.len() > 1 {
                format!(" (+{} more)", jobs.len() - 1)
            } else {
                String::new()
            };
            (format!("🔄 {} {}{}", STATUS_PROCESSING, first, more), Color::Yellow)
        } else if let Some(message) = message {
            (message.to_string(), Color::Green)
        } else {
            (format!("{} • ?: help • q: quit", hints), Color::Gray)
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, jobs: &[String], message: Option<&str>, hints: &str) {
        let (status_text, status_color) = Self::status_text(jobs, message, hints);
        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
