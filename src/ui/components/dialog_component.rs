//! Modal dialog component.
//!
//! One dialog is shown at a time, on top of the active tab. While visible it
//! receives every key press: text dialogs scroll, the file prompt edits a
//! path and submits it as [`Action::FileSelected`].

use crate::logger::Logger;
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component, DialogType, FilePurpose};
use crossterm::event::{KeyCode, KeyEvent};
use log::debug;
use ratatui::{layout::Rect, style::Color, Frame};
use std::path::PathBuf;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub cursor_position: usize,
    scroll: ScrollbarHelper,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            scroll: ScrollbarHelper::new(),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.scroll.reset();
    }

    fn byte_position(&self) -> usize {
        self.input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.input_buffer.len(), |(i, _)| i)
    }

    fn handle_submit(&mut self, purpose: FilePurpose) -> Action {
        let trimmed = self.input_buffer.trim();
        if trimmed.is_empty() {
            return Action::None;
        }
        let path = expand_home(trimmed);
        debug!("dialog: {:?} path submitted: {}", purpose, path.display());
        self.clear_dialog();
        Action::FileSelected { purpose, path }
    }

    /// Shared scrolling keys; returns false when the key is not a scroll key
    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.scroll_down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.scroll_to_top(),
            KeyCode::End => self.scroll.scroll_to_bottom(),
            _ => return false,
        }
        true
    }

    fn handle_input_key(&mut self, key: KeyEvent, purpose: FilePurpose) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.handle_submit(purpose),
            KeyCode::Char(c) => {
                let byte_pos = self.byte_position();
                self.input_buffer.insert(byte_pos, c);
                self.cursor_position += 1;
                Action::None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let byte_pos = self.byte_position();
                    self.input_buffer.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Delete => {
                if self.cursor_position < self.input_buffer.chars().count() {
                    let byte_pos = self.byte_position();
                    self.input_buffer.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                if self.cursor_position < self.input_buffer.chars().count() {
                    self.cursor_position += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.input_buffer.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(raw: &str) -> PathBuf {
    match (raw.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        match dialog_type {
            DialogType::FilePrompt(purpose) => self.handle_input_key(key, purpose),
            DialogType::Info(_) | DialogType::Error(_) => {
                if self.handle_scroll_key(key) {
                    Action::None
                } else {
                    // Any other key dismisses the message
                    Action::HideDialog
                }
            }
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };
        match dialog_type {
            DialogType::FilePrompt(purpose) => {
                system_dialogs::render_file_prompt(f, rect, purpose, &self.input_buffer, self.cursor_position);
            }
            DialogType::Info(message) => {
                system_dialogs::render_message_dialog(f, rect, "ℹ️ Info", Color::Blue, &message, &mut self.scroll);
            }
            DialogType::Error(message) => {
                system_dialogs::render_message_dialog(f, rect, "⚠️ Error", Color::Red, &message, &mut self.scroll);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, &self.logger, &mut self.scroll),
        }
    }

    fn is_editing(&self) -> bool {
        matches!(self.dialog_type, Some(DialogType::FilePrompt(_)))
    }
}
