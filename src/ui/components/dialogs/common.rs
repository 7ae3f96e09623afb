use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field with a block cursor after the typed text
pub fn create_input_paragraph<'a>(input_buffer: &'a str, cursor_position: usize, field_title: &str) -> Paragraph<'a> {
    let split = input_buffer
        .char_indices()
        .nth(cursor_position)
        .map_or(input_buffer.len(), |(i, _)| i);
    let (before, after) = input_buffer.split_at(split);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(Color::Gray));

    let line = Line::from(vec![
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::White)),
        Span::styled(after, Style::default().fg(Color::White)),
    ]);
    Paragraph::new(line).block(input_block)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_LOAD: InstructionShortcut = ("Enter", Color::Green, " Load");
    pub const SCROLL: InstructionShortcut = ("j/k", Color::Cyan, " Scroll");
    pub const ANY_KEY: InstructionShortcut = ("Any key", Color::Cyan, " Close");
}
