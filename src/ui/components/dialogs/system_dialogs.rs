use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::FilePurpose;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub const HELP_TEXT: &str = r"
EXOVIEW - Exoplanet Candidate Dashboard
=======================================

TABS
----
Tab / Shift+Tab   Next / previous tab
1 2 3 4           Explore, Classify, Curves, Results
?                 Toggle this help
G                 Show logs
q / Ctrl+C        Quit

EXPLORE
-------
j/k               Move row selection
h/l               Move column selection
s / Enter         Sort by selected column (again to reverse)
f / F             Cycle disposition filter forward / back
/                 Search all columns (Enter or Esc to finish)
x                 Clear the search
n/p, PgDn/PgUp    Next / previous page
Home / End        First / last page
r                 Cycle rows per page (10, 20, 50)
c                 Toggle charts
o                 Open a dataset CSV

CLASSIFY
--------
m                 Cycle the model (past the last one deselects)
j/k               Move between feature fields
Enter / i         Edit the selected feature (Tab moves on, Enter/Esc finishes)
c                 Classify the entered features
u                 Classify a CSV file with the selected model
n/p, PgDn/PgUp    Next / previous page of batch results
Home / End        First / last page of batch results
e                 Explain the entered features
a                 Switch the explanation audience
x                 Clear the form and results

CURVES
------
j/k               Select a star
←/→               Move the decision threshold
o                 Open a light-curve CSV
H/L               Move the threshold by 0.10
R                 Back to the example curve

RESULTS
-------
h/l or j/k        Select a model report
";

fn text_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Bordered, scrollable block of text filling `area`
fn render_scrolling_text(f: &mut Frame, area: Rect, title: &str, lines: &[String], scroll: &mut ScrollbarHelper) {
    f.render_widget(Clear, area);

    let visible_height = area.height.saturating_sub(2) as usize;
    let visible = scroll.window(lines, visible_height).join("\n");

    let paragraph = Paragraph::new(visible)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
    scroll.render(f, area, lines.len(), visible_height);
}

/// Info and error messages: a titled box with a short instruction line
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    message: &str,
    scroll: &mut ScrollbarHelper,
) {
    let dialog_area = LayoutManager::centered_rect_lines(LayoutManager::dialog_width(area.width), 12, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(create_dialog_block(format!(" {} ", title), color), dialog_area);

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines = text_lines(message);
    let visible_height = content_area.height as usize;
    let visible = scroll.window(&lines, visible_height).join("\n");

    let message_paragraph = Paragraph::new(visible)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });
    f.render_widget(message_paragraph, content_area);
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ANY_KEY, shortcuts::SEPARATOR, shortcuts::SCROLL]),
        instructions_area,
    );
    scroll.render(f, content_area, lines.len(), visible_height);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut ScrollbarHelper) {
    let help_area = LayoutManager::centered_rect(80, 90, area);
    render_scrolling_text(f, help_area, DIALOG_TITLE_HELP, &text_lines(HELP_TEXT), scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: &Logger, scroll: &mut ScrollbarHelper) {
    let logs_area = LayoutManager::centered_rect(90, 90, area);
    let mut logs = logger.get_logs();
    if logs.is_empty() {
        logs.push("No logs yet".to_string());
    }
    render_scrolling_text(f, logs_area, DIALOG_TITLE_LOGS, &logs, scroll);
}

/// Path prompt used by every "open CSV" action
pub fn render_file_prompt(f: &mut Frame, area: Rect, purpose: FilePurpose, input: &str, cursor_position: usize) {
    let dialog_area = LayoutManager::centered_rect_lines(LayoutManager::dialog_width(area.width), 7, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(create_dialog_block(format!(" {} ", purpose.title()), Color::Cyan), dialog_area);

    let inner = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(2),
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    f.render_widget(create_input_paragraph(input, cursor_position, "Path"), chunks[0]);
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ENTER_LOAD, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]),
        chunks[2],
    );
}
