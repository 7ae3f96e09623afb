//! Results tab: published evaluation figures per model.

use crate::metrics::{comparison, default_index, percent, reports, ConfusionMatrix, ModelReport};
use crate::utils::color::{heat_color, ACCENT};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph, Tabs},
    Frame,
};

use crate::ui::core::{Action, Component};

/// Colors of the comparison bars: accuracy, precision, recall, F1
const METRIC_COLORS: [Color; 4] = [Color::Cyan, Color::Green, Color::Yellow, Color::Magenta];

pub struct ResultsComponent {
    selected: usize,
}

impl Default for ResultsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsComponent {
    pub fn new() -> Self {
        Self {
            selected: default_index(),
        }
    }

    pub fn selected_report(&self) -> Option<&'static ModelReport> {
        reports().get(self.selected)
    }

    fn select(&mut self, delta: isize) {
        let count = reports().len() as isize;
        if count == 0 {
            return;
        }
        self.selected = (self.selected as isize + delta).rem_euclid(count) as usize;
    }

    fn render_selector(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<&str> = reports().iter().map(|r| r.name).collect();
        let tabs = Tabs::new(titles)
            .select(self.selected)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Model "),
            )
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, area);
    }

    fn render_metrics(&self, f: &mut Frame, area: Rect, report: &ModelReport) {
        let metric = |name: &str, value: f64| {
            Line::from(vec![
                Span::styled(format!("{:<12}", name), Style::default().fg(Color::Gray)),
                Span::styled(percent(value), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            ])
        };
        let count = |name: &str, value: u32, color: Color| {
            Line::from(vec![
                Span::styled(format!("{:<16}", name), Style::default().fg(Color::Gray)),
                Span::styled(value.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ])
        };
        let m = &report.metrics;
        let lines = vec![
            metric("Accuracy", m.accuracy),
            metric("Precision", m.precision),
            metric("Recall", m.recall),
            metric("AUC", m.auc),
            metric("F1 score", m.f1),
            Line::from(""),
            count("Confirmed", report.summary.confirmed, Color::Rgb(34, 197, 94)),
            count("Candidates", report.summary.candidates, Color::Rgb(234, 179, 8)),
            count("False positives", report.summary.false_positives, Color::Rgb(239, 68, 68)),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", report.name));
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_confusion(&self, f: &mut Frame, area: Rect, confusion: &ConfusionMatrix) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(
                " Confusion matrix (acc {} • f1 {}) ",
                percent(confusion.accuracy()),
                percent(confusion.f1())
            ));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Fill(1), Constraint::Fill(1)]).split(inner);
        let header = Layout::horizontal([Constraint::Length(16), Constraint::Fill(1), Constraint::Fill(1)]).split(rows[0]);
        f.render_widget(Paragraph::new("Predicted →").style(Style::default().fg(Color::Gray)), header[0]);
        f.render_widget(Paragraph::new("CONFIRMED").alignment(Alignment::Center), header[1]);
        f.render_widget(Paragraph::new("FALSE POS.").alignment(Alignment::Center), header[2]);

        let cells = confusion.cells();
        for (r, (label, values)) in ["Actual CONFIRMED", "Actual FALSE POS."].iter().zip(cells).enumerate() {
            let row = Layout::horizontal([Constraint::Length(16), Constraint::Fill(1), Constraint::Fill(1)]).split(rows[r + 1]);
            f.render_widget(Paragraph::new(*label).style(Style::default().fg(Color::Gray)), row[0]);
            for (c, value) in values.into_iter().enumerate() {
                let diagonal = r == c;
                let background = heat_color(ConfusionMatrix::heat(value, diagonal), diagonal);
                let cell = Paragraph::new(value.to_string())
                    .alignment(Alignment::Center)
                    .style(Style::default().bg(background).fg(Color::White).add_modifier(Modifier::BOLD));
                f.render_widget(cell, row[c + 1]);
            }
        }
    }

    fn render_comparison(&self, f: &mut Frame, area: Rect) {
        let mut chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Model comparison: accuracy • precision • recall • F1 "),
            )
            .bar_width(3)
            .bar_gap(0)
            .group_gap(3)
            .max(100);
        for row in comparison() {
            let values = [row.accuracy, row.precision, row.recall, row.f1];
            let bars: Vec<Bar> = values
                .iter()
                .zip(METRIC_COLORS)
                .map(|(value, color)| {
                    Bar::default()
                        .value((value * 100.0).round() as u64)
                        .text_value(String::new())
                        .style(Style::default().fg(color))
                })
                .collect();
            chart = chart.data(BarGroup::default().label(Line::from(row.name)).bars(&bars));
        }
        f.render_widget(chart, area);
    }
}

impl Component for ResultsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => self.select(1),
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => self.select(-1),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Length(11), Constraint::Min(0)]).split(rect);
        self.render_selector(f, chunks[0]);

        if let Some(report) = self.selected_report() {
            let middle = Layout::horizontal([Constraint::Length(34), Constraint::Min(0)]).split(chunks[1]);
            self.render_metrics(f, middle[0], report);
            self.render_confusion(f, middle[1], &report.confusion);
        }
        self.render_comparison(f, chunks[2]);
    }

    fn key_hints(&self) -> &'static str {
        "h/l: model"
    }
}
