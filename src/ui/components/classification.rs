//! Classify tab: manual feature entry or CSV upload, forwarded to the
//! prediction service, plus an on-demand explanation of the inputs.

use crate::classifier::{Audience, BatchPrediction, BatchSummary, Explanation, Features, ModelKind, Prediction, FEATURE_FIELDS};
use crate::config::Config;
use crate::constants::{
    BATCH_ROWS_PER_PAGE, ERROR_CLASSIFY_FAILED, ERROR_EXPLAIN_FAILED, ERROR_NO_MODEL, ERROR_NO_MODEL_FOR_UPLOAD,
    ERROR_NO_MODEL_OR_FILE, STATUS_PROCESSING,
};
use crate::engine::{clamp_page, paginate, total_pages, Page};
use crate::ui::core::{Action, Component, DialogType, FilePurpose};
use crate::ui::layout::LayoutManager;
use crate::utils::color::{disposition_color, ACCENT};
use crossterm::event::{KeyCode, KeyEvent};
use log::{debug, info};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};
use std::path::PathBuf;

/// Width of the feature form column
const FORM_WIDTH: u16 = 48;

/// What the result panel currently shows
#[derive(Debug, Clone, Default)]
pub enum AnalysisState {
    #[default]
    Empty,
    Processing,
    Single(Prediction),
    Batch {
        file: PathBuf,
        summary: BatchSummary,
        batch: BatchPrediction,
        page: usize,
    },
}

impl AnalysisState {
    /// The visible page of batch predictions; `None` unless a batch is shown.
    pub fn batch_page(&self) -> Option<Page<Prediction>> {
        match self {
            AnalysisState::Batch { batch, page, .. } => Some(paginate(&batch.predictions, BATCH_ROWS_PER_PAGE, *page)),
            _ => None,
        }
    }

    /// Move the batch table to `page`, clamped to the pages that exist.
    fn turn_batch_page(&mut self, to: impl FnOnce(usize, usize) -> usize) {
        if let AnalysisState::Batch { batch, page, .. } = self {
            let count = batch.predictions.len();
            let last = total_pages(count, BATCH_ROWS_PER_PAGE);
            *page = clamp_page(to(*page, last), count, BATCH_ROWS_PER_PAGE);
        }
    }
}

#[derive(Debug, Clone, Default)]
enum ExplanationState {
    #[default]
    Empty,
    Loading,
    Ready(Explanation),
}

pub struct ClassificationComponent {
    model: Option<ModelKind>,
    inputs: Vec<String>,
    selected_field: usize,
    editing: bool,
    analysis: AnalysisState,
    pending_file: Option<PathBuf>,
    audience: Audience,
    explanation: ExplanationState,
}

impl ClassificationComponent {
    pub fn new(config: &Config) -> Self {
        Self {
            model: config.service.model(),
            inputs: vec![String::new(); FEATURE_FIELDS.len()],
            selected_field: 0,
            editing: false,
            analysis: AnalysisState::Empty,
            pending_file: None,
            audience: Audience::default(),
            explanation: ExplanationState::Empty,
        }
    }

    pub fn model(&self) -> Option<ModelKind> {
        self.model
    }

    pub fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// None → each model in turn → None
    fn cycle_model(&mut self) {
        self.model = match self.model {
            None => Some(ModelKind::ALL[0]),
            Some(current) => {
                let index = ModelKind::ALL.iter().position(|m| *m == current).unwrap_or(0);
                ModelKind::ALL.get(index + 1).copied()
            }
        };
        debug!("classify: model {:?}", self.model);
    }

    fn submit(&mut self) -> Action {
        let Some(model) = self.model else {
            return Action::ShowDialog(DialogType::Info(ERROR_NO_MODEL.to_string()));
        };
        match Features::parse(&self.inputs) {
            Ok(features) => {
                self.analysis = AnalysisState::Processing;
                Action::ClassifySingle { model, features }
            }
            Err(e) => Action::ShowDialog(DialogType::Error(e.to_string())),
        }
    }

    fn request_upload(&self) -> Action {
        if self.model.is_none() {
            return Action::ShowDialog(DialogType::Info(ERROR_NO_MODEL_FOR_UPLOAD.to_string()));
        }
        Action::ShowDialog(DialogType::FilePrompt(FilePurpose::BatchClassification))
    }

    fn request_explanation(&mut self) -> Action {
        match Features::parse(&self.inputs) {
            Ok(features) => {
                self.explanation = ExplanationState::Loading;
                Action::RequestExplanation {
                    features,
                    audience: self.audience,
                }
            }
            Err(e) => Action::ShowDialog(DialogType::Error(e.to_string())),
        }
    }

    fn clear(&mut self) {
        self.inputs.iter_mut().for_each(String::clear);
        self.analysis = AnalysisState::Empty;
        self.explanation = ExplanationState::Empty;
        self.pending_file = None;
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Action {
        let field = &mut self.inputs[self.selected_field];
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.editing = false,
            KeyCode::Tab | KeyCode::Down => {
                self.selected_field = (self.selected_field + 1) % FEATURE_FIELDS.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.selected_field = (self.selected_field + FEATURE_FIELDS.len() - 1) % FEATURE_FIELDS.len();
            }
            KeyCode::Backspace => {
                field.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E') => field.push(c),
            _ => {}
        }
        Action::None
    }

    fn render_form(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);

        let mut model_spans = vec![Span::styled(" Model: ", Style::default().fg(Color::Gray))];
        for model in ModelKind::ALL {
            let style = if Some(model) == self.model {
                Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            model_spans.push(Span::styled(format!(" {} ", model.display_name()), style));
            model_spans.push(Span::raw(" "));
        }
        let model_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Select Classification Model ");
        f.render_widget(Paragraph::new(Line::from(model_spans)).block(model_block), chunks[0]);

        let label_width = FEATURE_FIELDS.iter().map(|f| f.label.len()).max().unwrap_or(0);
        let lines: Vec<Line> = FEATURE_FIELDS
            .iter()
            .zip(&self.inputs)
            .enumerate()
            .map(|(i, (field, value))| {
                let selected = i == self.selected_field;
                let marker = if selected { "▶ " } else { "  " };
                let cursor = if selected && self.editing { "█" } else { "" };
                let shown = if value.is_empty() && !(selected && self.editing) {
                    Span::styled("0", Style::default().fg(Color::DarkGray))
                } else {
                    Span::styled(format!("{}{}", value, cursor), Style::default().fg(Color::White))
                };
                let label_style = if selected {
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(vec![
                    Span::styled(marker, label_style),
                    Span::styled(format!("{:<width$} ", field.label, width = label_width), label_style),
                    shown,
                ])
            })
            .collect();
        let title = if self.editing { " Manual Entry (editing) " } else { " Manual Entry " };
        let form_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title);
        f.render_widget(Paragraph::new(lines).block(form_block), chunks[1]);
    }

    fn render_result(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Analysis Results ");

        match &self.analysis {
            AnalysisState::Empty => {
                let text = "Enter features and press 'c', or press 'u' to classify a CSV file.";
                f.render_widget(
                    Paragraph::new(text).style(Style::default().fg(Color::Gray)).block(block).wrap(Wrap { trim: true }),
                    area,
                );
            }
            AnalysisState::Processing => {
                let text = match &self.pending_file {
                    Some(path) => format!("{} {}", STATUS_PROCESSING, path.display()),
                    None => STATUS_PROCESSING.to_string(),
                };
                f.render_widget(Paragraph::new(text).style(Style::default().fg(Color::Yellow)).block(block), area);
            }
            AnalysisState::Single(prediction) => {
                let inner = block.inner(area);
                f.render_widget(block, area);
                let chunks = Layout::vertical([Constraint::Length(2), Constraint::Length(3), Constraint::Min(0)]).split(inner);
                let color = disposition_color(&prediction.classification);
                let verdict = Line::from(vec![
                    Span::styled("Classification: ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        prediction.classification.verdict().to_string(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ]);
                f.render_widget(Paragraph::new(verdict), chunks[0]);
                if let Some(confidence) = prediction.confidence {
                    let gauge = Gauge::default()
                        .block(Block::default().borders(Borders::ALL).title(" Confidence "))
                        .gauge_style(Style::default().fg(color))
                        .ratio((confidence / 100.0).clamp(0.0, 1.0))
                        .label(format!("{:.1}%", confidence));
                    f.render_widget(gauge, chunks[1]);
                }
            }
            AnalysisState::Batch { file, summary, .. } => {
                let inner = block.inner(area);
                f.render_widget(block, area);
                let chunks = Layout::vertical([Constraint::Length(7), Constraint::Min(3), Constraint::Length(1)]).split(inner);

                let mut lines = vec![
                    Line::from(vec![
                        Span::styled("File: ", Style::default().fg(Color::Gray)),
                        Span::raw(file.display().to_string()),
                    ]),
                    count_line("Total analyzed", summary.total, Color::White),
                    count_line("Confirmed", summary.confirmed, Color::Rgb(34, 197, 94)),
                    count_line("Candidates", summary.candidates, Color::Rgb(234, 179, 8)),
                    count_line("False positives", summary.false_positives, Color::Rgb(239, 68, 68)),
                ];
                if let Some(confidence) = summary.confidence {
                    lines.push(Line::from(vec![
                        Span::styled(format!("{:<18}", "Mean confidence"), Style::default().fg(Color::Gray)),
                        Span::styled(format!("{:.1}%", confidence), Style::default().fg(ACCENT)),
                    ]));
                }
                f.render_widget(Paragraph::new(lines), chunks[0]);

                if let Some(page) = self.analysis.batch_page() {
                    self.render_batch_table(f, chunks[1], chunks[2], &page);
                }
            }
        }
    }

    fn render_batch_table(&self, f: &mut Frame, table_area: Rect, footer_area: Rect, page: &Page<Prediction>) {
        let first_row = page.page_index.saturating_sub(1) * BATCH_ROWS_PER_PAGE;
        let rows: Vec<Row> = page
            .items
            .iter()
            .enumerate()
            .map(|(i, prediction)| {
                let id = prediction.id.clone().unwrap_or_else(|| (first_row + i + 1).to_string());
                Row::new(vec![
                    Cell::from(id),
                    Cell::from(prediction.classification.verdict().to_string()).style(
                        Style::default()
                            .fg(disposition_color(&prediction.classification))
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();
        let header = Row::new(vec!["Record ID", "Prediction"])
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
        let table = Table::new(rows, [Constraint::Percentage(40), Constraint::Percentage(60)])
            .header(header)
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(table, table_area);

        let footer = format!("Page {} of {}  (Home/p/n/End)", page.page_index, page.total_pages);
        f.render_widget(Paragraph::new(footer).style(Style::default().fg(Color::Gray)), footer_area);
    }

    fn render_explanation(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Explanation ({}) ", self.audience.label()));
        let (text, color) = match &self.explanation {
            ExplanationState::Empty => ("Press 'e' to explain the entered features.".to_string(), Color::Gray),
            ExplanationState::Loading => (STATUS_PROCESSING.to_string(), Color::Yellow),
            ExplanationState::Ready(explanation) => (explanation.content.clone(), Color::White),
        };
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(color)).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}

fn count_line(label: &str, count: usize, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<18}", label), Style::default().fg(Color::Gray)),
        Span::styled(count.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

impl Component for ClassificationComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.editing {
            return self.handle_edit_key(key);
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_field = (self.selected_field + 1).min(FEATURE_FIELDS.len() - 1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_field = self.selected_field.saturating_sub(1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('i') => {
                self.editing = true;
                Action::None
            }
            KeyCode::Char('m') => {
                self.cycle_model();
                Action::None
            }
            KeyCode::Char('c') => self.submit(),
            KeyCode::Char('u') => self.request_upload(),
            KeyCode::Char('e') => self.request_explanation(),
            KeyCode::Char('a') => {
                self.audience = self.audience.toggled();
                Action::None
            }
            KeyCode::Char('x') => {
                self.clear();
                Action::None
            }
            KeyCode::Char('n') | KeyCode::PageDown => {
                self.analysis.turn_batch_page(|page, _| page + 1);
                Action::None
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                self.analysis.turn_batch_page(|page, _| page.saturating_sub(1));
                Action::None
            }
            KeyCode::Home => {
                self.analysis.turn_batch_page(|_, _| 1);
                Action::None
            }
            KeyCode::End => {
                self.analysis.turn_batch_page(|_, last| last);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::FileSelected {
                purpose: FilePurpose::BatchClassification,
                path,
            } => {
                let Some(model) = self.model else {
                    return Action::ShowDialog(DialogType::Info(ERROR_NO_MODEL_OR_FILE.to_string()));
                };
                self.analysis = AnalysisState::Processing;
                self.pending_file = Some(path.clone());
                Action::ClassifyFile { model, path }
            }
            Action::PredictionReady(prediction) => {
                info!("classify: {} ({:?})", prediction.classification, prediction.confidence);
                self.pending_file = None;
                self.analysis = AnalysisState::Single(prediction);
                Action::None
            }
            Action::BatchReady(batch) => {
                self.analysis = batch_state(self.pending_file.take().unwrap_or_default(), batch);
                Action::None
            }
            Action::ClassificationFailed(message) => {
                self.analysis = AnalysisState::Empty;
                self.pending_file = None;
                Action::ShowDialog(DialogType::Error(format!("{}: {}", ERROR_CLASSIFY_FAILED, message)))
            }
            Action::ExplanationReady(explanation) => {
                self.explanation = ExplanationState::Ready(explanation);
                Action::None
            }
            Action::ExplanationFailed(message) => {
                self.explanation = ExplanationState::Empty;
                Action::ShowDialog(DialogType::Error(format!("{}: {}", ERROR_EXPLAIN_FAILED, message)))
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [form, right] = LayoutManager::form_layout(rect, FORM_WIDTH);
        let chunks = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(right);
        self.render_form(f, form);
        self.render_result(f, chunks[0]);
        self.render_explanation(f, chunks[1]);
    }

    fn is_editing(&self) -> bool {
        self.editing
    }

    fn key_hints(&self) -> &'static str {
        if self.editing {
            "type a number • Tab: next field • Enter/Esc: done"
        } else {
            "m: model • Enter: edit • c: classify • u: upload CSV • n/p: batch page • e: explain • a: audience • x: clear"
        }
    }
}

fn batch_state(file: PathBuf, batch: BatchPrediction) -> AnalysisState {
    let summary = batch.summary();
    info!(
        "classify: batch of {} ({} confirmed, {} candidates, {} false positives)",
        summary.total, summary.confirmed, summary.candidates, summary.false_positives
    );
    AnalysisState::Batch {
        file,
        summary,
        batch,
        page: 1,
    }
}
