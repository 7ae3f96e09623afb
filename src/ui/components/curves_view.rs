//! Curves tab: flux-vs-frame plot of one star and the threshold trade-off
//! between recall and false-positive rate.

use crate::constants::{CURVE_TITLE_EXAMPLE, CURVE_TITLE_UPLOADED, ERROR_CURVES_LOAD_FAILED, SAMPLE_SEED};
use crate::curves::{
    sample_curve, step_threshold, LightCurve, ThresholdCurve, DEFAULT_THRESHOLD, PLACEHOLDER_SPIKES,
};
use crate::engine::padded_bounds;
use crate::ui::core::{Action, Component, DialogType, FilePurpose};
use crate::utils::color::ACCENT;
use crossterm::event::{KeyCode, KeyEvent};
use log::{info, warn};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, BorderType, Borders, Chart, Dataset as ChartDataset, GraphType, List, ListItem, ListState,
        Paragraph,
    },
    Frame,
};
use std::path::PathBuf;

/// Width of the star list
const STAR_LIST_WIDTH: u16 = 22;

/// Where the displayed curves came from
#[derive(Debug, Clone, PartialEq)]
pub enum CurveSource {
    Example,
    Uploaded(PathBuf),
}

pub struct CurvesComponent {
    curves: Vec<LightCurve>,
    source: CurveSource,
    list_state: ListState,
    threshold: f64,
    threshold_curve: ThresholdCurve,
}

impl Default for CurvesComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CurvesComponent {
    pub fn new() -> Self {
        Self {
            curves: vec![placeholder()],
            source: CurveSource::Example,
            list_state: ListState::default().with_selected(Some(0)),
            threshold: DEFAULT_THRESHOLD,
            threshold_curve: ThresholdCurve::standard(),
        }
    }

    pub fn source(&self) -> &CurveSource {
        &self.source
    }

    pub fn curves(&self) -> &[LightCurve] {
        &self.curves
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn selected(&self) -> Option<&LightCurve> {
        self.curves.get(self.list_state.selected().unwrap_or(0))
    }

    fn reset(&mut self) {
        self.curves = vec![placeholder()];
        self.source = CurveSource::Example;
        self.list_state.select(Some(0));
    }

    fn select(&mut self, delta: isize) {
        let last = self.curves.len().saturating_sub(1) as isize;
        let current = self.list_state.selected().unwrap_or(0) as isize;
        self.list_state.select(Some((current + delta).clamp(0, last) as usize));
    }

    fn render_star_list(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .curves
            .iter()
            .map(|curve| {
                let label = curve.label.as_deref().map(|l| format!(" [{}]", l)).unwrap_or_default();
                ListItem::new(format!("{}{}", curve.star_id, label))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" Stars ({}) ", self.curves.len())),
            )
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_flux(&self, f: &mut Frame, area: Rect) {
        let title = match &self.source {
            CurveSource::Example => format!(" {} ", CURVE_TITLE_EXAMPLE),
            CurveSource::Uploaded(_) => format!(" {} ", CURVE_TITLE_UPLOADED),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title);
        let Some(curve) = self.selected() else {
            f.render_widget(Paragraph::new("No flux data").block(block), area);
            return;
        };

        let points = curve.series();
        let (lo, hi) = curve.bounds();
        let y_bounds = padded_bounds([lo, hi]);
        let x_max = points.last().map_or(1.0, |(x, _)| *x);
        let dataset = ChartDataset::default()
            .name(curve.star_id.clone())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(ACCENT))
            .data(&points);

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .title("Frame")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, x_max])
                    .labels(vec!["0".to_string(), format!("{:.0}", x_max)]),
            )
            .y_axis(
                Axis::default()
                    .title("Flux")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(y_bounds)
                    .labels(vec![format!("{:.0}", y_bounds[0]), format!("{:.0}", y_bounds[1])]),
            );
        f.render_widget(chart, area);
    }

    fn render_threshold(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);

        let point = self.threshold_curve.operating_point(self.threshold);
        let summary = match point {
            Some(p) => Line::from(vec![
                Span::styled(" Threshold ", Style::default().fg(Color::Gray)),
                Span::styled(format!("{:.2}", self.threshold), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Span::styled("   Recall ", Style::default().fg(Color::Gray)),
                Span::styled(format!("{:.2}", p.recall), Style::default().fg(Color::Green)),
                Span::styled("   FPR ", Style::default().fg(Color::Gray)),
                Span::styled(format!("{:.3}", p.fpr), Style::default().fg(Color::Red)),
            ]),
            None => Line::from(format!(" Threshold {:.2}: no operating point", self.threshold)),
        };
        f.render_widget(
            Paragraph::new(summary).block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded)),
            chunks[0],
        );

        let recall = self.threshold_curve.recall_series();
        let fpr = self.threshold_curve.fpr_series();
        let marker = [(self.threshold, 0.0), (self.threshold, 1.0)];
        let datasets = vec![
            ChartDataset::default()
                .name("Recall")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Green))
                .data(&recall),
            ChartDataset::default()
                .name("False positive rate")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(&fpr),
            ChartDataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(&marker),
        ];
        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Recall / FPR vs threshold "),
            )
            .x_axis(
                Axis::default()
                    .title("Threshold")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, 1.0])
                    .labels(vec!["0", "0.5", "1"]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, 1.0])
                    .labels(vec!["0", "0.5", "1"]),
            );
        f.render_widget(chart, chunks[1]);
    }
}

fn placeholder() -> LightCurve {
    sample_curve(SAMPLE_SEED, PLACEHOLDER_SPIKES)
}

impl Component for CurvesComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select(-1);
                Action::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.threshold = step_threshold(self.threshold, -1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.threshold = step_threshold(self.threshold, 1);
                Action::None
            }
            KeyCode::Char('H') => {
                self.threshold = step_threshold(self.threshold, -10);
                Action::None
            }
            KeyCode::Char('L') => {
                self.threshold = step_threshold(self.threshold, 10);
                Action::None
            }
            KeyCode::Char('o') => Action::ShowDialog(DialogType::FilePrompt(FilePurpose::LightCurves)),
            KeyCode::Char('R') => Action::ResetCurves,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::FileSelected {
                purpose: FilePurpose::LightCurves,
                path,
            } => Action::LoadCurves(path),
            Action::CurvesLoaded { path, curves } => {
                if curves.is_empty() {
                    warn!("curves: {} has no rows", path.display());
                    self.reset();
                    return Action::ShowDialog(DialogType::Error(format!(
                        "{}: {} has no rows",
                        ERROR_CURVES_LOAD_FAILED,
                        path.display()
                    )));
                }
                info!("curves: showing {} curves from {}", curves.len(), path.display());
                self.curves = curves;
                self.source = CurveSource::Uploaded(path);
                self.list_state.select(Some(0));
                Action::None
            }
            Action::CurvesFailed(message) => {
                self.reset();
                Action::ShowDialog(DialogType::Error(format!("{}: {}", ERROR_CURVES_LOAD_FAILED, message)))
            }
            Action::ResetCurves => {
                self.reset();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::horizontal([Constraint::Length(STAR_LIST_WIDTH), Constraint::Min(0)]).split(rect);
        self.render_star_list(f, chunks[0]);

        let right = Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).split(chunks[1]);
        self.render_flux(f, right[0]);
        self.render_threshold(f, right[1]);
    }

    fn key_hints(&self) -> &'static str {
        "j/k: star • ←/→: threshold • H/L: ±0.10 • o: open CSV • R: example curve"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::FluxPoint;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn curve(id: &str) -> LightCurve {
        LightCurve {
            star_id: id.to_string(),
            label: Some("2".to_string()),
            points: vec![FluxPoint {
                frame: 1,
                name: "FLUX.1".to_string(),
                flux: 93.85,
            }],
        }
    }

    #[test]
    fn starts_on_example_curve_at_default_threshold() {
        let curves = CurvesComponent::new();
        assert_eq!(curves.source(), &CurveSource::Example);
        assert_eq!(curves.threshold(), DEFAULT_THRESHOLD);
        assert_eq!(curves.curves().len(), 1);
    }

    #[test]
    fn threshold_steps_stay_in_range() {
        let mut curves = CurvesComponent::new();
        for _ in 0..30 {
            curves.handle_key_events(key(KeyCode::Left));
        }
        assert_eq!(curves.threshold(), 0.0);
        curves.handle_key_events(key(KeyCode::Right));
        assert!((curves.threshold() - 0.01).abs() < 1e-9);
    }

    #[test]
    fn failed_load_falls_back_to_example() {
        let mut curves = CurvesComponent::new();
        curves.update(Action::CurvesLoaded {
            path: PathBuf::from("stars.csv"),
            curves: vec![curve("Star 1"), curve("Star 2")],
        });
        assert_eq!(curves.source(), &CurveSource::Uploaded(PathBuf::from("stars.csv")));
        curves.handle_key_events(key(KeyCode::Down));
        assert_eq!(curves.selected().map(|c| c.star_id.as_str()), Some("Star 2"));

        let follow_up = curves.update(Action::CurvesFailed("no FLUX columns".into()));
        assert!(matches!(follow_up, Action::ShowDialog(DialogType::Error(_))));
        assert_eq!(curves.source(), &CurveSource::Example);
    }

    #[test]
    fn selected_file_becomes_load_request() {
        let mut curves = CurvesComponent::new();
        let action = curves.update(Action::FileSelected {
            purpose: FilePurpose::LightCurves,
            path: PathBuf::from("kepler.csv"),
        });
        assert!(matches!(action, Action::LoadCurves(p) if p == PathBuf::from("kepler.csv")));
    }
}
