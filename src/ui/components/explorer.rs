//! Explore tab: the filterable, sortable, paginated candidate table with
//! its distribution and scatter charts.

use crate::config::Config;
use crate::constants::{MAIN_AREA_MIN_WIDTH, STATUS_NO_RESULTS};
use crate::engine::{aggregate, padded_bounds, scatter_points, CategoryFilter, ViewEngine, ViewState, UNKNOWN_BUCKET};
use crate::records::{Dataset, Disposition, FieldKind, KOI_PERIOD, KOI_PRAD};
use crate::ui::core::{Action, Component, DialogType, FilePurpose};
use crate::utils::color::{bucket_color, value_color, ACCENT};
use crate::utils::format::truncate;
use crossterm::event::{KeyCode, KeyEvent};
use log::debug;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Cell, Chart, Dataset as ChartDataset, GraphType,
        Paragraph, Row, Table, TableState,
    },
    Frame,
};
use std::sync::Arc;

pub struct ExplorerComponent {
    engine: ViewEngine,
    state: ViewState,
    table_state: TableState,
    selected_column: usize,
    searching: bool,
    show_charts: bool,
    chart_width: u16,
    category_options: Vec<CategoryFilter>,
}

/// `All`, the known dispositions, then any other labels the dataset uses.
pub fn category_options(dataset: &Dataset) -> Vec<CategoryFilter> {
    let mut options = vec![CategoryFilter::All];
    let Some(field) = dataset.schema.category_field() else {
        return options;
    };
    options.extend(Disposition::KNOWN.iter().map(|d| CategoryFilter::Only(d.label().to_string())));
    for bucket in aggregate(&dataset.records, field).iter() {
        let known = Disposition::KNOWN.iter().any(|d| d.label() == bucket.label);
        if !known && bucket.label != UNKNOWN_BUCKET {
            options.push(CategoryFilter::Only(bucket.label.clone()));
        }
    }
    options
}

impl ExplorerComponent {
    pub fn new(dataset: Arc<Dataset>, config: &Config) -> Self {
        let category_options = category_options(&dataset);
        Self {
            engine: ViewEngine::new(dataset).with_precision(config.display.number_precision),
            state: ViewState::with_page_size_default(config.ui.rows_per_page),
            table_state: TableState::default().with_selected(Some(0)),
            selected_column: 0,
            searching: false,
            show_charts: config.display.show_charts,
            chart_width: config.ui.sidebar_width,
            category_options,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        self.engine.dataset()
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    fn replace_dataset(&mut self, dataset: Arc<Dataset>) {
        self.category_options = category_options(&dataset);
        self.engine.replace_dataset(dataset);
        self.state = ViewState::with_page_size_default(self.state.page_size);
        self.selected_column = 0;
        self.table_state.select(Some(0));
    }

    fn column_key(&self, index: usize) -> Option<String> {
        self.engine.dataset().schema.fields().get(index).map(|f| f.key.clone())
    }

    fn column_count(&self) -> usize {
        self.engine.dataset().schema.len()
    }

    fn cycle_category(&self, forward: bool) -> CategoryFilter {
        let len = self.category_options.len();
        if len == 0 {
            return CategoryFilter::All;
        }
        let current = self
            .category_options
            .iter()
            .position(|c| *c == self.state.category)
            .unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.category_options[next].clone()
    }

    fn set_state(&mut self, state: ViewState) {
        if state.page_index != self.state.page_index {
            self.table_state.select(Some(0));
        }
        self.state = state;
    }

    fn select_row(&mut self, delta: isize) {
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let rows = self.state.page_size as isize;
        let next = (current + delta).clamp(0, (rows - 1).max(0));
        self.table_state.select(Some(next as usize));
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.searching = false;
                Action::None
            }
            KeyCode::Backspace => {
                let mut text = self.state.text.clone();
                text.pop();
                Action::SetSearchText(text)
            }
            KeyCode::Char(c) => {
                let mut text = self.state.text.clone();
                text.push(c);
                Action::SetSearchText(text)
            }
            _ => Action::None,
        }
    }

    fn render_controls(&self, f: &mut Frame, area: Rect) {
        let search_style = if self.searching {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let cursor = if self.searching { "█" } else { "" };
        let line = Line::from(vec![
            Span::styled(" State: ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.state.category.label().to_string(),
                Style::default().fg(bucket_color(self.state.category.label())).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Search: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{}{}", self.state.text, cursor), search_style),
            Span::styled("   Rows: ", Style::default().fg(Color::Gray)),
            Span::styled(self.state.page_size.to_string(), Style::default().fg(Color::White)),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.engine.dataset().source));
        f.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect) {
        let schema = self.engine.dataset().schema.clone();
        let precision = self.engine.precision();
        let sort = self.state.sort.clone();
        let selected_column = self.selected_column;

        let view = self.engine.derive(&self.state);
        let (page_index, total_pages, filtered_count) = (view.page_index, view.total_pages, view.filtered_count);
        let rows: Vec<Row> = view
            .rows
            .iter()
            .map(|record| {
                Row::new(schema.fields().iter().map(|field| {
                    let value = record.get(&field.key);
                    Cell::from(value.display(precision)).style(Style::default().fg(value_color(value)))
                }))
            })
            .collect();
        let row_count = rows.len();

        if page_index != self.state.page_index {
            self.state = self.state.with_page(page_index);
        }
        if let Some(selected) = self.table_state.selected() {
            if row_count > 0 && selected >= row_count {
                self.table_state.select(Some(row_count - 1));
            }
        }

        let column_width = (area.width.saturating_sub(2) / schema.len().max(1) as u16).max(4);
        let header = Row::new(schema.fields().iter().enumerate().map(|(i, field)| {
            let arrow = if field.key == sort.key { sort.direction.arrow() } else { "" };
            let text = truncate(&format!("{}{}", field.header, arrow), column_width as usize);
            let mut style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
            if i == selected_column {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Cell::from(text).style(style)
        }))
        .bottom_margin(1);

        let title = format!(
            " Page {} of {} • {} of {} records ",
            page_index,
            total_pages,
            filtered_count,
            self.engine.dataset().len()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title);

        if row_count == 0 {
            let empty = Paragraph::new(STATUS_NO_RESULTS)
                .style(Style::default().fg(Color::Gray))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let widths: Vec<Constraint> = schema.fields().iter().map(|_| Constraint::Fill(1)).collect();
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_charts(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let view = self.engine.derive(&self.state);
        let bars: Vec<Bar> = view
            .buckets
            .iter()
            .map(|bucket| {
                Bar::default()
                    .value(bucket.count as u64)
                    .label(Line::from(truncate(&bucket.label, 10)))
                    .style(Style::default().fg(bucket_color(&bucket.label)))
            })
            .collect();
        let bar_chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Distribution "),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(9)
            .bar_gap(1);
        f.render_widget(bar_chart, chunks[0]);

        self.render_scatter(f, chunks[1]);
    }

    /// Numeric axes for the scatter chart: period against radius when the
    /// dataset has them, otherwise its first two numeric columns.
    fn scatter_axes(&self) -> Option<(String, String, String, String)> {
        let schema = &self.engine.dataset().schema;
        if let (Some(x), Some(y)) = (schema.field(KOI_PERIOD), schema.field(KOI_PRAD)) {
            return Some((x.key.clone(), x.header.clone(), y.key.clone(), y.header.clone()));
        }
        let mut numeric = schema
            .fields()
            .iter()
            .filter(|f| f.kind == FieldKind::Number && !f.key.eq_ignore_ascii_case("id"));
        let x = numeric.next()?;
        let y = numeric.next()?;
        Some((x.key.clone(), x.header.clone(), y.key.clone(), y.header.clone()))
    }

    fn render_scatter(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Scatter ");
        let Some((x_key, x_title, y_key, y_title)) = self.scatter_axes() else {
            f.render_widget(Paragraph::new("No numeric columns to plot").block(block), area);
            return;
        };

        let category_field = self.engine.dataset().schema.category_field().map(str::to_string);
        let filtered = self.engine.filtered(&self.state);
        let mut series: Vec<(String, Vec<(f64, f64)>)> = Vec::new();
        for record in filtered {
            let label = category_field
                .as_deref()
                .map(|key| record.get(key).label())
                .unwrap_or_default();
            let points = scatter_points(std::iter::once(record), &x_key, &y_key);
            match series.iter_mut().find(|(l, _)| *l == label) {
                Some((_, existing)) => existing.extend(points),
                None => series.push((label, points)),
            }
        }

        let x_bounds = padded_bounds(series.iter().flat_map(|(_, p)| p.iter().map(|(x, _)| *x)));
        let y_bounds = padded_bounds(series.iter().flat_map(|(_, p)| p.iter().map(|(_, y)| *y)));
        let datasets: Vec<ChartDataset> = series
            .iter()
            .map(|(label, points)| {
                ChartDataset::default()
                    .name(label.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(bucket_color(label)))
                    .data(points)
            })
            .collect();

        let axis_labels = |[lo, hi]: [f64; 2]| vec![format!("{:.1}", lo), format!("{:.1}", hi)];
        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title(x_title)
                    .style(Style::default().fg(Color::Gray))
                    .bounds(x_bounds)
                    .labels(axis_labels(x_bounds)),
            )
            .y_axis(
                Axis::default()
                    .title(y_title)
                    .style(Style::default().fg(Color::Gray))
                    .bounds(y_bounds)
                    .labels(axis_labels(y_bounds)),
            );
        f.render_widget(chart, area);
    }
}

impl Component for ExplorerComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.searching {
            return self.handle_search_key(key);
        }

        match key.code {
            KeyCode::Char('/') => {
                self.searching = true;
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_row(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_row(-1);
                Action::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_column = self.selected_column.saturating_sub(1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_column + 1 < self.column_count() {
                    self.selected_column += 1;
                }
                Action::None
            }
            KeyCode::Char('s') | KeyCode::Enter => match self.column_key(self.selected_column) {
                Some(key) => Action::ToggleSort(key),
                None => Action::None,
            },
            KeyCode::Char('f') => Action::SetCategoryFilter(self.cycle_category(true)),
            KeyCode::Char('F') => Action::SetCategoryFilter(self.cycle_category(false)),
            KeyCode::Char('n') | KeyCode::PageDown => Action::NextPage,
            KeyCode::Char('p') | KeyCode::PageUp => Action::PreviousPage,
            KeyCode::Home => Action::FirstPage,
            KeyCode::End => Action::LastPage,
            KeyCode::Char('r') => Action::CyclePageSize,
            KeyCode::Char('c') => {
                self.show_charts = !self.show_charts;
                Action::None
            }
            KeyCode::Char('x') if !self.state.text.is_empty() => Action::SetSearchText(String::new()),
            KeyCode::Char('o') => Action::ShowDialog(DialogType::FilePrompt(FilePurpose::Dataset)),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let next = match &action {
            Action::SetCategoryFilter(category) => self.state.with_category(category.clone()),
            Action::SetSearchText(text) => self.state.with_text(text.clone()),
            Action::ToggleSort(key) => self.state.with_sort_toggled(key),
            Action::CyclePageSize => self.state.with_next_page_size(),
            Action::NextPage => {
                let count = self.engine.filtered_count(&self.state);
                self.state.next_page(count)
            }
            Action::PreviousPage => self.state.previous_page(),
            Action::FirstPage => self.state.first_page(),
            Action::LastPage => {
                let count = self.engine.filtered_count(&self.state);
                self.state.last_page(count)
            }
            Action::DatasetLoaded(dataset) => {
                debug!("explorer: showing {} ({} records)", dataset.source, dataset.len());
                self.replace_dataset(dataset.clone());
                return action;
            }
            _ => return action,
        };
        debug!("explorer: view state {:?}", next);
        self.set_state(next);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let show_charts = self.show_charts && rect.width >= MAIN_AREA_MIN_WIDTH + self.chart_width;
        let (main, side) = if show_charts {
            let chunks = Layout::horizontal([Constraint::Min(MAIN_AREA_MIN_WIDTH), Constraint::Length(self.chart_width)])
                .split(rect);
            (chunks[0], Some(chunks[1]))
        } else {
            (rect, None)
        };

        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(main);
        self.render_controls(f, chunks[0]);
        self.render_table(f, chunks[1]);

        if let Some(side) = side {
            self.render_charts(f, side);
        }
    }

    fn is_editing(&self) -> bool {
        self.searching
    }

    fn key_hints(&self) -> &'static str {
        if self.searching {
            "type to search • Enter/Esc: done"
        } else {
            "/: search • f: state • s: sort • n/p: page • r: rows • o: open CSV • c: charts"
        }
    }
}

