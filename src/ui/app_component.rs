use crate::constants::{
    SUCCESS_BATCH_CLASSIFIED, SUCCESS_CLASSIFIED, SUCCESS_CURVES_LOADED, SUCCESS_DATASET_LOADED, SUCCESS_EXPLANATION,
    TAB_CLASSIFY, TAB_CURVES, TAB_EXPLORE, TAB_RESULTS,
};
use crate::records::Dataset;
use crate::ui::components::{
    ClassificationComponent, CurvesComponent, DialogComponent, ExplorerComponent, ResultsComponent, StatusBar,
};
use crate::ui::core::{Action, AppContext, Component, DialogType, EventType, FilePurpose, JobManager, Tab};
use crate::ui::layout::LayoutManager;
use crate::utils::color::ACCENT;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Tabs
    explorer: ExplorerComponent,
    classification: ClassificationComponent,
    curves: CurvesComponent,
    results: ResultsComponent,
    dialog: DialogComponent,

    // Services
    context: AppContext,
    jobs: JobManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // Simple UI state
    active_tab: Tab,
    status_message: Option<String>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(context: AppContext, dataset: Arc<Dataset>) -> Self {
        let (jobs, background_action_rx) = JobManager::new();
        let config = &context.config;

        Self {
            explorer: ExplorerComponent::new(dataset, config),
            classification: ClassificationComponent::new(config),
            curves: CurvesComponent::new(),
            results: ResultsComponent::new(),
            dialog: DialogComponent::new(context.logger.clone()),
            active_tab: Tab::from_config(&config.ui.default_tab),
            jobs,
            background_action_rx,
            status_message: None,
            should_quit: false,
            context,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn explorer(&self) -> &ExplorerComponent {
        &self.explorer
    }

    pub fn classification(&self) -> &ClassificationComponent {
        &self.classification
    }

    pub fn curves(&self) -> &CurvesComponent {
        &self.curves
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    /// Whether any background job is still running
    pub fn is_busy(&self) -> bool {
        self.jobs.is_busy()
    }

    fn active_component(&mut self) -> &mut dyn Component {
        match self.active_tab {
            Tab::Explore => &mut self.explorer,
            Tab::Classify => &mut self.classification,
            Tab::Curves => &mut self.curves,
            Tab::Results => &mut self.results,
        }
    }

    fn active_hints(&self) -> &'static str {
        match self.active_tab {
            Tab::Explore => self.explorer.key_hints(),
            Tab::Classify => self.classification.key_hints(),
            Tab::Curves => self.curves.key_hints(),
            Tab::Results => self.results.key_hints(),
        }
    }

    /// Keys reserved for the whole app; `None` lets the active tab have the key
    fn handle_global_key(&self, key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Tab => Action::NextTab,
            KeyCode::BackTab => Action::PreviousTab,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                Action::SwitchTab(Tab::ALL[index])
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            _ => return None,
        };
        Some(action)
    }

    /// Route a key press: dialog first, then global keys unless the active
    /// tab is capturing text, then the active tab
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        self.status_message = None;
        if !self.active_component().is_editing() {
            if let Some(action) = self.handle_global_key(key) {
                return action;
            }
        }
        self.active_component().handle_key_events(key)
    }

    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.handle_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.dispatch(action);
    }

    /// Drain results delivered by background jobs
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            debug!("app: background action {}", action.name());
            actions.push(action);
        }

        let finished = self.jobs.cleanup_finished_jobs();
        if !finished.is_empty() {
            debug!("app: {} jobs finished", finished.len());
        }
        actions
    }

    /// Run an action through the components and the app until nothing
    /// follows from it
    pub fn dispatch(&mut self, action: Action) {
        let mut pending = Some(action);
        while let Some(action) = pending.take() {
            if matches!(action, Action::None) {
                break;
            }
            self.note_status(&action);
            let action = self.route(action);
            pending = self.handle_app_action(action);
        }
    }

    fn route(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.explorer.update(action);
        let action = self.classification.update(action);
        let action = self.curves.update(action);
        self.results.update(action)
    }

    fn note_status(&mut self, action: &Action) {
        let message = match action {
            Action::DatasetLoaded(dataset) => format!("{} ({} records)", SUCCESS_DATASET_LOADED, dataset.len()),
            Action::CurvesLoaded { curves, .. } if !curves.is_empty() => {
                format!("{} ({} stars)", SUCCESS_CURVES_LOADED, curves.len())
            }
            Action::PredictionReady(_) => SUCCESS_CLASSIFIED.to_string(),
            Action::BatchReady(_) => SUCCESS_BATCH_CLASSIFIED.to_string(),
            Action::ExplanationReady(_) => SUCCESS_EXPLANATION.to_string(),
            _ => return,
        };
        self.status_message = Some(message);
    }

    /// Handle what the components passed through; may yield a follow-up action
    fn handle_app_action(&mut self, action: Action) -> Option<Action> {
        let classifier = self.context.classifier.clone();
        match action {
            Action::Quit => {
                info!("app: quitting");
                self.jobs.cancel_all_jobs();
                self.should_quit = true;
            }
            Action::SwitchTab(tab) => self.active_tab = tab,
            Action::NextTab => self.active_tab = self.active_tab.next(),
            Action::PreviousTab => self.active_tab = self.active_tab.previous(),
            Action::ShowDialog(_) | Action::HideDialog => {
                self.dialog.update(action);
            }
            Action::FileSelected {
                purpose: FilePurpose::Dataset,
                path,
            } => return Some(Action::LoadDataset(path)),
            Action::LoadDataset(path) => {
                info!("app: loading dataset {}", path.display());
                self.jobs.spawn_dataset_load(path);
            }
            Action::LoadCurves(path) => {
                info!("app: loading light curves {}", path.display());
                self.jobs.spawn_curve_load(path);
            }
            Action::ClassifySingle { model, features } => {
                info!("app: classifying with {} at {}", model, classifier.service_name());
                self.jobs.spawn_classify(classifier, model, features);
            }
            Action::ClassifyFile { model, path } => {
                info!("app: classifying {} with {}", path.display(), model);
                self.jobs.spawn_classify_file(classifier, model, path);
            }
            Action::RequestExplanation { features, audience } => {
                self.jobs.spawn_explain(classifier, features, audience);
            }
            other => {
                if !matches!(other, Action::None) {
                    debug!("app: unhandled {}", other.name());
                }
            }
        }
        None
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect) {
        let titles = [TAB_EXPLORE, TAB_CLASSIFY, TAB_CURVES, TAB_RESULTS]
            .iter()
            .enumerate()
            .map(|(i, title)| format!(" {} {} ", i + 1, title));
        let tabs = Tabs::new(titles)
            .select(self.active_tab.index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" 🪐 exoview "),
            )
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dispatch(action);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [tabs_area, body, status_area] = LayoutManager::main_layout(rect);
        self.render_tabs(f, tabs_area);
        self.active_component().render(f, body);

        let jobs = self.jobs.descriptions();
        StatusBar::render(f, status_area, &jobs, self.status_message.as_deref(), self.active_hints());

        // Dialog on top
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
