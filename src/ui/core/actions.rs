use crate::classifier::{Audience, BatchPrediction, Explanation, Features, ModelKind, Prediction};
use crate::curves::LightCurve;
use crate::engine::CategoryFilter;
use crate::records::Dataset;
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Explore,
    Classify,
    Curves,
    Results,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Explore, Tab::Classify, Tab::Curves, Tab::Results];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parse the `ui.default_tab` config value
    pub fn from_config(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "classify" => Tab::Classify,
            "curves" => Tab::Curves,
            "results" => Tab::Results,
            _ => Tab::Explore,
        }
    }
}

/// What a path typed into the file prompt is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePurpose {
    Dataset,
    BatchClassification,
    LightCurves,
}

impl FilePurpose {
    pub fn title(self) -> &'static str {
        match self {
            FilePurpose::Dataset => "Load dataset (CSV)",
            FilePurpose::BatchClassification => "Classify file (CSV)",
            FilePurpose::LightCurves => "Load light curves (CSV)",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SwitchTab(Tab),
    NextTab,
    PreviousTab,

    // Explore
    SetCategoryFilter(CategoryFilter),
    SetSearchText(String),
    ToggleSort(String),
    CyclePageSize,
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    LoadDataset(PathBuf),
    DatasetLoaded(Arc<Dataset>),

    // Classify
    ClassifySingle {
        model: ModelKind,
        features: Features,
    },
    ClassifyFile {
        model: ModelKind,
        path: PathBuf,
    },
    RequestExplanation {
        features: Features,
        audience: Audience,
    },
    FileSelected {
        purpose: FilePurpose,
        path: PathBuf,
    },
    PredictionReady(Prediction),
    BatchReady(BatchPrediction),
    ExplanationReady(Explanation),
    ExplanationFailed(String),
    ClassificationFailed(String),

    // Curves
    LoadCurves(PathBuf),
    CurvesLoaded {
        path: PathBuf,
        curves: Vec<LightCurve>,
    },
    CurvesFailed(String),
    ResetCurves,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    FilePrompt(FilePurpose),
    Error(String),
    Info(String),
    Help,
    Logs,
}

impl Action {
    /// Variant name for logs; payloads such as datasets are too large to print
    pub fn name(&self) -> &'static str {
        match self {
            Action::SwitchTab(_) => "SwitchTab",
            Action::NextTab => "NextTab",
            Action::PreviousTab => "PreviousTab",
            Action::SetCategoryFilter(_) => "SetCategoryFilter",
            Action::SetSearchText(_) => "SetSearchText",
            Action::ToggleSort(_) => "ToggleSort",
            Action::CyclePageSize => "CyclePageSize",
            Action::NextPage => "NextPage",
            Action::PreviousPage => "PreviousPage",
            Action::FirstPage => "FirstPage",
            Action::LastPage => "LastPage",
            Action::LoadDataset(_) => "LoadDataset",
            Action::DatasetLoaded(_) => "DatasetLoaded",
            Action::ClassifySingle { .. } => "ClassifySingle",
            Action::ClassifyFile { .. } => "ClassifyFile",
            Action::RequestExplanation { .. } => "RequestExplanation",
            Action::FileSelected { .. } => "FileSelected",
            Action::PredictionReady(_) => "PredictionReady",
            Action::BatchReady(_) => "BatchReady",
            Action::ExplanationReady(_) => "ExplanationReady",
            Action::ExplanationFailed(_) => "ExplanationFailed",
            Action::ClassificationFailed(_) => "ClassificationFailed",
            Action::LoadCurves(_) => "LoadCurves",
            Action::CurvesLoaded { .. } => "CurvesLoaded",
            Action::CurvesFailed(_) => "CurvesFailed",
            Action::ResetCurves => "ResetCurves",
            Action::ShowDialog(_) => "ShowDialog",
            Action::HideDialog => "HideDialog",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }
}
