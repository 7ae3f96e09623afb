//! Tab and overlay components

pub mod classification;
pub mod curves_view;
pub mod dialog_component;
pub mod dialogs;
pub mod explorer;
pub mod results;
pub mod scrollbar_helper;
pub mod status_bar;

pub use classification::{AnalysisState, ClassificationComponent};
pub use curves_view::{CurveSource, CurvesComponent};
pub use dialog_component::DialogComponent;
pub use explorer::ExplorerComponent;
pub use results::ResultsComponent;
pub use status_bar::StatusBar;
