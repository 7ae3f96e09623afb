//! Constants used throughout the application
//!
//! UI text, status messages and layout limits live here so every tab
//! reports things the same way.

// Tab titles
pub const TAB_EXPLORE: &str = "Explore";
pub const TAB_CLASSIFY: &str = "Classify";
pub const TAB_CURVES: &str = "Curves";
pub const TAB_RESULTS: &str = "Results";

// Success Messages
pub const SUCCESS_DATASET_LOADED: &str = "✅ Dataset loaded";
pub const SUCCESS_CURVES_LOADED: &str = "✅ Light curves loaded";
pub const SUCCESS_CLASSIFIED: &str = "✅ Classification complete";
pub const SUCCESS_BATCH_CLASSIFIED: &str = "✅ Batch classification complete";
pub const SUCCESS_EXPLANATION: &str = "✅ Explanation received";

// Error Messages
pub const ERROR_DATASET_LOAD_FAILED: &str = "❌ Failed to load dataset";
pub const ERROR_CURVES_LOAD_FAILED: &str = "❌ Failed to read light curves";
pub const ERROR_CLASSIFY_FAILED: &str = "❌ Classification failed";
pub const ERROR_EXPLAIN_FAILED: &str = "❌ Explanation failed";

// Validation Messages
pub const ERROR_NO_MODEL: &str = "Please select a classification model to continue.";
pub const ERROR_NO_MODEL_FOR_UPLOAD: &str = "Please select a model before uploading a file.";
pub const ERROR_NO_MODEL_OR_FILE: &str = "Select a model and a file to classify.";

// Status Messages
pub const STATUS_PROCESSING: &str = "Processing...";
pub const STATUS_LOADING_SAMPLE: &str = "Loading sample dataset";
pub const STATUS_NO_RESULTS: &str = "No records match the current filters.";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";

// Curve titles
pub const CURVE_TITLE_EXAMPLE: &str = "Example flux variation of star";
pub const CURVE_TITLE_UPLOADED: &str = "Variation of the flux of your star";

// Sample data
/// Rows in the generated sample dataset
pub const SAMPLE_DATASET_SIZE: usize = 150;
/// Seed for the sample dataset and placeholder curve
pub const SAMPLE_SEED: u64 = 42;

// UI Layout Constants
/// Minimum chart pane width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum chart pane width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 80;
/// Default chart pane width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 40;
/// Minimum table width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 30;
/// Rows per page of the batch classification table
pub const BATCH_ROWS_PER_PAGE: usize = 5;

// Service
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";
pub const SERVICE_URL_ENV: &str = "EXOVIEW_SERVICE_URL";
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const MAX_NUMBER_PRECISION: usize = 6;
