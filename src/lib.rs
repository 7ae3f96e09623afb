//! exoview - a terminal dashboard for exoplanet candidate datasets
//!
//! Browse, filter, sort and chart candidate tables, forward feature vectors
//! or CSV files to a remote prediction service, inspect light curves against
//! a decision threshold, and compare published model results.
//!
//! # Modules
//!
//! * [`records`] - record data model and disposition normalization
//! * [`ingest`] - CSV ingestion and the seeded sample dataset
//! * [`engine`] - filter, sort, paginate and aggregate for the explore table
//! * [`classifier`] - client for the remote prediction service
//! * [`curves`] - light-curve parsing and the threshold trade-off curve
//! * [`metrics`] - published evaluation results per model
//! * [`config`] - application configuration management
//! * [`ui`] - terminal user interface components
//! * [`utils`] - formatting and colour helpers

/// Remote classification service client
pub mod classifier;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Light-curve data for the curves tab
pub mod curves;

/// Tabular view engine behind the explore tab
pub mod engine;

/// CSV ingestion
pub mod ingest;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Published model evaluation results
pub mod metrics;

/// Record data model
pub mod records;

/// Terminal user interface components and rendering
pub mod ui;

/// Formatting and colour helpers
pub mod utils;
