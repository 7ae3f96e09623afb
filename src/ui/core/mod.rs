//! Core UI functionality for exoview.
//!
//! This module contains the building blocks every tab is made of:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait
//! - [`context`] - Shared configuration, logger and classifier
//! - [`event_handler`] - Terminal input polling
//! - [`job_manager`] - Background network and file jobs
//!
//! Components translate key presses into [`Action`]s. Actions flow through
//! the component hierarchy and end in the app component, which starts
//! background jobs whose results come back as further actions.

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod job_manager;

pub use actions::{Action, DialogType, FilePurpose, Tab};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use job_manager::{JobId, JobManager};
