//! Utility modules for exoview.
//!
//! - [`color`] - Terminal colors for dispositions and chart shading
//! - [`format`] - Cell formatting and truncation

pub mod color;
pub mod format;
