//! Dialog rendering helpers

pub mod common;
pub mod system_dialogs;
