//! Terminal user interface for exoview.
//!
//! * [`core`] - actions, the component trait, events and background jobs
//! * [`components`] - the four tabs, dialogs and the status bar
//! * [`app_component`] - tab routing and job dispatch
//! * [`renderer`] - terminal setup and the event loop

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
