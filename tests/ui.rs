#[path = "support/fake_classifier.rs"]
mod fake_classifier;

#[path = "ui/app_component.rs"]
mod app_component;

#[path = "ui/core_types.rs"]
mod core_types;

#[path = "ui/rendering.rs"]
mod rendering;
