use exoview::ui::core::{Action, EventHandler, EventType, FilePurpose, Tab};
use std::time::Duration;

#[test]
fn test_tab_order_wraps() {
    assert_eq!(Tab::Explore.next(), Tab::Classify);
    assert_eq!(Tab::Results.next(), Tab::Explore);
    assert_eq!(Tab::Explore.previous(), Tab::Results);
    assert_eq!(Tab::Curves.index(), 2);
}

#[test]
fn test_tab_from_config() {
    assert_eq!(Tab::from_config("Results"), Tab::Results);
    assert_eq!(Tab::from_config("unknown"), Tab::Explore);
}

#[test]
fn test_action_names() {
    assert_eq!(Action::NextPage.name(), "NextPage");
    assert_eq!(Action::ExplanationFailed("x".into()).name(), "ExplanationFailed");
    assert_ne!(FilePurpose::Dataset.title(), FilePurpose::LightCurves.title());
}

#[tokio::test]
async fn test_event_handler_ticks_without_input() {
    let mut handler = EventHandler::with_tick_rate(Duration::from_millis(5));
    // No terminal attached: polling may fail, otherwise a tick comes back
    if let Ok(event) = handler.next_event().await {
        assert!(matches!(event, EventType::Tick | EventType::Other | EventType::Key(_) | EventType::Resize(..)));
    }
}
