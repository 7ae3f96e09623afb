use crate::app_component::app_with;
use crate::fake_classifier::FakeClassifier;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use exoview::classifier::{BatchPrediction, Prediction};
use exoview::records::Disposition;
use exoview::ui::core::{Action, Component, EventType};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_every_tab_renders() {
    let mut app = app_with(FakeClassifier::default());
    let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();

    for key in ['1', '2', '3', '4'] {
        app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE)));
        terminal.draw(|f| app.render(f, f.area())).unwrap();
    }
    let text = screen_text(&terminal);
    assert!(text.contains("Ensemble"));
}

#[test]
fn test_explore_table_shows_page_counter() {
    let mut app = app_with(FakeClassifier::default());
    let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    assert!(screen_text(&terminal).contains("Page 1 of 5"));
}

#[test]
fn test_small_terminal_with_dialog_does_not_panic() {
    let mut app = app_with(FakeClassifier::default());
    let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE)));
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE)));
    terminal.draw(|f| app.render(f, f.area())).unwrap();
}

#[test]
fn test_batch_results_render_as_a_paged_table() {
    let mut app = app_with(FakeClassifier::default());
    let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE)));

    let predictions = (1..=7)
        .map(|i| Prediction {
            id: Some(format!("KOI-{}", 100 + i)),
            classification: if i == 1 { Disposition::FalsePositive } else { Disposition::Confirmed },
            confidence: None,
        })
        .collect();
    app.dispatch(Action::BatchReady(BatchPrediction {
        predictions,
        total_candidates: None,
    }));
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Record ID"));
    assert!(text.contains("KOI-101"));
    assert!(text.contains("NON-EXOPLANET"));
    assert!(text.contains("Page 1 of 2"));
    assert!(!text.contains("KOI-106"));

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE)));
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("KOI-106"));
    assert!(text.contains("Page 2 of 2"));
}
