use crate::fake_classifier::FakeClassifier;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use exoview::config::Config;
use exoview::engine::CategoryFilter;
use exoview::ingest::sample_dataset;
use exoview::logger::Logger;
use exoview::records::Disposition;
use exoview::ui::components::AnalysisState;
use exoview::ui::core::{Action, AppContext, EventType, FilePurpose, Tab};
use exoview::ui::AppComponent;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

pub fn app_with(classifier: FakeClassifier) -> AppComponent {
    let context = AppContext::new(Config::default(), Logger::new(), Arc::new(classifier));
    AppComponent::new(context, Arc::new(sample_dataset(45, 1)))
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Drain background results until at least one arrives.
async fn settle(app: &mut AppComponent) {
    for _ in 0..200 {
        let actions = app.process_background_actions();
        if !actions.is_empty() {
            for action in actions {
                app.dispatch(action);
            }
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("no background result arrived");
}

#[test]
fn test_tab_switching() {
    let mut app = app_with(FakeClassifier::default());
    assert_eq!(app.active_tab(), Tab::Explore);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.active_tab(), Tab::Curves);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.active_tab(), Tab::Results);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.active_tab(), Tab::Explore);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.active_tab(), Tab::Results);
}

#[test]
fn test_default_tab_comes_from_config() {
    let mut config = Config::default();
    config.ui.default_tab = "classify".to_string();
    let context = AppContext::new(config, Logger::new(), Arc::new(FakeClassifier::default()));
    let app = AppComponent::new(context, Arc::new(sample_dataset(5, 1)));
    assert_eq!(app.active_tab(), Tab::Classify);
}

#[test]
fn test_explorer_paging_through_actions() {
    let mut app = app_with(FakeClassifier::default());

    app.dispatch(Action::NextPage);
    assert_eq!(app.explorer().state().page_index, 2);
    app.dispatch(Action::LastPage);
    assert_eq!(app.explorer().state().page_index, 5);
    app.dispatch(Action::NextPage);
    assert_eq!(app.explorer().state().page_index, 5);

    // A filter change goes back to the first page
    app.dispatch(Action::SetCategoryFilter(CategoryFilter::parse("CONFIRMED")));
    assert_eq!(app.explorer().state().page_index, 1);
    assert_eq!(app.explorer().state().category, CategoryFilter::parse("CONFIRMED"));

    app.dispatch(Action::CyclePageSize);
    assert_eq!(app.explorer().state().page_size, 20);
}

#[test]
fn test_explorer_keys() {
    let mut app = app_with(FakeClassifier::default());

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.explorer().state().page_index, 2);
    press(&mut app, KeyCode::Home);
    assert_eq!(app.explorer().state().page_index, 1);

    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.explorer().state().category, CategoryFilter::Only("CONFIRMED".to_string()));

    press(&mut app, KeyCode::Char('s'));
    let sort = app.explorer().state().sort.clone();
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.explorer().state().sort, sort.toggled(&sort.key));
}

#[test]
fn test_search_captures_global_keys() {
    let mut app = app_with(FakeClassifier::default());

    press(&mut app, KeyCode::Char('/'));
    assert!(app.explorer().is_searching());
    type_text(&mut app, "q2");
    assert!(!app.should_quit());
    assert_eq!(app.active_tab(), Tab::Explore);
    assert_eq!(app.explorer().state().text, "q2");

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.explorer().state().text, "q");
    press(&mut app, KeyCode::Enter);
    assert!(!app.explorer().is_searching());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_while_editing() {
    let mut app = app_with(FakeClassifier::default());
    press(&mut app, KeyCode::Char('/'));
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[test]
fn test_help_dialog_takes_keys() {
    let mut app = app_with(FakeClassifier::default());
    press(&mut app, KeyCode::Char('?'));
    assert!(app.dialog().is_visible());

    // Tab keys go to the dialog, not the app
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.active_tab(), Tab::Explore);

    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());
}

#[test]
fn test_classify_without_model_explains_why() {
    let mut app = app_with(FakeClassifier::default());
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('c'));
    assert!(app.dialog().is_visible());
    assert!(!app.is_busy());
    assert!(matches!(app.classification().analysis(), AnalysisState::Empty));
}

#[test]
fn test_model_selector_cycles_back_to_none() {
    let mut app = app_with(FakeClassifier::default());
    press(&mut app, KeyCode::Char('2'));
    let mut seen = Vec::new();
    for _ in 0..4 {
        press(&mut app, KeyCode::Char('m'));
        seen.push(app.classification().model());
    }
    assert_eq!(seen.iter().filter(|m| m.is_some()).count(), 3);
    assert_eq!(seen.last(), Some(&None));
}

#[tokio::test]
async fn test_single_classification_round_trip() {
    let mut app = app_with(FakeClassifier::default());
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('c'));

    assert!(app.is_busy());
    assert!(matches!(app.classification().analysis(), AnalysisState::Processing));

    settle(&mut app).await;
    match app.classification().analysis() {
        AnalysisState::Single(p) => assert_eq!(p.classification, Disposition::Confirmed),
        _ => panic!("expected a single prediction"),
    }
    assert!(app.status_message().is_some());
}

#[tokio::test]
async fn test_failed_classification_shows_error() {
    let mut app = app_with(FakeClassifier::failing());
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('c'));

    settle(&mut app).await;
    assert!(matches!(app.classification().analysis(), AnalysisState::Empty));
    assert!(app.dialog().is_visible());
}

#[tokio::test]
async fn test_batch_upload_through_file_prompt() {
    let mut app = app_with(FakeClassifier::default());
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('u'));
    assert!(app.dialog().is_visible());

    type_text(&mut app, "/tmp/candidates.csv");
    press(&mut app, KeyCode::Enter);
    assert!(!app.dialog().is_visible());
    assert!(app.is_busy());

    settle(&mut app).await;
    match app.classification().analysis() {
        AnalysisState::Batch { file, summary, .. } => {
            assert!(file.ends_with("candidates.csv"));
            assert_eq!(summary.total, 2);
            assert_eq!(summary.confirmed, 1);
        }
        _ => panic!("expected a batch result"),
    }
    let page = app.classification().analysis().batch_page().unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_dataset_load_replaces_table() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"id,koi_disposition,koi_period\n1,CONFIRMED,3.5\n2,CANDIDATE,7.25\n3,FP,1.0\n")
        .unwrap();

    let mut app = app_with(FakeClassifier::default());
    app.dispatch(Action::NextPage);
    app.dispatch(Action::FileSelected {
        purpose: FilePurpose::Dataset,
        path: file.path().to_path_buf(),
    });
    assert!(app.is_busy());

    settle(&mut app).await;
    assert_eq!(app.explorer().dataset().len(), 3);
    assert_eq!(app.explorer().state().page_index, 1);
    assert!(app.status_message().is_some_and(|m| m.contains("3 records")));
}

#[tokio::test]
async fn test_bad_dataset_keeps_current_table() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with(FakeClassifier::default());
    app.dispatch(Action::LoadDataset(dir.path().join("missing.csv")));

    settle(&mut app).await;
    assert_eq!(app.explorer().dataset().len(), 45);
    assert!(app.dialog().is_visible());
}
