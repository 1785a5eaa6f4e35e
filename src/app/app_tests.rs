use crate::app::mode::AppMode;
use crate::app::{App, AppEvent};
use crate::engine::Config;
use crate::glossing::Profile;
use crate::rules::model::{ContextWords, FilterRuleSet, IgnoreWords};
use crate::rules::RuleRepository;
use std::io::Write;
use std::sync::Arc;

fn app_without_rules() -> App {
    App::new(Config::default(), Arc::new(RuleRepository::empty()))
}

fn app_with_rules() -> App {
    let filter = FilterRuleSet {
        ignore_words: IgnoreWords {
            stopwords: vec!["till".into()],
            ..IgnoreWords::default()
        },
        context_words: ContextWords {
            time_words: vec!["igår".into()],
            location_words: vec!["skolan".into()],
            ..ContextWords::default()
        },
        ..FilterRuleSet::default()
    };
    App::new(
        Config::default(),
        Arc::new(RuleRepository::preloaded(Some(filter), None)),
    )
}

#[tokio::test]
async fn test_app_handle_event_quit() {
    let mut app = app_without_rules();
    assert_eq!(app.mode, AppMode::Command);
    app.handle_event(AppEvent::Quit).await;
    assert_eq!(app.mode, AppMode::Quit);
}

#[tokio::test]
async fn test_app_handle_event_help() {
    let mut app = app_without_rules();
    let lines = app.handle_event(AppEvent::Help).await;
    assert!(lines.iter().any(|l| l.contains(":profile")));
}

#[tokio::test]
async fn test_app_gloss_static_profile() {
    let mut app = app_without_rules();
    let lines = app
        .handle_event(AppEvent::Gloss("vad heter du".to_string()))
        .await;
    assert_eq!(lines, vec!["HETA DU VAD?", "  alt: VAD HETA DU?"]);
}

#[tokio::test]
async fn test_app_gloss_repository_profile() {
    let mut app = app_with_rules();
    app.handle_event(AppEvent::SetProfile(Profile::RepositoryRules))
        .await;
    let lines = app
        .handle_event(AppEvent::Gloss("Jag gick till skolan igår.".to_string()))
        .await;
    assert_eq!(lines, vec!["IGÅR SKOLAN JAG GÅ."]);
}

#[tokio::test]
async fn test_app_warns_when_rules_missing() {
    let mut app = app_without_rules();
    let lines = app
        .handle_event(AppEvent::SetProfile(Profile::RepositoryRules))
        .await;
    assert_eq!(app.profile, Profile::RepositoryRules);
    assert_eq!(lines.len(), 2);
}

#[tokio::test]
async fn test_app_reload_reports_state() {
    let mut app = app_with_rules();
    let lines = app.handle_event(AppEvent::ReloadRules).await;
    assert_eq!(lines, vec!["Filter rules: loaded", "Grammar rules: absent"]);
    assert!(app.glosser().has_rules());
}

#[tokio::test]
async fn test_app_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Jag har tre bollar.").unwrap();

    let mut app = app_without_rules();
    let lines = app
        .handle_event(AppEvent::LoadFile(file.path().display().to_string()))
        .await;
    assert_eq!(lines, vec!["JAG HA 3 BOLLAR."]);
}

#[tokio::test]
async fn test_app_load_missing_file_reports_error() {
    let mut app = app_without_rules();
    let lines = app
        .handle_event(AppEvent::LoadFile("/nonexistent/glosa.txt".to_string()))
        .await;
    assert!(lines[0].starts_with("Error: File not found"));
}

#[tokio::test]
async fn test_app_invalid_command() {
    let mut app = app_without_rules();
    assert!(app
        .handle_event(AppEvent::InvalidCommand(String::new()))
        .await
        .is_empty());
    let lines = app
        .handle_event(AppEvent::InvalidCommand(":zap".to_string()))
        .await;
    assert!(lines[0].contains(":zap"));
}

#[tokio::test]
async fn test_app_reload_lists_word_order_rules() {
    let mut grammar = crate::rules::GrammarRuleSet::default();
    grammar.word_order.rules = serde_json::from_str(
        r#"[ { "id": "location-early", "name": "Plats", "priority": 1 },
             { "id": "time-first", "name": "Tid", "priority": 2 },
             { "id": "direction", "name": "Riktning", "priority": 0,
               "directionVerbs": ["ge", "hjälpa"] } ]"#,
    )
    .unwrap();
    let mut app = App::new(
        Config::default(),
        Arc::new(RuleRepository::preloaded(None, Some(grammar))),
    );

    let lines = app.handle_event(AppEvent::ReloadRules).await;
    assert_eq!(lines[0], "Filter rules: absent");
    assert_eq!(lines[2], "  [2] Tid (time-first)");
    assert_eq!(lines[3], "  [1] Plats (location-early)");
    assert_eq!(lines[4], "  [0] Riktning (direction): ge, hjälpa");
}
