use std::fs;

use surfwatch_core::models::local_datetime;
use surfwatch_core::storage::{load_config, FileTokenStore, MemoryTokenStore, TokenStore};
use surfwatch_core::{load_sessions, save_sessions, AnalyticsConfig, Beach, Session};

fn sample_sessions() -> Vec<Session> {
    vec![
        Session {
            id: 1,
            title: "Dawn".to_string(),
            location: Beach::Cardiff,
            start: local_datetime::parse("2025-06-09T06:00").unwrap(),
            end: local_datetime::parse("2025-06-09T07:30").unwrap(),
            rating: 4,
        },
        Session {
            id: 2,
            title: "Sunset".to_string(),
            location: Beach::Scripps,
            start: local_datetime::parse("2025-06-09T19:00").unwrap(),
            end: local_datetime::parse("2025-06-09T20:00").unwrap(),
            rating: 5,
        },
    ]
}

#[test]
fn test_save_and_load_sessions() {
    let path = "tests/tmp_sessions.json";
    let _ = fs::remove_file(path);

    let sessions = sample_sessions();
    save_sessions(&sessions, path).expect("kunne ikke lagre økter");
    let loaded = load_sessions(path).expect("kunne ikke laste økter");
    assert_eq!(loaded, sessions);

    // rydde opp
    fs::remove_file(path).ok();
}

#[test]
fn missing_sessions_file_gives_empty_list() {
    let loaded = load_sessions("tests/finnes_ikke.json").unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn config_defaults_and_partial_override() {
    assert_eq!(load_config("tests/finnes_ikke_cfg.json").unwrap(), AnalyticsConfig::default());

    let path = "tests/tmp_config.json";
    fs::write(path, r#"{ "top_beaches": 5, "window_hours": 4 }"#).unwrap();
    let cfg = load_config(path).unwrap();
    assert_eq!(cfg.top_beaches, 5);
    assert_eq!(cfg.window_hours, 4);
    assert_eq!(cfg.chart_floor_divisor, 1.5);
    assert_eq!(cfg.daytime(), 7..=20);
    fs::remove_file(path).ok();
}

#[test]
fn memory_token_store() {
    let mut store = MemoryTokenStore::default();
    assert_eq!(store.get(), None);
    store.set("abc.def").unwrap();
    assert_eq!(store.get().as_deref(), Some("abc.def"));
    store.clear().unwrap();
    assert_eq!(store.get(), None);
}

#[test]
fn file_token_store() {
    let path = "tests/tmp_token.txt";
    let _ = fs::remove_file(path);

    let mut store = FileTokenStore::new(path);
    assert_eq!(store.get(), None);
    store.set("  jwt-token\n").unwrap();
    assert_eq!(store.get().as_deref(), Some("jwt-token"));
    store.clear().unwrap();
    assert_eq!(store.get(), None);
    // andre clear på manglende fil er ok
    store.clear().unwrap();
}
