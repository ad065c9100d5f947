use std::sync::Mutex;

use chrono::NaiveDate;
use surfwatch_core::api::{StaticSurfData, SurfDataProvider};
use surfwatch_core::auth;
use surfwatch_core::models::{local_datetime, Credentials, SignUp};
use surfwatch_core::storage::{MemoryTokenStore, TokenStore};
use surfwatch_core::{surf_streak, Beach, ForecastSample, NewSession, SurfError};

fn new_session(day: &str, rating: u8) -> NewSession {
    NewSession {
        title: "Test".to_string(),
        location: Beach::DelMar,
        start: local_datetime::parse(&format!("{day}T08:00")).unwrap(),
        end: local_datetime::parse(&format!("{day}T09:00")).unwrap(),
        rating,
    }
}

fn provider() -> StaticSurfData {
    StaticSurfData {
        token: Some("secret".to_string()),
        ..Default::default()
    }
}

#[test]
fn create_assigns_ids_and_feeds_analytics() {
    let api = provider();
    let a = api.create_session("secret", &new_session("2025-06-08", 4)).unwrap();
    let b = api.create_session("secret", &new_session("2025-06-09", 5)).unwrap();
    assert_eq!((a.id, b.id), (1, 2));

    let sessions = api.sessions("secret").unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(surf_streak(&sessions), 2);
}

#[test]
fn invalid_session_is_not_sent() {
    let api = provider();
    let err = api.create_session("secret", &new_session("2025-06-09", 0)).unwrap_err();
    assert!(matches!(err, SurfError::Session(_)), "{err:?}");
    assert!(api.sessions("secret").unwrap().is_empty());
}

#[test]
fn update_replaces_whole_record() {
    let api = provider();
    let created = api.create_session("secret", &new_session("2025-06-09", 3)).unwrap();

    let mut edit = created.to_new();
    edit.location = Beach::Blacks;
    api.update_session("secret", created.id, &edit).unwrap();

    let sessions = api.sessions("secret").unwrap();
    assert_eq!(sessions[0].location, Beach::Blacks);
    assert!(api.update_session("secret", 99, &edit).is_err());
}

#[test]
fn wrong_token_is_rejected() {
    let api = provider();
    assert!(matches!(api.sessions("nope"), Err(SurfError::Http { .. })));
}

#[test]
fn crowd_is_filtered_by_beach_and_range() {
    let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    let api = StaticSurfData {
        sessions: Mutex::new(Vec::new()),
        hourly: vec![
            (Beach::Scripps, ForecastSample::hourly(d("2025-06-09"), "8am", 20.0)),
            (Beach::Scripps, ForecastSample::hourly(d("2025-06-11"), "8am", 30.0)),
            (Beach::Cardiff, ForecastSample::hourly(d("2025-06-09"), "8am", 40.0)),
        ],
        ..Default::default()
    };
    let got = api.hourly_crowd(Beach::Scripps, d("2025-06-09"), d("2025-06-10")).unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].value, 20.0);
    assert!(api.daily_crowd(Beach::Scripps, d("2025-06-09"), d("2025-06-10")).unwrap().is_empty());
}

fn account() -> SignUp {
    SignUp {
        username: "kai".to_string(),
        email: "kai@example.com".to_string(),
        password: "hunter2".to_string(),
        location: "San Diego".to_string(),
    }
}

#[test]
fn signup_stores_token_and_resolves_user() {
    let api = provider();
    let mut store = MemoryTokenStore::default();

    let token = auth::signup(&api, &mut store, &account()).unwrap();
    assert_eq!(store.get().as_deref(), Some(token.as_str()));

    let user = auth::current_user(&api, &store).unwrap();
    assert_eq!(user, account().profile());

    // innlogget token gir tilgang til øktene
    api.create_session(&token, &new_session("2025-06-09", 4)).unwrap();
    assert_eq!(api.sessions(&token).unwrap().len(), 1);
}

#[test]
fn duplicate_signup_is_rejected() {
    let api = provider();
    api.signup(&account()).unwrap();

    let same_email = SignUp { username: "annen".to_string(), ..account() };
    let same_name = SignUp { email: "annen@example.com".to_string(), ..account() };
    assert!(matches!(api.signup(&same_email), Err(SurfError::Http { message, .. }) if message.contains("Email")));
    assert!(matches!(api.signup(&same_name), Err(SurfError::Http { message, .. }) if message.contains("Username")));
}

#[test]
fn login_checks_password_and_logout_clears_store() {
    let api = provider();
    api.signup(&account()).unwrap();
    let mut store = MemoryTokenStore::default();

    let wrong = Credentials { password: "feil".to_string(), ..account().credentials() };
    assert!(auth::login(&api, &mut store, &wrong).is_err());
    assert!(store.get().is_none());

    auth::login(&api, &mut store, &account().credentials()).unwrap();
    assert_eq!(auth::current_user(&api, &store).unwrap().username, "kai");

    auth::logout(&mut store).unwrap();
    assert!(matches!(auth::require_token(&store), Err(SurfError::NotLoggedIn)));
    assert!(matches!(auth::current_user(&api, &store), Err(SurfError::NotLoggedIn)));
}

#[test]
fn unknown_token_has_no_user() {
    let api = provider();
    assert!(api.current_user("secret").is_err());
    assert!(api.current_user("static:ingen@example.com").is_err());
    assert!(matches!(api.sessions("static:ingen@example.com"), Err(SurfError::Http { .. })));
}
