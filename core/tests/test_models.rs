use chrono::{DateTime, Local, NaiveDate};
use serde_json::json;
use surfwatch_core::models::local_datetime;
use surfwatch_core::{Beach, NewSession, Session, SessionError, SurfError};

fn new_session(title: &str, start: &str, end: &str, rating: u8) -> NewSession {
    NewSession {
        title: title.to_string(),
        location: Beach::Blacks,
        start: local_datetime::parse(start).unwrap(),
        end: local_datetime::parse(end).unwrap(),
        rating,
    }
}

#[test]
fn accepts_api_and_form_datetime_formats() {
    let expected = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap().and_hms_opt(8, 0, 0).unwrap();
    for raw in [
        "2025-06-09T08:00:00",
        "2025-06-09T08:00",
        "2025-06-09 08:00:00",
        "2025-06-09T08:00:00.000",
    ] {
        assert_eq!(local_datetime::parse(raw), Some(expected), "format {raw:?}");
    }
    assert_eq!(local_datetime::parse("i går"), None);
}

#[test]
fn offset_times_are_converted_to_local_wall_clock() {
    let raw = "2025-06-09T15:00:00Z";
    let expected = DateTime::parse_from_rfc3339(raw)
        .unwrap()
        .with_timezone(&Local)
        .naive_local();
    assert_eq!(local_datetime::parse(raw), Some(expected));
}

#[test]
fn session_json_from_api() {
    let s: Session = serde_json::from_value(json!({
        "id": 42,
        "title": "Glassy morning",
        "location": "Lower Trestles",
        "start": "2025-06-09T06:30",
        "end": "2025-06-09T08:00:00",
        "rating": 5
    }))
    .unwrap();
    assert_eq!(s.location, Beach::LowerTrestles);
    assert!((s.duration_hours() - 1.5).abs() < 1e-9);

    let out = serde_json::to_value(&s).unwrap();
    assert_eq!(out["start"], "2025-06-09T06:30:00");
    assert_eq!(out["location"], "Lower Trestles");
}

#[test]
fn unknown_location_is_rejected() {
    let res: Result<Session, _> = serde_json::from_value(json!({
        "id": 1, "title": "x", "location": "Pipeline",
        "start": "2025-06-09T06:30", "end": "2025-06-09T07:30", "rating": 3
    }));
    assert!(res.is_err());
}

#[test]
fn location_is_read_case_insensitively() {
    let s: Session = serde_json::from_value(json!({
        "id": 1, "title": "x", "location": "lower trestles",
        "start": "2025-06-09T06:30", "end": "2025-06-09T07:30", "rating": 3
    }))
    .unwrap();
    assert_eq!(s.location, Beach::LowerTrestles);
    // skrives alltid med visningsnavn
    assert_eq!(serde_json::to_value(&s).unwrap()["location"], "Lower Trestles");
}

#[test]
fn validation_rules() {
    assert!(new_session("Ok", "2025-06-09T06:00", "2025-06-09T07:00", 3).validate().is_ok());
    assert_eq!(
        new_session("   ", "2025-06-09T06:00", "2025-06-09T07:00", 3).validate(),
        Err(SessionError::EmptyTitle)
    );
    assert!(matches!(
        new_session("Ok", "2025-06-09T07:00", "2025-06-09T07:00", 3).validate(),
        Err(SessionError::EndNotAfterStart { .. })
    ));
    assert_eq!(
        new_session("Ok", "2025-06-09T06:00", "2025-06-09T07:00", 0).validate(),
        Err(SessionError::RatingOutOfRange(0))
    );
    assert_eq!(
        new_session("Ok", "2025-06-09T06:00", "2025-06-09T07:00", 6).validate(),
        Err(SessionError::RatingOutOfRange(6))
    );
}

#[test]
fn edit_flow_resends_full_record() {
    let created = new_session("Før", "2025-06-09T06:00", "2025-06-09T07:00", 3).with_id(7);
    let mut edit = created.to_new();
    edit.rating = 4;
    let updated = edit.with_id(created.id);
    assert_eq!(updated.id, 7);
    assert_eq!(updated.rating, 4);
    assert_eq!(updated.start, created.start);
}

#[test]
fn beach_catalog_lookup() {
    assert_eq!("la jolla".parse::<Beach>().unwrap(), Beach::LaJolla);
    assert_eq!(" Del Mar ".parse::<Beach>().unwrap(), Beach::DelMar);
    assert!(matches!("Pipeline".parse::<Beach>(), Err(SurfError::UnknownBeach(_))));
    assert_eq!(Beach::from_id(6), Some(Beach::Cardiff));
    assert_eq!(Beach::from_id(7), None);
    for b in Beach::ALL {
        assert_eq!(Beach::from_id(b.id()), Some(b));
        assert_eq!(b.to_string().parse::<Beach>().unwrap(), b);
    }
    let (lat, lon) = Beach::LowerTrestles.coordinates();
    assert!((lat - 33.38144).abs() < 1e-6 && (lon + 117.58843).abs() < 1e-6);
}
