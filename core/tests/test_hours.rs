use surfwatch_core::hours::{day_label, session_hours};
use surfwatch_core::models::local_datetime;
use surfwatch_core::{avg_session_length, hours_per_day, total_hours, Beach, Session};

fn session(id: u64, start: &str, end: &str) -> Session {
    Session {
        id,
        title: "Dawn patrol".to_string(),
        location: Beach::DelMar,
        start: local_datetime::parse(start).unwrap(),
        end: local_datetime::parse(end).unwrap(),
        rating: 3,
    }
}

#[test]
fn total_and_average_hours() {
    let sessions = vec![
        session(1, "2025-06-05T07:00", "2025-06-05T08:30"), // 1.5
        session(2, "2025-06-05T16:00", "2025-06-05T18:00"), // 2.0
        session(3, "2025-06-07T09:15", "2025-06-07T10:00"), // 0.75
    ];
    let total = total_hours(&sessions);
    assert!((total - 4.25).abs() < 1e-9, "total={total}");
    let avg = avg_session_length(&sessions);
    assert!((avg - 4.25 / 3.0).abs() < 1e-9, "avg={avg}");
}

#[test]
fn no_sessions_gives_zero_average() {
    assert_eq!(total_hours(&[]), 0.0);
    assert_eq!(avg_session_length(&[]), 0.0);
    assert!(hours_per_day(&[]).is_empty());
}

#[test]
fn hours_per_day_is_sorted_by_real_date() {
    // "Jun 5" < "May 31" alfabetisk, men mai kommer først i tid
    let sessions = vec![
        session(1, "2025-06-05T07:00", "2025-06-05T09:00"),
        session(2, "2025-05-31T10:00", "2025-05-31T11:00"),
        session(3, "2025-06-05T17:00", "2025-06-05T17:30"),
        session(4, "2025-06-01T06:00", "2025-06-01T07:00"),
    ];
    let days = hours_per_day(&sessions);
    let labels: Vec<&str> = days.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["May 31", "Jun 1", "Jun 5"]);
    assert!(days.windows(2).all(|w| w[0].date < w[1].date));
    assert!((days[2].hours - 2.5).abs() < 1e-9, "Jun 5 skal summere til 2.5 t");
}

#[test]
fn invalid_session_contributes_zero_hours() {
    let bad = session(9, "2025-06-05T10:00", "2025-06-05T09:00");
    assert_eq!(session_hours(&bad), 0.0);
    assert_eq!(total_hours(&[bad]), 0.0);
}

#[test]
fn day_label_is_short_month_and_day() {
    let d = chrono::NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
    assert_eq!(day_label(d), "Dec 24");
}
