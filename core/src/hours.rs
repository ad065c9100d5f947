use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::warn;

use crate::models::Session;
use crate::types::DayHours;

/// Timer for én økt. Ugyldig økt (slutt <= start) gir 0.
pub fn session_hours(session: &Session) -> f64 {
    let h = session.duration_hours();
    if h > 0.0 {
        h
    } else {
        warn!(
            "økt {} har slutt før/lik start ({} -> {}), teller 0 timer",
            session.id, session.start, session.end
        );
        0.0
    }
}

/// "Jun 5"
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Timer summert per lokal kalenderdag, stigende på faktisk dato.
pub fn hours_per_day(sessions: &[Session]) -> Vec<DayHours> {
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for s in sessions {
        *by_day.entry(s.local_day()).or_insert(0.0) += session_hours(s);
    }

    by_day
        .into_iter()
        .map(|(date, hours)| DayHours {
            date,
            label: day_label(date),
            hours,
        })
        .collect()
}

pub fn total_hours(sessions: &[Session]) -> f64 {
    sessions.iter().map(session_hours).sum()
}

/// Snittlengde i timer; 0 uten økter.
pub fn avg_session_length(sessions: &[Session]) -> f64 {
    if sessions.is_empty() {
        return 0.0;
    }
    total_hours(sessions) / sessions.len() as f64
}
