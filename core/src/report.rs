// core/src/report.rs
use log::warn;
use serde_json::Value;

use crate::error::Result;
use crate::hours::{avg_session_length, hours_per_day, total_hours};
use crate::models::Session;
use crate::ranking::most_visited_beaches;
use crate::streak::{longest_streak, surf_streak};
use crate::types::{AnalyticsConfig, DayHours, ProfileReport};
use crate::units::RoundTo;

/// Tolker rå rader én og én; rader som ikke lar seg lese (ukjent strand,
/// feil type) logges og telles i stedet for å felle hele listen.
pub fn decode_sessions(rows: Vec<Value>) -> (Vec<Session>, usize) {
    let mut skipped = 0usize;
    let mut sessions = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let parsed: std::result::Result<Session, _> = serde_path_to_error::deserialize(row);
        match parsed {
            Ok(s) => sessions.push(s),
            Err(e) => {
                warn!("hopper over rad {i}: `{}`: {}", e.path(), e.inner());
                skipped += 1;
            }
        }
    }
    (sessions, skipped)
}

/// Skill ut gyldige økter; ugyldige logges og telles.
pub fn partition_valid(sessions: Vec<Session>) -> (Vec<Session>, usize) {
    let mut skipped = 0usize;
    let valid = sessions
        .into_iter()
        .filter(|s| match s.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("hopper over økt {} ({:?}): {}", s.id, s.title, e);
                skipped += 1;
                false
            }
        })
        .collect();
    (valid, skipped)
}

/// Profil-sammendrag. Timer rundes til 2 desimaler her (ikke i hours.rs).
pub fn build_profile_report(sessions: &[Session], cfg: &AnalyticsConfig) -> ProfileReport {
    ProfileReport {
        session_count: sessions.len(),
        skipped_sessions: 0,
        streak: surf_streak(sessions),
        longest_streak: longest_streak(sessions),
        most_visited_beaches: most_visited_beaches(sessions, cfg.top_beaches),
        hours_per_day: hours_per_day(sessions)
            .into_iter()
            .map(|d| DayHours {
                hours: d.hours.round_to(2),
                ..d
            })
            .collect(),
        total_hours: total_hours(sessions).round_to(2),
        avg_session_length: avg_session_length(sessions).round_to(2),
    }
}

/// JSON inn -> JSON ut. Uleselige og ugyldige økter hoppes over og telles;
/// feil i selve listen eller konfigen peker på feltstien (f.eks. `top_beaches`).
pub fn analyze_sessions_json(sessions_json: &str, cfg_json: Option<&str>) -> Result<String> {
    let de = &mut serde_json::Deserializer::from_str(sessions_json);
    let rows: Vec<Value> = serde_path_to_error::deserialize(de)?;
    let (sessions, unreadable) = decode_sessions(rows);

    let cfg: AnalyticsConfig = match cfg_json {
        Some(raw) => {
            let de = &mut serde_json::Deserializer::from_str(raw);
            serde_path_to_error::deserialize(de)?
        }
        None => AnalyticsConfig::default(),
    };

    let (valid, skipped) = partition_valid(sessions);
    let mut report = build_profile_report(&valid, &cfg);
    report.skipped_sessions = unreadable + skipped;

    Ok(serde_json::to_string(&report)?)
}
