// core/src/streak.rs
use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::models::Session;

/// Unike lokale kalenderdager med minst én økt, stigende.
fn session_days(sessions: &[Session]) -> BTreeSet<NaiveDate> {
    sessions.iter().map(Session::local_day).collect()
}

/// Antall sammenhengende dager bakover fra siste øktdag.
/// Flere økter samme dag teller én gang; tom liste => 0.
pub fn surf_streak(sessions: &[Session]) -> u32 {
    let days = session_days(sessions);
    let mut descending = days.iter().rev();

    let Some(&latest) = descending.next() else {
        return 0;
    };

    let mut streak = 1;
    let mut expected = latest.checked_sub_days(Days::new(1));

    for &day in descending {
        if Some(day) == expected {
            streak += 1;
            expected = day.checked_sub_days(Days::new(1));
        } else {
            // settet er deduplisert og synkende, så alt annet er et hull
            break;
        }
    }
    streak
}

/// Lengste sammenhengende rekke av øktdager i hele historikken.
pub fn longest_streak(sessions: &[Session]) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for day in session_days(sessions) {
        run = match prev.and_then(|p| p.checked_add_days(Days::new(1))) {
            Some(next) if next == day => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }
    longest
}

/// Rekka er "levende" hvis siste øktdag er i dag eller i går.
pub fn streak_is_active(sessions: &[Session], today: NaiveDate) -> bool {
    match session_days(sessions).last() {
        Some(&latest) => {
            latest == today || today.checked_sub_days(Days::new(1)) == Some(latest)
        }
        None => false,
    }
}
