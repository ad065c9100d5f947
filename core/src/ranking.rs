use std::collections::HashMap;

use crate::models::{Beach, Session};
use crate::types::BeachRank;
use crate::units::RoundTo;

/// Topp `limit` strender etter antall besøk, med snittrating (1 desimal).
///
/// Sortering: besøk synkende, deretter strandnavn alfabetisk ved likt antall.
pub fn most_visited_beaches(sessions: &[Session], limit: usize) -> Vec<BeachRank> {
    // beach -> (besøk, sum rating)
    let mut tally: HashMap<Beach, (usize, u32)> = HashMap::new();
    for s in sessions {
        let entry = tally.entry(s.location).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u32::from(s.rating);
    }

    let mut rows: Vec<(Beach, usize, u32)> = tally
        .into_iter()
        .map(|(beach, (visits, rating_sum))| (beach, visits, rating_sum))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name().cmp(b.0.name())));

    rows.into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (beach, visits, rating_sum))| BeachRank {
            rank: i + 1,
            beach,
            visits,
            avg_rating: (f64::from(rating_sum) / visits as f64).round_to(1),
        })
        .collect()
}
