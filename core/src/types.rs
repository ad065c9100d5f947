use serde::{Deserialize, Serialize};

use crate::models::Beach;

/// Konfig for analysene. Alle felt har default, så `{}` er gyldig JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Antall strender i toppliste (typ 3)
    pub top_beaches: usize,
    /// Timer frem fra nå i timesvisningen (typ 8)
    pub window_hours: u32,
    /// Dagtid for lav-tid/snitt i daglig oppsummering (7am–8pm inkl.)
    pub daytime_start_hour: u32,
    pub daytime_end_hour: u32,
    /// Bunn for y-akse i dagsvisning = min / divisor (kosmetisk)
    pub chart_floor_divisor: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_beaches: 3,
            window_hours: 8,
            daytime_start_hour: 7,
            daytime_end_hour: 20,
            chart_floor_divisor: 1.5,
        }
    }
}

impl AnalyticsConfig {
    pub fn daytime(&self) -> std::ops::RangeInclusive<u32> {
        self.daytime_start_hour..=self.daytime_end_hour
    }
}

/// Én rad i "mest besøkte strender".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeachRank {
    pub rank: usize, // 1-basert
    pub beach: Beach,
    pub visits: usize,
    pub avg_rating: f64, // 1 desimal
}

/// Sum timer for én lokal kalenderdag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayHours {
    pub date: chrono::NaiveDate,
    /// "Jun 5"
    pub label: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProfileReport {
    pub session_count: usize,
    pub skipped_sessions: usize,
    pub streak: u32,
    pub longest_streak: u32,
    pub most_visited_beaches: Vec<BeachRank>,
    pub hours_per_day: Vec<DayHours>,
    pub total_hours: f64,
    pub avg_session_length: f64,
}
