// core/src/conditions.rs
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::compass::{degrees_to_compass, UNKNOWN};

/// Open-Meteo weather_code -> kort beskrivelse (ikon-navn i UI).
pub fn weather_description(code: i32) -> &'static str {
    match code {
        0 => "sunny",
        1 | 2 => "partial-clouds",
        3 | 45 => "cloudy",
        51 | 53 | 55 | 61 | 63 | 65 => "rain",
        71 => "snow",
        _ => UNKNOWN,
    }
}

/// Hvis slutt <= start brukes start + 1 time.
pub fn normalize_window(start: NaiveDateTime, end: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    if end <= start {
        (start, start + Duration::hours(1))
    } else {
        (start, end)
    }
}

/// Forhold ved en strand for et tidsvindu (`/api/environmental-conditions`
/// og `/api/environmental-summary`). Høyder i fot, temperatur i °F.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalConditions {
    pub temperature_2m: f64,
    pub wind_speed: f64,
    #[serde(default)]
    pub wind_direction: Option<f64>,
    pub wave_height: f64,
    pub tide: f64,

    // --- kun i full summary ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sea_surface_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swell_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swell_direction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swell_period: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uv_max: Option<f64>,
}

impl EnvironmentalConditions {
    pub fn wind_compass(&self) -> &'static str {
        self.wind_direction.map_or(UNKNOWN, degrees_to_compass)
    }

    pub fn swell_compass(&self) -> &'static str {
        self.swell_direction.map_or(UNKNOWN, degrees_to_compass)
    }

    pub fn weather_description(&self) -> &'static str {
        self.weather_code.map_or(UNKNOWN, weather_description)
    }
}
