// core/src/models.rs
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{SessionError, SurfError};

/// Kjente strender (fast sett). `id` matcher `beach_index`/`beach_id` i API-et.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Beach {
    #[serde(rename = "Lower Trestles")]
    LowerTrestles,
    #[serde(rename = "Scripps")]
    Scripps,
    #[serde(rename = "La Jolla")]
    LaJolla,
    #[serde(rename = "Del Mar")]
    DelMar,
    #[serde(rename = "Blacks")]
    Blacks,
    #[serde(rename = "Cardiff")]
    Cardiff,
}

impl Beach {
    pub const ALL: [Beach; 6] = [
        Beach::LowerTrestles,
        Beach::Scripps,
        Beach::LaJolla,
        Beach::DelMar,
        Beach::Blacks,
        Beach::Cardiff,
    ];

    pub fn id(self) -> u32 {
        match self {
            Beach::LowerTrestles => 1,
            Beach::Scripps => 2,
            Beach::LaJolla => 3,
            Beach::DelMar => 4,
            Beach::Blacks => 5,
            Beach::Cardiff => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Beach::LowerTrestles => "Lower Trestles",
            Beach::Scripps => "Scripps",
            Beach::LaJolla => "La Jolla",
            Beach::DelMar => "Del Mar",
            Beach::Blacks => "Blacks",
            Beach::Cardiff => "Cardiff",
        }
    }

    /// (lat, lon) i desimalgrader
    pub fn coordinates(self) -> (f64, f64) {
        match self {
            Beach::LowerTrestles => (33.381440, -117.588430),
            Beach::Scripps => (32.863000, -117.257000),
            Beach::LaJolla => (32.865777, -117.256140),
            Beach::DelMar => (32.959163, -117.269630),
            Beach::Blacks => (32.883380, -117.255710),
            Beach::Cardiff => (33.013522, -117.282190),
        }
    }

    pub fn from_id(id: u32) -> Option<Beach> {
        Beach::ALL.into_iter().find(|b| b.id() == id)
    }
}

impl fmt::Display for Beach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Beach {
    type Err = SurfError;

    /// Navn fra skjema/API; case-insensitiv, trimmer whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Beach::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SurfError::UnknownBeach(wanted.to_string()))
    }
}

/// Går via `FromStr`, så "scripps" og "Scripps" leses likt.
impl<'de> Deserialize<'de> for Beach {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Lokal veggklokke-tid på tvers av API-formater.
///
/// Godtar `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DDTHH:MM` (datetime-local),
/// `YYYY-MM-DD HH:MM:SS` og RFC 3339 med offset. Offset-tider konverteres til
/// lokal tidssone én gang her, slik at all dag-bucketing senere bare er `.date()`.
pub mod local_datetime {
    use chrono::{DateTime, Local, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const OUT_FMT: &str = "%Y-%m-%dT%H:%M:%S";

    const NAIVE_FMTS: [&str; 6] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let s = raw.trim();
        for fmt in NAIVE_FMTS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt);
            }
        }
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Local).naive_local())
    }

    pub fn format(dt: &NaiveDateTime) -> String {
        dt.format(OUT_FMT).to_string()
    }

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("ugyldig tidspunkt: {raw}")))
    }
}

/// Økt slik den sendes ved opprettelse/redigering (uten server-id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    pub title: String,
    pub location: Beach,
    #[serde(with = "local_datetime")]
    pub start: NaiveDateTime,
    #[serde(with = "local_datetime")]
    pub end: NaiveDateTime,
    pub rating: u8,
}

impl NewSession {
    pub fn validate(&self) -> Result<(), SessionError> {
        validate_fields(&self.title, self.start, self.end, self.rating)
    }

    pub fn with_id(self, id: u64) -> Session {
        Session {
            id,
            title: self.title,
            location: self.location,
            start: self.start,
            end: self.end,
            rating: self.rating,
        }
    }
}

/// En loggført surfeøkt (fra `/api/profile/session`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: u64,
    pub title: String,
    pub location: Beach,
    #[serde(with = "local_datetime")]
    pub start: NaiveDateTime,
    #[serde(with = "local_datetime")]
    pub end: NaiveDateTime,
    pub rating: u8, // 1..=5
}

impl Session {
    pub fn validate(&self) -> Result<(), SessionError> {
        validate_fields(&self.title, self.start, self.end, self.rating)
    }

    /// Lokal kalenderdag for starttidspunktet.
    pub fn local_day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Varighet i timer (brøk). Negativ hvis data er ugyldige; se `hours::session_hours`.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    /// Hele posten for redigerings-flyten (PATCH sender alle felt).
    pub fn to_new(&self) -> NewSession {
        NewSession {
            title: self.title.clone(),
            location: self.location,
            start: self.start,
            end: self.end,
            rating: self.rating,
        }
    }
}

fn validate_fields(
    title: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
    rating: u8,
) -> Result<(), SessionError> {
    if title.trim().is_empty() {
        return Err(SessionError::EmptyTitle);
    }
    if end <= start {
        return Err(SessionError::EndNotAfterStart {
            start: local_datetime::format(&start),
            end: local_datetime::format(&end),
        });
    }
    if !(1..=5).contains(&rating) {
        return Err(SessionError::RatingOutOfRange(rating));
    }
    Ok(())
}

/// Ett punkt i crowd-tidsserien for en strand (`/api/crowd/hourly` og `/daily`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Etikett som "8am" / "12pm" (mangler i daglig API-svar)
    #[serde(default)]
    pub time: String,
    pub date: NaiveDate,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
}

impl ForecastSample {
    pub fn hourly(date: NaiveDate, time: impl Into<String>, value: f64) -> Self {
        Self {
            time: time.into(),
            date,
            value,
            low_time: None,
            peak_time: None,
            mean: None,
            median: None,
        }
    }
}

/// Rå modellprediksjon per time (input til daglig oppsummering).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrowdPoint {
    #[serde(with = "local_datetime")]
    pub timestamp: NaiveDateTime,
    pub crowdedness: f64,
}

impl CrowdPoint {
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}

/// Innlogging (`POST /login`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Ny konto (`POST /signup`). `location` er fritekst, ikke en `Beach`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUp {
    pub username: String,
    pub email: String,
    pub password: String,
    pub location: String,
}

impl SignUp {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            username: self.username.clone(),
            email: self.email.clone(),
            location: self.location.clone(),
        }
    }
}

/// Innlogget bruker (`GET /api/user`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub location: String,
}
