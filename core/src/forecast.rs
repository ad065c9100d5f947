// core/src/forecast.rs
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use log::debug;
use once_cell::sync::Lazy;
use ordered_float::OrderedFloat;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{CrowdPoint, ForecastSample};
use crate::types::AnalyticsConfig;
use crate::units::RoundTo;

static HOUR_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)(am|pm)$").unwrap());

/// Fast y-akse for timesvisningen (crowd i prosent).
pub const HOURLY_DOMAIN: ChartDomain = ChartDomain { min: 0.0, max: 100.0 };

/// "8am" -> 8, "12am" -> 0, "12pm" -> 12, "3pm" -> 15. Ellers None.
pub fn parse_hour_label(label: &str) -> Option<u32> {
    let caps = HOUR_LABEL.captures(label)?;
    let n: u32 = caps.get(1)?.as_str().parse().ok()?;
    if n > 12 {
        return None;
    }
    let hour = match (caps.get(2)?.as_str(), n) {
        ("am", 12) => 0,
        ("pm", 12) => 12,
        ("pm", h) => h + 12,
        (_, h) => h,
    };
    Some(hour)
}

/// Omvendt av `parse_hour_label`; timen tas modulo 24.
pub fn hour_label(hour: u32) -> String {
    match hour % 24 {
        0 => "12am".to_string(),
        h @ 1..=11 => format!("{h}am"),
        12 => "12pm".to_string(),
        h => format!("{}pm", h - 12),
    }
}

/// Som `hourly_window`, men returnerer også antall droppede etiketter.
pub fn hourly_window_counted(
    samples: &[ForecastSample],
    now: NaiveDateTime,
    window_hours: u32,
) -> (Vec<ForecastSample>, usize) {
    let today = now.date();
    let from = now.hour();
    let to = from.saturating_add(window_hours);

    let mut malformed = 0usize;
    let kept = samples
        .iter()
        .filter(|s| match parse_hour_label(&s.time) {
            Some(h) => s.date == today && (from..=to).contains(&h),
            None => {
                debug!("dropper forecast-sample med ugyldig tid {:?} ({})", s.time, s.date);
                malformed += 1;
                false
            }
        })
        .cloned()
        .collect();

    (kept, malformed)
}

/// Timesvisning: behold kun dagens samples med time i `[nå, nå + window]`.
pub fn hourly_window(
    samples: &[ForecastSample],
    now: NaiveDateTime,
    window_hours: u32,
) -> Vec<ForecastSample> {
    hourly_window_counted(samples, now, window_hours).0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDomain {
    pub min: f64,
    pub max: f64,
}

/// y-akse for dagsvisning: `min / floor_divisor ..= max`. None når tom.
pub fn chart_domain(samples: &[ForecastSample], floor_divisor: f64) -> Option<ChartDomain> {
    let values = || {
        samples
            .iter()
            .map(|s| s.value)
            .filter(|v| v.is_finite())
            .map(OrderedFloat)
    };
    let min = values().min()?.into_inner();
    let max = values().max()?.into_inner();

    let floor = if floor_divisor > 0.0 { min / floor_divisor } else { min };
    Some(ChartDomain { min: floor, max })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastView {
    Hourly,
    Daily,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastChart {
    pub view: ForecastView,
    pub samples: Vec<ForecastSample>,
    pub domain: Option<ChartDomain>,
}

/// Klargjør data for chart. Hourly filtreres; Daily returneres urørt.
pub fn prepare_chart(
    samples: &[ForecastSample],
    view: ForecastView,
    now: NaiveDateTime,
    cfg: &AnalyticsConfig,
) -> ForecastChart {
    prepare_chart_counted(samples, view, now, cfg).0
}

/// Som `prepare_chart`, pluss antall droppede timesetiketter (0 for Daily).
pub fn prepare_chart_counted(
    samples: &[ForecastSample],
    view: ForecastView,
    now: NaiveDateTime,
    cfg: &AnalyticsConfig,
) -> (ForecastChart, usize) {
    match view {
        ForecastView::Hourly => {
            let (kept, malformed) = hourly_window_counted(samples, now, cfg.window_hours);
            let chart = ForecastChart {
                view,
                samples: kept,
                domain: Some(HOURLY_DOMAIN),
            };
            (chart, malformed)
        }
        ForecastView::Daily => {
            let chart = ForecastChart {
                view,
                samples: samples.to_vec(),
                domain: chart_domain(samples, cfg.chart_floor_divisor),
            };
            (chart, 0)
        }
    }
}

/// Daglig crowd-sammendrag (snitt/median på dagtid, topp over hele døgnet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCrowdSummary {
    pub date: NaiveDate,
    pub mean: f64,
    pub median: f64,
    /// Topp-crowd (heltall)
    pub value: f64,
    pub peak_time: String,
    pub low_time: String,
}

impl DailyCrowdSummary {
    pub fn into_sample(self) -> ForecastSample {
        ForecastSample {
            time: self.date.format("%a").to_string(),
            date: self.date,
            value: self.value,
            low_time: Some(self.low_time),
            peak_time: Some(self.peak_time),
            mean: Some(self.mean),
            median: Some(self.median),
        }
    }
}

/// Første punkt med høyest/lavest verdi (første vinner ved likhet).
fn first_extreme<'a>(
    points: impl Iterator<Item = &'a CrowdPoint>,
    better: impl Fn(f64, f64) -> bool,
) -> Option<&'a CrowdPoint> {
    let mut best: Option<&'a CrowdPoint> = None;
    for p in points {
        match best {
            Some(b) if !better(p.crowdedness, b.crowdedness) => {}
            _ => best = Some(p),
        }
    }
    best
}

/// Oppsummer timesprediksjoner per dato. Dager uten dagtidspunkter utelates.
pub fn summarize_daily(points: &[CrowdPoint], daytime: RangeInclusive<u32>) -> Vec<DailyCrowdSummary> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&CrowdPoint>> = BTreeMap::new();
    for p in points.iter().filter(|p| p.crowdedness.is_finite()) {
        by_date.entry(p.timestamp.date()).or_default().push(p);
    }

    let mut out = Vec::with_capacity(by_date.len());
    for (date, day) in by_date {
        let daytime_pts: Vec<&CrowdPoint> = day
            .iter()
            .copied()
            .filter(|p| daytime.contains(&p.hour()))
            .collect();

        let (Some(peak), Some(low)) = (
            first_extreme(day.iter().copied(), |a, b| a > b),
            first_extreme(daytime_pts.iter().copied(), |a, b| a < b),
        ) else {
            debug!("ingen dagtidspunkter for {date}, hopper over");
            continue;
        };

        let values: Vec<f64> = daytime_pts.iter().map(|p| p.crowdedness).collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let median = crate::units::median(&values).unwrap_or(mean);

        out.push(DailyCrowdSummary {
            date,
            mean: mean.round_even_to(2),
            median: median.round_even_to(2),
            value: peak.crowdedness.round_even_to(0),
            peak_time: hour_label(peak.hour()),
            low_time: hour_label(low.hour()),
        });
    }
    out
}
