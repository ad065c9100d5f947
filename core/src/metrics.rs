use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

use crate::error::{Result, SurfError};

/// Prometheus-tellere for analysene. Påvirker aldri resultatene.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub sessions_analyzed: IntCounter,
    pub sessions_rejected: IntCounter,
    pub forecast_samples_dropped: IntCounter,
    pub reports_built: IntCounter,
}

fn counter(registry: &Registry, name: &str, help: &str) -> Result<IntCounter> {
    let c = IntCounter::new(name, help)?;
    registry.register(Box::new(c.clone()))?;
    Ok(c)
}

impl Metrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        Ok(Self {
            sessions_analyzed: counter(
                &registry,
                "surfwatch_sessions_analyzed_total",
                "Gyldige økter tatt med i en rapport",
            )?,
            sessions_rejected: counter(
                &registry,
                "surfwatch_sessions_rejected_total",
                "Økter avvist av validering",
            )?,
            forecast_samples_dropped: counter(
                &registry,
                "surfwatch_forecast_samples_dropped_total",
                "Forecast-samples med ugyldig tidsetikett",
            )?,
            reports_built: counter(
                &registry,
                "surfwatch_reports_built_total",
                "Antall profilrapporter bygget",
            )?,
            registry,
        })
    }

    /// Tekstformat (exposition format) for scraping/debug.
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| SurfError::Config(e.to_string()))
    }
}
