use chrono::NaiveDateTime;
use log::{debug, info};

use crate::error::Result;
use crate::forecast::{
    prepare_chart_counted, summarize_daily, DailyCrowdSummary, ForecastChart, ForecastView,
};
use crate::metrics::Metrics;
use crate::models::{CrowdPoint, ForecastSample, Session};
use crate::report::{build_profile_report, partition_valid};
use crate::types::{AnalyticsConfig, ProfileReport};

/// Fasade over de rene funksjonene: samme resultater, pluss logging og tellere.
pub struct Analyzer {
    cfg: AnalyticsConfig,
    metrics: Metrics,
}

impl Analyzer {
    pub fn new(cfg: AnalyticsConfig) -> Result<Self> {
        Ok(Self {
            cfg,
            metrics: Metrics::new()?,
        })
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.cfg
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Validerer, hopper over ugyldige økter og bygger profilrapport.
    pub fn profile_report(&self, sessions: Vec<Session>) -> ProfileReport {
        let (valid, skipped) = partition_valid(sessions);
        self.metrics.sessions_analyzed.inc_by(valid.len() as u64);
        self.metrics.sessions_rejected.inc_by(skipped as u64);

        let mut report = build_profile_report(&valid, &self.cfg);
        report.skipped_sessions = skipped;
        self.metrics.reports_built.inc();

        info!(
            "rapport: {} økter ({} avvist), streak={}, totalt {:.2} t",
            report.session_count, skipped, report.streak, report.total_hours
        );
        report
    }

    pub fn forecast_chart(
        &self,
        samples: &[ForecastSample],
        view: ForecastView,
        now: NaiveDateTime,
    ) -> ForecastChart {
        let (chart, malformed) = prepare_chart_counted(samples, view, now, &self.cfg);
        self.metrics.forecast_samples_dropped.inc_by(malformed as u64);
        debug!(
            "{:?}-chart fra {}: {} av {} samples beholdt",
            view,
            now,
            chart.samples.len(),
            samples.len()
        );
        chart
    }

    pub fn daily_summary(&self, points: &[CrowdPoint]) -> Vec<DailyCrowdSummary> {
        summarize_daily(points, self.cfg.daytime())
    }
}
