//! SurfWatch core: øktanalyse (streak, strender, timer) og crowd-forecast.
pub mod analyzer;
pub mod api;
pub mod auth;
pub mod cli;
pub mod compass;
pub mod conditions;
pub mod error;
pub mod forecast;
pub mod hours;
pub mod metrics;
pub mod models;
pub mod ranking;
pub mod report;
pub mod storage;
pub mod streak;
pub mod types;
pub mod units;

pub use compass::degrees_to_compass;
pub use error::{Result, SessionError, SurfError};
pub use forecast::{hourly_window, parse_hour_label, prepare_chart, summarize_daily, ForecastView};
pub use hours::{avg_session_length, hours_per_day, total_hours};
pub use models::{Beach, CrowdPoint, ForecastSample, NewSession, Session};
pub use ranking::most_visited_beaches;
pub use report::{analyze_sessions_json, build_profile_report};
pub use storage::{load_sessions, save_sessions};
pub use streak::{longest_streak, streak_is_active, surf_streak};
pub use types::{AnalyticsConfig, BeachRank, DayHours, ProfileReport};
