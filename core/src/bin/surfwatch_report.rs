//! surfwatch-report <sessions.json> [config.json]
//! surfwatch-report --remote [config.json]
//! surfwatch-report --login <email> <password> | --logout
//! surfwatch-report --conditions <beach>
use anyhow::{bail, Context};
use chrono::{Duration, Local};

use surfwatch_core::analyzer::Analyzer;
use surfwatch_core::api::{HttpSurfApi, SurfDataProvider};
use surfwatch_core::auth;
use surfwatch_core::cli::{print_conditions, print_profile_report};
use surfwatch_core::models::{Beach, Credentials, Session};
use surfwatch_core::storage::{load_config, load_sessions, FileTokenStore};
use surfwatch_core::types::AnalyticsConfig;

const USAGE: &str = "bruk: surfwatch-report <sessions.json> [config.json] | --remote [config.json] \
                     | --login <email> <password> | --logout | --conditions <beach>";

fn token_store() -> FileTokenStore {
    let path = std::env::var("SURFWATCH_TOKEN_FILE").unwrap_or_else(|_| ".surfwatch_token".to_string());
    FileTokenStore::new(path)
}

fn config_arg(arg: Option<String>) -> anyhow::Result<AnalyticsConfig> {
    match arg {
        Some(p) => load_config(&p).with_context(|| format!("kunne ikke lese konfig {p}")),
        None => Ok(AnalyticsConfig::default()),
    }
}

fn report(sessions: Vec<Session>, cfg: AnalyticsConfig) -> anyhow::Result<()> {
    let analyzer = Analyzer::new(cfg)?;
    let report = analyzer.profile_report(sessions);
    print_profile_report(&report);

    log::debug!("{}", analyzer.metrics().render()?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // RUST_LOG overstyrer
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let Some(first) = args.next() else {
        bail!(USAGE);
    };

    match first.as_str() {
        "--login" => {
            let (Some(email), Some(password)) = (args.next(), args.next()) else {
                bail!(USAGE);
            };
            let api = HttpSurfApi::from_env()?;
            auth::login(&api, &mut token_store(), &Credentials { email, password })
                .context("innlogging feilet")?;
            let user = auth::current_user(&api, &token_store())?;
            println!("Logged in as {} ({})", user.username, user.location);
        }
        "--logout" => auth::logout(&mut token_store())?,
        "--remote" => {
            let cfg = config_arg(args.next())?;
            let api = HttpSurfApi::from_env()?;
            let token = auth::require_token(&token_store()).context("kjør --login først")?;
            let sessions = api.sessions(&token)?;
            report(sessions, cfg)?;
        }
        "--conditions" => {
            let Some(name) = args.next() else {
                bail!(USAGE);
            };
            let beach: Beach = name.parse()?;
            let api = HttpSurfApi::from_env()?;
            let now = Local::now().naive_local();
            let conditions = api
                .environmental_conditions(beach, now, now + Duration::hours(1))
                .with_context(|| format!("kunne ikke hente forhold for {beach}"))?;
            print_conditions(&conditions);
        }
        sessions_path => {
            let cfg = config_arg(args.next())?;
            let sessions = load_sessions(sessions_path)
                .with_context(|| format!("kunne ikke lese økter fra {sessions_path}"))?;
            report(sessions, cfg)?;
        }
    }
    Ok(())
}
