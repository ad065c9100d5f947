// core/src/api.rs
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use ureq::{Agent, Request};

use crate::conditions::{normalize_window, EnvironmentalConditions};
use crate::error::{Result, SurfError};
use crate::models::{
    local_datetime, Beach, Credentials, ForecastSample, NewSession, Session, SignUp, UserProfile,
};
use crate::report::decode_sessions;

pub const API_URL_ENV: &str = "SURFWATCH_API_URL";

/// Kilde for konto, økter og forecast (prod: HttpSurfApi, test: StaticSurfData).
pub trait SurfDataProvider {
    /// Returnerer bearer-token.
    fn login(&self, creds: &Credentials) -> Result<String>;
    fn signup(&self, req: &SignUp) -> Result<String>;
    fn current_user(&self, token: &str) -> Result<UserProfile>;
    fn sessions(&self, token: &str) -> Result<Vec<Session>>;
    fn create_session(&self, token: &str, session: &NewSession) -> Result<Session>;
    /// Redigering sender hele posten på nytt.
    fn update_session(&self, token: &str, id: u64, session: &NewSession) -> Result<()>;
    fn hourly_crowd(&self, beach: Beach, start: NaiveDate, end: NaiveDate) -> Result<Vec<ForecastSample>>;
    fn daily_crowd(&self, beach: Beach, start: NaiveDate, end: NaiveDate) -> Result<Vec<ForecastSample>>;
    fn environmental_conditions(
        &self,
        beach: Beach,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<EnvironmentalConditions>;
}

/// SurfWatch REST-klient – enkel blocking-versjon (ureq)
pub struct HttpSurfApi {
    base_url: String,
    agent: Agent,
}

impl HttpSurfApi {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn from_env() -> Result<Self> {
        let url = std::env::var(API_URL_ENV)
            .map_err(|_| SurfError::Config(format!("{API_URL_ENV} er ikke satt")))?;
        Ok(Self::new(&url))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authed(&self, method: &str, url: &str, token: &str) -> Request {
        self.agent
            .request(method, url)
            .set("Authorization", &format!("Bearer {token}"))
    }

    fn crowd(&self, kind: &str, beach: Beach, start: NaiveDate, end: NaiveDate) -> Result<Vec<ForecastSample>> {
        let url = self.endpoint(&format!("api/crowd/{kind}"));
        let req = self
            .agent
            .get(&url)
            .query("beach_index", &beach.id().to_string())
            .query("start_date", &start.to_string())
            .query("end_date", &end.to_string());
        read_json(&url, req.call())
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

fn http_err(url: &str, err: impl std::fmt::Display) -> SurfError {
    SurfError::Http {
        url: url.to_string(),
        message: err.to_string(),
    }
}

fn read_json<T: DeserializeOwned>(
    url: &str,
    resp: std::result::Result<ureq::Response, ureq::Error>,
) -> Result<T> {
    let resp = resp.map_err(|e| http_err(url, e))?;
    resp.into_json::<T>().map_err(|e| http_err(url, e))
}

impl SurfDataProvider for HttpSurfApi {
    fn login(&self, creds: &Credentials) -> Result<String> {
        let url = self.endpoint("login");
        let resp: TokenResponse = read_json(&url, self.agent.post(&url).send_json(creds))?;
        info!("logget inn som {}", creds.email);
        Ok(resp.token)
    }

    fn signup(&self, req: &SignUp) -> Result<String> {
        let url = self.endpoint("signup");
        let resp: TokenResponse = read_json(&url, self.agent.post(&url).send_json(req))?;
        info!("opprettet konto {} ({})", req.username, req.email);
        Ok(resp.token)
    }

    fn current_user(&self, token: &str) -> Result<UserProfile> {
        let url = self.endpoint("api/user");
        read_json(&url, self.authed("GET", &url, token).call())
    }

    fn sessions(&self, token: &str) -> Result<Vec<Session>> {
        let url = self.endpoint("api/profile/session");
        let rows: Vec<serde_json::Value> = read_json(&url, self.authed("GET", &url, token).call())?;
        let (sessions, skipped) = decode_sessions(rows);
        if skipped > 0 {
            warn!("{skipped} uleselige økter fra {url} ble hoppet over");
        }
        info!("hentet {} økter fra {}", sessions.len(), url);
        Ok(sessions)
    }

    fn create_session(&self, token: &str, session: &NewSession) -> Result<Session> {
        session.validate()?;
        let url = self.endpoint("api/profile/session");
        read_json(&url, self.authed("POST", &url, token).send_json(session))
    }

    fn update_session(&self, token: &str, id: u64, session: &NewSession) -> Result<()> {
        session.validate()?;
        let url = self.endpoint(&format!("api/profile/session/{id}"));
        self.authed("PATCH", &url, token)
            .send_json(session)
            .map_err(|e| http_err(&url, e))?;
        Ok(())
    }

    fn hourly_crowd(&self, beach: Beach, start: NaiveDate, end: NaiveDate) -> Result<Vec<ForecastSample>> {
        self.crowd("hourly", beach, start, end)
    }

    fn daily_crowd(&self, beach: Beach, start: NaiveDate, end: NaiveDate) -> Result<Vec<ForecastSample>> {
        self.crowd("daily", beach, start, end)
    }

    fn environmental_conditions(
        &self,
        beach: Beach,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<EnvironmentalConditions> {
        let (start, end) = normalize_window(start, end);
        let url = self.endpoint("api/environmental-conditions");
        let req = self
            .agent
            .get(&url)
            .query("beach_id", &beach.id().to_string())
            .query("start", &local_datetime::format(&start))
            .query("end", &local_datetime::format(&end));
        read_json(&url, req.call())
    }
}

const STATIC_TOKEN_PREFIX: &str = "static:";

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Statisk tilbyder for tester/offline. Kontoer og økter lagres i minnet.
/// Innlogging gir token `static:<email>`; `token` er et fast ekstra token.
#[derive(Debug, Default)]
pub struct StaticSurfData {
    pub token: Option<String>,
    pub accounts: Mutex<Vec<SignUp>>,
    pub sessions: Mutex<Vec<Session>>,
    pub hourly: Vec<(Beach, ForecastSample)>,
    pub daily: Vec<(Beach, ForecastSample)>,
    pub conditions: Option<EnvironmentalConditions>,
}

impl StaticSurfData {
    fn account_for(&self, token: &str) -> Option<SignUp> {
        let email = token.strip_prefix(STATIC_TOKEN_PREFIX)?;
        lock(&self.accounts).iter().find(|a| a.email == email).cloned()
    }

    fn check_token(&self, token: &str) -> Result<()> {
        match &self.token {
            Some(expected) if expected != token && self.account_for(token).is_none() => {
                Err(http_err("static", "Invalid token"))
            }
            _ => Ok(()),
        }
    }

    fn in_range(rows: &[(Beach, ForecastSample)], beach: Beach, start: NaiveDate, end: NaiveDate) -> Vec<ForecastSample> {
        rows.iter()
            .filter(|(b, s)| *b == beach && s.date >= start && s.date <= end)
            .map(|(_, s)| s.clone())
            .collect()
    }
}

impl SurfDataProvider for StaticSurfData {
    fn login(&self, creds: &Credentials) -> Result<String> {
        lock(&self.accounts)
            .iter()
            .find(|a| a.email == creds.email && a.password == creds.password)
            .map(|a| format!("{STATIC_TOKEN_PREFIX}{}", a.email))
            .ok_or_else(|| http_err("static", "Invalid credentials"))
    }

    fn signup(&self, req: &SignUp) -> Result<String> {
        let mut accounts = lock(&self.accounts);
        if accounts.iter().any(|a| a.email == req.email) {
            return Err(http_err("static", "Email already registered"));
        }
        if accounts.iter().any(|a| a.username == req.username) {
            return Err(http_err("static", "Username already taken"));
        }
        accounts.push(req.clone());
        Ok(format!("{STATIC_TOKEN_PREFIX}{}", req.email))
    }

    fn current_user(&self, token: &str) -> Result<UserProfile> {
        self.account_for(token)
            .map(|a| a.profile())
            .ok_or_else(|| http_err("static", "Invalid token"))
    }

    fn sessions(&self, token: &str) -> Result<Vec<Session>> {
        self.check_token(token)?;
        Ok(lock(&self.sessions).clone())
    }

    fn create_session(&self, token: &str, session: &NewSession) -> Result<Session> {
        self.check_token(token)?;
        session.validate()?;
        let mut sessions = lock(&self.sessions);
        let id = sessions.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let created = session.clone().with_id(id);
        sessions.push(created.clone());
        Ok(created)
    }

    fn update_session(&self, token: &str, id: u64, session: &NewSession) -> Result<()> {
        self.check_token(token)?;
        session.validate()?;
        let mut sessions = lock(&self.sessions);
        let slot = sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| http_err("static", format!("Session {id} not found")))?;
        *slot = session.clone().with_id(id);
        Ok(())
    }

    fn hourly_crowd(&self, beach: Beach, start: NaiveDate, end: NaiveDate) -> Result<Vec<ForecastSample>> {
        Ok(Self::in_range(&self.hourly, beach, start, end))
    }

    fn daily_crowd(&self, beach: Beach, start: NaiveDate, end: NaiveDate) -> Result<Vec<ForecastSample>> {
        Ok(Self::in_range(&self.daily, beach, start, end))
    }

    fn environmental_conditions(
        &self,
        _beach: Beach,
        _start: NaiveDateTime,
        _end: NaiveDateTime,
    ) -> Result<EnvironmentalConditions> {
        self.conditions
            .clone()
            .ok_or_else(|| http_err("static", "no conditions configured"))
    }
}
