use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Result;
use crate::models::Session;
use crate::types::AnalyticsConfig;

/// Leser inn økter fra disk (JSON-liste, samme form som API-et).
/// Hvis filen ikke finnes, returneres en tom liste.
pub fn load_sessions(path: impl AsRef<Path>) -> Result<Vec<Session>> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("fant ikke økter på {}, returnerer tom liste", path.display());
        return Ok(Vec::new());
    }
    let contents = std::fs::read_to_string(path)?;
    let de = &mut serde_json::Deserializer::from_str(&contents);
    let sessions: Vec<Session> = serde_path_to_error::deserialize(de)?;
    info!("{} økter lastet fra {}", sessions.len(), path.display());
    Ok(sessions)
}

/// Lagrer økter til disk som JSON (pretty-print).
pub fn save_sessions(sessions: &[Session], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(sessions)?;
    std::fs::write(path, json)?;
    info!("{} økter lagret til {}", sessions.len(), path.display());
    Ok(())
}

/// Leser konfig; manglende fil gir default-konfig.
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalyticsConfig> {
    let path = path.as_ref();
    if !path.exists() {
        info!("ingen konfig på {}, bruker default", path.display());
        return Ok(AnalyticsConfig::default());
    }
    let contents = std::fs::read_to_string(path)?;
    let de = &mut serde_json::Deserializer::from_str(&contents);
    Ok(serde_path_to_error::deserialize(de)?)
}

/// Lagring av innloggings-token, injisert i stedet for global browser-state.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, token: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.clone()
    }

    fn set(&mut self, token: &str) -> Result<()> {
        self.token = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.token = None;
        Ok(())
    }
}

/// Token i en fil (én linje).
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn set(&mut self, token: &str) -> Result<()> {
        std::fs::write(&self.path, token.trim())?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
