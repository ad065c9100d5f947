// core/src/error.rs
use thiserror::Error;

/// Valideringsfeil for én økt (skjema-/API-data).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("tittel kan ikke være tom")]
    EmptyTitle,
    #[error("slutt ({end}) må være etter start ({start})")]
    EndNotAfterStart { start: String, end: String },
    #[error("rating {0} er utenfor 1..=5")]
    RatingOutOfRange(u8),
}

/// Felles feiltype for I/O, JSON, HTTP og konfig.
/// Selve analysefunksjonene er totale og returnerer aldri denne.
#[derive(Debug, Error)]
pub enum SurfError {
    #[error("I/O-feil: {0}")]
    Io(#[from] std::io::Error),

    #[error("ugyldig JSON ved `{path}`: {message}")]
    Json { path: String, message: String },

    #[error("HTTP-feil mot {url}: {message}")]
    Http { url: String, message: String },

    #[error("ugyldig økt: {0}")]
    Session(#[from] SessionError),

    #[error("ikke innlogget")]
    NotLoggedIn,

    #[error("ukjent strand: {0}")]
    UnknownBeach(String),

    #[error("ugyldig konfig: {0}")]
    Config(String),

    #[error("metrics: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl From<serde_json::Error> for SurfError {
    fn from(err: serde_json::Error) -> Self {
        SurfError::Json {
            path: String::from("."),
            message: err.to_string(),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for SurfError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        SurfError::Json {
            path: err.path().to_string(),
            message: err.inner().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SurfError>;
