use std::path::PathBuf;
use thiserror::Error;

/// Every way a rendition can fail. Each variant names the stage or file it came from.
#[derive(Debug, Error)]
pub enum NoiseError {
    #[error("invalid duration: {reason}")]
    InvalidDuration { reason: String },

    #[error("precondition violated for `{field}`: {reason}")]
    PreconditionViolation { field: &'static str, reason: String },

    #[error("degenerate signal in {stage}: peak magnitude is zero or not finite")]
    DegenerateSignal { stage: &'static str },

    #[error("i/o failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("wav container error at {path}: {source}")]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("malformed config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl NoiseError {
    /// Splits hound errors into plain i/o failures and container failures.
    pub fn from_wav(path: impl Into<PathBuf>, err: hound::Error) -> Self {
        let path = path.into();
        match err {
            hound::Error::IoError(source) => NoiseError::Io { path, source },
            source => NoiseError::Wav { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, NoiseError>;
