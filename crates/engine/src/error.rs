use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{name}: {}", reason(.source))]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("{name}: read error: {}", reason(.source))]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Name of the source this error belongs to, if any.
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        match self {
            Self::Open { name, .. } | Self::Read { name, .. } => Some(name),
            Self::ThreadPool(_) | Self::Config(_) => None,
        }
    }
}

/// The error text without the ` (os error N)` suffix std appends.
fn reason(err: &io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => match text.strip_suffix(&format!(" (os error {code})")) {
            Some(bare) => bare.to_owned(),
            None => text,
        },
        None => text,
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
