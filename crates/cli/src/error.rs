// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] ccwc_engine::error::EngineError),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Standard output was closed by the reader (e.g. `ccwc big | head`).
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
