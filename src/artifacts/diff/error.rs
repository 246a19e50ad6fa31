use thiserror::Error;

/// Errors surfaced by the diff engine.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The search was aborted by its cancellation token. No script was produced.
    #[error("diff computation cancelled")]
    Cancelled,
    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DiffError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DiffError::Cancelled)
    }
}
