use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode league record: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Player store lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if this error came from a malformed league record
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}
