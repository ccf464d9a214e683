use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage lock poisoned during {0}")]
    LockPoisoned(&'static str),

    #[error("storage quota exceeded writing {key} ({size} bytes, quota {quota})")]
    QuotaExceeded {
        key: String,
        size: usize,
        quota: usize,
    },

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is corrupt: {0}")]
    Corrupt(String),
}
