/// Errors surfaced at the engine's construction and I/O boundaries.
///
/// Routine gameplay misuse (stale inventory index, attacking a closed
/// encounter) is reported through sentinel values instead.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Coordinates were non-finite or outside the valid range
    #[error("Invalid location: latitude {latitude}, longitude {longitude}")]
    InvalidLocation { latitude: f64, longitude: f64 },

    /// Configuration value rejected by validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored save data did not match its checksum
    #[error("Checksum verification failed for {0}")]
    ChecksumMismatch(String),

    /// Save envelope written by an unknown format version
    #[error("Unsupported save version {0}")]
    UnsupportedVersion(u32),
}

pub type EngineResult<T> = Result<T, EngineError>;
