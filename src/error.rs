//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`crate::catalog::CatalogError`], [`crate::config::ConfigError`]),
//! while CLI/main uses `anyhow` for convenient error propagation. This
//! enum aggregates them for code that needs one error type.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog pipeline / upstream service error
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;

    #[test]
    fn test_error_display() {
        let err = Error::from(CatalogError::ArtistNotFound);
        assert!(err.to_string().contains("artist not found"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
