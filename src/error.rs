//! Error types for loading the vocab file and the configuration.
use std::io;
use std::path::PathBuf;

/// Why the vocab file could not provide a deck.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{} does not exist", path.display())]
    FileAbsent { path: PathBuf },
    #[error("permission denied reading {}", path.display())]
    FileUnreadable { path: PathBuf },
    #[error("{reason}")]
    FileMalformed { path: PathBuf, reason: String },
}

impl LoadError {
    /// Sorts an I/O failure into absent, unreadable or malformed.
    pub fn from_io(path: PathBuf, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::FileAbsent { path },
            io::ErrorKind::PermissionDenied => Self::FileUnreadable { path },
            _ => Self::FileMalformed {
                path,
                reason: error.to_string(),
            },
        }
    }

    pub fn malformed(path: PathBuf, reason: impl ToString) -> Self {
        Self::FileMalformed {
            path,
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("error reading config file: {0}")]
    IOFailed(#[from] io::Error),
    #[error("error parsing config file: {0}")]
    ParseFailed(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_absent() {
        let error = LoadError::from_io(
            PathBuf::from("vocab.csv"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(error, LoadError::FileAbsent { .. }));
    }

    #[test]
    fn test_permission_denied_is_unreadable() {
        let error = LoadError::from_io(
            PathBuf::from("vocab.csv"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(error, LoadError::FileUnreadable { .. }));
    }

    #[test]
    fn test_other_io_errors_are_malformed() {
        let error = LoadError::from_io(
            PathBuf::from("vocab.csv"),
            io::Error::new(io::ErrorKind::Other, "is a directory"),
        );
        match error {
            LoadError::FileMalformed { reason, .. } => assert_eq!(reason, "is a directory"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
