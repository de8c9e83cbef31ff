use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // Reading or writing the mirror file failed (missing permissions, disk full, ...).
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn storage(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Storage { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::storage(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Storage { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Issued,
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Issued => write!(f, "Issued"),
        }
    }
}

/// Outcome of the most recent load or save of the mirror file.
///
/// The store never returns persistence failures from its operations, so this is
/// the only place a caller can see that the catalog is running degraded.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum StorageStatus {
    NotAttempted,
    Succeeded,
    Failed {
        message: String,
    },
}

impl StorageStatus {
    pub fn failed(err: &LibraryError) -> StorageStatus {
        StorageStatus::Failed { message: err.to_string() }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StorageStatus::Failed { .. })
    }
}

impl Display for StorageStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            StorageStatus::NotAttempted => write!(f, "NotAttempted"),
            StorageStatus::Succeeded => write!(f, "Succeeded"),
            StorageStatus::Failed { message } => write!(f, "Failed: {}", message),
        }
    }
}
