//! Error types for the session lifecycle and per-scan retrieval.

use std::fmt::Display;
use std::io;

use thiserror::Error;

/// The session-level status code shared across the boundary.
///
/// The numbering is part of the cross-language contract.
#[repr(u32)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Ok = 0,
    /// The path given did not exist at open time.
    FileNotFound = 1,
    /// The path exists but the accessor could not read it.
    InvalidFormat = 2,
    /// The token was not present in the session table.
    HandleNotFound = 3,
    /// Catch-all for unexpected accessor failures.
    Error = 999,
}

impl Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<u32> for SessionStatus {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::Ok,
            1 => Self::FileNotFound,
            2 => Self::InvalidFormat,
            3 => Self::HandleNotFound,
            _ => Self::Error,
        }
    }
}

impl SessionStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// How opening a file can fail. Open failures are recorded on the session
/// rather than aborting it, so `status()` can report why.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("file {0:?} does not exist")]
    FileNotFound(String),
    #[error("file {0:?} could not be read: {1}")]
    InvalidFormat(String, String),
    #[error("failed to open {0:?}: {1}")]
    Failure(String, String),
}

impl OpenError {
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::FileNotFound(_) => SessionStatus::FileNotFound,
            Self::InvalidFormat(_, _) => SessionStatus::InvalidFormat,
            Self::Failure(_, _) => SessionStatus::Error,
        }
    }
}

impl From<OpenError> for io::Error {
    fn from(value: OpenError) -> Self {
        match &value {
            OpenError::FileNotFound(_) => io::Error::new(io::ErrorKind::NotFound, value),
            OpenError::InvalidFormat(_, _) => io::Error::new(io::ErrorKind::InvalidData, value),
            OpenError::Failure(_, _) => io::Error::other(value),
        }
    }
}

/// How a per-scan retrieval can fail. Missing metadata is never an error, it
/// degrades to defaults; the accessor only fails loudly on a bad scan number
/// or an unexpected internal fault.
#[derive(Debug, Error)]
pub enum AccessorError {
    #[error("scan {scan} is outside the acquired range {first}..={last}")]
    ScanOutOfRange { scan: i32, first: i32, last: i32 },
    #[error("accessor failure: {0}")]
    Failure(String),
}
