//! Errors raised by tree operations.

use thiserror::Error;

/// Result type for VFS operations.
pub type VfsResult<T> = Result<T, VfsError>;

/// Coarse classification of a [`VfsError`].
///
/// Commands that word a failure their own way match on the kind rather
/// than the variant. `NotADirectory` and `NotAFile` are both type mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidType,
    AlreadyExists,
    SelfContainment,
    InvalidDestination,
    PathInvalid,
}

/// Tree operation errors.
///
/// The payload is the path as the caller typed it, so messages read back
/// the user's own input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("{0}: No such file or directory")]
    NotFound(String),
    #[error("{0}: Not a directory")]
    NotADirectory(String),
    #[error("{0}: is not a file.")]
    NotAFile(String),
    #[error("{0}: already exists.")]
    AlreadyExists(String),
    #[error("cannot move '{path}' to a subdirectory of itself, '{destination}'")]
    SelfContainment { path: String, destination: String },
    #[error("cannot copy '{path}' into itself, '{destination}'")]
    CopyIntoItself { path: String, destination: String },
    #[error("{0}: invalid destination path.")]
    InvalidDestination(String),
    #[error("{0}: the path specified is incorrect.")]
    PathInvalid(String),
}

impl VfsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VfsError::NotFound(_) => ErrorKind::NotFound,
            VfsError::NotADirectory(_) | VfsError::NotAFile(_) => ErrorKind::InvalidType,
            VfsError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            VfsError::SelfContainment { .. } | VfsError::CopyIntoItself { .. } => {
                ErrorKind::SelfContainment
            }
            VfsError::InvalidDestination(_) => ErrorKind::InvalidDestination,
            VfsError::PathInvalid(_) => ErrorKind::PathInvalid,
        }
    }
}
