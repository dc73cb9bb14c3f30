use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum AppError {
    NotFound(PathBuf),
    PermissionDenied(PathBuf),
    NotADirectory(PathBuf),
    Io { path: PathBuf, source: io::Error },
    Output(io::Error),
    InvalidArgument(String),
    Config { path: PathBuf, message: String },
}

impl AppError {
    /// Classify an I/O failure that happened while reading `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => AppError::NotFound(path),
            io::ErrorKind::PermissionDenied => AppError::PermissionDenied(path),
            io::ErrorKind::NotADirectory => AppError::NotADirectory(path),
            _ => AppError::Io { path, source: err },
        }
    }

    pub fn config(path: &Path, message: impl Into<String>) -> Self {
        AppError::Config {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidArgument(_) | AppError::Config { .. } => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(path) => {
                write!(f, "directory not found: {}", path.display())
            }
            AppError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            AppError::NotADirectory(path) => {
                write!(f, "not a directory: {}", path.display())
            }
            AppError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            AppError::Output(e) => write!(f, "failed to write output: {}", e),
            AppError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            AppError::Config { path, message } => {
                write!(f, "invalid config {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io { source, .. } | AppError::Output(source) => Some(source),
            _ => None,
        }
    }
}

/// I/O failures with no associated path happen while writing results
impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Output(e)
    }
}
