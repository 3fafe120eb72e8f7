use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InspectError>;

/// What the caller asked for: decides the wording of every failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    File,
    Folder,
}

impl Target {
    pub fn noun(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("File"),
            Self::Folder => f.write_str("Folder"),
        }
    }
}

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Error: {target} path outside repository")]
    OutsideRepository { target: Target, path: String },

    #[error("{target} not found: {path}")]
    NotFound { target: Target, path: String },

    #[error("Path is not a {}: {path}", .target.noun())]
    WrongType { target: Target, path: String },

    #[error("Error: Cannot read file {path} (binary file or encoding issue)")]
    DecodeFailure { path: String },

    #[error("Error reading {} {path}: {source}", .target.noun())]
    Io {
        target: Target,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl InspectError {
    /// Stable machine-readable code, independent of the message text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::OutsideRepository { .. } => "outside_repository",
            Self::NotFound { .. } => "not_found",
            Self::WrongType { .. } => "wrong_type",
            Self::DecodeFailure { .. } => "decode_failure",
            Self::Io { .. } => "io",
        }
    }

    /// The caller-supplied path the failure refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::OutsideRepository { path, .. }
            | Self::NotFound { path, .. }
            | Self::WrongType { path, .. }
            | Self::DecodeFailure { path }
            | Self::Io { path, .. } => path,
        }
    }
}
