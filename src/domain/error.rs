//! Error taxonomy for config reading and record population.

use std::path::PathBuf;

use crate::domain::field::FieldKind;

/// Every failure the crate can report. Population is fail-fast, so a call
/// returns exactly one of these describing the first problem found.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid path {path:?}")]
    InvalidPath { path: PathBuf },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing key in config [{key}]")]
    MissingKey { key: String },

    #[error("cannot convert [{field}] value {value:?} to {kind}: {source}")]
    TypeConversion {
        field: String,
        kind: FieldKind,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("unsupported type {type_name} for field [{field}]")]
    UnsupportedType { field: String, type_name: String },
}

impl ConfigError {
    /// The key or field this error is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::MissingKey { key } => Some(key),
            ConfigError::TypeConversion { field, .. }
            | ConfigError::UnsupportedType { field, .. } => Some(field),
            ConfigError::InvalidPath { .. } | ConfigError::Io { .. } => None,
        }
    }
}

impl From<&ConfigError> for std::process::ExitCode {
    fn from(err: &ConfigError) -> Self {
        let code: u8 = match err {
            ConfigError::Io { .. } => 1,
            ConfigError::InvalidPath { .. } => 2,
            ConfigError::MissingKey { .. } => 3,
            ConfigError::TypeConversion { .. } | ConfigError::UnsupportedType { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
