//! Error taxonomy shared by the domain, the stores and the console layer.
//!
//! Validation failures come in two kinds so callers can react differently:
//! a [`ValidationError::KindMismatch`] means the value had the wrong primitive
//! kind (the input itself is unusable), while a
//! [`ValidationError::RangeOrEmptiness`] means the kind was right but the value
//! sits outside the field's domain.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Wrong primitive kind, e.g. a boolean where an integer is expected.
    #[error("{field} must be {expected}")]
    KindMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// Right kind, but empty after trimming or outside the allowed range.
    #[error("{message}")]
    RangeOrEmptiness {
        field: &'static str,
        message: String,
    },

    /// A dynamic setter named a field the entity does not have.
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

impl ValidationError {
    pub fn kind(field: &'static str, expected: &'static str) -> Self {
        Self::KindMismatch { field, expected }
    }

    pub fn range(field: &'static str, message: impl Into<String>) -> Self {
        Self::RangeOrEmptiness {
            field,
            message: message.into(),
        }
    }

    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, Self::KindMismatch { .. })
    }

    pub fn is_range_or_emptiness(&self) -> bool {
        matches!(self, Self::RangeOrEmptiness { .. })
    }

    /// Name of the offending field, when known.
    pub fn field(&self) -> &str {
        match self {
            Self::KindMismatch { field, .. } | Self::RangeOrEmptiness { field, .. } => *field,
            Self::UnknownField(name) => name.as_str(),
        }
    }
}

/// Errors raised by aggregates and registries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced child is not a current member of its aggregate.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A keyed insert collided with an existing key.
    #[error("{entity} {key} already exists")]
    DuplicateKey { entity: &'static str, key: String },

    /// Two records share a key but disagree on their other fields.
    #[error("{entity} {key} is already enrolled with different details")]
    Conflict { entity: &'static str, key: String },
}

impl DomainError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn duplicate(entity: &'static str, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            entity,
            key: key.into(),
        }
    }

    pub fn conflict(entity: &'static str, key: impl Into<String>) -> Self {
        Self::Conflict {
            entity,
            key: key.into(),
        }
    }
}

/// Failures of a whole-file save, load or export.
///
/// A failed write leaves the target in an unspecified state; none of these
/// are retried.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Record `index` (1-based) was structurally readable but rejected.
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: DomainError,
    },
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn record(index: usize, source: impl Into<DomainError>) -> Self {
        Self::Record {
            index,
            source: source.into(),
        }
    }

    /// The validation failure behind a rejected record, if that is the cause.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Record {
                source: DomainError::Validation(err),
                ..
            } => Some(err),
            _ => None,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
