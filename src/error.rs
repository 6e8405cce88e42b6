//! Error types for layered configuration loading.

use crate::schema::Kind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a configuration load.
///
/// Every variant is fatal: the first failure aborts the whole load and no
/// partial result is returned. Callers decide whether to exit.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A source's backing store could not be read.
    #[error("Config source unavailable: {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A document parsed, but its content does not fit the target shape.
    #[error("Malformed config document: {0}")]
    MalformedDocument(String),

    /// Command-line arguments could not be parsed.
    #[error("Malformed argument: {0}")]
    MalformedArgument(String),

    /// A raw value could not be converted to its field's native kind.
    #[error("Cannot coerce {value:?} into field '{field}': expected {kind}")]
    Coercion {
        field: String,
        value: String,
        kind: Kind,
    },
}
