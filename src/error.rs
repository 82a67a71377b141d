//! Error types for ABI generation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// The description (or config) did not deserialize into the expected shape.
    #[error("malformed description at JSON path {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("type tag `{tag}` is used by both {first} and {second}")]
    DuplicateTypeTag { tag: String, first: String, second: String },

    #[error("discriminant `{discriminant}` is rendered for both {first} and {second}")]
    DiscriminantCollision { discriminant: String, first: String, second: String },

    #[error("extension name `{0}` is declared more than once")]
    DuplicateExtension(String),

    #[error("{interface}: revision {version} has type tag `{found}`, expected `{expected}`")]
    ChainTagMismatch {
        interface: String,
        version: String,
        expected: String,
        found: String,
    },

    #[error("{interface}: revision {version} appears more than once in its chain")]
    DuplicateRevision { interface: String, version: String },

    #[error("{interface} {version}: entry `{entry}` is declared more than once")]
    DuplicateEntry { interface: String, version: String, entry: String },

    /// Two definitions in the emitted C would share one identifier.
    #[error("C symbol `{symbol}` is defined by both {first} and {second}")]
    SymbolCollision { symbol: String, first: String, second: String },
}

pub type Result<T> = std::result::Result<T, GenError>;
