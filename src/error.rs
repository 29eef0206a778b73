//! Domain-specific error types for the resource reconciler.
//!
//! Internal modules return typed errors ([`DocumentError`], [`ManifestError`],
//! [`ConfigError`]) while command handlers at the CLI boundary convert them
//! to [`anyhow::Error`] via the standard `?` operator.
//!
//! The reconciliation engine itself has no error type: every
//! "cannot proceed for this resource" condition is a skip, not an error.
//!
//! # Error hierarchy
//!
//! ```text
//! DocumentError: reading, parsing and writing config.xml
//! ManifestError: loading descriptor manifests
//! ConfigError  : loading resconf.toml
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors that arise while reading or writing the project descriptor.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document file could not be read or written.
    #[error("IO error on document {path}: {source}")]
    Io {
        /// Path of the document.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The XML reader rejected the input.
    #[error("Invalid XML at byte {position}: {message}")]
    Parse {
        /// Byte offset reported by the reader.
        position: u64,
        /// Reader error message.
        message: String,
    },

    /// The XML is well-formed token-wise but not a single-rooted document.
    #[error("Malformed document: {0}")]
    Malformed(String),

    /// Serializing the tree failed.
    #[error("Failed to write document: {0}")]
    Write(String),
}

/// Errors that arise while loading a resource descriptor manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("IO error reading manifest {path}: {source}")]
    Io {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest is not valid JSON or has an unexpected shape.
    #[error("Invalid manifest {path}: {source}")]
    Json {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Errors that arise from loading project settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading a settings file.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has unknown values.
    #[error("Invalid TOML in {path}: {source}")]
    Parse {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}
