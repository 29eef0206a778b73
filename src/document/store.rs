//! Document persistence abstraction for dependency injection.
//!
//! Commands read and write the project descriptor through [`DocumentStore`]
//! so their logic can be unit-tested without touching the filesystem.
use std::path::PathBuf;

use super::Document;
use crate::error::DocumentError;

/// Loads and saves the project descriptor.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore {
    /// Human-readable location of the document (used in log messages).
    fn location(&self) -> String;

    /// Read and parse the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or parsed.
    fn load(&self) -> Result<Document, DocumentError>;

    /// Serialize and persist the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or written.
    fn save(&self, doc: &Document) -> Result<(), DocumentError>;
}

/// Production [`DocumentStore`] backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    path: PathBuf,
}

impl FileDocumentStore {
    /// Store reading and writing the document at `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DocumentStore for FileDocumentStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Document, DocumentError> {
        super::load(&self.path)
    }

    fn save(&self, doc: &Document) -> Result<(), DocumentError> {
        super::save(&self.path, doc)
    }
}
