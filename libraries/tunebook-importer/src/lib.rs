//! Tunebook Corpus Importer
//!
//! This crate loads a corpus of ABC notation files into the tune store.
//!
//! # Features
//!
//! - Directory scanning with the numbered-book convention (a file belongs to
//!   book N when its immediate parent directory is named `N`)
//! - Fail-soft file reads: unreadable files are logged and skipped, never
//!   aborting the batch
//! - Deterministic aggregate order (files sorted by path before parsing)
//! - Bulk insert into `SQLite` with an optional replace mode
//!
//! # Architecture
//!
//! - `scanner`: Filesystem scanning for book directories and ABC files
//! - `loader`: Reading and parsing the discovered files into tune records
//! - `importer`: Orchestration of the scan → parse → store pipeline

mod error;

// Core modules
pub mod importer;
pub mod loader;
pub mod scanner;

pub use error::ImportError;
pub use importer::{CorpusImporter, ImportSummary};
pub use loader::{load_corpus, CorpusLoad};
pub use scanner::{BookFile, BookScanner};

/// Re-export commonly used result type
pub type Result<T> = std::result::Result<T, ImportError>;
