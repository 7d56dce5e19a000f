//! File scanning for ABC corpora
//!
//! The corpus layout encodes provenance in directory names: a file belongs
//! to book N exactly when its immediate parent directory is named with the
//! decimal digits of N. Files under non-numeric directories are ignored,
//! though traversal continues beneath them so a deeper numeric directory
//! re-qualifies its own files.

use crate::{ImportError, Result};
use std::path::{Path, PathBuf};
use tunebook_abc::ABC_EXTENSION;
use walkdir::WalkDir;

/// One discovered corpus file and the book it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFile {
    /// Path of the ABC file
    pub path: PathBuf,

    /// Book number parsed from the immediate parent directory name
    pub book_number: i64,
}

/// Scanner for ABC files in numbered book directories
pub struct BookScanner {
    /// Whether to follow symbolic links
    follow_links: bool,

    /// Maximum depth to traverse
    max_depth: Option<usize>,
}

impl Default for BookScanner {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: None,
        }
    }
}

impl BookScanner {
    /// Create a new book scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum directory depth to traverse
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Scan a corpus root for ABC files in numbered book directories.
    ///
    /// Results are sorted by path so the aggregate output order is stable
    /// regardless of filesystem traversal order.
    pub fn scan_directory(&self, path: &Path) -> Result<Vec<BookFile>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        if !path.is_dir() {
            return Err(ImportError::InvalidPath(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        let mut book_files = Vec::new();
        let mut walker = WalkDir::new(path).follow_links(self.follow_links);

        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();

            if path.is_dir() || !is_abc_file(path) {
                continue;
            }

            if let Some(book_number) = book_number_for(path) {
                book_files.push(BookFile {
                    path: path.to_path_buf(),
                    book_number,
                });
            } else {
                tracing::debug!("no numeric book directory for {}", path.display());
            }
        }

        book_files.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(book_files)
    }
}

/// Check if a file carries the ABC extension
pub fn is_abc_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(ABC_EXTENSION))
        .unwrap_or(false)
}

/// Book number of a file: its immediate parent directory name, when that
/// name is composed entirely of decimal digits
pub fn book_number_for(path: &Path) -> Option<i64> {
    let name = path.parent()?.file_name()?.to_str()?;
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}
