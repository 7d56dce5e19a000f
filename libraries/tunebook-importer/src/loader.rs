//! Corpus loading: read the discovered files and parse them into tunes
//!
//! Reads are fail-soft. An unreadable file is logged with its path and
//! counted as skipped; the rest of the corpus still loads (partial results
//! beat an aborted batch).

use crate::scanner::BookScanner;
use crate::Result;
use std::path::{Path, PathBuf};
use tunebook_core::Tune;

/// Result of loading one corpus root
#[derive(Debug, Default, Clone)]
pub struct CorpusLoad {
    /// All parsed tunes, in file-then-line order
    pub tunes: Vec<Tune>,

    /// Files that were read and parsed
    pub files_loaded: usize,

    /// Files that could not be read, with the reason
    pub skipped: Vec<(PathBuf, String)>,
}

/// Load every ABC file under `root` into tune records.
///
/// Only files inside numbered book directories qualify; each file is parsed
/// with the book number taken from its directory name. Returns an error only
/// when the root itself is missing or not a directory.
pub fn load_corpus(root: &Path) -> Result<CorpusLoad> {
    let files = BookScanner::new().scan_directory(root)?;

    let mut load = CorpusLoad::default();

    for file in files {
        match std::fs::read_to_string(&file.path) {
            Ok(text) => {
                let mut tunes = tunebook_abc::parse_text(&text, file.book_number);
                tracing::debug!(
                    path = %file.path.display(),
                    book_number = file.book_number,
                    tunes = tunes.len(),
                    "loaded corpus file"
                );
                load.tunes.append(&mut tunes);
                load.files_loaded += 1;
            }
            Err(e) => {
                tracing::warn!("skipping unreadable file {}: {}", file.path.display(), e);
                load.skipped.push((file.path, e.to_string()));
            }
        }
    }

    Ok(load)
}
