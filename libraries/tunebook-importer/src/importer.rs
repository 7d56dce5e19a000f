//! Main importer orchestration - scan, parse, and store a corpus

use crate::{loader, Result};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Summary of one corpus import
#[derive(Debug, Clone)]
pub struct ImportSummary {
    /// Files read and parsed
    pub files_loaded: usize,

    /// Tunes written to the store
    pub tunes_imported: u64,

    /// Rows removed before the load (replace mode)
    pub rows_cleared: u64,

    /// Files that could not be read, with the reason
    pub skipped: Vec<(PathBuf, String)>,

    /// Wall-clock duration of the import
    pub duration_seconds: u64,
}

/// Corpus importer orchestrator
pub struct CorpusImporter {
    pool: SqlitePool,
    replace: bool,
}

impl CorpusImporter {
    /// Create a new corpus importer
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            replace: true,
        }
    }

    /// Set whether the import replaces the stored corpus (default) or
    /// appends to it
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    /// Import every ABC file under `root` into the tune store.
    ///
    /// Unreadable files are skipped and reported in the summary; only a
    /// missing root or a database failure aborts the import.
    pub async fn import_directory(&self, root: &Path) -> Result<ImportSummary> {
        let start_time = Instant::now();

        let load = loader::load_corpus(root)?;

        let rows_cleared = if self.replace {
            tunebook_storage::tunes::clear(&self.pool).await?
        } else {
            0
        };

        let tunes_imported = tunebook_storage::tunes::insert_all(&self.pool, &load.tunes).await?;

        tracing::info!(
            files = load.files_loaded,
            tunes = tunes_imported,
            skipped = load.skipped.len(),
            "corpus import finished"
        );

        Ok(ImportSummary {
            files_loaded: load.files_loaded,
            tunes_imported,
            rows_cleared,
            skipped: load.skipped,
            duration_seconds: start_time.elapsed().as_secs(),
        })
    }
}
