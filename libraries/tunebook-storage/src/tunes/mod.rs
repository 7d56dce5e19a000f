//! Tunes vertical slice: bulk insert and the filter queries the CLI exposes.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tunebook_core::{error::Result, BookCount, Tune};

const TUNE_COLUMNS: &str =
    "book_number, tune_index, title, tune_type, meter, unit_length, key_signature, raw_text";

fn tune_from_row(row: &SqliteRow) -> Tune {
    Tune {
        book_number: row.get("book_number"),
        tune_index: row.get("tune_index"),
        title: row.get("title"),
        tune_type: row.get("tune_type"),
        meter: row.get("meter"),
        unit_length: row.get("unit_length"),
        key_signature: row.get("key_signature"),
        raw_text: row.get("raw_text"),
    }
}

/// Insert a parsed corpus in one transaction, preserving input order.
///
/// Returns the number of rows inserted.
pub async fn insert_all(pool: &SqlitePool, tunes: &[Tune]) -> Result<u64> {
    let mut tx = pool.begin().await?;

    for tune in tunes {
        sqlx::query(
            "INSERT INTO tunes (book_number, tune_index, title, tune_type, meter, unit_length, key_signature, raw_text)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(tune.book_number)
        .bind(&tune.tune_index)
        .bind(&tune.title)
        .bind(&tune.tune_type)
        .bind(&tune.meter)
        .bind(&tune.unit_length)
        .bind(&tune.key_signature)
        .bind(&tune.raw_text)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(rows = tunes.len(), "inserted tunes");
    Ok(tunes.len() as u64)
}

/// Get all stored tunes in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Tune>> {
    let rows = sqlx::query(&format!(
        "SELECT {TUNE_COLUMNS} FROM tunes ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(tune_from_row).collect())
}

/// Get all tunes of one book
pub async fn get_by_book(pool: &SqlitePool, book_number: i64) -> Result<Vec<Tune>> {
    let rows = sqlx::query(&format!(
        "SELECT {TUNE_COLUMNS} FROM tunes WHERE book_number = ? ORDER BY id"
    ))
    .bind(book_number)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(tune_from_row).collect())
}

/// Search tunes whose title contains `query` (case-insensitive)
pub async fn search_title(pool: &SqlitePool, query: &str) -> Result<Vec<Tune>> {
    search_column(pool, "title", query).await
}

/// Search tunes whose rhythm/type contains `query` (case-insensitive)
pub async fn search_type(pool: &SqlitePool, query: &str) -> Result<Vec<Tune>> {
    search_column(pool, "tune_type", query).await
}

/// Search tunes whose key signature contains `query` (case-insensitive)
pub async fn search_key(pool: &SqlitePool, query: &str) -> Result<Vec<Tune>> {
    search_column(pool, "key_signature", query).await
}

/// Substring filter on one of the searchable columns.
///
/// SQLite's LIKE is case-insensitive for ASCII, which gives the
/// "contains, ignoring case" semantics the query surface promises.
async fn search_column(pool: &SqlitePool, column: &str, query: &str) -> Result<Vec<Tune>> {
    let search_pattern = format!("%{}%", query);

    // `column` comes from the fixed set above, never from user input.
    let rows = sqlx::query(&format!(
        "SELECT {TUNE_COLUMNS} FROM tunes WHERE {column} LIKE ? ORDER BY id"
    ))
    .bind(&search_pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(tune_from_row).collect())
}

/// Count stored tunes per book
pub async fn count_by_book(pool: &SqlitePool) -> Result<Vec<BookCount>> {
    let rows = sqlx::query(
        "SELECT book_number, COUNT(*) AS tunes FROM tunes GROUP BY book_number ORDER BY book_number",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| BookCount {
            book_number: row.get("book_number"),
            tunes: row.get("tunes"),
        })
        .collect())
}

/// Delete all stored tunes, returning how many were removed.
///
/// Used by replace-mode imports so a reload does not duplicate the corpus.
pub async fn clear(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM tunes").execute(pool).await?;
    Ok(result.rows_affected())
}
