//! End-to-end importer tests: corpus on disk → parsed → stored → queried

use sqlx::SqlitePool;
use std::fs;
use tempfile::TempDir;
use tunebook_importer::CorpusImporter;

async fn test_pool(temp: &TempDir) -> SqlitePool {
    let db_url = format!("sqlite://{}", temp.path().join("test.db").display());
    let pool = tunebook_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    tunebook_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

fn write_corpus(base: &std::path::Path) {
    fs::create_dir(base.join("7")).unwrap();
    fs::write(
        base.join("7").join("session.abc"),
        "X:1\n\
         T:The Blarney Pilgrim\n\
         R:jig\n\
         M:6/8\n\
         L:1/8\n\
         K:Dmaj\n\
         abc body line 1\n\
         abc body line 2\n\
         X:2\n\
         T:Second Tune\n\
         K:Gmaj\n\
         more body\n",
    )
    .unwrap();

    fs::create_dir(base.join("3")).unwrap();
    fs::write(base.join("3").join("reels.abc"), "X:5\nT:Some Reel\nR:reel\n").unwrap();

    // Non-numeric directory: contributes nothing
    fs::create_dir(base.join("drafts")).unwrap();
    fs::write(base.join("drafts").join("wip.abc"), "X:9\nT:Ignored\n").unwrap();
}

#[tokio::test]
async fn import_directory_loads_whole_corpus() {
    let db_dir = TempDir::new().unwrap();
    let corpus = TempDir::new().unwrap();
    write_corpus(corpus.path());

    let pool = test_pool(&db_dir).await;
    let summary = CorpusImporter::new(pool.clone())
        .import_directory(corpus.path())
        .await
        .expect("Import failed");

    assert_eq!(summary.files_loaded, 2);
    assert_eq!(summary.tunes_imported, 3);
    assert!(summary.skipped.is_empty());

    let book_7 = tunebook_storage::tunes::get_by_book(&pool, 7).await.unwrap();
    assert_eq!(book_7.len(), 2);
    assert_eq!(book_7[0].tune_index, "1");
    assert_eq!(book_7[0].title.as_deref(), Some("The Blarney Pilgrim"));
    assert_eq!(book_7[0].tune_type.as_deref(), Some("jig"));
    assert_eq!(book_7[0].meter.as_deref(), Some("6/8"));
    assert_eq!(book_7[0].unit_length.as_deref(), Some("1/8"));
    assert_eq!(book_7[0].key_signature.as_deref(), Some("Dmaj"));
    assert!(book_7[0].raw_text.ends_with("abc body line 2"));
    assert_eq!(book_7[1].title.as_deref(), Some("Second Tune"));

    // Nothing from the non-numeric directory
    let all = tunebook_storage::tunes::get_all(&pool).await.unwrap();
    assert!(all.iter().all(|t| t.title.as_deref() != Some("Ignored")));

    let counts = tunebook_storage::tunes::count_by_book(&pool).await.unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].book_number, 3);
    assert_eq!(counts[1].book_number, 7);
}

#[tokio::test]
async fn reimport_replaces_by_default() {
    let db_dir = TempDir::new().unwrap();
    let corpus = TempDir::new().unwrap();
    write_corpus(corpus.path());

    let pool = test_pool(&db_dir).await;
    let importer = CorpusImporter::new(pool.clone());

    importer.import_directory(corpus.path()).await.unwrap();
    let summary = importer.import_directory(corpus.path()).await.unwrap();

    assert_eq!(summary.rows_cleared, 3);
    let all = tunebook_storage::tunes::get_all(&pool).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn append_mode_accumulates() {
    let db_dir = TempDir::new().unwrap();
    let corpus = TempDir::new().unwrap();
    write_corpus(corpus.path());

    let pool = test_pool(&db_dir).await;
    let importer = CorpusImporter::new(pool.clone()).replace(false);

    importer.import_directory(corpus.path()).await.unwrap();
    let summary = importer.import_directory(corpus.path()).await.unwrap();

    assert_eq!(summary.rows_cleared, 0);
    let all = tunebook_storage::tunes::get_all(&pool).await.unwrap();
    assert_eq!(all.len(), 6);
}

#[tokio::test]
async fn missing_root_aborts_with_error() {
    let db_dir = TempDir::new().unwrap();
    let pool = test_pool(&db_dir).await;

    let result = CorpusImporter::new(pool)
        .import_directory(std::path::Path::new("/no/such/corpus"))
        .await;

    assert!(result.is_err());
}
