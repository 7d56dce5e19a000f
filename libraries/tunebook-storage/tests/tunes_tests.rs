//! Integration tests for the tunes vertical slice
//!
//! Covers bulk insert ordering, the equality/substring filters, the
//! per-book count aggregation, and replace-mode clearing.


use test_helpers::*;
use tunebook_core::Tune;

#[tokio::test]
async fn insert_all_preserves_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let tunes = vec![
        make_tune(1, "1", "First", "jig", "D"),
        make_tune(1, "2", "Second", "reel", "G"),
        make_tune(2, "1", "Third", "hornpipe", "A"),
    ];

    let inserted = tunebook_storage::tunes::insert_all(pool, &tunes)
        .await
        .expect("Failed to insert tunes");
    assert_eq!(inserted, 3);

    let stored = tunebook_storage::tunes::get_all(pool)
        .await
        .expect("Failed to get tunes");
    assert_eq!(stored, tunes);
}

#[tokio::test]
async fn insert_all_with_empty_corpus_is_a_noop() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let inserted = tunebook_storage::tunes::insert_all(pool, &[])
        .await
        .expect("Failed to insert empty corpus");
    assert_eq!(inserted, 0);

    let stored = tunebook_storage::tunes::get_all(pool).await.unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn unset_header_fields_round_trip_as_none() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let mut tune = Tune::new(4, "9");
    tune.raw_text = "X:9\nbody only".to_string();

    tunebook_storage::tunes::insert_all(pool, std::slice::from_ref(&tune))
        .await
        .unwrap();

    let stored = tunebook_storage::tunes::get_all(pool).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].title.is_none());
    assert!(stored[0].meter.is_none());
    assert!(stored[0].unit_length.is_none());
    assert_eq!(stored[0].raw_text, "X:9\nbody only");
}

#[tokio::test]
async fn get_by_book_filters_on_equality() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let tunes = vec![
        make_tune(12, "1", "A", "jig", "D"),
        make_tune(3, "1", "B", "reel", "G"),
        make_tune(12, "2", "C", "slide", "Em"),
    ];
    tunebook_storage::tunes::insert_all(pool, &tunes).await.unwrap();

    let book_12 = tunebook_storage::tunes::get_by_book(pool, 12).await.unwrap();
    assert_eq!(book_12.len(), 2);
    assert!(book_12.iter().all(|t| t.book_number == 12));

    let book_99 = tunebook_storage::tunes::get_by_book(pool, 99).await.unwrap();
    assert!(book_99.is_empty());
}

#[tokio::test]
async fn search_title_is_case_insensitive_substring() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let tunes = vec![
        make_tune(1, "1", "The Blarney Pilgrim", "jig", "Dmaj"),
        make_tune(1, "2", "Out on the Ocean", "jig", "Gmaj"),
    ];
    tunebook_storage::tunes::insert_all(pool, &tunes).await.unwrap();

    let hits = tunebook_storage::tunes::search_title(pool, "blarney").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title.as_deref(), Some("The Blarney Pilgrim"));

    let hits = tunebook_storage::tunes::search_title(pool, "THE").await.unwrap();
    assert_eq!(hits.len(), 2);

    let hits = tunebook_storage::tunes::search_title(pool, "polka").await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn search_type_and_key_match_substrings() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let tunes = vec![
        make_tune(1, "1", "A", "single jig", "Dmaj"),
        make_tune(1, "2", "B", "reel", "Ador"),
    ];
    tunebook_storage::tunes::insert_all(pool, &tunes).await.unwrap();

    let jigs = tunebook_storage::tunes::search_type(pool, "jig").await.unwrap();
    assert_eq!(jigs.len(), 1);
    assert_eq!(jigs[0].tune_type.as_deref(), Some("single jig"));

    let d_tunes = tunebook_storage::tunes::search_key(pool, "dor").await.unwrap();
    assert_eq!(d_tunes.len(), 1);
    assert_eq!(d_tunes[0].key_signature.as_deref(), Some("Ador"));
}

#[tokio::test]
async fn count_by_book_aggregates_and_orders() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let tunes = vec![
        make_tune(12, "1", "A", "jig", "D"),
        make_tune(3, "1", "B", "reel", "G"),
        make_tune(12, "2", "C", "jig", "A"),
        make_tune(12, "3", "D", "slide", "E"),
    ];
    tunebook_storage::tunes::insert_all(pool, &tunes).await.unwrap();

    let counts = tunebook_storage::tunes::count_by_book(pool).await.unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].book_number, 3);
    assert_eq!(counts[0].tunes, 1);
    assert_eq!(counts[1].book_number, 12);
    assert_eq!(counts[1].tunes, 3);
}

#[tokio::test]
async fn clear_removes_all_rows() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let tunes = vec![
        make_tune(1, "1", "A", "jig", "D"),
        make_tune(1, "2", "B", "reel", "G"),
    ];
    tunebook_storage::tunes::insert_all(pool, &tunes).await.unwrap();

    let removed = tunebook_storage::tunes::clear(pool).await.unwrap();
    assert_eq!(removed, 2);

    let stored = tunebook_storage::tunes::get_all(pool).await.unwrap();
    assert!(stored.is_empty());

    // Reload after clear must not duplicate anything
    tunebook_storage::tunes::insert_all(pool, &tunes).await.unwrap();
    let stored = tunebook_storage::tunes::get_all(pool).await.unwrap();
    assert_eq!(stored.len(), 2);
}
