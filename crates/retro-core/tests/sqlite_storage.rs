use std::sync::Arc;
use std::thread;

use rusqlite::Connection;
use tempfile::tempdir;

use retro_core::service::{EntryService, NewEntryPayload};
use retro_core::storage::{NewEntry, SqliteStorage, StorageEngine};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn new_payload(date: &str, plus: &[&str], minus: &[&str], next: &[&str]) -> NewEntryPayload {
    NewEntryPayload {
        date: date.to_string(),
        plus: strings(plus),
        minus: strings(minus),
        next: strings(next),
    }
}

fn item_row_count(db_path: &std::path::Path, entry_id: i64) -> i64 {
    let conn = Connection::open(db_path).expect("open should succeed");
    conn.query_row(
        "SELECT COUNT(*) FROM entry_items WHERE entry_id = ?",
        [entry_id],
        |row| row.get(0),
    )
    .expect("count should succeed")
}

#[test]
fn test_blank_items_are_stripped_before_persistence() {
    let storage = SqliteStorage::open_in_memory().expect("open should succeed");
    let service = EntryService::new(storage);

    let created = service
        .create(new_payload("2026-08-26", &["a", "", " "], &[], &["b"]))
        .expect("create should succeed");

    let listed = service.list().expect("list should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].plus, strings(&["a"]));
    assert!(listed[0].minus.is_empty());
    assert_eq!(listed[0].next, strings(&["b"]));
    assert_eq!(listed[0].id, created.id);
}

#[test]
fn test_list_returns_newest_first() {
    let storage = SqliteStorage::open_in_memory().expect("open should succeed");

    let e1 = storage
        .create_entry(&NewEntry::new("2026-08-25"))
        .expect("create should succeed");
    let e2 = storage
        .create_entry(&NewEntry::new("2026-08-26"))
        .expect("create should succeed");

    let listed = storage.list_entries().expect("list should succeed");
    let ids: Vec<i64> = listed.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![e2.id, e1.id]);
}

#[test]
fn test_delete_cascades_to_item_rows() {
    let dir = tempdir().expect("tempdir should be available");
    let db_path = dir.path().join("retro.sqlite");
    let storage = SqliteStorage::open(&db_path).expect("open should succeed");

    let entry = storage
        .create_entry(
            &NewEntry::new("2026-08-26")
                .with_plus(strings(&["p"]))
                .with_minus(strings(&["m"]))
                .with_next(strings(&["n"])),
        )
        .expect("create should succeed");
    assert_eq!(item_row_count(&db_path, entry.id), 3);

    storage.delete_entry(entry.id).expect("delete should succeed");

    assert_eq!(item_row_count(&db_path, entry.id), 0);
    assert!(storage.list_entries().expect("list should succeed").is_empty());
}

#[test]
fn test_delete_missing_id_is_noop() {
    let storage = SqliteStorage::open_in_memory().expect("open should succeed");

    let entry = storage
        .create_entry(&NewEntry::new("2026-08-26").with_plus(strings(&["a"])))
        .expect("create should succeed");

    storage.delete_entry(entry.id + 100).expect("delete should succeed");

    let listed = storage.list_entries().expect("list should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, entry.id);
}

#[test]
fn test_create_round_trips_through_list() {
    let storage = SqliteStorage::open_in_memory().expect("open should succeed");

    let created = storage
        .create_entry(
            &NewEntry::new("2026-08-26")
                .with_plus(strings(&["went well", "also fine"]))
                .with_next(strings(&["try next"])),
        )
        .expect("create should succeed");

    let listed = storage.list_entries().expect("list should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
}

#[test]
fn test_create_is_atomic_on_mid_insert_failure() {
    let dir = tempdir().expect("tempdir should be available");
    let db_path = dir.path().join("retro.sqlite");
    let storage = SqliteStorage::open(&db_path).expect("open should succeed");

    // The empty second item trips the schema's content check after the
    // entry row and the first item row have been written inside the
    // transaction. Nothing may survive the rollback.
    let result = storage.create_entry(
        &NewEntry::new("2026-08-26").with_plus(strings(&["ok", ""])),
    );
    assert!(result.is_err());

    assert!(storage.list_entries().expect("list should succeed").is_empty());

    let conn = Connection::open(&db_path).expect("open should succeed");
    let orphans: i64 = conn
        .query_row("SELECT COUNT(*) FROM entry_items", [], |row| row.get(0))
        .expect("count should succeed");
    assert_eq!(orphans, 0);
}

#[test]
fn test_concurrent_creates_get_distinct_ids() {
    let dir = tempdir().expect("tempdir should be available");
    let db_path = dir.path().join("retro.sqlite");
    let storage = Arc::new(SqliteStorage::open(&db_path).expect("open should succeed"));

    let handles: Vec<_> = (0..2)
        .map(|n| {
            let storage = Arc::clone(&storage);
            thread::spawn(move || {
                storage
                    .create_entry(
                        &NewEntry::new(format!("2026-08-2{}", n + 5))
                            .with_plus(strings(&["item"])),
                    )
                    .expect("create should succeed")
            })
        })
        .collect();

    let created: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread should not panic"))
        .collect();
    assert_ne!(created[0].id, created[1].id);

    let listed = storage.list_entries().expect("list should succeed");
    assert_eq!(listed.len(), 2);
    for entry in &created {
        assert!(listed.iter().any(|e| e.id == entry.id));
    }
}

#[test]
fn test_reopen_preserves_entries() {
    let dir = tempdir().expect("tempdir should be available");
    let db_path = dir.path().join("retro.sqlite");

    let created = {
        let storage = SqliteStorage::open(&db_path).expect("open should succeed");
        storage
            .create_entry(&NewEntry::new("2026-08-26").with_minus(strings(&["slow builds"])))
            .expect("create should succeed")
    };

    let storage = SqliteStorage::open(&db_path).expect("reopen should succeed");
    let listed = storage.list_entries().expect("list should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
}
