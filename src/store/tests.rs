#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::Category;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: "1705400000000".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            category: Category::Labor,
            description: "Framing crew, day 1".into(),
            amount: dec!(800),
            vendor: "Crew Co".into(),
            project: "Riverside Deck".into(),
        },
        Expense {
            id: "1705312800000".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            category: Category::Materials,
            description: "Lumber \"premium\" grade".into(),
            amount: dec!(1200.50),
            vendor: "ABC Supply".into(),
            project: "Riverside Deck".into(),
        },
    ]
}

// ── Slot primitives ───────────────────────────────────────────

#[test]
fn test_read_missing_slot() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.read_slot(LEDGER_SLOT).unwrap().is_none());
}

#[test]
fn test_write_slot_overwrites() {
    let db = Database::open_in_memory().unwrap();
    db.write_slot("k", "first").unwrap();
    db.write_slot("k", "second").unwrap();
    assert_eq!(db.read_slot("k").unwrap().as_deref(), Some("second"));
}

#[test]
fn test_slots_are_independent() {
    let db = Database::open_in_memory().unwrap();
    db.write_slot("a", "1").unwrap();
    db.write_slot("b", "2").unwrap();
    assert_eq!(db.read_slot("a").unwrap().as_deref(), Some("1"));
    assert_eq!(db.read_slot("b").unwrap().as_deref(), Some("2"));
}

// ── Ledger load/persist ───────────────────────────────────────

#[test]
fn test_load_empty_database() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.load().is_empty());
}

#[test]
fn test_persist_then_load_roundtrip() {
    let mut db = Database::open_in_memory().unwrap();
    let expenses = sample_expenses();
    db.persist(&expenses).unwrap();
    assert_eq!(db.load(), expenses);
}

#[test]
fn test_persist_replaces_whole_collection() {
    let mut db = Database::open_in_memory().unwrap();
    db.persist(&sample_expenses()).unwrap();
    db.persist(&sample_expenses()[1..]).unwrap();
    let loaded = db.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "1705312800000");

    db.persist(&[]).unwrap();
    assert!(db.load().is_empty());
    assert_eq!(db.read_slot(LEDGER_SLOT).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_persisted_slot_is_json_array() {
    let mut db = Database::open_in_memory().unwrap();
    db.persist(&sample_expenses()).unwrap();
    let raw = db.read_slot(LEDGER_SLOT).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["category"], "labor");
    assert_eq!(arr[1]["vendor"], "ABC Supply");
}

#[test]
fn test_corrupt_slot_loads_as_empty() {
    let db = Database::open_in_memory().unwrap();
    db.write_slot(LEDGER_SLOT, "{not json").unwrap();
    assert!(db.load().is_empty());

    db.write_slot(LEDGER_SLOT, r#"{"id":"1"}"#).unwrap();
    assert!(db.load().is_empty());

    db.write_slot(LEDGER_SLOT, "").unwrap();
    assert!(db.load().is_empty());
}

#[test]
fn test_load_browser_export() {
    let db = Database::open_in_memory().unwrap();
    db.write_slot(
        LEDGER_SLOT,
        r#"[{"id":"1700000000000","date":"2023-11-14","category":"permits",
            "description":"Building permit","amount":350.25,"vendor":"City Hall","project":"Barn"}]"#,
    )
    .unwrap();
    let loaded = db.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].category, Category::Permits);
    assert_eq!(loaded[0].amount, dec!(350.25));
}

#[test]
fn test_roundtrip_at_largest_amount() {
    let mut db = Database::open_in_memory().unwrap();
    let mut expenses = sample_expenses();
    expenses[0].amount = dec!(999999999999.99);
    expenses[1].amount = dec!(90071992547409.93);
    db.persist(&expenses).unwrap();
    assert_eq!(db.load(), expenses);
}

#[test]
fn test_file_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitecost.db");

    let mut db = Database::open(&path).unwrap();
    db.persist(&sample_expenses()).unwrap();
    drop(db);

    let reopened = Database::open(&path).unwrap();
    assert_eq!(reopened.load(), sample_expenses());
}

#[test]
fn test_open_bad_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("sitecost.db");
    assert!(Database::open(&path).is_err());
}

// ── MemoryStore ───────────────────────────────────────────────

#[test]
fn test_memory_store_roundtrip() {
    let mut store = MemoryStore::default();
    assert!(store.load().is_empty());
    store.persist(&sample_expenses()).unwrap();
    assert_eq!(store.writes, 1);
    assert_eq!(store.load(), sample_expenses());
}

#[test]
fn test_memory_store_corrupt_slot() {
    let store = MemoryStore::with_slot("null");
    assert!(store.load().is_empty());
}

#[test]
fn test_memory_store_failing_writes() {
    let mut store = MemoryStore {
        fail_writes: true,
        ..MemoryStore::default()
    };
    assert!(store.persist(&sample_expenses()).is_err());
    assert!(store.slot.is_none());
}
