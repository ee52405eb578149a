use std::fs;
use std::path::Path;

use tempfile::tempdir;
use tracker_core::{
    domain::{Category, Transaction, TransactionKind},
    store::{EventStore, JsonStore},
};

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let mut store = JsonStore::open(Some(temp.path().to_path_buf())).unwrap();

    store
        .put_transaction(Transaction::new(
            42.0,
            TransactionKind::Expense,
            Category::Food,
            0,
        ))
        .expect("initial save");

    let path = temp.path().join("transactions.json");
    let original = fs::read_to_string(&path).expect("read original file");

    // Create a directory that collides with the temp file name to force
    // File::create to fail.
    let tmp_path = tmp_path_for(&path);
    fs::create_dir_all(&tmp_path).unwrap();

    let result = store.put_transaction(Transaction::new(
        99.0,
        TransactionKind::Expense,
        Category::Food,
        0,
    ));
    assert!(
        result.is_err(),
        "expected save to fail when temp path is a directory"
    );

    let current = fs::read_to_string(&path).expect("read after failure");
    assert_eq!(
        current, original,
        "failed save must leave the previous file intact"
    );
}

#[test]
fn streams_persist_independently() {
    let temp = tempdir().unwrap();
    let mut store = JsonStore::open(Some(temp.path().to_path_buf())).unwrap();

    store
        .put_transaction(Transaction::new(
            5.0,
            TransactionKind::Expense,
            Category::Food,
            0,
        ))
        .unwrap();

    assert!(temp.path().join("transactions.json").exists());
    assert!(!temp.path().join("habits.json").exists());
}

#[test]
fn corrupt_stream_file_surfaces_a_storage_error() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("budgets.json"), "{not json").unwrap();
    let result = JsonStore::open(Some(temp.path().to_path_buf()));
    assert!(result.is_err());
}

#[test]
fn unknown_fields_and_missing_optionals_tolerated() {
    let temp = tempdir().unwrap();
    // A record written by a newer build: extra field, several optional
    // fields absent. Must load with serde defaults.
    let json = r#"[{
        "id": "b2f1f7d2-8a6f-4f6e-9d3c-0a1b2c3d4e5f",
        "amount": 12.0,
        "kind": "Expense",
        "category": "Food",
        "date": 0,
        "color_tag": "teal"
    }]"#;
    fs::write(temp.path().join("transactions.json"), json).unwrap();

    let store = JsonStore::open(Some(temp.path().to_path_buf())).unwrap();
    let txns = store.transactions().unwrap();
    assert_eq!(txns.len(), 1);
    assert!(!txns[0].is_deleted);
    assert!(!txns[0].is_recurring);
    assert_eq!(txns[0].person_name, None);
}
