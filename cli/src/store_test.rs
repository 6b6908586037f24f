use ckd_client::util::storage::PreferenceStore;

use super::*;

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("prefs.json"));
    assert_eq!(storage.get_item("theme").unwrap(), None);
}

#[test]
fn values_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let storage = FileStorage::new(&path);
    storage.set_item("theme", "dark").unwrap();
    storage.set_item("language", "kn").unwrap();

    let reopened = FileStorage::new(&path);
    assert_eq!(reopened.get_item("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(reopened.get_item("language").unwrap().as_deref(), Some("kn"));
}

#[test]
fn corrupt_file_is_reported_and_store_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "{not json").unwrap();
    let storage = FileStorage::new(&path);
    assert!(matches!(storage.get_item("theme"), Err(StorageError::Json(_))));

    let store = PreferenceStore::new(storage);
    assert_eq!(store.load("theme", "light"), "light");
}

#[test]
fn unwritable_path_is_a_backend_error() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("missing").join("prefs.json"));
    assert!(matches!(storage.set_item("theme", "dark"), Err(StorageError::Backend(_))));
}
