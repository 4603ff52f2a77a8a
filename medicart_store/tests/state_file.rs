//! Load/save behaviour of the state file.

use medicart_core::Catalog;
use medicart_store::{AppState, AuthDirectory, StateStore};
use pretty_assertions::assert_eq;

fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap_or_else(|e| panic!("temp dir should be created: {e}"))
}

#[test]
fn test_missing_file_is_fresh_state() {
    let dir = temp_dir();
    let store = StateStore::new(dir.path().join("state.json"));

    let state = store
        .load()
        .unwrap_or_else(|e| panic!("missing file should load: {e}"));
    assert_eq!(state, AppState::default());
}

#[test]
fn test_save_then_load_restores_cart_and_user() {
    let dir = temp_dir();
    // Parent directory does not exist yet; save creates it.
    let store = StateStore::new(dir.path().join("nested").join("state.json"));
    let catalog = Catalog::builtin();
    let directory = AuthDirectory::demo();

    let mut state = AppState::default();
    for id in ["m1", "m1", "m4"] {
        let medicine = catalog
            .medicine_by_id(id)
            .unwrap_or_else(|| panic!("{id} should exist"));
        state.cart.add(medicine);
    }
    state
        .login(&directory, "user@example.com", "password123")
        .unwrap_or_else(|e| panic!("demo login should succeed: {e}"));

    store
        .save(&state)
        .unwrap_or_else(|e| panic!("state should save: {e}"));
    let restored = store
        .load()
        .unwrap_or_else(|e| panic!("state should load: {e}"));

    assert_eq!(restored, state);
    assert_eq!(restored.cart.total(), state.cart.total());
    assert_eq!(restored.current_user().map(|u| u.name.as_str()), Some("John Doe"));
}

#[test]
fn test_corrupt_file_starts_fresh() {
    let dir = temp_dir();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ \"cart\": [ broken")
        .unwrap_or_else(|e| panic!("fixture should be written: {e}"));

    let state = StateStore::new(&path)
        .load()
        .unwrap_or_else(|e| panic!("corrupt file should not be an error: {e}"));
    assert_eq!(state, AppState::default());
}

#[test]
fn test_logout_is_persisted() {
    let dir = temp_dir();
    let store = StateStore::new(dir.path().join("state.json"));
    let directory = AuthDirectory::demo();

    let mut state = AppState::default();
    state
        .login(&directory, "admin@example.com", "admin123")
        .unwrap_or_else(|e| panic!("demo admin login should succeed: {e}"));
    store
        .save(&state)
        .unwrap_or_else(|e| panic!("state should save: {e}"));

    let mut reloaded = store
        .load()
        .unwrap_or_else(|e| panic!("state should load: {e}"));
    assert!(reloaded.is_logged_in());
    assert!(reloaded.logout().is_some());
    store
        .save(&reloaded)
        .unwrap_or_else(|e| panic!("state should save after logout: {e}"));

    let after = store
        .load()
        .unwrap_or_else(|e| panic!("state should load after logout: {e}"));
    assert!(!after.is_logged_in());
}
