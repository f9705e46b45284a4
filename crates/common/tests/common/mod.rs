//! Shared fixtures for store traversal tests
#![allow(dead_code)]

use common::store::Store;
use tempfile::TempDir;

/// Open a fresh, empty store inside a temporary directory.
///
/// The `TempDir` must be kept alive for as long as the store is used.
pub fn setup_test_store() -> (Store, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::open(temp_dir.path().join("test.db")).unwrap();
    (store, temp_dir)
}

/// Open a store seeded with:
///
/// ```text
/// orders/
///   1001    = "pending"
///   blank   = ""
/// users/
///   alice   = "admin"
///   sessions/
///     s1    = "token-1"
///     archived/
/// ```
pub fn setup_seeded_store() -> (Store, TempDir) {
    let (store, temp_dir) = setup_test_store();

    let tx = store.engine().tx(true).unwrap();
    {
        let users = tx.create_bucket("users").unwrap();
        users.put("alice", "admin").unwrap();
        let sessions = users.create_bucket("sessions").unwrap();
        sessions.put("s1", "token-1").unwrap();
        sessions.create_bucket("archived").unwrap();

        let orders = tx.create_bucket("orders").unwrap();
        orders.put("1001", "pending").unwrap();
        orders.put("blank", "").unwrap();
    }
    tx.commit().unwrap();

    (store, temp_dir)
}
