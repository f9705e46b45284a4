use std::path::{Path, PathBuf};
use std::time::Duration;

use jammdb::{Tx, DB};

use crate::enumerate::{list_nested_buckets, list_top_buckets, BucketDetail};
use crate::error::{BrowseError, StoreError};
use crate::path::BucketPath;

/// Default bound on how long opening the store may wait for the file lock.
pub const DEFAULT_OPEN_TIMEOUT: Duration = Duration::from_secs(5);

/// An open embedded store, shared by every request for the process lifetime.
///
/// Cloning is cheap; all clones refer to the same underlying database.
#[derive(Clone)]
pub struct Store {
    db: DB,
    path: PathBuf,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("path", &self.path).finish()
    }
}

impl Store {
    /// Open (or create) the store file at `path`. Blocks while another
    /// process holds the file lock.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let db = DB::open(&path)?;
        tracing::debug!(path = %path.display(), "opened store");
        Ok(Self { db, path })
    }

    /// Open the store on the blocking pool, giving up after `limit`.
    pub async fn open_with_timeout(
        path: impl Into<PathBuf>,
        limit: Duration,
    ) -> Result<Self, StoreError> {
        let path = path.into();
        let task = tokio::task::spawn_blocking(move || Store::open(path));
        match tokio::time::timeout(limit, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(StoreError::OpenTask(e.to_string())),
            Err(_) => Err(StoreError::OpenTimeout(limit)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying engine handle, for callers that need to write
    /// (test fixtures, tooling).
    pub fn engine(&self) -> &DB {
        &self.db
    }

    /// Run `f` against a read-only transaction. The transaction is released
    /// when this returns, on success and on error alike.
    pub fn view<T, F>(&self, f: F) -> Result<T, BrowseError>
    where
        F: FnOnce(&Tx<'_>) -> Result<T, BrowseError>,
    {
        let tx = self.db.tx(false)?;
        f(&tx)
    }

    /// List the children of `path` inside a single read view. The root path
    /// lists top-level buckets.
    pub fn list(&self, path: &BucketPath) -> Result<Vec<BucketDetail>, BrowseError> {
        self.view(|tx| list_in(tx, path))
    }

    /// `view` moved onto the blocking pool so async handlers never wait on
    /// the engine's locks.
    pub async fn view_blocking<T, F>(&self, f: F) -> Result<T, BrowseError>
    where
        T: Send + 'static,
        F: FnOnce(&Tx<'_>) -> Result<T, BrowseError> + Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.view(f))
            .await
            .map_err(|e| BrowseError::ViewTask(e.to_string()))?
    }

    pub async fn list_blocking(&self, path: BucketPath) -> Result<Vec<BucketDetail>, BrowseError> {
        self.view_blocking(move |tx| list_in(tx, &path)).await
    }

    /// Check that a read view can be acquired at all.
    pub async fn ping(&self) -> Result<(), BrowseError> {
        self.view_blocking(|_| Ok(())).await
    }
}

fn list_in(tx: &Tx<'_>, path: &BucketPath) -> Result<Vec<BucketDetail>, BrowseError> {
    if path.is_root() {
        list_top_buckets(tx)
    } else {
        list_nested_buckets(tx, path.segments())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_creates_empty_store() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.db");

        let store = Store::open_with_timeout(&path, DEFAULT_OPEN_TIMEOUT)
            .await
            .unwrap();
        assert_eq!(store.path(), path.as_path());
        assert!(path.exists());

        let details = store.list(&BucketPath::root()).unwrap();
        assert!(details.is_empty());
        store.ping().await.unwrap();
    }

    #[test]
    fn test_view_releases_on_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let store = Store::open(temp_dir.path().join("view.db")).unwrap();

        let result: Result<(), _> = store.view(|_| Err(BrowseError::EmptyPath));
        assert!(matches!(result, Err(BrowseError::EmptyPath)));

        // a writer can still commit once the failed read view is gone
        let tx = store.engine().tx(true).unwrap();
        tx.create_bucket("after").unwrap();
        tx.commit().unwrap();

        let details = store.list(&BucketPath::root()).unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].key, "after");
    }
}
