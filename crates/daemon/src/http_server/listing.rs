use common::prelude::{BrowseError, BucketDetail, BucketPath};

use crate::ServiceState;

/// Outcome of listing one bucket path: the path as requested plus either
/// its entries or the reason it could not be listed.
#[derive(Debug)]
pub struct Listing {
    pub path: BucketPath,
    pub result: Result<Vec<BucketDetail>, BrowseError>,
}

impl Listing {
    pub async fn load(state: &ServiceState, path: BucketPath) -> Self {
        let result = state.store().list_blocking(path.clone()).await;

        match &result {
            Ok(details) => tracing::debug!(path = %path, entries = details.len(), "listed bucket"),
            Err(e) if e.is_not_found() => tracing::debug!(path = %path, "{}", e),
            Err(e) => tracing::error!(path = %path, "failed to list bucket: {}", e),
        }

        Self { path, result }
    }

    pub fn error_message(&self) -> Option<String> {
        self.result.as_ref().err().map(|e| e.to_string())
    }

    /// Entries to show; a failed listing shows none.
    pub fn details(&self) -> &[BucketDetail] {
        match &self.result {
            Ok(details) => details,
            Err(_) => &[],
        }
    }
}
