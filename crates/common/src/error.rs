use std::time::Duration;

/// Failures raised while resolving a bucket path or enumerating a bucket.
///
/// The `Display` text of the not-found variants is what the browser shows
/// inline next to the requested path.
#[derive(Debug, thiserror::Error)]
pub enum BrowseError {
    /// A segment after the first does not name a bucket inside its parent.
    #[error("bucket '{name}' not found")]
    BucketNotFound { name: String },

    /// The first segment does not name a top-level bucket, so there is
    /// no handle to descend from or enumerate.
    #[error("top-level bucket '{name}' not found")]
    MissingTopLevelBucket { name: String },

    #[error("no bucket path given")]
    EmptyPath,

    #[error("store error: {0}")]
    Engine(#[from] jammdb::Error),

    #[error("read view task failed: {0}")]
    ViewTask(String),
}

impl BrowseError {
    /// True for the logical "no such bucket" outcomes, as opposed to
    /// engine or runtime failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BrowseError::BucketNotFound { .. } | BrowseError::MissingTopLevelBucket { .. }
        )
    }

    /// Name of the segment that failed to resolve, if any.
    pub fn missing_name(&self) -> Option<&str> {
        match self {
            BrowseError::BucketNotFound { name } | BrowseError::MissingTopLevelBucket { name } => {
                Some(name)
            }
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("fail to open bolt db: {0}")]
    Open(#[from] jammdb::Error),

    #[error("timed out after {0:?} waiting to open the store")]
    OpenTimeout(Duration),

    #[error("store open task failed: {0}")]
    OpenTask(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages_name_the_segment() {
        let err = BrowseError::BucketNotFound {
            name: "xyz".to_string(),
        };
        assert_eq!(err.to_string(), "bucket 'xyz' not found");
        assert!(err.is_not_found());
        assert_eq!(err.missing_name(), Some("xyz"));

        let err = BrowseError::MissingTopLevelBucket {
            name: "ghost".to_string(),
        };
        assert_eq!(err.to_string(), "top-level bucket 'ghost' not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_errors_are_not_not_found() {
        let err = BrowseError::ViewTask("cancelled".to_string());
        assert!(!err.is_not_found());
        assert_eq!(err.missing_name(), None);
        assert!(!BrowseError::EmptyPath.is_not_found());
    }
}
