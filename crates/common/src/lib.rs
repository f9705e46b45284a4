/**
 * Typed failures for traversal, enumeration
 *  and opening the store.
 */
pub mod error;
/**
 * Listing the immediate children of a bucket
 *  (or the store root) as display records.
 */
pub mod enumerate;
/**
 * Request path handling: slash-delimited paths
 *  turned into ordered bucket names.
 */
pub mod path;
/**
 * Descending from the store root through
 *  nested buckets by name.
 */
pub mod resolver;
/**
 * Thin wrapper around the embedded engine.
 *  Owns the open database and hands out
 *  scoped read-only views.
 */
pub mod store;
/**
 * Helper for setting build version information
 *  at compile time.
 */
pub mod version;

pub mod prelude {
    pub use crate::enumerate::{decode_bytes, BucketDetail};
    pub use crate::error::{BrowseError, StoreError};
    pub use crate::path::{parse_bucket_path, Breadcrumb, BucketPath};
    pub use crate::resolver::resolve_bucket;
    pub use crate::store::Store;
    pub use crate::version::{build_info, BuildInfo};
}
