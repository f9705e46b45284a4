use jammdb::{Bucket, Error as EngineError, Tx};

use crate::error::BrowseError;

/// Walk `names` down from the store root and return the last bucket.
///
/// Every segment is checked as it is looked up, the first included: a
/// missing top-level bucket fails with `MissingTopLevelBucket`, a missing
/// nested one with `BucketNotFound`. A segment that names a key/value entry
/// rather than a bucket counts as missing at that level.
///
/// The returned handle borrows the transaction and is only valid inside the
/// read view that produced it.
pub fn resolve_bucket<'b, 'tx>(
    tx: &'b Tx<'tx>,
    names: &[String],
) -> Result<Bucket<'b, 'tx>, BrowseError> {
    let (first, rest) = names.split_first().ok_or(BrowseError::EmptyPath)?;

    let mut bucket = tx.get_bucket(first.as_bytes().to_vec()).map_err(|e| {
        missing_or_engine(e, || BrowseError::MissingTopLevelBucket {
            name: first.clone(),
        })
    })?;

    for name in rest {
        bucket = bucket.get_bucket(name.as_bytes().to_vec()).map_err(|e| {
            missing_or_engine(e, || BrowseError::BucketNotFound { name: name.clone() })
        })?;
    }

    Ok(bucket)
}

fn missing_or_engine(err: EngineError, missing: impl FnOnce() -> BrowseError) -> BrowseError {
    match err {
        EngineError::BucketMissing | EngineError::IncompatibleValue => missing(),
        other => BrowseError::Engine(other),
    }
}
