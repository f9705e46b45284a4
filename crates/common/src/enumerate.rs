use jammdb::{Bucket, Data, Tx};
use serde::{Deserialize, Serialize};

use crate::error::BrowseError;
use crate::resolver::resolve_bucket;

/// One immediate child of a bucket, ready for display.
///
/// `is_nested` comes from the kind of the underlying entry, never from the
/// value bytes: an empty leaf value is still a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketDetail {
    pub key: String,
    pub value: String,
    pub is_nested: bool,
}

impl BucketDetail {
    fn nested(name: &[u8]) -> Self {
        Self {
            key: decode_bytes(Some(name)),
            value: decode_bytes(None),
            is_nested: true,
        }
    }

    fn leaf(key: &[u8], value: &[u8]) -> Self {
        Self {
            key: decode_bytes(Some(key)),
            value: decode_bytes(Some(value)),
            is_nested: false,
        }
    }
}

impl From<&Data<'_, '_>> for BucketDetail {
    fn from(data: &Data<'_, '_>) -> Self {
        match data {
            Data::Bucket(name) => BucketDetail::nested(name.name()),
            Data::KeyValue(kv) => BucketDetail::leaf(kv.key(), kv.value()),
        }
    }
}

/// Raw key/value bytes as display text. Absent bytes become the empty
/// string; invalid UTF-8 is replaced rather than rejected.
pub fn decode_bytes(buf: Option<&[u8]>) -> String {
    match buf {
        Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        None => String::new(),
    }
}

/// Top-level buckets of the store. The root namespace only holds buckets,
/// so every entry is nested with an empty value.
pub fn list_top_buckets(tx: &Tx<'_>) -> Result<Vec<BucketDetail>, BrowseError> {
    Ok(tx
        .buckets()
        .map(|(name, _)| BucketDetail::nested(name.name()))
        .collect())
}

/// Immediate children of a resolved bucket, in engine order.
pub fn list_bucket(bucket: &Bucket<'_, '_>) -> Vec<BucketDetail> {
    bucket
        .cursor()
        .map(|data| BucketDetail::from(&data))
        .collect()
}

/// Resolve `names` from the root and list the bucket they lead to.
pub fn list_nested_buckets(
    tx: &Tx<'_>,
    names: &[String],
) -> Result<Vec<BucketDetail>, BrowseError> {
    let bucket = resolve_bucket(tx, names)?;
    Ok(list_bucket(&bucket))
}
