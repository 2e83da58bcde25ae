use crate::error::RuntimeError;
use serde::Serialize;
use std::fmt;

/// `ObjectLocation` addresses a single object in a bucket
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ObjectLocation {
    /// Bucket name
    pub bucket: String,
    /// Full object key
    pub key: String,
}

impl ObjectLocation {
    /// Create a new location.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> ObjectLocation {
        ObjectLocation {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Object storage operations needed to move an access log.
///
/// Both calls must only return once the storage backend acknowledged them.
#[allow(async_fn_in_trait)]
pub trait ObjectStore {
    /// Copy the object at `from` to `to`.
    async fn copy_object(
        &self,
        from: &ObjectLocation,
        to: &ObjectLocation,
    ) -> Result<(), RuntimeError>;

    /// Delete the object at `location`.
    async fn delete_object(&self, location: &ObjectLocation) -> Result<(), RuntimeError>;
}
