use serde::Deserialize;

/// `ObjectCreatedEvent` represents the EventBridge event
/// that S3 sends when an object is created in a bucket.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ObjectCreatedEvent {
    /// Always `Object Created` for this function
    #[serde(rename = "detail-type", default)]
    pub detail_type: Option<String>,
    /// Region of the source bucket
    #[serde(default)]
    pub region: Option<String>,
    /// Time the object was created
    #[serde(default)]
    pub time: Option<String>,
    /// S3 event payload
    pub detail: ObjectCreatedDetail,
}

/// `ObjectCreatedDetail` is the S3 specific part of the event
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ObjectCreatedDetail {
    /// Source bucket
    pub bucket: Bucket,
    /// Created object
    pub object: Object,
    /// S3 API call that created the object, e.g. `PutObject`
    #[serde(default)]
    pub reason: Option<String>,
}

/// `Bucket` the object was created in
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Bucket {
    /// Bucket name
    pub name: String,
}

/// `Object` that was created
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Object {
    /// Full object key
    pub key: String,
    /// Object size in bytes
    #[serde(default)]
    pub size: Option<u64>,
    /// Object etag
    #[serde(default)]
    pub etag: Option<String>,
}

impl ObjectCreatedEvent {
    /// Bucket name and key of the created object
    pub fn source(&self) -> (&str, &str) {
        (&self.detail.bucket.name, &self.detail.object.key)
    }
}
