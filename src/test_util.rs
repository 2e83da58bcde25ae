use crate::{
    error::RuntimeError,
    store::{ObjectLocation, ObjectStore},
};
use aws_sdk_s3::{
    error::{NoSuchBucket, NoSuchKey},
    Credentials,
};
use aws_types::{region::Region, SdkConfig};
use std::sync::Mutex;

/// Body returned by S3 for a successful CopyObject
pub const COPY_OBJECT_RESULT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CopyObjectResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/"><LastModified>2022-05-01T09:15:00.000Z</LastModified><ETag>"9b2cf535f27731c974343645a3985328"</ETag></CopyObjectResult>"#;

/// Body returned by S3 when the source object doesn't exist
pub const NO_SUCH_KEY_ERROR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message><RequestId>4442587FB7D0A2F9</RequestId></Error>"#;

/// Body returned by S3 when the role can't delete the object
pub const ACCESS_DENIED_ERROR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>AccessDenied</Code><Message>Access Denied</Message><RequestId>4442587FB7D0A2FA</RequestId></Error>"#;

/// Configuration for mocking AWS SDK clients
pub async fn get_mock_config() -> SdkConfig {
    aws_config::from_env()
        .region(Region::new("us-west-1"))
        .credentials_provider(Credentials::new(
            "accesskey",
            "privatekey",
            None,
            None,
            "dummy",
        ))
        .load()
        .await
}

/// Base request builder for the AWS SDK calls
pub fn get_request_builder(host: &str, key: &str) -> http::request::Builder {
    http::Request::builder().uri(format!("https://{host}.us-west-1.amazonaws.com/{key}"))
}

/// Calls received by a `RecordingStore`
#[derive(Clone, Debug, PartialEq)]
pub enum StoreCall {
    Copy(ObjectLocation, ObjectLocation),
    Delete(ObjectLocation),
}

/// In memory `ObjectStore` that records every call
/// and fails the copy or the delete on demand.
#[derive(Debug, Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<StoreCall>>,
    fail_copy: bool,
    fail_delete: bool,
}

impl RecordingStore {
    pub fn failing_copy() -> RecordingStore {
        RecordingStore {
            fail_copy: true,
            ..Default::default()
        }
    }

    pub fn failing_delete() -> RecordingStore {
        RecordingStore {
            fail_delete: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn copy_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, StoreCall::Copy(..)))
            .count()
    }

    pub fn delete_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, StoreCall::Delete(..)))
            .count()
    }
}

impl ObjectStore for RecordingStore {
    async fn copy_object(
        &self,
        from: &ObjectLocation,
        to: &ObjectLocation,
    ) -> Result<(), RuntimeError> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Copy(from.clone(), to.clone()));

        if self.fail_copy {
            return Err(RuntimeError::CopyFailure {
                from: from.to_string(),
                to: to.to_string(),
                source: aws_sdk_s3::Error::NoSuchKey(
                    NoSuchKey::builder()
                        .message("The specified key does not exist.")
                        .build(),
                ),
            });
        }
        Ok(())
    }

    async fn delete_object(&self, location: &ObjectLocation) -> Result<(), RuntimeError> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Delete(location.clone()));

        if self.fail_delete {
            return Err(RuntimeError::DeleteFailure {
                location: location.to_string(),
                source: aws_sdk_s3::Error::NoSuchBucket(
                    NoSuchBucket::builder()
                        .message("The specified bucket does not exist")
                        .build(),
                ),
            });
        }
        Ok(())
    }
}
