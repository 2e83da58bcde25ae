use crate::{
    error::RuntimeError,
    store::{ObjectLocation, ObjectStore},
};
use aws_sdk_s3::{Client, Error};

/// S3 client implementation.
pub struct S3Client {
    inner: Client,
}

impl S3Client {
    /// Initialize the S3 client.
    #[tracing::instrument(skip(config))]
    pub fn new(config: &aws_types::SdkConfig) -> S3Client {
        tracing::info!("Initializing S3 client");
        S3Client {
            inner: Client::new(config),
        }
    }
}

impl ObjectStore for S3Client {
    /// Server side copy, the object body never goes through the function.
    #[tracing::instrument(skip(self, from, to), fields(from = %from, to = %to))]
    async fn copy_object(
        &self,
        from: &ObjectLocation,
        to: &ObjectLocation,
    ) -> Result<(), RuntimeError> {
        self.inner
            .copy_object()
            .copy_source(format!("{}/{}", from.bucket, from.key))
            .bucket(&to.bucket)
            .key(&to.key)
            .send()
            .await
            .map_err(|err| RuntimeError::CopyFailure {
                from: from.to_string(),
                to: to.to_string(),
                source: Error::from(err),
            })?;

        Ok(())
    }

    #[tracing::instrument(skip(self, location), fields(location = %location))]
    async fn delete_object(&self, location: &ObjectLocation) -> Result<(), RuntimeError> {
        self.inner
            .delete_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|err| RuntimeError::DeleteFailure {
                location: location.to_string(),
                source: Error::from(err),
            })?;

        Ok(())
    }
}
