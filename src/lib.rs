#![deny(missing_docs)]
//! <fullname>CloudFront access log mover</fullname>
//!
//! Lambda function that receives S3 "Object Created" events
//! from EventBridge. It moves CloudFront access logs into
//! a `year/month/day/hour` key layout, so Athena can query them
//! with partition projection.
use lambda_runtime::LambdaEvent;
use serde::Serialize;

mod access_log;
pub use access_log::{AccessLogKey, LogHour};

mod config;
pub use config::{Config, TARGET_BUCKET_VAR, TARGET_KEY_PREFIX_VAR};

mod error;
pub use error::{ConfigError, RuntimeError};

mod event;
pub use event::ObjectCreatedEvent;

mod s3;
pub use s3::S3Client;

mod store;
pub use store::{ObjectLocation, ObjectStore};

#[cfg(test)]
mod test_util;

/// Terminal state of a single invocation
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The object was copied to `destination` and deleted from its source bucket
    Moved {
        /// New location of the object
        destination: ObjectLocation,
    },
    /// The object was left untouched
    Skipped {
        /// Why the object was not moved
        reason: SkipReason,
    },
}

/// Reasons to leave a created object where it is
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The key has no date stamp or no filename
    NotAnAccessLog,
    /// The object was created in the destination bucket,
    /// moving it would trigger the function again
    DestinationBucket,
}

/// `handle_event` is the Lambda function entry point
/// that receives the events from EventBridge
#[tracing::instrument(skip(store, config, event), fields(request_id = %event.context.request_id))]
pub async fn handle_event<S: ObjectStore>(
    store: &S,
    config: &Config,
    event: LambdaEvent<ObjectCreatedEvent>,
) -> Result<MoveOutcome, RuntimeError> {
    move_access_log(store, config, &event.payload).await
}

/// Copy the created object to its partitioned key, then delete the original.
///
/// The delete only happens after S3 acknowledged the copy. If the copy fails
/// the source object stays in place. If the delete fails the object exists
/// in both buckets.
pub async fn move_access_log<S: ObjectStore>(
    store: &S,
    config: &Config,
    event: &ObjectCreatedEvent,
) -> Result<MoveOutcome, RuntimeError> {
    let (bucket, source_key) = event.source();

    if bucket == config.destination_bucket() {
        tracing::info!(
            "Object key {} was created in the destination bucket {}, so it will not be moved.",
            source_key,
            bucket
        );
        return Ok(MoveOutcome::Skipped {
            reason: SkipReason::DestinationBucket,
        });
    }

    let access_log = match AccessLogKey::parse(source_key) {
        Some(key) => key,
        None => {
            tracing::info!(
                "Object key {} does not look like an access log file, so it will not be moved.",
                source_key
            );
            return Ok(MoveOutcome::Skipped {
                reason: SkipReason::NotAnAccessLog,
            });
        }
    };

    let source = ObjectLocation::new(bucket, source_key);
    let destination = ObjectLocation::new(
        config.destination_bucket(),
        access_log.destination_key(config.destination_prefix()),
    );

    tracing::info!("Copying {} to {}.", source, destination);
    store.copy_object(&source, &destination).await?;

    tracing::info!("Copied. Now deleting {}.", source);
    store.delete_object(&source).await?;
    tracing::info!("Deleted {}.", source);

    Ok(MoveOutcome::Moved { destination })
}
