use thiserror::Error as ThisError;

/// Errors raised while moving an object between buckets
#[derive(Debug, ThisError)]
pub enum RuntimeError {
    /// Error returned by S3 when copying the object to its partitioned key.
    /// The source object is left in place.
    #[error("failed to copy {from} to {to}: {source}")]
    CopyFailure {
        /// Location of the source object
        from: String,
        /// Location the object was being copied to
        to: String,
        /// Underlying S3 error
        source: aws_sdk_s3::Error,
    },
    /// Error returned by S3 when deleting the source object after a successful copy
    #[error("failed to delete {location}: {source}")]
    DeleteFailure {
        /// Location of the source object
        location: String,
        /// Underlying S3 error
        source: aws_sdk_s3::Error,
    },
}

/// Errors raised while loading the function configuration at startup
#[derive(Debug, PartialEq, ThisError)]
pub enum ConfigError {
    /// Error returned when a required environment variable is not set
    #[error("missing environment variable {0}")]
    MissingVariable(&'static str),
    /// Error returned when the destination bucket name is empty
    #[error("destination bucket name must not be empty")]
    EmptyBucket,
    /// Error returned when the destination key prefix is empty
    #[error("destination key prefix must not be empty")]
    EmptyPrefix,
    /// Error returned when the destination key prefix starts with a slash
    #[error("destination key prefix {0:?} must not start with '/'")]
    LeadingSlash(String),
    /// Error returned when the destination key prefix doesn't end with a slash
    #[error("destination key prefix {0:?} must end with '/'")]
    MissingTrailingSlash(String),
}
