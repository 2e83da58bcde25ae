use crate::error::ConfigError;

/// Environment variable holding the bucket that moved logs are copied to
pub const TARGET_BUCKET_VAR: &str = "TARGET_BUCKET";

/// Environment variable holding the key prefix for moved logs,
/// without leading slash and with trailing slash
pub const TARGET_KEY_PREFIX_VAR: &str = "TARGET_KEY_PREFIX";

/// `Config` is the destination of every moved access log.
/// It's loaded once when the function starts and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    destination_bucket: String,
    destination_prefix: String,
}

impl Config {
    /// Build a validated configuration.
    pub fn new(
        destination_bucket: impl Into<String>,
        destination_prefix: impl Into<String>,
    ) -> Result<Config, ConfigError> {
        let destination_bucket = destination_bucket.into();
        let destination_prefix = destination_prefix.into();

        if destination_bucket.is_empty() {
            return Err(ConfigError::EmptyBucket);
        }
        if destination_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if destination_prefix.starts_with('/') {
            return Err(ConfigError::LeadingSlash(destination_prefix));
        }
        if !destination_prefix.ends_with('/') {
            return Err(ConfigError::MissingTrailingSlash(destination_prefix));
        }

        Ok(Config {
            destination_bucket,
            destination_prefix,
        })
    }

    /// Load the configuration from `TARGET_BUCKET` and `TARGET_KEY_PREFIX`.
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let bucket =
            lookup(TARGET_BUCKET_VAR).ok_or(ConfigError::MissingVariable(TARGET_BUCKET_VAR))?;
        let prefix = lookup(TARGET_KEY_PREFIX_VAR)
            .ok_or(ConfigError::MissingVariable(TARGET_KEY_PREFIX_VAR))?;
        Config::new(bucket, prefix)
    }

    /// Bucket that access logs are moved into
    pub fn destination_bucket(&self) -> &str {
        &self.destination_bucket
    }

    /// Key prefix that partitioned access logs are written under
    pub fn destination_prefix(&self) -> &str {
        &self.destination_prefix
    }
}
