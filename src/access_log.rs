use regex::Regex;
use std::sync::LazyLock;

// CloudFront names its log files `<distribution>.<YYYY-MM-DD-HH>.<id>.gz`.
// Groups: year, month, day, hour.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9]([0-9]{4})-([0-9]{2})-([0-9]{2})-([0-9]{2})[^0-9]")
        .expect("access log date pattern is a valid regex")
});

/// `LogHour` is the UTC hour stamped in an access log key.
/// Every field keeps its zero padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogHour<'a> {
    /// Four digit year
    pub year: &'a str,
    /// Two digit month
    pub month: &'a str,
    /// Two digit day of month
    pub day: &'a str,
    /// Two digit hour
    pub hour: &'a str,
}

impl<'a> LogHour<'a> {
    /// Find the first date-shaped stamp anywhere in the key.
    pub fn find(key: &'a str) -> Option<LogHour<'a>> {
        let captures = DATE_PATTERN.captures(key)?;
        let group = |i| captures.get(i).map(|m| m.as_str());

        Some(LogHour {
            year: group(1)?,
            month: group(2)?,
            day: group(3)?,
            hour: group(4)?,
        })
    }
}

/// `AccessLogKey` is an object key that looks like a CloudFront access log
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccessLogKey<'a> {
    /// Hour the log was written in
    pub stamp: LogHour<'a>,
    /// Last path segment of the key
    pub filename: &'a str,
}

impl<'a> AccessLogKey<'a> {
    /// Parse an object key.
    /// Returns None when the key has no date stamp or ends with a `/`.
    pub fn parse(key: &'a str) -> Option<AccessLogKey<'a>> {
        let stamp = LogHour::find(key)?;
        let filename = key.rsplit('/').next().filter(|name| !name.is_empty())?;
        Some(AccessLogKey { stamp, filename })
    }

    /// Key under `prefix` partitioned as `year/month/day/hour/filename`.
    /// `prefix` must already end with a slash.
    pub fn destination_key(&self, prefix: &str) -> String {
        let LogHour {
            year,
            month,
            day,
            hour,
        } = self.stamp;
        format!("{prefix}{year}/{month}/{day}/{hour}/{}", self.filename)
    }
}
