//! Transaction deadlines

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of hours a transaction stays valid
pub const DEFAULT_DEADLINE_HOURS: i64 = 2;

/// Milliseconds since the network epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(pub u64);

impl Deadline {
    /// A deadline `hours` from `now`, relative to the network epoch
    /// (`epoch_adjustment` seconds after the unix epoch)
    pub fn at(now: DateTime<Utc>, epoch_adjustment: u64, hours: i64) -> Self {
        let target = now + Duration::hours(hours);
        let epoch_millis = i64::try_from(epoch_adjustment)
            .unwrap_or(i64::MAX)
            .saturating_mul(1000);
        let millis = target.timestamp_millis().saturating_sub(epoch_millis);
        Self(millis.max(0) as u64)
    }

    pub fn create(epoch_adjustment: u64, hours: i64) -> Self {
        Self::at(Utc::now(), epoch_adjustment, hours)
    }

    /// Wall clock time of this deadline; `None` when it is out of range
    pub fn to_datetime(&self, epoch_adjustment: u64) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(epoch_adjustment)
            .ok()?
            .checked_mul(1000)?
            .checked_add(i64::try_from(self.0).ok()?)?;
        Utc.timestamp_millis_opt(millis).single()
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Describes a deadline for humans, falling back to the raw value when
/// the epoch is unknown
pub fn format_deadline(deadline: Deadline, epoch_adjustment: Option<u64>) -> String {
    epoch_adjustment
        .and_then(|epoch| deadline.to_datetime(epoch))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| deadline.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPOCH: u64 = 1_615_853_185;

    #[test]
    fn test_deadline_relative_to_epoch() {
        let now = Utc.timestamp_opt(EPOCH as i64 + 100, 0).unwrap();
        let deadline = Deadline::at(now, EPOCH, 2);
        assert_eq!(deadline.0, (100 + 2 * 3600) * 1000);
        assert_eq!(
            deadline.to_datetime(EPOCH).unwrap(),
            now + Duration::hours(2)
        );
    }

    #[test]
    fn test_format_deadline() {
        let deadline = Deadline(1000);
        assert_eq!(format_deadline(deadline, None), "1000");
        assert_eq!(
            format_deadline(deadline, Some(0)),
            "1970-01-01 00:00:01 UTC"
        );
    }

    #[test]
    fn test_out_of_range_deadline_falls_back_to_raw_value() {
        let deadline = Deadline(i64::MAX as u64);
        assert!(deadline.to_datetime(EPOCH).is_none());
        assert_eq!(
            format_deadline(deadline, Some(EPOCH)),
            (i64::MAX as u64).to_string()
        );
        assert!(Deadline(u64::MAX).to_datetime(0).is_none());
        assert!(Deadline(0).to_datetime(u64::MAX).is_none());
    }
}
