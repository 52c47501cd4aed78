//! Timestamp domain and tick arithmetic.
//!
//! Timestamps are counted in ticks of 100 nanoseconds from
//! `0001-01-01T00:00:00Z`. The representable domain runs from tick `0` to
//! `9999-12-31T23:59:59.9999999Z`.

use chrono::{DateTime, Utc};

/// Ticks per second (one tick is 100 ns).
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Tick of the latest representable timestamp.
pub const MAX_TICKS: i64 = 3_155_378_975_999_999_999;

/// Tick of `1970-01-01T00:00:00Z`.
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

const NANOS_PER_TICK: i64 = 100;

/// Earliest representable timestamp, `0001-01-01T00:00:00Z`.
#[must_use]
pub fn min_timestamp() -> DateTime<Utc> {
    from_ticks(0)
}

/// Latest representable timestamp, `9999-12-31T23:59:59.9999999Z`.
#[must_use]
pub fn max_timestamp() -> DateTime<Utc> {
    from_ticks(MAX_TICKS)
}

/// Build a timestamp from a tick count, clamped to the domain.
#[must_use]
pub fn from_ticks(ticks: i64) -> DateTime<Utc> {
    let unix_ticks = ticks.clamp(0, MAX_TICKS).saturating_sub(UNIX_EPOCH_TICKS);
    let secs = unix_ticks.div_euclid(TICKS_PER_SECOND);
    let nanos = unix_ticks
        .rem_euclid(TICKS_PER_SECOND)
        .saturating_mul(NANOS_PER_TICK);
    let nanos = u32::try_from(nanos).unwrap_or(0);
    DateTime::from_timestamp(secs, nanos).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Tick count of a timestamp, clamped to the domain. Sub-tick precision is
/// truncated.
#[must_use]
pub fn to_ticks(timestamp: DateTime<Utc>) -> i64 {
    let wide = i128::from(timestamp.timestamp())
        .saturating_mul(i128::from(TICKS_PER_SECOND))
        .saturating_add(i128::from(timestamp.timestamp_subsec_nanos()) / 100)
        .saturating_add(i128::from(UNIX_EPOCH_TICKS));
    let clamped = wide.clamp(0, i128::from(MAX_TICKS));
    i64::try_from(clamped).unwrap_or(MAX_TICKS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_min_timestamp() {
        let min = min_timestamp();
        assert_eq!(min.year(), 1);
        assert_eq!(min.month(), 1);
        assert_eq!(min.day(), 1);
        assert_eq!(min.hour(), 0);
        assert_eq!(min.to_rfc3339(), "0001-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_max_timestamp() {
        let max = max_timestamp();
        assert_eq!(max.year(), 9999);
        assert_eq!(max.month(), 12);
        assert_eq!(max.day(), 31);
        assert_eq!(max.second(), 59);
        assert_eq!(max.timestamp_subsec_nanos(), 999_999_900);
    }

    #[test]
    fn test_unix_epoch() -> Result<(), &'static str> {
        assert_eq!(from_ticks(UNIX_EPOCH_TICKS).timestamp(), 0);
        let epoch = DateTime::from_timestamp(0, 0).ok_or("unix epoch")?;
        assert_eq!(to_ticks(epoch), UNIX_EPOCH_TICKS);
        Ok(())
    }

    #[test]
    fn test_ticks_roundtrip_through_domain() {
        for ticks in [0, 1, 9_999_999, UNIX_EPOCH_TICKS + 123, MAX_TICKS] {
            assert_eq!(to_ticks(from_ticks(ticks)), ticks);
        }
    }

    #[test]
    fn test_out_of_domain_clamps() {
        assert_eq!(to_ticks(DateTime::<Utc>::MIN_UTC), 0);
        assert_eq!(to_ticks(DateTime::<Utc>::MAX_UTC), MAX_TICKS);
        assert_eq!(from_ticks(-5), min_timestamp());
        assert_eq!(from_ticks(i64::MAX), max_timestamp());
    }
}
