use chrono::Utc;

use crate::sample::SampleError;

pub trait Clock {
    /// Wall-clock time in nanoseconds since the Unix epoch.
    fn now_unix_nanos(&self) -> Result<u64, SampleError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_nanos(&self) -> Result<u64, SampleError> {
        let now = Utc::now();
        // None past ~2262; the i64 nanosecond range is exhausted.
        let nanos = now
            .timestamp_nanos_opt()
            .ok_or_else(|| SampleError::Clock(format!("{} is out of nanosecond range", now)))?;
        u64::try_from(nanos)
            .map_err(|_| SampleError::Clock(format!("{} is before the Unix epoch", now)))
    }
}

#[cfg(test)]
pub(crate) struct FixedClock(Option<u64>);

#[cfg(test)]
impl FixedClock {
    pub(crate) fn at(nanos: u64) -> Self {
        Self(Some(nanos))
    }

    pub(crate) fn broken() -> Self {
        Self(None)
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now_unix_nanos(&self) -> Result<u64, SampleError> {
        self.0
            .ok_or_else(|| SampleError::Clock("clock unavailable".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn test_system_clock_tracks_wall_time() {
        let before = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos() as u64;
        let ts = SystemClock.now_unix_nanos().unwrap();
        let after = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos() as u64;

        assert!(ts > 0);
        assert!(before <= ts && ts <= after, "{} not in [{}, {}]", ts, before, after);
    }
}
