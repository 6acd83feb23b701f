//! Signal samples emitted by the BCC fallback path.
//!
//! A sample is built, serialized and printed within a single run. Nothing here
//! measures anything: the value is always the zero placeholder for the signal's
//! kind.

use serde::Serialize;
use sloprobe_common::{MODE_BCC_FALLBACK, Signal, SignalKind};
use thiserror::Error;

use crate::clock::Clock;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("failed to read system clock: {0}")]
    Clock(String),
    #[error("failed to serialize sample")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write sample")]
    Write(#[source] std::io::Error),
    #[error("signal {0} is not available in bcc fallback mode")]
    UnsupportedSignal(Signal),
}

/// Placeholder value; serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SampleValue {
    Gauge(f64),
    Counter(u64),
}

impl SampleValue {
    pub fn zero(kind: SignalKind) -> Self {
        match kind {
            SignalKind::Gauge => SampleValue::Gauge(0.0),
            SignalKind::Counter => SampleValue::Counter(0),
        }
    }
}

/// Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalSample {
    pub signal: Signal,
    pub mode: &'static str,
    pub ts_unix_nano: u64,
    pub value: SampleValue,
}

impl SignalSample {
    pub fn placeholder(signal: Signal, ts_unix_nano: u64) -> Self {
        Self {
            signal,
            mode: MODE_BCC_FALLBACK,
            ts_unix_nano,
            value: SampleValue::zero(signal.kind()),
        }
    }

    pub fn capture<C: Clock + ?Sized>(signal: Signal, clock: &C) -> Result<Self, SampleError> {
        let ts = clock.now_unix_nanos()?;
        Ok(Self::placeholder(signal, ts))
    }
}
