//! Degraded-mode collector used when CO-RE / BTF is unavailable.
//!
//! Only DNS latency and TCP retransmits are covered. No BCC programs are
//! attached; the collector tracks lifecycle, reports capability flags so
//! benchmark reports show degraded mode, and produces placeholder samples.

use std::io::Write;

use log::info;
use serde::Serialize;
use sloprobe_common::{CapabilityMode, Signal};
use thiserror::Error;

use crate::clock::Clock;
use crate::emit::{render_json_line, render_line};
use crate::sample::{SampleError, SignalSample};

const DEGRADED_NOTE: &str = "BCC fallback: DNS and TCP retransmits only; CO-RE unavailable";

#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("bcc fallback already active")]
    AlreadyActive,
    #[error("bcc fallback is not active")]
    Inactive,
    #[error(transparent)]
    Sample(#[from] SampleError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityFlags {
    pub mode: CapabilityMode,
    pub supported_signals: Vec<Signal>,
    pub degraded: bool,
    pub note: &'static str,
}

#[derive(Debug)]
pub struct BccFallback {
    enabled: Vec<Signal>,
    active: bool,
}

impl Default for BccFallback {
    fn default() -> Self {
        Self::new()
    }
}

impl BccFallback {
    pub fn new() -> Self {
        Self {
            enabled: CapabilityMode::BccDegraded.signals().to_vec(),
            active: false,
        }
    }

    pub fn supported_signals(&self) -> Vec<Signal> {
        CapabilityMode::BccDegraded.signals().to_vec()
    }

    pub fn start(&mut self) -> Result<(), FallbackError> {
        if self.active {
            return Err(FallbackError::AlreadyActive);
        }
        info!(
            "bcc fallback: starting degraded mode with {} signals",
            self.enabled.len()
        );
        self.active = true;
        Ok(())
    }

    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        info!("bcc fallback: stopping degraded mode");
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn capability_flags(&self) -> CapabilityFlags {
        CapabilityFlags {
            mode: CapabilityMode::BccDegraded,
            supported_signals: self.supported_signals(),
            degraded: true,
            note: DEGRADED_NOTE,
        }
    }

    /// One placeholder per enabled signal, all stamped with a single clock read.
    pub fn collect<C: Clock + ?Sized>(&self, clock: &C) -> Result<Vec<SignalSample>, FallbackError> {
        if !self.active {
            return Err(FallbackError::Inactive);
        }
        let ts = clock.now_unix_nanos()?;
        Ok(self
            .enabled
            .iter()
            .map(|&signal| SignalSample::placeholder(signal, ts))
            .collect())
    }
}

/// Runs the collector once and writes the capability flags line followed by
/// one sample line per signal. Every line is rendered before `out` is touched.
pub fn write_collection<C, W>(clock: &C, out: &mut W) -> Result<(), FallbackError>
where
    C: Clock + ?Sized,
    W: Write + ?Sized,
{
    let mut fallback = BccFallback::new();
    fallback.start()?;
    let samples = fallback.collect(clock);
    fallback.stop();
    let samples = samples?;

    let mut buf = render_json_line(&fallback.capability_flags()).map_err(SampleError::Serialize)?;
    for sample in &samples {
        buf.extend(render_line(sample)?);
    }

    out.write_all(&buf).map_err(SampleError::Write)?;
    out.flush().map_err(SampleError::Write)?;
    Ok(())
}
