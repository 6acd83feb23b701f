use std::io::{self, Write};

use log::debug;
use sloprobe_common::Signal;

use crate::clock::{Clock, SystemClock};
use crate::emit::write_sample;
use crate::sample::{SampleError, SignalSample};

/// Captures one placeholder sample for `signal` and prints it to stdout.
pub fn run(signal: Signal) -> Result<(), SampleError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit_once(signal, &SystemClock, &mut out)
}

pub fn emit_once<C, W>(signal: Signal, clock: &C, out: &mut W) -> Result<(), SampleError>
where
    C: Clock + ?Sized,
    W: Write + ?Sized,
{
    let sample = SignalSample::capture(signal, clock)?;
    write_sample(out, &sample)?;
    debug!(
        "BCC_FALLBACK signal={} ts={} value={:?}",
        sample.signal, sample.ts_unix_nano, sample.value
    );
    Ok(())
}
