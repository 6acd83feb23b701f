//! BCC fallback emitter for the DNS latency signal.

use anyhow::{Context, Result};
use sloprobe::Signal;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    sloprobe::stub::run(Signal::DnsLatencyMs).context("Failed to emit dns_latency_ms sample")
}
