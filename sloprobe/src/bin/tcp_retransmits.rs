//! BCC fallback emitter for the TCP retransmit counter.

use anyhow::{Context, Result};
use sloprobe::Signal;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    sloprobe::stub::run(Signal::TcpRetransmitsTotal)
        .context("Failed to emit tcp_retransmits_total sample")
}
