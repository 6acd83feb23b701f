use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use sloprobe::capability::CapabilityReport;
use sloprobe::emit::render_json_line;
use sloprobe::fallback::write_collection;
use sloprobe::settings::Settings;
use sloprobe::{CapabilityMode, Signal, SystemClock};

#[derive(Debug, Parser)]
#[command(name = "sloprobe")]
#[command(about = "Fallback signal emitters for hosts without CO-RE/BTF")]
struct Opt {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Emit one placeholder sample for a degraded-mode signal
    Sample {
        /// Signal name (dns_latency_ms or tcp_retransmits_total)
        signal: String,
    },

    /// Print the resolved capability mode and supported signals
    Capabilities {
        /// auto, core_full or bcc_degraded (overrides SLOPROBE_CAPABILITY_MODE)
        #[arg(long)]
        mode: Option<String>,

        /// Kernel BTF path checked by detection (overrides SLOPROBE_BTF_PATH)
        #[arg(long)]
        btf_path: Option<PathBuf>,
    },

    /// Run the BCC fallback collector once: flags line, then one sample per signal
    Collect,
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if opt.verbose { "info" } else { "warn" },
    ))
    .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match opt.command {
        Command::Sample { signal } => {
            let signal: Signal = signal
                .parse()
                .with_context(|| format!("Invalid signal '{}'", signal))?;
            if !CapabilityMode::BccDegraded.signals().contains(&signal) {
                bail!(sloprobe::SampleError::UnsupportedSignal(signal));
            }
            sloprobe::stub::emit_once(signal, &SystemClock, &mut out)?;
        }
        Command::Capabilities { mode, btf_path } => {
            let settings = Settings::new().context("Failed to load settings")?;
            let requested = mode.unwrap_or_else(|| settings.capability_mode().to_string());
            let btf_path = btf_path.unwrap_or_else(|| settings.btf_path());
            let report = CapabilityReport::gather(&requested, &btf_path);
            out.write_all(&render_json_line(&report)?)
                .context("Failed to write capability report")?;
        }
        Command::Collect => {
            write_collection(&SystemClock, &mut out)
                .context("Failed to run bcc fallback collection")?;
            info!("bcc fallback: collection complete");
        }
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
