//! Capability mode detection.
//!
//! CO-RE programs need kernel BTF. When `/sys/kernel/btf/vmlinux` is missing
//! the agent drops to the BCC fallback, which only covers DNS latency and TCP
//! retransmits.

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;
use sloprobe_common::{CapabilityMode, Signal};

pub const DEFAULT_BTF_PATH: &str = "/sys/kernel/btf/vmlinux";

const OSRELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

pub fn detect_capability_mode(btf_path: &Path) -> CapabilityMode {
    if !cfg!(target_os = "linux") {
        return CapabilityMode::BccDegraded;
    }
    if btf_path.exists() {
        CapabilityMode::CoreFull
    } else {
        CapabilityMode::BccDegraded
    }
}

/// `core_full` and `bcc_degraded` are matched exactly; anything else
/// (including `auto` or a padded label) falls through to detection.
pub fn parse_capability_mode(value: &str, btf_path: &Path) -> CapabilityMode {
    match CapabilityMode::from_label(value) {
        Some(mode) => mode,
        None => {
            let mode = detect_capability_mode(btf_path);
            debug!("Capability mode '{}' resolved by detection: {}", value, mode);
            mode
        }
    }
}

pub fn supported_signals_for_mode(mode: CapabilityMode) -> Vec<Signal> {
    mode.signals().to_vec()
}

#[derive(Debug, Clone, Serialize)]
pub struct CapabilityReport {
    pub requested: String,
    pub mode: CapabilityMode,
    pub btf_path: PathBuf,
    pub btf_available: bool,
    pub kernel_release: Option<String>,
    pub privileged: bool,
    pub supported_signals: Vec<Signal>,
}

impl CapabilityReport {
    pub fn gather(requested: &str, btf_path: &Path) -> Self {
        let mode = parse_capability_mode(requested, btf_path);
        let report = Self {
            requested: requested.to_string(),
            mode,
            btf_path: btf_path.to_path_buf(),
            btf_available: btf_path.exists(),
            kernel_release: read_kernel_release(Path::new(OSRELEASE_PATH)),
            privileged: is_privileged(),
            supported_signals: supported_signals_for_mode(mode),
        };
        info!(
            "Capability mode {} ({} signals, btf_available={})",
            report.mode,
            report.supported_signals.len(),
            report.btf_available
        );
        report
    }

    pub fn is_degraded(&self) -> bool {
        self.mode == CapabilityMode::BccDegraded
    }
}

/// Full release string as `uname -r` prints it, distro suffix included.
fn read_kernel_release(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(raw) => {
            let release = raw.trim();
            (!release.is_empty()).then(|| release.to_string())
        }
        Err(e) => {
            debug!("Failed to read {}: {}", path.display(), e);
            None
        }
    }
}

fn is_privileged() -> bool {
    unsafe { libc::geteuid() == 0 }
}
