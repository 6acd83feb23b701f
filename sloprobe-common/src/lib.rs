#![cfg_attr(not(test), no_std)]

use core::fmt;
use core::str::FromStr;

/// Mode literal stamped on every sample emitted by the fallback path.
pub const MODE_BCC_FALLBACK: &str = "bcc_fallback";

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "user",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Signal {
    DnsLatencyMs,
    TcpRetransmitsTotal,
    RunqueueDelayMs,
    ConnectLatencyMs,
    ConnectErrorsTotal,
    TlsHandshakeMs,
    TlsHandshakeFailTotal,
    CpuStealPct,
    CfsThrottledMs,
}

/// Gauges carry a float placeholder, counters an integer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Gauge,
    Counter,
}

impl Signal {
    pub const ALL: [Signal; 9] = [
        Signal::DnsLatencyMs,
        Signal::TcpRetransmitsTotal,
        Signal::RunqueueDelayMs,
        Signal::ConnectLatencyMs,
        Signal::ConnectErrorsTotal,
        Signal::TlsHandshakeMs,
        Signal::TlsHandshakeFailTotal,
        Signal::CpuStealPct,
        Signal::CfsThrottledMs,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Signal::DnsLatencyMs => "dns_latency_ms",
            Signal::TcpRetransmitsTotal => "tcp_retransmits_total",
            Signal::RunqueueDelayMs => "runqueue_delay_ms",
            Signal::ConnectLatencyMs => "connect_latency_ms",
            Signal::ConnectErrorsTotal => "connect_errors_total",
            Signal::TlsHandshakeMs => "tls_handshake_ms",
            Signal::TlsHandshakeFailTotal => "tls_handshake_fail_total",
            Signal::CpuStealPct => "cpu_steal_pct",
            Signal::CfsThrottledMs => "cfs_throttled_ms",
        }
    }

    pub const fn kind(self) -> SignalKind {
        match self {
            Signal::TcpRetransmitsTotal
            | Signal::ConnectErrorsTotal
            | Signal::TlsHandshakeFailTotal => SignalKind::Counter,
            _ => SignalKind::Gauge,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSignal;

impl fmt::Display for UnknownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown signal name")
    }
}

impl core::error::Error for UnknownSignal {}

impl FromStr for Signal {
    type Err = UnknownSignal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signal::ALL
            .iter()
            .copied()
            .find(|signal| signal.name() == s)
            .ok_or(UnknownSignal)
    }
}

/// Probe coverage level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "user",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum CapabilityMode {
    /// CO-RE programs with BTF; every signal is available.
    CoreFull,
    /// BCC fallback when BTF is missing; DNS and TCP retransmits only.
    BccDegraded,
}

impl CapabilityMode {
    pub const fn label(self) -> &'static str {
        match self {
            CapabilityMode::CoreFull => "core_full",
            CapabilityMode::BccDegraded => "bcc_degraded",
        }
    }

    /// Explicit labels only. `auto` and anything else yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "core_full" => Some(CapabilityMode::CoreFull),
            "bcc_degraded" => Some(CapabilityMode::BccDegraded),
            _ => None,
        }
    }

    pub const fn signals(self) -> &'static [Signal] {
        match self {
            CapabilityMode::CoreFull => &CORE_SIGNALS,
            CapabilityMode::BccDegraded => &BCC_SIGNALS,
        }
    }
}

impl fmt::Display for CapabilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const CORE_SIGNALS: [Signal; 9] = Signal::ALL;

pub const BCC_SIGNALS: [Signal; 2] = [Signal::DnsLatencyMs, Signal::TcpRetransmitsTotal];
