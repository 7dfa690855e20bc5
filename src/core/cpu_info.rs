//! CPU state model - Per-core and machine-wide scaling snapshots

use serde::{Deserialize, Serialize};

/// Scaling state of one logical core, captured at sample time.
///
/// A snapshot is never mutated in place; the next sample produces a
/// replacement. Frequencies are in Hz. Field names follow the cpufreq
/// sysfs attributes they are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalCoreInfo {
    /// Logical core index (cpu0, cpu1, ...)
    pub index: usize,
    /// Hardware-reported minimum frequency
    pub cpuinfo_min_freq: u64,
    /// Hardware-reported maximum frequency
    pub cpuinfo_max_freq: u64,
    /// Currently configured minimum scaling frequency
    pub scaling_min_freq: u64,
    /// Currently configured maximum scaling frequency
    pub scaling_max_freq: u64,
    /// Active frequency-scaling governor
    pub scaling_governor: String,
    /// Scaling driver backing this core
    pub scaling_driver: String,
    /// Energy-performance preference hint
    pub energy_performance_preference: String,
}

/// Machine-wide CPU info, one instance per sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralCpuInfo {
    /// Number of logical cores present
    pub available_cores: usize,
    /// CPU model string as reported by the system
    pub model_name: String,
}
