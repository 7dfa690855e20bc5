//! Hardware sampling - Live scaling state from the cpufreq sysfs interface

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use sysinfo::{CpuRefreshKind, System};
use tracing::trace;

use super::cpu_info::{GeneralCpuInfo, LogicalCoreInfo};

/// Read contract for live per-core CPU scaling state.
///
/// Both reads are synchronous and side-effect-free from the caller's point
/// of view; implementations may cache internally.
pub trait CpuSampler {
    /// Current scaling state of every logical core, in index order.
    fn logical_core_info(&self) -> Vec<LogicalCoreInfo>;

    /// Machine-wide CPU info.
    fn general_cpu_info(&self) -> GeneralCpuInfo;
}

const SYSFS_CPU_ROOT: &str = "/sys/devices/system/cpu";

/// Sampler backed by `/sys/devices/system/cpu/cpu<N>/cpufreq`.
///
/// sysfs exports frequencies in kHz; they are converted to Hz here so the
/// rest of the engine deals in a single unit. A core whose cpufreq
/// attributes are missing or unreadable yields zero/empty field values
/// rather than failing the whole sample.
pub struct SysfsCpuSampler {
    root: PathBuf,
    system: Mutex<System>,
}

impl SysfsCpuSampler {
    pub fn new() -> Self {
        Self::with_root(SYSFS_CPU_ROOT)
    }

    /// Use an alternate sysfs root. Tests point this at a fabricated tree.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            system: Mutex::new(System::new()),
        }
    }

    fn read_trimmed(path: &Path) -> Option<String> {
        fs::read_to_string(path).ok().map(|s| s.trim().to_string())
    }

    /// Read a kHz attribute and convert to Hz.
    fn read_freq_hz(path: &Path) -> u64 {
        Self::read_trimmed(path)
            .and_then(|s| s.parse::<u64>().ok())
            .map(|khz| khz * 1000)
            .unwrap_or(0)
    }

    fn read_tag(path: &Path) -> String {
        Self::read_trimmed(path).unwrap_or_default()
    }
}

impl Default for SysfsCpuSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuSampler for SysfsCpuSampler {
    fn logical_core_info(&self) -> Vec<LogicalCoreInfo> {
        let mut cores = Vec::new();
        for index in 0.. {
            let cpufreq = self.root.join(format!("cpu{}", index)).join("cpufreq");
            if !cpufreq.is_dir() {
                break;
            }
            cores.push(LogicalCoreInfo {
                index,
                cpuinfo_min_freq: Self::read_freq_hz(&cpufreq.join("cpuinfo_min_freq")),
                cpuinfo_max_freq: Self::read_freq_hz(&cpufreq.join("cpuinfo_max_freq")),
                scaling_min_freq: Self::read_freq_hz(&cpufreq.join("scaling_min_freq")),
                scaling_max_freq: Self::read_freq_hz(&cpufreq.join("scaling_max_freq")),
                scaling_governor: Self::read_tag(&cpufreq.join("scaling_governor")),
                scaling_driver: Self::read_tag(&cpufreq.join("scaling_driver")),
                energy_performance_preference: Self::read_tag(
                    &cpufreq.join("energy_performance_preference"),
                ),
            });
        }
        trace!("Sampled {} logical cores", cores.len());
        cores
    }

    fn general_cpu_info(&self) -> GeneralCpuInfo {
        match self.system.lock() {
            Ok(mut system) => {
                system.refresh_cpu_specifics(CpuRefreshKind::everything());
                GeneralCpuInfo {
                    available_cores: system.cpus().len(),
                    model_name: system
                        .cpus()
                        .first()
                        .map(|c| c.brand().to_string())
                        .unwrap_or_default(),
                }
            }
            Err(_) => GeneralCpuInfo::default(),
        }
    }
}
