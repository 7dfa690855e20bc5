//! CPU state monitor - Latest snapshot and aggregated view

use std::sync::{Arc, RwLock};

use tracing::{info, trace, warn};

use super::aggregate::AggregatedView;
use super::cpu_info::{GeneralCpuInfo, LogicalCoreInfo};
use super::sampler::CpuSampler;

/// Holds the most recent sample of the machine's scaling state.
pub struct CpuStateMonitor {
    sampler: Box<dyn CpuSampler + Send + Sync>,
    cores: Vec<LogicalCoreInfo>,
    general: Option<GeneralCpuInfo>,
    view: Option<AggregatedView>,
}

impl CpuStateMonitor {
    pub fn new(sampler: impl CpuSampler + Send + Sync + 'static) -> Self {
        Self {
            sampler: Box::new(sampler),
            cores: Vec::new(),
            general: None,
            view: None,
        }
    }

    /// Run one sample-and-aggregate cycle.
    ///
    /// A successful cycle replaces the snapshot and view wholesale. An
    /// empty sample keeps the previous state; the loop must survive it.
    pub fn refresh(&mut self) {
        let cores = self.sampler.logical_core_info();
        match AggregatedView::from_snapshot(&cores) {
            Ok(view) => {
                if self.view.as_ref() != Some(&view) {
                    info!(
                        "CPU scaling state: {} cores, governors {:?}, min {:?} MHz, max {:?} MHz",
                        view.active_cores,
                        view.scaling_governors,
                        view.scaling_min_freqs,
                        view.scaling_max_freqs
                    );
                }
                self.cores = cores;
                self.general = Some(self.sampler.general_cpu_info());
                self.view = Some(view);
            }
            Err(e) => warn!("Keeping previous CPU view: {}", e),
        }
        trace!("CPU state monitor refreshed");
    }

    pub fn aggregated_view(&self) -> Option<&AggregatedView> {
        self.view.as_ref()
    }

    pub fn general_cpu_info(&self) -> Option<&GeneralCpuInfo> {
        self.general.as_ref()
    }

    pub fn cores(&self) -> &[LogicalCoreInfo] {
        &self.cores
    }

    pub fn first_core(&self) -> Option<&LogicalCoreInfo> {
        self.cores.first()
    }
}

/// Thread-safe wrapper for CpuStateMonitor
pub struct SharedCpuStateMonitor {
    inner: Arc<RwLock<CpuStateMonitor>>,
}

impl SharedCpuStateMonitor {
    pub fn new(monitor: CpuStateMonitor) -> Self {
        Self {
            inner: Arc::new(RwLock::new(monitor)),
        }
    }

    pub fn refresh(&self) {
        if let Ok(mut monitor) = self.inner.write() {
            monitor.refresh();
        }
    }

    pub fn aggregated_view(&self) -> Option<AggregatedView> {
        self.inner.read().ok()?.aggregated_view().cloned()
    }

    pub fn general_cpu_info(&self) -> Option<GeneralCpuInfo> {
        self.inner.read().ok()?.general_cpu_info().cloned()
    }

    pub fn first_core(&self) -> Option<LogicalCoreInfo> {
        self.inner.read().ok()?.first_core().cloned()
    }
}

impl Clone for SharedCpuStateMonitor {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Sampler that replays a queue of snapshots, then repeats the last.
    struct ScriptedSampler {
        snapshots: Mutex<Vec<Vec<LogicalCoreInfo>>>,
    }

    impl ScriptedSampler {
        fn new(mut snapshots: Vec<Vec<LogicalCoreInfo>>) -> Self {
            snapshots.reverse();
            Self {
                snapshots: Mutex::new(snapshots),
            }
        }
    }

    impl CpuSampler for ScriptedSampler {
        fn logical_core_info(&self) -> Vec<LogicalCoreInfo> {
            let mut snapshots = self.snapshots.lock().unwrap();
            if snapshots.len() > 1 {
                snapshots.pop().unwrap()
            } else {
                snapshots.last().cloned().unwrap_or_default()
            }
        }

        fn general_cpu_info(&self) -> GeneralCpuInfo {
            GeneralCpuInfo {
                available_cores: 8,
                model_name: "Test CPU".to_string(),
            }
        }
    }

    fn one_core(governor: &str) -> LogicalCoreInfo {
        LogicalCoreInfo {
            index: 0,
            cpuinfo_min_freq: 400_000_000,
            cpuinfo_max_freq: 4_700_000_000,
            scaling_min_freq: 400_000_000,
            scaling_max_freq: 3_500_000_000,
            scaling_governor: governor.to_string(),
            scaling_driver: "intel_pstate".to_string(),
            energy_performance_preference: "balance_power".to_string(),
        }
    }

    #[test]
    fn refresh_populates_snapshot_and_view() {
        let mut monitor =
            CpuStateMonitor::new(ScriptedSampler::new(vec![vec![one_core("powersave")]]));
        assert!(monitor.aggregated_view().is_none());

        monitor.refresh();

        assert_eq!(monitor.cores().len(), 1);
        assert_eq!(monitor.general_cpu_info().unwrap().available_cores, 8);
        let view = monitor.aggregated_view().unwrap();
        assert_eq!(view.scaling_governors, vec!["powersave"]);
    }

    #[test]
    fn empty_sample_retains_previous_state() {
        let mut monitor = CpuStateMonitor::new(ScriptedSampler::new(vec![
            vec![one_core("powersave")],
            Vec::new(),
        ]));

        monitor.refresh();
        let before = monitor.aggregated_view().cloned();
        monitor.refresh();

        assert_eq!(monitor.aggregated_view().cloned(), before);
        assert_eq!(monitor.cores().len(), 1);
    }

    #[test]
    fn new_sample_replaces_view_last_write_wins() {
        let mut monitor = CpuStateMonitor::new(ScriptedSampler::new(vec![
            vec![one_core("powersave")],
            vec![one_core("performance")],
        ]));

        monitor.refresh();
        monitor.refresh();

        let view = monitor.aggregated_view().unwrap();
        assert_eq!(view.scaling_governors, vec!["performance"]);
    }

    #[test]
    fn shared_wrapper_exposes_latest_state() {
        let shared = SharedCpuStateMonitor::new(CpuStateMonitor::new(ScriptedSampler::new(
            vec![vec![one_core("schedutil")]],
        )));

        assert!(shared.aggregated_view().is_none());
        shared.refresh();

        assert_eq!(shared.first_core().unwrap().scaling_governor, "schedutil");
        assert_eq!(shared.general_cpu_info().unwrap().available_cores, 8);
        let clone = shared.clone();
        assert!(clone.aggregated_view().is_some());
    }
}
