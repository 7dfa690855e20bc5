//! Aggregation - Deduplicated summary of the per-core snapshot

use thiserror::Error;

use super::cpu_info::LogicalCoreInfo;

/// The hardware sampler returned a snapshot with no cores.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("hardware sampler returned no logical cores")]
pub struct EmptySampleError;

/// Format a frequency in Hz as MHz with two fraction digits.
pub fn format_frequency(hz: u64) -> String {
    format!("{:.2}", hz as f64 / 1_000_000.0)
}

/// Distinct values observed across all cores of the latest sample,
/// in first-seen order.
///
/// A view is recomputed wholesale from each snapshot and replaces its
/// predecessor; it is never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedView {
    /// Number of cores in the snapshot
    pub active_cores: usize,
    /// Distinct scaling minimum frequencies, formatted as MHz
    pub scaling_min_freqs: Vec<String>,
    /// Distinct scaling maximum frequencies, formatted as MHz
    pub scaling_max_freqs: Vec<String>,
    /// Distinct scaling drivers
    pub scaling_drivers: Vec<String>,
    /// Distinct scaling governors
    pub scaling_governors: Vec<String>,
    /// Distinct energy-performance preferences
    pub energy_performance_preferences: Vec<String>,
}

impl AggregatedView {
    /// Derive a view from a fresh snapshot in a single walk.
    ///
    /// Frequencies are deduplicated on their formatted MHz string, so two
    /// Hz values that round to the same two-decimal string count as one
    /// entry. The snapshot is not mutated.
    pub fn from_snapshot(snapshot: &[LogicalCoreInfo]) -> Result<Self, EmptySampleError> {
        if snapshot.is_empty() {
            return Err(EmptySampleError);
        }

        let mut view = Self::default();
        for core in snapshot {
            view.active_cores += 1;
            push_distinct(
                &mut view.scaling_min_freqs,
                format_frequency(core.scaling_min_freq),
            );
            push_distinct(
                &mut view.scaling_max_freqs,
                format_frequency(core.scaling_max_freq),
            );
            push_distinct(
                &mut view.scaling_governors,
                core.scaling_governor.clone(),
            );
            push_distinct(
                &mut view.energy_performance_preferences,
                core.energy_performance_preference.clone(),
            );
            push_distinct(&mut view.scaling_drivers, core.scaling_driver.clone());
        }
        Ok(view)
    }
}

/// Append a value unless already present, preserving first-seen order.
fn push_distinct(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core(
        index: usize,
        scaling_min: u64,
        scaling_max: u64,
        governor: &str,
        driver: &str,
        epp: &str,
    ) -> LogicalCoreInfo {
        LogicalCoreInfo {
            index,
            cpuinfo_min_freq: 400_000_000,
            cpuinfo_max_freq: 4_700_000_000,
            scaling_min_freq: scaling_min,
            scaling_max_freq: scaling_max,
            scaling_governor: governor.to_string(),
            scaling_driver: driver.to_string(),
            energy_performance_preference: epp.to_string(),
        }
    }

    #[test]
    fn formats_frequency_as_mhz_with_two_decimals() {
        assert_eq!(format_frequency(1_500_000_000), "1500.00");
        assert_eq!(format_frequency(999_999), "1.00");
        assert_eq!(format_frequency(0), "0.00");
    }

    #[test]
    fn formatting_rounds_instead_of_truncating() {
        // 1.239999 MHz must round up, not truncate to 1.23
        assert_eq!(format_frequency(1_239_999), "1.24");
        assert_eq!(format_frequency(1_234_000), "1.23");
    }

    #[test]
    fn empty_snapshot_is_an_error() {
        assert_eq!(AggregatedView::from_snapshot(&[]), Err(EmptySampleError));
    }

    #[test]
    fn identical_cores_collapse_to_single_entries() {
        let snapshot: Vec<_> = (0..8)
            .map(|i| {
                core(
                    i,
                    400_000_000,
                    3_500_000_000,
                    "powersave",
                    "intel_pstate",
                    "balance_power",
                )
            })
            .collect();

        let view = AggregatedView::from_snapshot(&snapshot).unwrap();
        assert_eq!(view.active_cores, 8);
        assert_eq!(view.scaling_min_freqs, vec!["400.00"]);
        assert_eq!(view.scaling_max_freqs, vec!["3500.00"]);
        assert_eq!(view.scaling_governors, vec!["powersave"]);
        assert_eq!(view.scaling_drivers, vec!["intel_pstate"]);
        assert_eq!(view.energy_performance_preferences, vec!["balance_power"]);
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let snapshot = vec![
            core(0, 800_000_000, 3_500_000_000, "schedutil", "acpi-cpufreq", "b"),
            core(1, 400_000_000, 3_500_000_000, "powersave", "acpi-cpufreq", "a"),
            core(2, 800_000_000, 4_700_000_000, "schedutil", "acpi-cpufreq", "b"),
        ];

        let view = AggregatedView::from_snapshot(&snapshot).unwrap();
        assert_eq!(view.scaling_min_freqs, vec!["800.00", "400.00"]);
        assert_eq!(view.scaling_max_freqs, vec!["3500.00", "4700.00"]);
        assert_eq!(view.scaling_governors, vec!["schedutil", "powersave"]);
        assert_eq!(view.energy_performance_preferences, vec!["b", "a"]);
        assert_eq!(view.scaling_drivers, vec!["acpi-cpufreq"]);
    }

    #[test]
    fn frequencies_rounding_to_same_string_are_one_entry() {
        // 400000000 Hz and 400001000 Hz both format to "400.00"
        let snapshot = vec![
            core(0, 400_000_000, 3_500_000_000, "g", "d", "e"),
            core(1, 400_001_000, 3_500_000_000, "g", "d", "e"),
        ];

        let view = AggregatedView::from_snapshot(&snapshot).unwrap();
        assert_eq!(view.scaling_min_freqs, vec!["400.00"]);
    }

    #[test]
    fn view_is_a_replacement_not_a_merge() {
        let first = AggregatedView::from_snapshot(&[core(
            0,
            400_000_000,
            3_500_000_000,
            "powersave",
            "intel_pstate",
            "balance_power",
        )])
        .unwrap();
        let second = AggregatedView::from_snapshot(&[core(
            0,
            800_000_000,
            4_700_000_000,
            "performance",
            "intel_pstate",
            "performance",
        )])
        .unwrap();

        assert_eq!(first.scaling_governors, vec!["powersave"]);
        assert_eq!(second.scaling_governors, vec!["performance"]);
        assert_eq!(second.scaling_min_freqs, vec!["800.00"]);
    }
}
