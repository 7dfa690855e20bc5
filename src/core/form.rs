//! Profile edit form - Explicit field state with a dirty flag

/// The five editable fields of a profile's CPU settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    /// Number of cores to keep online
    pub online_cores: Option<u32>,
    /// Minimum scaling frequency in Hz
    pub scaling_min_freq: Option<u64>,
    /// Maximum scaling frequency in Hz
    pub scaling_max_freq: Option<u64>,
    /// Scaling governor
    pub governor: Option<String>,
    /// Energy-performance preference
    pub energy_performance_preference: Option<String>,
}

/// Form state for the profile currently under edit.
///
/// Seeding overwrites every field without touching the dirty flag; the
/// individual setters are the user-edit path and mark the form dirty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    values: FormValues,
    dirty: bool,
}

impl ProfileForm {
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag.
    pub fn mark_pristine(&mut self) {
        self.dirty = false;
    }

    /// Overwrite all fields at once. The dirty flag is left as-is.
    pub fn seed(&mut self, values: FormValues) {
        self.values = values;
    }

    pub fn set_online_cores(&mut self, cores: Option<u32>) {
        self.values.online_cores = cores;
        self.dirty = true;
    }

    pub fn set_scaling_min_freq(&mut self, hz: Option<u64>) {
        self.values.scaling_min_freq = hz;
        self.dirty = true;
    }

    pub fn set_scaling_max_freq(&mut self, hz: Option<u64>) {
        self.values.scaling_max_freq = hz;
        self.dirty = true;
    }

    pub fn set_governor(&mut self, governor: Option<String>) {
        self.values.governor = governor;
        self.dirty = true;
    }

    pub fn set_energy_performance_preference(&mut self, epp: Option<String>) {
        self.values.energy_performance_preference = epp;
        self.dirty = true;
    }
}
