//! Profile management - Named bundles of desired CPU settings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub Uuid);

impl ProfileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Desired CPU settings of a profile.
///
/// `None` means "inherit the hardware default at edit time", never zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuProfileSettings {
    /// Number of cores to keep online
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_cores: Option<u32>,
    /// Desired minimum scaling frequency in Hz
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_min_frequency: Option<u64>,
    /// Desired maximum scaling frequency in Hz
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_max_frequency: Option<u64>,
    /// Desired scaling governor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governor: Option<String>,
    /// Desired energy-performance preference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_performance_preference: Option<String>,
}

/// A named, stored bundle of desired CPU settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier
    pub id: ProfileId,
    /// Display name; unique across the store
    pub name: String,
    /// Description
    pub description: String,
    /// Desired CPU settings
    pub cpu: CpuProfileSettings,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
    /// When the profile was last modified
    pub modified_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ProfileId::new(),
            name: name.into(),
            description: String::new(),
            cpu: CpuProfileSettings::default(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Set the CPU settings
    pub fn with_cpu(mut self, cpu: CpuProfileSettings) -> Self {
        self.cpu = cpu;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark profile as modified
    pub fn mark_modified(&mut self) {
        self.modified_at = Utc::now();
    }

    /// Export profile to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import profile from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Built-in read-only profiles shipped with the application.
pub fn default_profiles() -> Vec<Profile> {
    vec![
        Profile::new("Default").with_description("Inherit all hardware defaults"),
        Profile::new("Performance")
            .with_description("Prefer maximum clock speed")
            .with_cpu(CpuProfileSettings {
                governor: Some("performance".to_string()),
                energy_performance_preference: Some("performance".to_string()),
                ..Default::default()
            }),
        Profile::new("Powersave")
            .with_description("Prefer low power draw")
            .with_cpu(CpuProfileSettings {
                governor: Some("powersave".to_string()),
                energy_performance_preference: Some("power".to_string()),
                ..Default::default()
            }),
    ]
}
