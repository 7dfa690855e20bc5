//! Profile store - Default and custom profiles plus the single editing slot

use std::sync::RwLock;

use tracing::{info, warn};

use super::profile::{default_profiles, Profile};

/// Owns the profile lists and the "currently editing" slot.
///
/// At most one profile is under edit at a time; the slot holds its name.
/// Only custom profiles are editable, the built-in defaults are read-only.
pub struct ProfileStore {
    defaults: Vec<Profile>,
    custom: RwLock<Vec<Profile>>,
    editing: RwLock<Option<String>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self {
            defaults: default_profiles(),
            custom: RwLock::new(Vec::new()),
            editing: RwLock::new(None),
        }
    }

    pub fn default_profiles(&self) -> Vec<Profile> {
        self.defaults.clone()
    }

    pub fn custom_profiles(&self) -> Vec<Profile> {
        self.custom.read().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn all_profiles(&self) -> Vec<Profile> {
        let mut all = self.defaults.clone();
        all.extend(self.custom_profiles());
        all
    }

    /// Default profiles listed in the edit table when enabled; the profile
    /// named "Default" itself stays hidden.
    pub fn default_profiles_for_table(&self, show_defaults: bool) -> Vec<Profile> {
        if show_defaults {
            self.defaults
                .iter()
                .filter(|p| p.name != "Default")
                .cloned()
                .collect()
        } else {
            Vec::new()
        }
    }

    /// Add a custom profile. Names must be unique across defaults and
    /// custom profiles; a duplicate is rejected.
    pub fn add_custom_profile(&self, profile: Profile) -> bool {
        if self.defaults.iter().any(|p| p.name == profile.name) {
            warn!("Profile name '{}' collides with a default profile", profile.name);
            return false;
        }
        match self.custom.write() {
            Ok(mut custom) => {
                if custom.iter().any(|p| p.name == profile.name) {
                    warn!("Profile '{}' already exists", profile.name);
                    return false;
                }
                info!("Added custom profile '{}'", profile.name);
                custom.push(profile);
                true
            }
            Err(_) => false,
        }
    }

    /// The profile currently occupying the editing slot, if any.
    pub fn current_editing_profile(&self) -> Option<Profile> {
        let name = self.editing.read().ok()?.clone()?;
        self.custom
            .read()
            .ok()?
            .iter()
            .find(|p| p.name == name)
            .cloned()
    }

    /// Point the editing slot at a custom profile.
    ///
    /// Returns whether the set succeeded. Unknown names and default
    /// profiles are rejected with the slot left untouched.
    pub fn set_current_editing_profile(&self, name: &str) -> bool {
        let is_custom = self
            .custom
            .read()
            .map(|c| c.iter().any(|p| p.name == name))
            .unwrap_or(false);
        if !is_custom {
            warn!("Rejected edit request for profile '{}'", name);
            return false;
        }
        match self.editing.write() {
            Ok(mut editing) => {
                *editing = Some(name.to_string());
                true
            }
            Err(_) => false,
        }
    }

    /// Empty the editing slot (edit cancelled or finished).
    pub fn clear_current_editing_profile(&self) {
        if let Ok(mut editing) = self.editing.write() {
            *editing = None;
        }
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_custom(names: &[&str]) -> ProfileStore {
        let store = ProfileStore::new();
        for name in names {
            assert!(store.add_custom_profile(Profile::new(*name)));
        }
        store
    }

    #[test]
    fn editing_slot_accepts_only_custom_profiles() {
        let store = store_with_custom(&["mine"]);

        assert!(store.set_current_editing_profile("mine"));
        assert_eq!(store.current_editing_profile().unwrap().name, "mine");

        // defaults are read-only
        assert!(!store.set_current_editing_profile("Performance"));
        // a rejected set leaves the slot untouched
        assert_eq!(store.current_editing_profile().unwrap().name, "mine");
    }

    #[test]
    fn unknown_name_is_rejected_and_slot_untouched() {
        let store = store_with_custom(&["mine"]);
        assert!(!store.set_current_editing_profile("nope"));
        assert!(store.current_editing_profile().is_none());
    }

    #[test]
    fn clearing_empties_the_slot() {
        let store = store_with_custom(&["mine"]);
        store.set_current_editing_profile("mine");
        store.clear_current_editing_profile();
        assert!(store.current_editing_profile().is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let store = store_with_custom(&["mine"]);
        assert!(!store.add_custom_profile(Profile::new("mine")));
        assert!(!store.add_custom_profile(Profile::new("Default")));
        assert_eq!(store.custom_profiles().len(), 1);
    }

    #[test]
    fn default_table_hides_the_default_profile() {
        let store = ProfileStore::new();

        assert!(store.default_profiles_for_table(false).is_empty());

        let shown = store.default_profiles_for_table(true);
        assert!(!shown.is_empty());
        assert!(shown.iter().all(|p| p.name != "Default"));
    }

    #[test]
    fn all_profiles_combines_defaults_and_custom() {
        let store = store_with_custom(&["a", "b"]);
        let all = store.all_profiles();
        assert_eq!(all.len(), store.default_profiles().len() + 2);
    }
}
