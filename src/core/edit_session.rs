//! Edit session control - Switching which profile is under edit

use std::sync::Arc;

use tracing::{debug, info};

use super::form::{FormValues, ProfileForm};
use super::monitor::SharedCpuStateMonitor;
use super::store::ProfileStore;

/// Binary decision collected before unsaved edits are discarded.
///
/// Returns the index of the chosen entry in `choices`: index 0 proceeds
/// and discards, any other index cancels the switch. The decision may
/// resolve off-turn; no session state changes before it does.
pub trait ConfirmationPrompt {
    fn choose(&self, title: &str, message: &str, choices: &[&str]) -> usize;
}

/// Deferred follow-up for a switch the store refused.
///
/// The store's accept/reject decision may not be visible to the caller on
/// the same turn, so the controller hands back a ticket instead of
/// re-reading inline. Resolving it reconciles the selected indicator with
/// whatever slot the store actually ended up with.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "resolve the ticket to reconcile the selected profile"]
pub struct SwitchTicket {
    target: String,
}

/// Result of a switch request.
#[derive(Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Target is already under edit; nothing happened.
    Unchanged,
    /// User kept the unsaved edits; nothing happened.
    Aborted,
    /// Store refused the switch; resolve the ticket on a later turn.
    Rejected(SwitchTicket),
    /// Target is now under edit and the form has been seeded.
    Selected,
}

/// State machine governing the single "currently editing" slot.
///
/// Idle while the store's slot is empty, Editing(name) while a profile
/// occupies it. The controller only requests transitions; the store owns
/// the slot.
pub struct EditSessionController {
    store: Arc<ProfileStore>,
    monitor: SharedCpuStateMonitor,
    prompt: Arc<dyn ConfirmationPrompt + Send + Sync>,
    form: ProfileForm,
    selected: Option<String>,
}

impl EditSessionController {
    pub fn new(
        store: Arc<ProfileStore>,
        monitor: SharedCpuStateMonitor,
        prompt: Arc<dyn ConfirmationPrompt + Send + Sync>,
    ) -> Self {
        Self {
            store,
            monitor,
            prompt,
            form: ProfileForm::default(),
            selected: None,
        }
    }

    /// True iff a profile is currently under edit.
    pub fn is_editing(&self) -> bool {
        self.store.current_editing_profile().is_some()
    }

    /// The externally-observable selected profile name.
    pub fn selected_profile(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProfileForm {
        &mut self.form
    }

    /// Request switching the edit target to `target`.
    ///
    /// Dirty forms require a discard confirmation before anything moves.
    /// On success the form is reset and seeded from the target profile,
    /// falling back to live hardware defaults for unset fields.
    pub fn select_for_edit(&mut self, target: &str) -> SelectOutcome {
        if self
            .store
            .current_editing_profile()
            .map(|p| p.name == target)
            .unwrap_or(false)
        {
            return SelectOutcome::Unchanged;
        }

        if self.form.is_dirty() {
            let choice = self.prompt.choose(
                "Switching profile to edit",
                "Discard changes?",
                &["Discard", "Cancel"],
            );
            if choice != 0 {
                debug!("Switch to '{}' cancelled by user", target);
                return SelectOutcome::Aborted;
            }
        }

        if !self.store.set_current_editing_profile(target) {
            return SelectOutcome::Rejected(SwitchTicket {
                target: target.to_string(),
            });
        }

        self.form.mark_pristine();
        let values = self.seed_values();
        self.form.seed(values);
        self.selected = Some(target.to_string());
        info!("Editing profile '{}'", target);
        SelectOutcome::Selected
    }

    /// Second phase of a rejected switch, run on a later turn.
    ///
    /// Re-reads the store: an empty slot clears the selected indicator, an
    /// occupied one surfaces its name. Returns the actual editing name.
    pub fn resolve_switch(&mut self, ticket: SwitchTicket) -> Option<String> {
        let actual = self.store.current_editing_profile().map(|p| p.name);
        debug!(
            "Switch to '{}' rejected; store slot holds {:?}",
            ticket.target, actual
        );
        self.selected = actual.clone();
        actual
    }

    /// Form values for the profile now occupying the slot. Core count and
    /// frequency bounds fall back to the latest hardware sample when the
    /// profile leaves them unset; governor and energy preference are taken
    /// verbatim.
    fn seed_values(&self) -> FormValues {
        let cpu = self
            .store
            .current_editing_profile()
            .map(|p| p.cpu)
            .unwrap_or_default();
        FormValues {
            online_cores: cpu.online_cores.or_else(|| {
                self.monitor
                    .general_cpu_info()
                    .map(|g| g.available_cores as u32)
            }),
            scaling_min_freq: cpu
                .scaling_min_frequency
                .or_else(|| self.monitor.first_core().map(|c| c.cpuinfo_min_freq)),
            scaling_max_freq: cpu
                .scaling_max_frequency
                .or_else(|| self.monitor.first_core().map(|c| c.cpuinfo_max_freq)),
            governor: cpu.governor,
            energy_performance_preference: cpu.energy_performance_preference,
        }
    }
}
