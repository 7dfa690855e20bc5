//! Core module - Sampling, aggregation, profiles, and edit-session control

mod aggregate;
mod cpu_info;
mod edit_session;
mod form;
mod monitor;
mod poll;
pub mod profile;
pub mod sampler;
pub mod settings;
mod store;

pub use aggregate::{format_frequency, AggregatedView, EmptySampleError};
pub use cpu_info::{GeneralCpuInfo, LogicalCoreInfo};
pub use edit_session::{ConfirmationPrompt, EditSessionController, SelectOutcome, SwitchTicket};
pub use form::{FormValues, ProfileForm};
pub use monitor::{CpuStateMonitor, SharedCpuStateMonitor};
pub use poll::{PollLoop, DEFAULT_POLL_INTERVAL};
pub use profile::{Profile, ProfileId};
pub use sampler::{CpuSampler, SysfsCpuSampler};
pub use settings::Settings;
pub use store::ProfileStore;
