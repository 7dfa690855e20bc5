//! freqctl - Reconcile per-core CPU frequency-scaling state against profiles
//!
//! Samples live cpufreq state on a fixed interval, aggregates it into a
//! deduplicated summary, and manages the single-slot profile edit session.

#![allow(dead_code)] // The engine API is wider than the binary's wiring

mod core;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::{
    CpuStateMonitor, PollLoop, ProfileStore, Settings, SharedCpuStateMonitor, SysfsCpuSampler,
};

/// Application name constant
pub const APP_NAME: &str = "freqctl";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!("{} v{} starting...", APP_NAME, APP_VERSION);

    let mut settings = Settings::default();
    settings.validate();

    let store = Arc::new(ProfileStore::new());
    info!("Profile store initialized ({} profiles)", store.all_profiles().len());

    let monitor = SharedCpuStateMonitor::new(CpuStateMonitor::new(SysfsCpuSampler::new()));

    let mut poll = PollLoop::new(settings.poll_interval());
    poll.start(monitor.clone());

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    poll.stop();

    if let Some(cpu) = monitor.general_cpu_info() {
        info!("Last sample: {} ({} cores)", cpu.model_name, cpu.available_cores);
    }
    info!("{} shutting down", APP_NAME);
    Ok(())
}

/// Initialize the logging system
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("freqctl=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
