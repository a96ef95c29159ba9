//! Latency Config

use std::time::Duration;

use clap::Args;

/// Simulated backend latency.
#[derive(Debug, Args)]
pub struct LatencyConfig {
    /// Delay applied to login, registration, checkout and form submissions
    #[arg(long, env = "SIMULATED_LATENCY_MS", default_value_t = 1000u64)]
    pub simulated_latency_ms: u64,
}

impl LatencyConfig {
    /// Latency as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}
