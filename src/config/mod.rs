//! Store configuration module

use clap::Args;
use thiserror::Error;

use crate::{
    config::{latency::LatencyConfig, shipping::ShippingConfig},
    pricing::PricingError,
    settings::StoreSettings,
};

pub mod latency;
pub mod logging;
pub mod shipping;

/// Configuration values that parse but make no sense.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An amount from the environment or CLI is not a valid price.
    #[error("invalid {setting}: {source}")]
    Amount {
        /// Environment variable of the setting
        setting: &'static str,

        /// Parse failure
        #[source]
        source: PricingError,
    },
}

/// Store session settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Shipping fee settings.
    #[command(flatten)]
    pub shipping: ShippingConfig,

    /// Simulated backend latency settings.
    #[command(flatten)]
    pub latency: LatencyConfig,
}

impl StoreConfig {
    /// Build the library-side settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Amount`] if a shipping amount is invalid.
    pub fn settings(&self) -> Result<StoreSettings, ConfigError> {
        Ok(StoreSettings {
            shipping: self.shipping.policy()?,
            latency: self.latency.duration(),
        })
    }
}

/// Load a `.env` file if present. A missing file is not an error.
pub fn load_dotenv() {
    _ = dotenvy::dotenv();
}
