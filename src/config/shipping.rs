//! Shipping Config

use clap::Args;
use rusty_money::iso::BRL;

use crate::{cart::shipping::ShippingPolicy, config::ConfigError, pricing::parse_amount};

/// Shipping fee settings, in reais.
#[derive(Debug, Args)]
pub struct ShippingConfig {
    /// Subtotal from which shipping is free
    #[arg(long, env = "FREE_SHIPPING_MINIMUM", default_value = "5000.00")]
    pub free_shipping_minimum: String,

    /// Flat fee below the free shipping minimum
    #[arg(long, env = "SHIPPING_FEE", default_value = "49.90")]
    pub shipping_fee: String,
}

impl ShippingConfig {
    /// Parse the amounts into a policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Amount`] naming the first invalid setting.
    pub fn policy(&self) -> Result<ShippingPolicy, ConfigError> {
        let free_minimum =
            parse_amount(&self.free_shipping_minimum, BRL).map_err(|source| {
                ConfigError::Amount {
                    setting: "FREE_SHIPPING_MINIMUM",
                    source,
                }
            })?;

        let flat_fee = parse_amount(&self.shipping_fee, BRL).map_err(|source| {
            ConfigError::Amount {
                setting: "SHIPPING_FEE",
                source,
            }
        })?;

        Ok(ShippingPolicy::new(free_minimum, flat_fee))
    }
}
