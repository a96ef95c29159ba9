//! Store Settings

use std::time::Duration;

use crate::{auth::DEFAULT_LATENCY, cart::shipping::ShippingPolicy};

/// Runtime settings of a store session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreSettings {
    /// Shipping fee rules for new carts
    pub shipping: ShippingPolicy,

    /// Delay applied by simulated backend calls
    pub latency: Duration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            shipping: ShippingPolicy::default(),
            latency: DEFAULT_LATENCY,
        }
    }
}
