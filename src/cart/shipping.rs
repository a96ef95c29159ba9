//! Shipping

use rusty_money::{
    Money,
    iso::{BRL, Currency},
};

/// Subtotal from which shipping is free, in minor units (R$ 5000,00).
pub const DEFAULT_FREE_SHIPPING_MINIMUM: i64 = 500_000;

/// Flat shipping fee, in minor units (R$ 49,90).
pub const DEFAULT_SHIPPING_FEE: i64 = 4_990;

/// Flat-fee shipping that becomes free from a minimum subtotal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShippingPolicy {
    free_minimum: Money<'static, Currency>,
    flat_fee: Money<'static, Currency>,
}

impl ShippingPolicy {
    /// Create a policy. The fee's currency is the currency of every quote.
    #[must_use]
    pub fn new(
        free_minimum: Money<'static, Currency>,
        flat_fee: Money<'static, Currency>,
    ) -> Self {
        Self {
            free_minimum,
            flat_fee,
        }
    }

    /// Subtotal from which shipping is free.
    #[must_use]
    pub fn free_minimum(&self) -> Money<'static, Currency> {
        self.free_minimum
    }

    /// Fee charged below the free minimum.
    #[must_use]
    pub fn flat_fee(&self) -> Money<'static, Currency> {
        self.flat_fee
    }

    /// Currency of quoted fees.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.flat_fee.currency()
    }

    /// Shipping for a subtotal. Nothing to ship costs nothing.
    #[must_use]
    pub fn quote(&self, subtotal: &Money<'_, Currency>) -> Money<'static, Currency> {
        let subtotal = subtotal.to_minor_units();

        if subtotal <= 0 || subtotal >= self.free_minimum.to_minor_units() {
            Money::from_minor(0, self.currency())
        } else {
            self.flat_fee
        }
    }

    /// Amount still missing for free shipping, if any.
    #[must_use]
    pub fn missing_for_free(
        &self,
        subtotal: &Money<'_, Currency>,
    ) -> Option<Money<'static, Currency>> {
        let missing = self.free_minimum.to_minor_units() - subtotal.to_minor_units();

        (missing > 0).then(|| Money::from_minor(missing, self.currency()))
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::new(
            Money::from_minor(DEFAULT_FREE_SHIPPING_MINIMUM, BRL),
            Money::from_minor(DEFAULT_SHIPPING_FEE, BRL),
        )
    }
}
