//! Cart
//!
//! An ordered list of lines, at most one per product. Every derived amount is recomputed
//! from the lines on read.

use std::sync::Arc;

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::shipping::ShippingPolicy,
    pricing::{self, INSTALLMENTS, OrderSummary, PricingError, SummaryLine},
    products::Product,
};

pub mod shipping;

/// Errors that can occur when pricing a cart.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Line total, sum or instalment failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// A product and how many units of it are in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product: Arc<Product>,
    quantity: u32,
}

impl CartLine {
    /// The product on this line.
    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    /// Number of units, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price × quantity`
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the total does not fit.
    pub fn line_total(&self) -> Result<Money<'static, Currency>, PricingError> {
        pricing::line_total(&self.product.price, self.quantity)
    }
}

/// Shopping cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    shipping: ShippingPolicy,
}

impl Cart {
    /// Create an empty cart using the given shipping policy.
    #[must_use]
    pub fn new(shipping: ShippingPolicy) -> Self {
        Self {
            lines: Vec::new(),
            shipping,
        }
    }

    /// Add one unit of a product: bumps the existing line or appends a new one. Returns the
    /// line's new quantity.
    pub fn add_item(&mut self, product: Arc<Product>) -> u32 {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);

            return line.quantity;
        }

        self.lines.push(CartLine {
            product,
            quantity: 1,
        });

        1
    }

    /// Set a line's quantity; zero or less removes the line. Returns `false` if the product
    /// has no line.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        let Some(index) = self.position(product_id) else {
            return false;
        };

        if quantity <= 0 {
            self.lines.remove(index);

            return true;
        }

        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }

        true
    }

    /// Remove a product's line. Returns `false` if there was none.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let Some(index) = self.position(product_id) else {
            return false;
        };

        self.lines.remove(index);

        true
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product.id.as_str() == product_id)
    }

    /// Lines in the order products were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line for a product, if any.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        let index = self.position(product_id)?;

        self.lines.get(index)
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Shipping policy used for quotes.
    pub fn shipping_policy(&self) -> &ShippingPolicy {
        &self.shipping
    }

    /// Sum of line totals.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if a line total overflows or currencies differ.
    pub fn subtotal(&self) -> Result<Money<'static, Currency>, CartError> {
        let totals = self
            .lines
            .iter()
            .map(CartLine::line_total)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(pricing::sum(totals, self.shipping.currency())?)
    }

    /// Shipping fee for the current subtotal.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the subtotal cannot be computed.
    pub fn shipping(&self) -> Result<Money<'static, Currency>, CartError> {
        Ok(self.shipping.quote(&self.subtotal()?))
    }

    /// Subtotal plus shipping.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the subtotal cannot be computed.
    pub fn total(&self) -> Result<Money<'static, Currency>, CartError> {
        let subtotal = self.subtotal()?;
        let shipping = self.shipping.quote(&subtotal);

        Ok(subtotal.add(shipping).map_err(PricingError::from)?)
    }

    /// Value of each interest-free instalment of the total.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the total cannot be computed.
    pub fn installment(&self) -> Result<Money<'static, Currency>, CartError> {
        Ok(pricing::installment(&self.total()?, INSTALLMENTS)?)
    }

    /// Priced snapshot of the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if any amount cannot be computed.
    pub fn summary(&self) -> Result<OrderSummary, CartError> {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                Ok(SummaryLine {
                    product: line.product.id.clone(),
                    name: line.product.name.clone(),
                    unit_price: line.product.price,
                    quantity: line.quantity,
                    total: line.line_total()?,
                })
            })
            .collect::<Result<Vec<_>, PricingError>>()?;

        let subtotal = pricing::sum(
            lines.iter().map(|line| line.total),
            self.shipping.currency(),
        )?;
        let shipping = self.shipping.quote(&subtotal);
        let total = subtotal.add(shipping).map_err(PricingError::from)?;

        Ok(OrderSummary {
            lines,
            subtotal,
            shipping,
            total,
        })
    }
}
