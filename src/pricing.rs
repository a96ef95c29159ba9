//! Prices

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money, MoneyError,
    iso::{BRL, Currency, EUR, GBP, USD},
};
use thiserror::Error;

use crate::products::ProductId;

/// Number of interest-free instalments advertised next to prices.
pub const INSTALLMENTS: u32 = 12;

/// Errors that can occur while parsing or calculating prices.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The text is not a valid amount.
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// The currency code is not supported.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A multiplication left the representable range.
    #[error("Price overflow")]
    Overflow,

    /// Instalment plans need at least one instalment.
    #[error("Instalment count must be positive")]
    NoInstallments,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Parse price string (e.g., `"4999.00 BRL"`) into money.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the amount
/// cannot be parsed as a decimal, or if the currency code is not recognized.
pub fn parse_money(s: &str) -> Result<Money<'static, Currency>, PricingError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(PricingError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = match code {
        "BRL" => BRL,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(PricingError::UnknownCurrency(other.to_string())),
    };

    parse_amount(amount, currency)
}

/// Parse a bare amount (e.g., `"49.90"`) in the given currency.
///
/// # Errors
///
/// Returns [`PricingError::InvalidPrice`] if the amount is not a non-negative decimal.
pub fn parse_amount(
    amount: &str,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    let value = amount
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| PricingError::InvalidPrice(amount.to_string()))?;

    if value.is_sign_negative() {
        return Err(PricingError::InvalidPrice(amount.to_string()));
    }

    let minor_units = value
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| PricingError::InvalidPrice(amount.to_string()))?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Returns `price × quantity`.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the product does not fit in minor units.
pub fn line_total(
    price: &Money<'static, Currency>,
    quantity: u32,
) -> Result<Money<'static, Currency>, PricingError> {
    let minor = price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, price.currency()))
}

/// Sums amounts, starting from zero in the given currency.
///
/// # Errors
///
/// Returns [`PricingError::Money`] if an amount is in a different currency.
pub fn sum<I>(
    amounts: I,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError>
where
    I: IntoIterator<Item = Money<'static, Currency>>,
{
    let total = amounts
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, amount| acc.add(amount))?;

    Ok(total)
}

/// Value of each interest-free instalment, rounded half away from zero to the cent.
///
/// # Errors
///
/// Returns [`PricingError::NoInstallments`] when `count` is zero.
pub fn installment(
    total: &Money<'static, Currency>,
    count: u32,
) -> Result<Money<'static, Currency>, PricingError> {
    if count == 0 {
        return Err(PricingError::NoInstallments);
    }

    let minor = (Decimal::from(total.to_minor_units()) / Decimal::from(count))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, total.currency()))
}

/// A priced line of an order summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    /// Product identifier
    pub product: ProductId,

    /// Product name at the time of the summary
    pub name: String,

    /// Unit price
    pub unit_price: Money<'static, Currency>,

    /// Quantity
    pub quantity: u32,

    /// `unit_price × quantity`
    pub total: Money<'static, Currency>,
}

/// Priced snapshot of a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    /// Lines in cart order
    pub lines: Vec<SummaryLine>,

    /// Sum of line totals
    pub subtotal: Money<'static, Currency>,

    /// Shipping fee
    pub shipping: Money<'static, Currency>,

    /// Subtotal plus shipping
    pub total: Money<'static, Currency>,
}

impl OrderSummary {
    /// Value of each of the advertised interest-free instalments.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the division overflows.
    pub fn installment(&self) -> Result<Money<'static, Currency>, PricingError> {
        installment(&self.total, INSTALLMENTS)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_money_reads_brl_amounts() -> TestResult {
        let price = parse_money("4999.00 BRL")?;

        assert_eq!(price, Money::from_minor(499_900, BRL));

        Ok(())
    }

    #[test]
    fn parse_money_rejects_invalid_format() {
        let result = parse_money("4999.00BRL");

        assert!(matches!(result, Err(PricingError::InvalidPrice(_))));
    }

    #[test]
    fn parse_money_rejects_trailing_parts() {
        let result = parse_money("4999.00 BRL extra");

        assert!(matches!(result, Err(PricingError::InvalidPrice(_))));
    }

    #[test]
    fn parse_money_rejects_unknown_currency() {
        let result = parse_money("2.99 ABC");

        assert!(matches!(result, Err(PricingError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_amount_rejects_negative_values() {
        let result = parse_amount("-1.00", BRL);

        assert!(matches!(result, Err(PricingError::InvalidPrice(_))));
    }

    #[test]
    fn line_total_multiplies_by_quantity() -> TestResult {
        let total = line_total(&Money::from_minor(499_900, BRL), 2)?;

        assert_eq!(total, Money::from_minor(999_800, BRL));

        Ok(())
    }

    #[test]
    fn line_total_reports_overflow() {
        let result = line_total(&Money::from_minor(i64::MAX, BRL), 2);

        assert_eq!(result, Err(PricingError::Overflow));
    }

    #[test]
    fn sum_of_nothing_is_zero() -> TestResult {
        assert_eq!(sum([], BRL)?, Money::from_minor(0, BRL));

        Ok(())
    }

    #[test]
    fn sum_rejects_mixed_currencies() {
        let result = sum(
            [Money::from_minor(100, BRL), Money::from_minor(100, USD)],
            BRL,
        );

        assert!(matches!(result, Err(PricingError::Money(_))));
    }

    #[test]
    fn installment_splits_total_into_twelve() -> TestResult {
        let each = installment(&Money::from_minor(3_499_700, BRL), INSTALLMENTS)?;

        // 34997.00 / 12 = 2916.4166...
        assert_eq!(each, Money::from_minor(291_642, BRL));

        Ok(())
    }

    #[test]
    fn installment_rejects_zero_count() {
        let result = installment(&Money::from_minor(100, BRL), 0);

        assert_eq!(result, Err(PricingError::NoInstallments));
    }
}
