//! Receipt

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::pricing::{INSTALLMENTS, OrderSummary, PricingError};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Instalment calculation failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// IO error
    #[error("IO error")]
    Io(#[from] io::Error),
}

/// Write an order summary as a table followed by the totals.
///
/// # Errors
///
/// Returns an error if the instalment cannot be computed or writing fails.
pub fn write_summary(mut out: impl io::Write, summary: &OrderSummary) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Produto", "Preço", "Qtd", "Total"]);

    for (index, line) in summary.lines.iter().enumerate() {
        builder.push_record([
            format!("#{:<3}", index + 1),
            line.name.clone(),
            format!("{}", line.unit_price),
            line.quantity.to_string(),
            format!("{}", line.total),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "\n{table}")?;

    let installment = summary.installment()?;

    write_total_line(&mut out, "Subtotal:", &format!("{}", summary.subtotal))?;
    write_total_line(&mut out, "Frete:", &shipping_label(&summary.shipping))?;
    write_total_line(&mut out, "Total:", &format!("{}", summary.total))?;
    write_total_line(
        &mut out,
        "",
        &format!("ou {INSTALLMENTS}x de {installment} sem juros"),
    )?;

    Ok(())
}

/// Shipping as shown to shoppers: free shipping reads as "Grátis".
#[must_use]
pub fn shipping_label(shipping: &Money<'_, Currency>) -> String {
    if shipping.to_minor_units() == 0 {
        "Grátis".to_string()
    } else {
        format!("{shipping}")
    }
}

fn write_total_line(out: &mut impl io::Write, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, " {label:<10} {value}")
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::BRL;
    use testresult::TestResult;

    use crate::pricing::SummaryLine;

    use super::*;

    fn summary() -> OrderSummary {
        let unit_price = Money::from_minor(499_900, BRL);
        let total = Money::from_minor(999_800, BRL);

        OrderSummary {
            lines: vec![SummaryLine {
                product: "2".into(),
                name: "Midnight Sport Pro".to_string(),
                unit_price,
                quantity: 2,
                total,
            }],
            subtotal: total,
            shipping: Money::from_minor(0, BRL),
            total,
        }
    }

    #[test]
    fn summary_lists_lines_and_totals() -> TestResult {
        let mut out = Vec::new();

        write_summary(&mut out, &summary())?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Midnight Sport Pro"), "missing product: {text}");
        assert!(text.contains("Grátis"), "missing free shipping: {text}");
        assert!(text.contains("12x"), "missing instalments: {text}");

        Ok(())
    }

    #[test]
    fn paid_shipping_shows_amount() {
        let label = shipping_label(&Money::from_minor(4_990, BRL));

        assert_ne!(label, "Grátis");
    }
}
