use std::io::{self, Write};

use clap::Args;
use tabled::builder::Builder;
use vitrine::{context::StoreContext, pricing::INSTALLMENTS};

use crate::cli::{CliError, write_table};

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product identifier
    id: String,
}

pub(crate) fn run(context: &StoreContext, args: &ProductArgs) -> Result<(), CliError> {
    let store = context.storefront();
    let product = store.product(&args.id)?;
    let each = product.installment()?;

    let mut out = io::stdout().lock();

    writeln!(out, "{} · {}", product.brand, product.name)?;
    writeln!(
        out,
        "{} {}",
        product.category.icon(),
        product.category.display_name()
    )?;

    match (product.original_price, product.discount_points()) {
        (Some(original), Some(points)) => {
            writeln!(out, "{} (de {original}, -{points}%)", product.price)?;
        }
        _ => writeln!(out, "{}", product.price)?,
    }

    writeln!(out, "ou {INSTALLMENTS}x de {each} sem juros")?;
    writeln!(out, "Nota {} ({} avaliações)", product.rating, product.reviews)?;
    writeln!(
        out,
        "{}",
        if product.in_stock {
            "Em estoque"
        } else {
            "Esgotado"
        }
    )?;
    writeln!(out, "\n{}\n", product.description)?;

    let mut specs = Builder::default();

    specs.push_record(["Especificação", "Valor"]);
    specs.push_record(["Material", product.specs.material.as_str()]);
    specs.push_record(["Movimento", product.specs.movement.as_str()]);
    specs.push_record(["Resistência à água", product.specs.water_resistance.as_str()]);
    specs.push_record(["Diâmetro", product.specs.case_diameter.as_str()]);
    specs.push_record(["Garantia", product.specs.warranty.as_str()]);

    write_table(&mut out, specs)?;

    let related = context.catalog.related(&args.id)?;

    if !related.is_empty() {
        let mut builder = Builder::default();

        builder.push_record(["Id", "Você também pode gostar", "Preço"]);

        for product in related {
            builder.push_record([
                product.id.to_string(),
                product.name.clone(),
                format!("{}", product.price),
            ]);
        }

        write_table(&mut out, builder)?;
    }

    Ok(())
}
