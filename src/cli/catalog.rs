use std::io::{self, Write};

use clap::Args;
use tabled::builder::Builder;
use vitrine::{
    context::StoreContext,
    filters::{FilterState, price_range::PriceRange, sort::SortKey},
    products::{CaseSize, Category},
};

use crate::cli::{CliError, write_table};

#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Category to include (masculino, feminino, esportivo, luxo); repeatable
    #[arg(long = "category", short)]
    categories: Vec<Category>,

    /// Case size to include, e.g. 42mm; repeatable
    #[arg(long = "size", short)]
    sizes: Vec<CaseSize>,

    /// Price range (0-5000, 5000-10000, 10000-20000, 20000+)
    #[arg(long, short)]
    price: Option<PriceRange>,

    /// Sort order (featured, price-low, price-high, best-selling, newest)
    #[arg(long, short, default_value = "featured")]
    sort: SortKey,
}

pub(crate) fn run(context: &StoreContext, args: CatalogArgs) -> Result<(), CliError> {
    let state = FilterState::new()
        .with_categories(args.categories)
        .with_sizes(args.sizes)
        .with_price_range(args.price)
        .with_sort(args.sort);

    let listing = context.storefront().listing(&state);

    let mut builder = Builder::default();

    builder.push_record([
        "Id", "Nome", "Marca", "Categoria", "Tamanho", "Preço", "Nota", "Vendidos", "",
    ]);

    for product in &listing {
        let mut badges = Vec::new();

        if product.is_new {
            badges.push("Novo".to_string());
        }

        if let Some(points) = product.discount_points() {
            badges.push(format!("-{points}%"));
        }

        if !product.in_stock {
            badges.push("Esgotado".to_string());
        }

        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.brand.clone(),
            product.category.display_name().to_string(),
            product.size.to_string(),
            format!("{}", product.price),
            product.rating.to_string(),
            product.sold_count.to_string(),
            badges.join(" "),
        ]);
    }

    let mut out = io::stdout().lock();

    write_table(&mut out, builder)?;

    writeln!(
        out,
        "{} produtos encontrados ({} filtros, ordem: {})",
        listing.len(),
        state.active_count(),
        state.sort().label()
    )?;

    Ok(())
}
