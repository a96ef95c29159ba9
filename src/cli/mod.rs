use std::io;

use clap::{Parser, Subcommand};
use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Rows},
};
use thiserror::Error;
use vitrine::{
    catalog::CatalogError,
    config::{ConfigError, StoreConfig, logging::LoggingConfig},
    context::{StoreContext, StoreInitError},
    dashboard::DashboardError,
    observability::{ObservabilityError, init_logging},
    pricing::PricingError,
    receipt::ReceiptError,
    storefront::StorefrontError,
};

mod catalog;
mod checkout;
mod dashboard;
mod product;

/// Account used by commands that need a signed-in user.
const DEMO_EMAIL: &str = "demo@christianwatches.com";

#[derive(Debug, Parser)]
#[command(name = "vitrine", about = "Vitrine storefront", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(flatten)]
    store: StoreConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the catalog with filters and sorting
    Catalog(catalog::CatalogArgs),

    /// Show one product and its related products
    Product(product::ProductArgs),

    /// Sign in, fill a cart and check out
    Checkout(checkout::CheckoutArgs),

    /// Show the vendor dashboard
    Dashboard(dashboard::DashboardArgs),
}

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] ObservabilityError),

    #[error(transparent)]
    Init(#[from] StoreInitError),

    #[error(transparent)]
    Store(#[from] StorefrontError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), CliError> {
        init_logging(&self.logging)?;

        let context = StoreContext::bundled(self.store.settings()?)?;

        match self.command {
            Commands::Catalog(args) => catalog::run(&context, args),
            Commands::Product(args) => product::run(&context, &args),
            Commands::Checkout(args) => checkout::run(&context, args).await,
            Commands::Dashboard(args) => dashboard::run(&context, args).await,
        }
    }
}

fn write_table(out: &mut impl io::Write, builder: Builder) -> io::Result<()> {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "{table}")
}
