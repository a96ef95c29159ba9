use std::{
    io::{self, Write},
    time::Instant,
};

use clap::Args;
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing::info;
use vitrine::{context::StoreContext, receipt::write_summary};

use crate::cli::{CliError, DEMO_EMAIL};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Email to sign in with
    #[arg(long, default_value = DEMO_EMAIL)]
    email: String,

    /// Password to sign in with
    #[arg(long, default_value = "demo", hide_default_value = true)]
    password: String,

    /// Product identifiers to add, one unit per occurrence
    #[arg(required = true)]
    products: Vec<String>,
}

pub(crate) async fn run(context: &StoreContext, args: CheckoutArgs) -> Result<(), CliError> {
    let mut store = context.storefront();

    store.login(&args.email, &args.password).await?;

    for id in &args.products {
        store.add_to_cart(id)?;
    }

    let start = Instant::now();
    let confirmation = store.checkout().await?;
    let elapsed = start.elapsed();

    info!(order = %confirmation.number, "checkout finished");

    let mut out = io::stdout().lock();

    writeln!(out, "Pedido {}", confirmation.number)?;
    writeln!(
        out,
        "Cliente {} · {}",
        confirmation.customer, confirmation.placed_at
    )?;

    write_summary(&mut out, &confirmation.summary)?;

    writeln!(out, "\nPagamento aprovado em {}", elapsed.human(Truncate::Nano))?;

    Ok(())
}
