use std::io::{self, Write};

use clap::Args;
use tabled::builder::Builder;
use vitrine::{context::StoreContext, dashboard::StatusFilter};

use crate::cli::{CliError, DEMO_EMAIL, write_table};

#[derive(Debug, Args)]
pub(crate) struct DashboardArgs {
    /// Vendor email to sign in with
    #[arg(long, default_value = DEMO_EMAIL)]
    email: String,

    /// Password to sign in with
    #[arg(long, default_value = "demo", hide_default_value = true)]
    password: String,

    /// Order status filter (all, pago, enviado, entregue)
    #[arg(long, default_value = "all")]
    status: StatusFilter,

    /// Search orders by id, customer or product
    #[arg(long, default_value = "")]
    search: String,
}

pub(crate) async fn run(context: &StoreContext, args: DashboardArgs) -> Result<(), CliError> {
    let mut store = context.storefront();

    store.login(&args.email, &args.password).await?;

    let dashboard = store.dashboard()?;
    let stats = dashboard.stats();

    let mut out = io::stdout().lock();

    writeln!(out, "Pedidos:          {}", stats.total_orders)?;
    writeln!(out, "Clientes:         {}", stats.total_customers)?;
    writeln!(out, "Faturamento:      {}", stats.total_revenue)?;
    writeln!(out, "Produtos vendidos: {}", stats.products_sold)?;
    writeln!(out, "Crescimento:      +{}%", stats.monthly_growth)?;
    writeln!(out, "Ticket médio:     {}", dashboard.average_ticket()?)?;
    writeln!(out, "Saldo disponível: {}", dashboard.available_balance()?)?;
    writeln!(out)?;

    let mut categories = Builder::default();

    categories.push_record(["Categoria", "Vendas"]);

    for share in dashboard.sales_by_category() {
        categories.push_record([
            share.category.display_name().to_string(),
            format!("{}%", share.share),
        ]);
    }

    write_table(&mut out, categories)?;

    let mut orders = Builder::default();

    orders.push_record(["Pedido", "Cliente", "Produto", "Cidade", "Total", "Status", "Data"]);

    for order in dashboard.search_orders(&args.search, args.status) {
        orders.push_record([
            order.id.clone(),
            order.customer.clone(),
            order.product.clone(),
            order.city.clone(),
            format!("{}", order.total),
            order.status.to_string(),
            order.date.to_string(),
        ]);
    }

    write_table(&mut out, orders)?;

    Ok(())
}
