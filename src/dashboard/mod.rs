//! Vendor Dashboard
//!
//! Sales analytics for vendor accounts: headline stats, revenue by month, sales by category,
//! best sellers, and searchable order, customer and product lists. The figures are demo data
//! bundled with the crate.

use std::{fs, path::Path, sync::Arc};

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    catalog::Catalog,
    dashboard::data::DashboardFixture,
    pricing::PricingError,
    products::{Product, ProductId},
};

mod data;
pub mod models;

pub use models::{
    CategoryShare, Customer, DashboardStats, MonthlyRevenue, Order, OrderStatus, StatusFilter,
    TopProduct,
};

/// Dashboard data bundled with the crate.
const BUNDLED_DASHBOARD: &str = include_str!("../../fixtures/dashboard.yml");

/// Number of orders in the overview's recent orders table.
pub const RECENT_ORDERS: usize = 5;

/// Dashboard data and lookup errors
#[derive(Debug, Error)]
pub enum DashboardError {
    /// IO error reading a data file
    #[error("Failed to read dashboard file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid amount or unknown currency
    #[error(transparent)]
    Price(#[from] PricingError),

    /// Growth is not a decimal
    #[error("Invalid monthly growth: {0}")]
    InvalidGrowth(String),

    /// The value does not name an order status
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    /// There are no orders to average over
    #[error("No orders")]
    NoOrders,

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// Dashboard
#[derive(Debug, Clone)]
pub struct Dashboard {
    stats: DashboardStats,
    revenue_by_month: Vec<MonthlyRevenue>,
    sales_by_category: Vec<CategoryShare>,
    top_products: Vec<TopProduct>,

    /// Newest first
    orders: Vec<Order>,
    customers: Vec<Customer>,
}

impl Dashboard {
    /// Load the dashboard data bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data fails to parse.
    pub fn bundled() -> Result<Self, DashboardError> {
        Self::from_yaml(BUNDLED_DASHBOARD)
    }

    /// Load dashboard data from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse dashboard data from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid dashboard data.
    pub fn from_yaml(contents: &str) -> Result<Self, DashboardError> {
        let fixture: DashboardFixture = serde_norway::from_str(contents)?;

        Ok(Self {
            stats: fixture.stats.try_into()?,
            revenue_by_month: convert_all(fixture.revenue_by_month)?,
            sales_by_category: fixture.sales_by_category,
            top_products: convert_all(fixture.top_products)?,
            orders: convert_all(fixture.orders)?,
            customers: convert_all(fixture.customers)?,
        })
    }

    /// Headline figures.
    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    /// Revenue per month, oldest first.
    pub fn revenue_by_month(&self) -> &[MonthlyRevenue] {
        &self.revenue_by_month
    }

    /// Share of sales per category.
    pub fn sales_by_category(&self) -> &[CategoryShare] {
        &self.sales_by_category
    }

    /// Best-selling products.
    pub fn top_products(&self) -> &[TopProduct] {
        &self.top_products
    }

    /// All orders, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Customer accounts.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Revenue per order, rounded half away from zero to the cent.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NoOrders`] when the order count is zero.
    pub fn average_ticket(&self) -> Result<Money<'static, Currency>, DashboardError> {
        if self.stats.total_orders == 0 {
            return Err(DashboardError::NoOrders);
        }

        let revenue = Decimal::from(self.stats.total_revenue.to_minor_units());
        let average = revenue / Decimal::from(self.stats.total_orders);

        to_money(average, self.stats.total_revenue.currency())
    }

    /// Revenue available for payout: 85 % of total revenue.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Price`] if the result does not fit in minor units.
    pub fn available_balance(&self) -> Result<Money<'static, Currency>, DashboardError> {
        let payout = Percentage::from(Decimal::new(85, 2));
        let revenue = Decimal::from(self.stats.total_revenue.to_minor_units());

        to_money(payout * revenue, self.stats.total_revenue.currency())
    }

    /// The most recent orders shown on the overview.
    pub fn recent_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().take(RECENT_ORDERS)
    }

    /// Orders whose id, customer or product contains `query` (case-insensitive) and whose
    /// status passes `status`.
    pub fn search_orders(&self, query: &str, status: StatusFilter) -> Vec<&Order> {
        let query = query.to_lowercase();

        self.orders
            .iter()
            .filter(|order| {
                contains(&order.id, &query)
                    || contains(&order.customer, &query)
                    || contains(&order.product, &query)
            })
            .filter(|order| status.matches(order.status))
            .collect()
    }

    /// Customers whose name, email or city contains `query` (case-insensitive).
    pub fn search_customers(&self, query: &str) -> Vec<&Customer> {
        let query = query.to_lowercase();

        self.customers
            .iter()
            .filter(|customer| {
                contains(&customer.name, &query)
                    || contains(&customer.email, &query)
                    || contains(&customer.city, &query)
            })
            .collect()
    }
}

/// Catalog products whose name or category contains `query` (case-insensitive), in catalog
/// order.
pub fn search_products<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Arc<Product>> {
    let query = query.to_lowercase();

    catalog
        .iter()
        .filter(|product| {
            contains(&product.name, &query) || contains(product.category.as_str(), &query)
        })
        .collect()
}

/// Vendor-side availability switches, seeded from the catalog's stock flags. Toggling a
/// switch never touches the catalog itself.
#[derive(Debug, Clone, Default)]
pub struct ProductAvailability {
    available: FxHashMap<ProductId, bool>,
}

impl ProductAvailability {
    /// Seed the switches from the catalog.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            available: catalog
                .iter()
                .map(|product| (product.id.clone(), product.in_stock))
                .collect(),
        }
    }

    /// Current switch state.
    pub fn is_available(&self, id: &str) -> Option<bool> {
        self.available.get(id).copied()
    }

    /// Flip a product's switch and return the new state.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::ProductNotFound`] if the product is unknown.
    pub fn toggle(&mut self, id: &str) -> Result<bool, DashboardError> {
        let available = self
            .available
            .get_mut(id)
            .ok_or_else(|| DashboardError::ProductNotFound(id.to_string()))?;

        *available = !*available;

        Ok(*available)
    }
}

fn convert_all<F, T>(fixtures: Vec<F>) -> Result<Vec<T>, DashboardError>
where
    T: TryFrom<F, Error = DashboardError>,
{
    fixtures.into_iter().map(T::try_from).collect()
}

fn to_money(
    minor_units: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, DashboardError> {
    let minor = minor_units
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, currency))
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}
