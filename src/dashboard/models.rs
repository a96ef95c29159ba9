//! Dashboard Models

use std::{fmt, str::FromStr};

use jiff::civil::Date;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{dashboard::DashboardError, products::Category};

/// Headline figures
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Orders placed
    pub total_orders: u32,

    /// Distinct customers
    pub total_customers: u32,

    /// Revenue across all orders
    pub total_revenue: Money<'static, Currency>,

    /// Units sold
    pub products_sold: u32,

    /// Month-over-month growth in percent points, e.g. `23.5`
    pub monthly_growth: Decimal,
}

/// Revenue Model
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    /// Short month name, e.g. `Jan`
    pub month: String,

    /// Revenue booked in the month
    pub revenue: Money<'static, Currency>,
}

/// Category Share Model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CategoryShare {
    /// Category
    pub category: Category,

    /// Share of sales in percent points
    pub share: u8,
}

/// Top Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct TopProduct {
    /// Product name
    pub name: String,

    /// Units sold
    pub sales: u32,

    /// Revenue from the product
    pub revenue: Money<'static, Currency>,
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Paid, not yet shipped
    Pago,

    /// Shipped
    Enviado,

    /// Delivered
    Entregue,
}

impl OrderStatus {
    #[must_use]
    /// Identifier used in the order filter
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pago => "pago",
            OrderStatus::Enviado => "enviado",
            OrderStatus::Entregue => "entregue",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order list status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every status
    #[default]
    All,

    /// One status only
    Only(OrderStatus),
}

impl StatusFilter {
    /// Check whether an order status passes the filter.
    #[must_use]
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(only) => only == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "pago" => Ok(StatusFilter::Only(OrderStatus::Pago)),
            "enviado" => Ok(StatusFilter::Only(OrderStatus::Enviado)),
            "entregue" => Ok(StatusFilter::Only(OrderStatus::Entregue)),
            other => Err(DashboardError::UnknownStatus(other.to_string())),
        }
    }
}

/// Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Order number, e.g. `#12345`
    pub id: String,

    /// Customer name
    pub customer: String,

    /// Product name
    pub product: String,

    /// Shipping city
    pub city: String,

    /// Order total
    pub total: Money<'static, Currency>,

    /// Status
    pub status: OrderStatus,

    /// Date the order was placed
    pub date: Date,
}

/// Customer Model
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Customer identifier
    pub id: String,

    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// City
    pub city: String,

    /// Orders placed
    pub orders: u32,

    /// Lifetime spend
    pub total_spent: Money<'static, Currency>,
}
