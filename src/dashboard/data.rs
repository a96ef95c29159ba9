//! Dashboard Data
//!
//! Wire shapes of the dashboard data file. Amounts are kept as text until converted.

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    dashboard::{
        DashboardError,
        models::{
            CategoryShare, Customer, DashboardStats, MonthlyRevenue, Order, OrderStatus,
            TopProduct,
        },
    },
    pricing::parse_money,
};

/// Dashboard data file
#[derive(Debug, Deserialize)]
pub(crate) struct DashboardFixture {
    pub stats: StatsFixture,
    pub revenue_by_month: Vec<MonthlyRevenueFixture>,
    pub sales_by_category: Vec<CategoryShare>,
    pub top_products: Vec<TopProductFixture>,
    pub orders: Vec<OrderFixture>,
    pub customers: Vec<CustomerFixture>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsFixture {
    pub total_orders: u32,
    pub total_customers: u32,
    pub total_revenue: String,
    pub products_sold: u32,
    pub monthly_growth: String,
}

impl TryFrom<StatsFixture> for DashboardStats {
    type Error = DashboardError;

    fn try_from(fixture: StatsFixture) -> Result<Self, Self::Error> {
        let monthly_growth = fixture
            .monthly_growth
            .parse::<Decimal>()
            .map_err(|_err| DashboardError::InvalidGrowth(fixture.monthly_growth.clone()))?;

        Ok(DashboardStats {
            total_orders: fixture.total_orders,
            total_customers: fixture.total_customers,
            total_revenue: parse_money(&fixture.total_revenue)?,
            products_sold: fixture.products_sold,
            monthly_growth,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct MonthlyRevenueFixture {
    pub month: String,
    pub revenue: String,
}

impl TryFrom<MonthlyRevenueFixture> for MonthlyRevenue {
    type Error = DashboardError;

    fn try_from(fixture: MonthlyRevenueFixture) -> Result<Self, Self::Error> {
        Ok(MonthlyRevenue {
            revenue: parse_money(&fixture.revenue)?,
            month: fixture.month,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopProductFixture {
    pub name: String,
    pub sales: u32,
    pub revenue: String,
}

impl TryFrom<TopProductFixture> for TopProduct {
    type Error = DashboardError;

    fn try_from(fixture: TopProductFixture) -> Result<Self, Self::Error> {
        Ok(TopProduct {
            revenue: parse_money(&fixture.revenue)?,
            name: fixture.name,
            sales: fixture.sales,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderFixture {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub city: String,
    pub total: String,
    pub status: OrderStatus,
    pub date: Date,
}

impl TryFrom<OrderFixture> for Order {
    type Error = DashboardError;

    fn try_from(fixture: OrderFixture) -> Result<Self, Self::Error> {
        Ok(Order {
            total: parse_money(&fixture.total)?,
            id: fixture.id,
            customer: fixture.customer,
            product: fixture.product,
            city: fixture.city,
            status: fixture.status,
            date: fixture.date,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomerFixture {
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub orders: u32,
    pub total_spent: String,
}

impl TryFrom<CustomerFixture> for Customer {
    type Error = DashboardError;

    fn try_from(fixture: CustomerFixture) -> Result<Self, Self::Error> {
        Ok(Customer {
            total_spent: parse_money(&fixture.total_spent)?,
            id: fixture.id,
            name: fixture.name,
            email: fixture.email,
            city: fixture.city,
            orders: fixture.orders,
        })
    }
}
