//! Vitrine
//!
//! Vitrine is the storefront core of a luxury watch shop: a static catalog, a filter and sort
//! engine, a cart session with derived totals, a mock authentication session, a simulated
//! checkout and the vendor dashboard's analytics.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod filters;
pub mod observability;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod settings;
pub mod storefront;
