//! Vitrine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    auth::{
        AuthBackend, AuthError, AuthSession, Credentials, Registration, RegistrationForm,
        SimulatedAuthBackend, User,
    },
    cart::{Cart, CartError, CartLine, shipping::ShippingPolicy},
    catalog::{Catalog, CatalogError},
    context::{StoreContext, StoreInitError},
    dashboard::{Dashboard, DashboardError, OrderStatus, ProductAvailability, StatusFilter},
    filters::{FilterError, FilterState, apply, price_range::PriceRange, sort::SortKey},
    pricing::{OrderSummary, PricingError, SummaryLine},
    products::{CaseSize, Category, Product, ProductId, ProductSpecs},
    receipt::{ReceiptError, write_summary},
    settings::StoreSettings,
    storefront::{ContactMessage, OrderConfirmation, Storefront, StorefrontError},
};
