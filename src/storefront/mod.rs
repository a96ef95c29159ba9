//! Storefront
//!
//! [`Storefront`] owns one shopper's session: who is signed in and what is in the cart. It is
//! the only way to mutate either. Adding to the cart and checking out need a signed-in user;
//! the dashboard needs a vendor.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use vitrine::prelude::*;
//!
//! let context = StoreContext::bundled(StoreSettings::default())?;
//! let mut store = context.storefront();
//!
//! store.login("demo@christianwatches.com", "secret").await?;
//! store.add_to_cart("2")?;
//! store.add_to_cart("2")?;
//! store.add_to_cart("5")?;
//!
//! let confirmation = store.checkout().await?;
//! assert_eq!(confirmation.summary.item_count(), 3);
//! # Ok(())
//! # }
//! ```

use std::{sync::Arc, time::Duration};

use jiff::Timestamp;
use rusty_money::{Money, iso::Currency};
use tokio::time::sleep;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    auth::{AuthSession, RegistrationForm, User},
    cart::{Cart, CartLine},
    catalog::Catalog,
    context::StoreContext,
    dashboard::Dashboard,
    filters::{self, FilterState},
    products::Product,
};

mod errors;
mod models;

pub use errors::*;
pub use models::*;

/// A shopper's session: auth state plus cart.
#[derive(Debug)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    dashboard: Arc<Dashboard>,
    auth: AuthSession,
    cart: Cart,
    latency: Duration,
}

impl Storefront {
    /// Open a signed-out session with an empty cart.
    #[must_use]
    pub fn new(context: &StoreContext) -> Self {
        Self {
            catalog: Arc::clone(&context.catalog),
            dashboard: Arc::clone(&context.dashboard),
            auth: AuthSession::new(Arc::clone(&context.auth)),
            cart: Cart::new(context.settings.shipping),
            latency: context.settings.latency,
        }
    }

    /// The catalog this session browses.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Filtered and sorted catalog listing.
    pub fn listing(&self, filters: &FilterState) -> Vec<Arc<Product>> {
        filters::apply(&self.catalog, filters)
    }

    /// Look up a product.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ProductNotFound`] for an unknown identifier.
    pub fn product(&self, id: &str) -> Result<&Arc<Product>, StorefrontError> {
        self.catalog
            .find(id)
            .ok_or_else(|| StorefrontError::ProductNotFound(id.to_string()))
    }

    /// Signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.auth.user()
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Sign in.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Auth`] if the backend refuses the credentials.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, StorefrontError> {
        Ok(self.auth.login(email, password).await?)
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Auth`] if the form is invalid.
    pub async fn register(&mut self, form: RegistrationForm) -> Result<&User, StorefrontError> {
        Ok(self.auth.register(form).await?)
    }

    /// Sign out. The cart is kept.
    pub fn logout(&mut self) -> Option<User> {
        self.auth.logout()
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart lines in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Add one unit of a product to the cart and return the line's quantity.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotAuthenticated`] when signed out,
    /// [`StorefrontError::ProductNotFound`] for an unknown product, or
    /// [`StorefrontError::OutOfStock`]. The cart is unchanged in every case.
    pub fn add_to_cart(&mut self, product_id: &str) -> Result<u32, StorefrontError> {
        if !self.auth.is_authenticated() {
            warn!(product = product_id, "add to cart blocked: login required");

            return Err(StorefrontError::NotAuthenticated);
        }

        let product = Arc::clone(self.product(product_id)?);

        if !product.in_stock {
            warn!(product = product_id, "add to cart blocked: out of stock");

            return Err(StorefrontError::OutOfStock(product.id.clone()));
        }

        let quantity = self.cart.add_item(product);

        debug!(product = product_id, quantity, "added to cart");

        Ok(quantity)
    }

    /// Set a cart line's quantity; zero or less removes it. Returns `false` if the product is
    /// not in the cart.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        let updated = self.cart.set_quantity(product_id, quantity);

        debug!(product = product_id, quantity, updated, "cart quantity set");

        updated
    }

    /// Remove a product from the cart. Returns `false` if it was not there.
    pub fn remove_from_cart(&mut self, product_id: &str) -> bool {
        let removed = self.cart.remove_item(product_id);

        debug!(product = product_id, removed, "removed from cart");

        removed
    }

    /// # Errors
    ///
    /// Returns [`StorefrontError::Cart`] if the amount cannot be computed.
    pub fn subtotal(&self) -> Result<Money<'static, Currency>, StorefrontError> {
        Ok(self.cart.subtotal()?)
    }

    /// # Errors
    ///
    /// Returns [`StorefrontError::Cart`] if the amount cannot be computed.
    pub fn shipping(&self) -> Result<Money<'static, Currency>, StorefrontError> {
        Ok(self.cart.shipping()?)
    }

    /// # Errors
    ///
    /// Returns [`StorefrontError::Cart`] if the amount cannot be computed.
    pub fn total(&self) -> Result<Money<'static, Currency>, StorefrontError> {
        Ok(self.cart.total()?)
    }

    /// Place the order: waits for the simulated payment, then empties the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotAuthenticated`] when signed out,
    /// [`StorefrontError::EmptyCart`] when there is nothing to buy, or
    /// [`StorefrontError::Cart`] if the cart cannot be priced. The cart is kept on error.
    pub async fn checkout(&mut self) -> Result<OrderConfirmation, StorefrontError> {
        let Some(customer) = self.auth.user().map(|user| user.email.clone()) else {
            warn!("checkout blocked: login required");

            return Err(StorefrontError::NotAuthenticated);
        };

        if self.cart.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }

        let summary = self.cart.summary()?;

        sleep(self.latency).await;

        let confirmation = OrderConfirmation {
            number: Uuid::now_v7(),
            customer,
            summary,
            placed_at: Timestamp::now(),
        };

        self.cart.clear();

        info!(
            order = %confirmation.number,
            customer = %confirmation.customer,
            items = confirmation.summary.item_count(),
            total = %confirmation.summary.total,
            "order placed"
        );

        Ok(confirmation)
    }

    /// Subscribe an address to the newsletter.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidEmail`] for a blank or malformed address.
    pub async fn subscribe_newsletter(&self, email: &str) -> Result<(), StorefrontError> {
        validate_email(email)?;

        sleep(self.latency).await;

        info!(email, "newsletter subscription");

        Ok(())
    }

    /// Send a message through the contact form.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::MissingField`] or [`StorefrontError::InvalidEmail`].
    pub async fn send_contact_message(
        &self,
        message: &ContactMessage,
    ) -> Result<(), StorefrontError> {
        message.validate()?;

        sleep(self.latency).await;

        info!(email = %message.email, subject = %message.subject, "contact message sent");

        Ok(())
    }

    /// Vendor analytics.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotAuthenticated`] when signed out, or
    /// [`StorefrontError::NotVendor`] for customer accounts.
    pub fn dashboard(&self) -> Result<&Dashboard, StorefrontError> {
        if !self.auth.is_authenticated() {
            return Err(StorefrontError::NotAuthenticated);
        }

        if !self.auth.is_vendor() {
            warn!("dashboard blocked: vendor account required");

            return Err(StorefrontError::NotVendor);
        }

        Ok(&self.dashboard)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::BRL;
    use testresult::TestResult;

    use crate::{
        auth::{AuthError, MockAuthBackend},
        context::StoreInitError,
        settings::StoreSettings,
    };

    use super::*;

    fn storefront() -> Result<Storefront, StoreInitError> {
        let mut mock = MockAuthBackend::new();
        mock.expect_login().returning(|credentials| {
            if credentials.email.is_empty() || credentials.password.is_empty() {
                Err(AuthError::MissingCredentials)
            } else {
                Ok(User::demo(&credentials.email))
            }
        });

        let settings = StoreSettings {
            latency: Duration::ZERO,
            ..StoreSettings::default()
        };

        Ok(StoreContext::bundled(settings)?
            .with_auth(Arc::new(mock))
            .storefront())
    }

    #[test]
    fn add_to_cart_requires_login() -> TestResult {
        let mut store = storefront()?;

        let result = store.add_to_cart("2");

        assert_eq!(result, Err(StorefrontError::NotAuthenticated));
        assert!(store.cart().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn out_of_stock_products_are_refused() -> TestResult {
        let mut store = storefront()?;
        store.login("ana@example.com", "x").await?;

        let result = store.add_to_cart("8");

        assert_eq!(result, Err(StorefrontError::OutOfStock("8".into())));
        assert!(store.cart().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unknown_products_are_reported() -> TestResult {
        let mut store = storefront()?;
        store.login("ana@example.com", "x").await?;

        let result = store.add_to_cart("999");

        assert_eq!(
            result,
            Err(StorefrontError::ProductNotFound("999".to_string()))
        );

        Ok(())
    }

    #[tokio::test]
    async fn checkout_clears_cart_and_confirms_totals() -> TestResult {
        let mut store = storefront()?;
        store.login("ana@example.com", "x").await?;

        store.add_to_cart("2")?;
        store.add_to_cart("2")?;
        store.add_to_cart("5")?;

        assert_eq!(store.subtotal()?, Money::from_minor(3_499_700, BRL));

        let confirmation = store.checkout().await?;

        assert_eq!(confirmation.customer, "ana@example.com");
        assert_eq!(confirmation.total(), Money::from_minor(3_499_700, BRL));
        assert_eq!(confirmation.summary.item_count(), 3);
        assert!(store.cart().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn checkout_refuses_empty_cart() -> TestResult {
        let mut store = storefront()?;
        store.login("ana@example.com", "x").await?;

        assert_eq!(store.checkout().await, Err(StorefrontError::EmptyCart));

        Ok(())
    }

    #[tokio::test]
    async fn logout_keeps_cart_but_blocks_checkout() -> TestResult {
        let mut store = storefront()?;
        store.login("ana@example.com", "x").await?;
        store.add_to_cart("100")?;

        store.logout();

        assert_eq!(store.lines().len(), 1);
        assert_eq!(
            store.checkout().await,
            Err(StorefrontError::NotAuthenticated)
        );
        assert_eq!(store.lines().len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn cart_edits_do_not_need_login() -> TestResult {
        let mut store = storefront()?;
        store.login("ana@example.com", "x").await?;
        store.add_to_cart("3")?;
        store.logout();

        assert!(store.update_quantity("3", 4));
        assert_eq!(store.cart().total_item_count(), 4);
        assert!(store.remove_from_cart("3"));
        assert!(!store.remove_from_cart("3"));

        Ok(())
    }

    #[tokio::test]
    async fn dashboard_is_vendor_only() -> TestResult {
        let mut store = storefront()?;

        assert!(matches!(
            store.dashboard(),
            Err(StorefrontError::NotAuthenticated)
        ));

        store.login("demo@christianwatches.com", "x").await?;

        assert_eq!(store.dashboard()?.stats().total_orders, 156);

        Ok(())
    }

    #[tokio::test]
    async fn newsletter_rejects_blank_email() -> TestResult {
        let store = storefront()?;

        assert_eq!(
            store.subscribe_newsletter("").await,
            Err(StorefrontError::InvalidEmail(String::new()))
        );
        store.subscribe_newsletter("ana@example.com").await?;

        Ok(())
    }
}
