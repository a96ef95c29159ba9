//! Storefront errors.

use thiserror::Error;

use crate::{auth::AuthError, cart::CartError, products::ProductId};

/// Reasons a storefront action is refused or fails.
#[derive(Debug, Error, PartialEq)]
pub enum StorefrontError {
    /// The action needs a signed-in user.
    #[error("login required")]
    NotAuthenticated,

    /// The action needs a vendor account.
    #[error("vendor account required")]
    NotVendor,

    /// No product has the identifier.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// The product cannot be added to a cart.
    #[error("product out of stock: {0}")]
    OutOfStock(ProductId),

    /// Checkout with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The email address is blank or malformed.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// A required form field is blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Sign-in or registration failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Cart totals could not be computed.
    #[error(transparent)]
    Cart(#[from] CartError),
}
