//! Storefront models.

use jiff::Timestamp;
use rusty_money::{Money, iso::Currency};
use uuid::Uuid;

use crate::{pricing::OrderSummary, storefront::StorefrontError};

/// Receipt of a completed checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// Order number
    pub number: Uuid,

    /// Email of the customer who placed the order
    pub customer: String,

    /// Cart as it was at checkout
    pub summary: OrderSummary,

    /// When checkout completed
    pub placed_at: Timestamp,
}

impl OrderConfirmation {
    /// Amount charged.
    #[must_use]
    pub fn total(&self) -> Money<'static, Currency> {
        self.summary.total
    }
}

/// Contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,

    /// Reply-to address
    pub email: String,

    /// Subject line
    pub subject: String,

    /// Message body
    pub message: String,
}

impl ContactMessage {
    /// Check every field is filled in and the email looks like one.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::MissingField`] for the first blank field, or
    /// [`StorefrontError::InvalidEmail`].
    pub fn validate(&self) -> Result<(), StorefrontError> {
        for (name, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(StorefrontError::MissingField(name));
            }
        }

        validate_email(&self.email)
    }
}

/// Minimal email shape check: something on both sides of a single `@`.
///
/// # Errors
///
/// Returns [`StorefrontError::InvalidEmail`] if the address does not fit.
pub fn validate_email(email: &str) -> Result<(), StorefrontError> {
    let email = email.trim();

    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(StorefrontError::InvalidEmail(email.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_both_parts() {
        assert_eq!(validate_email("ana@example.com"), Ok(()));
        assert!(validate_email("").is_err());
        assert!(validate_email("ana@").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ana@@example.com").is_err());
    }

    #[test]
    fn contact_message_reports_first_blank_field() {
        let message = ContactMessage {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: String::new(),
            message: "Olá".to_string(),
        };

        assert_eq!(
            message.validate(),
            Err(StorefrontError::MissingField("subject"))
        );
    }
}
