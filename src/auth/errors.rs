//! Auth errors.

use thiserror::Error;

/// Sign-in and registration failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// An email or password field was empty
    #[error("email and password are required")]
    MissingCredentials,

    /// A required registration field was blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// CPF without exactly 11 digits
    #[error("CPF must contain 11 digits: {0}")]
    InvalidCpf(String),

    /// Password and confirmation differ
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Password shorter than the minimum
    #[error("password must have at least {0} characters")]
    PasswordTooShort(usize),

    /// Terms of use not accepted
    #[error("terms of use must be accepted")]
    TermsNotAccepted,

    /// Age is not a number between 0 and 255
    #[error("invalid age: {0}")]
    InvalidAge(String),
}
