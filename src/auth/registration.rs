//! Registration form.

use std::fmt;

use crate::auth::{AuthError, Registration};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Digits in a CPF once punctuation is stripped.
pub const CPF_DIGITS: usize = 11;

/// Raw registration form input, as typed by the user.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address
    pub email: String,

    /// CPF, digits with or without punctuation
    pub cpf: String,

    /// Age as typed
    pub age: String,

    /// Phone number
    pub phone: String,

    /// City
    pub city: String,

    /// Password
    pub password: String,

    /// Password, typed again
    pub confirm_password: String,

    /// Terms of use checkbox
    pub accept_terms: bool,
}

impl RegistrationForm {
    /// Check the form and turn it into a [`Registration`].
    ///
    /// Required fields are checked first, then the CPF, the password pair, the terms and
    /// finally the age.
    ///
    /// # Errors
    ///
    /// Returns the first [`AuthError`] the form fails on.
    pub fn validate(self) -> Result<Registration, AuthError> {
        for (name, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("cpf", &self.cpf),
            ("age", &self.age),
            ("phone", &self.phone),
            ("city", &self.city),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(AuthError::MissingField(name));
            }
        }

        let cpf_digits = self.cpf.chars().filter(char::is_ascii_digit).count();

        if cpf_digits != CPF_DIGITS {
            return Err(AuthError::InvalidCpf(self.cpf));
        }

        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort(MIN_PASSWORD_LEN));
        }

        if !self.accept_terms {
            return Err(AuthError::TermsNotAccepted);
        }

        let age = self
            .age
            .trim()
            .parse::<u8>()
            .map_err(|_err| AuthError::InvalidAge(self.age.clone()))?;

        Ok(Registration {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            cpf: self.cpf,
            phone: self.phone,
            city: self.city,
            age,
            password: self.password,
        })
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("city", &self.city)
            .field("accept_terms", &self.accept_terms)
            .finish_non_exhaustive()
    }
}
