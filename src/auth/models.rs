//! Auth models.

use std::fmt;

/// Identifier of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    /// Identifier as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User identifier
    pub id: UserId,

    /// Email address
    pub email: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// CPF, as entered
    pub cpf: String,

    /// Phone number
    pub phone: String,

    /// City
    pub city: String,

    /// Age in years
    pub age: u8,

    /// Vendors can open the dashboard.
    pub is_vendor: bool,
}

impl User {
    /// The demo vendor account every login resolves to, under the given email.
    #[must_use]
    pub fn demo(email: &str) -> Self {
        Self {
            id: UserId::new("1"),
            email: email.to_string(),
            first_name: "João".to_string(),
            last_name: "Silva".to_string(),
            cpf: "123.456.789-00".to_string(),
            phone: "(11) 99999-9999".to_string(),
            city: "São Paulo".to_string(),
            age: 35,
            is_vendor: true,
        }
    }

    #[must_use]
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Login form input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

impl Credentials {
    /// Create credentials from an email and password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A validated registration, ready for the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    /// Email address
    pub email: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// CPF, as entered
    pub cpf: String,

    /// Phone number
    pub phone: String,

    /// City
    pub city: String,

    /// Age in years
    pub age: u8,

    /// Password
    pub password: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("city", &self.city)
            .field("age", &self.age)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_user_keeps_given_email() {
        let user = User::demo("ana@example.com");

        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.full_name(), "João Silva");
        assert!(user.is_vendor);
    }

    #[test]
    fn credentials_debug_hides_password() {
        let credentials = Credentials::new("ana@example.com", "hunter22");

        let debug = format!("{credentials:?}");

        assert!(!debug.contains("hunter22"), "password leaked: {debug}");
    }
}
