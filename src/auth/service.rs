//! Auth backend.

use std::time::Duration;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::time::sleep;

use crate::auth::{AuthError, Credentials, Registration, User, UserId};

/// Latency applied by [`SimulatedAuthBackend`] unless configured otherwise.
pub const DEFAULT_LATENCY: Duration = Duration::from_secs(1);

/// Sign-in and account creation. Implementations may be slow.
#[automock]
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for a user.
    async fn login(&self, credentials: Credentials) -> Result<User, AuthError>;

    /// Create an account and return its user.
    async fn register(&self, registration: Registration) -> Result<User, AuthError>;
}

/// In-memory backend that waits a fixed latency before answering.
#[derive(Debug, Clone)]
pub struct SimulatedAuthBackend {
    latency: Duration,
}

impl SimulatedAuthBackend {
    /// Backend answering after `latency`.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedAuthBackend {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl AuthBackend for SimulatedAuthBackend {
    async fn login(&self, credentials: Credentials) -> Result<User, AuthError> {
        sleep(self.latency).await;

        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        Ok(User::demo(&credentials.email))
    }

    async fn register(&self, registration: Registration) -> Result<User, AuthError> {
        sleep(self.latency).await;

        Ok(User {
            id: UserId::new(Timestamp::now().as_millisecond().to_string()),
            email: registration.email,
            first_name: registration.first_name,
            last_name: registration.last_name,
            cpf: registration.cpf,
            phone: registration.phone,
            city: registration.city,
            age: registration.age,
            is_vendor: false,
        })
    }
}
