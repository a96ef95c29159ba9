//! Auth session.

use std::{fmt, sync::Arc};

use tracing::{info, warn};

use crate::auth::{AuthBackend, AuthError, Credentials, RegistrationForm, User};

/// The signed-in user, if any, and the backend used to sign in.
pub struct AuthSession {
    backend: Arc<dyn AuthBackend>,
    user: Option<User>,
}

impl AuthSession {
    /// Create a signed-out session.
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        Self {
            backend,
            user: None,
        }
    }

    /// Signed-in user.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the signed-in user is a vendor.
    pub fn is_vendor(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_vendor)
    }

    /// Sign in. A failed attempt leaves the session as it was.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`AuthError`], e.g. [`AuthError::MissingCredentials`].
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        match self.backend.login(Credentials::new(email, password)).await {
            Ok(user) => {
                info!(email = %user.email, vendor = user.is_vendor, "logged in");

                Ok(&*self.user.insert(user))
            }
            Err(error) => {
                warn!(email, %error, "login failed");

                Err(error)
            }
        }
    }

    /// Validate the form, create the account and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the form is invalid or the backend refuses it.
    pub async fn register(&mut self, form: RegistrationForm) -> Result<&User, AuthError> {
        let registration = form.validate().inspect_err(|error| {
            warn!(%error, "registration rejected");
        })?;

        let user = self.backend.register(registration).await?;

        info!(user = %user.id, email = %user.email, "registered");

        Ok(&*self.user.insert(user))
    }

    /// Sign out, returning the user that was signed in.
    pub fn logout(&mut self) -> Option<User> {
        let user = self.user.take();

        if let Some(user) = &user {
            info!(email = %user.email, "logged out");
        }

        user
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::auth::{MockAuthBackend, registration::tests::form};

    use super::*;

    fn mock_session(mock: MockAuthBackend) -> AuthSession {
        AuthSession::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn login_stores_user() -> TestResult {
        let mut mock = MockAuthBackend::new();
        mock.expect_login()
            .times(1)
            .returning(|credentials| Ok(User::demo(&credentials.email)));

        let mut session = mock_session(mock);

        session.login("ana@example.com", "x").await?;

        assert!(session.is_authenticated());
        assert!(session.is_vendor());
        assert_eq!(
            session.user().map(|user| user.email.as_str()),
            Some("ana@example.com")
        );

        Ok(())
    }

    #[tokio::test]
    async fn failed_login_keeps_session_unchanged() {
        let mut mock = MockAuthBackend::new();
        mock.expect_login()
            .returning(|_credentials| Err(AuthError::MissingCredentials));

        let mut session = mock_session(mock);

        let result = session.login("", "x").await;

        assert_eq!(result.err(), Some(AuthError::MissingCredentials));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_backend() {
        let mut mock = MockAuthBackend::new();
        mock.expect_register().times(0);

        let mut session = mock_session(mock);

        let result = session
            .register(RegistrationForm {
                accept_terms: false,
                ..form()
            })
            .await;

        assert_eq!(result.err(), Some(AuthError::TermsNotAccepted));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn logout_clears_user() -> TestResult {
        let mut mock = MockAuthBackend::new();
        mock.expect_login()
            .returning(|credentials| Ok(User::demo(&credentials.email)));

        let mut session = mock_session(mock);
        session.login("ana@example.com", "x").await?;

        let user = session.logout();

        assert_eq!(user.map(|user| user.email), Some("ana@example.com".to_string()));
        assert!(!session.is_authenticated());
        assert!(session.logout().is_none());

        Ok(())
    }
}
