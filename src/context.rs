//! Store Context

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{
    auth::{AuthBackend, SimulatedAuthBackend},
    catalog::{Catalog, CatalogError},
    dashboard::{Dashboard, DashboardError},
    settings::StoreSettings,
    storefront::Storefront,
};

/// Failures building a [`StoreContext`].
#[derive(Debug, Error)]
pub enum StoreInitError {
    /// Bundled catalog failed to load
    #[error("failed to load catalog")]
    Catalog(#[source] CatalogError),

    /// Bundled dashboard data failed to load
    #[error("failed to load dashboard data")]
    Dashboard(#[source] DashboardError),
}

/// Shared, read-only services a storefront session is built from.
#[derive(Clone)]
pub struct StoreContext {
    /// Product catalog
    pub catalog: Arc<Catalog>,

    /// Vendor dashboard data
    pub dashboard: Arc<Dashboard>,

    /// Auth backend shared by all sessions
    pub auth: Arc<dyn AuthBackend>,

    /// Shipping and latency settings
    pub settings: StoreSettings,
}

impl StoreContext {
    /// Build a context from the bundled data and the simulated auth backend.
    ///
    /// # Errors
    ///
    /// Returns an error when the bundled catalog or dashboard data fails to load.
    pub fn bundled(settings: StoreSettings) -> Result<Self, StoreInitError> {
        let catalog = Catalog::bundled().map_err(StoreInitError::Catalog)?;
        let dashboard = Dashboard::bundled().map_err(StoreInitError::Dashboard)?;

        Ok(Self {
            catalog: Arc::new(catalog),
            dashboard: Arc::new(dashboard),
            auth: Arc::new(SimulatedAuthBackend::new(settings.latency)),
            settings,
        })
    }

    /// Replace the auth backend.
    #[must_use]
    pub fn with_auth(mut self, auth: Arc<dyn AuthBackend>) -> Self {
        self.auth = auth;
        self
    }

    /// Open a new signed-out session with an empty cart.
    #[must_use]
    pub fn storefront(&self) -> Storefront {
        Storefront::new(self)
    }
}

impl fmt::Debug for StoreContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreContext")
            .field("products", &self.catalog.len())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
