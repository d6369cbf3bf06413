use crate::error::{PortalError, PortalErrorExt};
use furever_access::{AccessDecision, Availability, FeaturePermissions};
use furever_adoption::AdoptablePet;
use furever_catalog::Product;
use furever_domain::config::AppConfig;
use furever_domain::{Role, features};
use furever_identity::Session;
use furever_kernel::Loadable;
use furever_storage::{Compression, FileStore, KeyValueStore, MemoryStore};
use std::sync::Arc;
use tracing::{debug, info};

/// Composition root: one store, one permission table, one configuration.
///
/// Cheap to clone; clones share the store.
#[derive(Debug, Clone)]
pub struct Portal {
    store: Arc<dyn KeyValueStore>,
    permissions: Arc<FeaturePermissions>,
    config: AppConfig,
}

impl Portal {
    /// Opens the store described by `config.storage`: a file store under `data_dir`, or a
    /// memory store when no directory is configured.
    ///
    /// # Errors
    /// Returns [`PortalError::Storage`] if the data directory cannot be created or opened.
    pub fn open(config: AppConfig) -> Result<Self, PortalError> {
        let store: Arc<dyn KeyValueStore> = match &config.storage.data_dir {
            Some(dir) => {
                let compression =
                    if config.storage.compression { Compression::Lz4 } else { Compression::None };
                let store = FileStore::builder()
                    .root(dir)
                    .compression(compression)
                    .open()
                    .context("Opening portal data directory")?;
                Arc::new(store)
            },
            None => {
                info!("No data directory configured, using an in-memory store");
                Arc::new(MemoryStore::new())
            },
        };
        Ok(Self::with_store(store, config))
    }

    /// A throwaway portal backed by memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), AppConfig::default())
    }

    #[must_use]
    pub fn with_store(store: Arc<dyn KeyValueStore>, config: AppConfig) -> Self {
        Self { store, permissions: Arc::new(FeaturePermissions::standard()), config }
    }

    #[must_use]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn permissions(&self) -> &FeaturePermissions {
        &self.permissions
    }

    /// The saved session, if the landing form was completed.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        furever_identity::current(self.store())
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session().map(|session| session.role())
    }

    /// Access decision for `feature` under the current session.
    #[must_use]
    pub fn check(&self, feature: &str) -> AccessDecision {
        self.permissions.check(feature, self.role())
    }

    /// # Errors
    /// Returns [`PortalError::Denied`] when the current role may not open `feature`.
    pub fn require(&self, feature: &str) -> Result<(), PortalError> {
        self.check(feature).into_result().context(format!("Opening '{feature}'"))
    }

    /// The footer's service list with the current session's availability.
    #[must_use]
    pub fn services(&self) -> Vec<(&'static str, Availability)> {
        let role = self.role();
        features::SERVICES
            .iter()
            .map(|&service| (service, self.permissions.availability(service, role)))
            .collect()
    }

    pub async fn products(&self) -> Loadable<Vec<Product>> {
        debug!(path = %self.config.fixtures.products.display(), "Loading products");
        furever_catalog::load_products(&self.config.fixtures.products).await
    }

    pub async fn pets(&self) -> Loadable<Vec<AdoptablePet>> {
        debug!(path = %self.config.fixtures.pets.display(), "Loading adoptable pets");
        furever_adoption::load_pets(&self.config.fixtures.pets).await
    }
}
