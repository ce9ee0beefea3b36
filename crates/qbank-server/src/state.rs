use std::sync::Arc;

use qbank_catalog::{Catalog, CatalogError, UserStateStore};
use qbank_config::QbankConfig;
use qbank_lake::{BlobProxy, QbankLake};

/// Shared application state for the HTTP server.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: QbankConfig,
    catalog: Catalog,
    users: UserStateStore,
    images: BlobProxy,
}

impl AppState {
    /// Load the catalog from `lake` and assemble the state around it.
    ///
    /// The lake handle is shared between the catalog loader and the image
    /// proxy.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the subject index or the first subject's
    /// table cannot be loaded.
    pub async fn load(config: QbankConfig, lake: QbankLake) -> Result<Self, CatalogError> {
        let images = BlobProxy::new(
            lake.clone(),
            &config.catalog.questions_dir,
            &config.catalog.image_content_type,
        );
        let catalog = Catalog::open(lake, &config.catalog).await?;
        Ok(Self::new(config, catalog, UserStateStore::new(), images))
    }

    #[must_use]
    pub fn new(
        config: QbankConfig,
        catalog: Catalog,
        users: UserStateStore,
        images: BlobProxy,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                users,
                images,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &QbankConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn users(&self) -> &UserStateStore {
        &self.inner.users
    }

    #[must_use]
    pub fn images(&self) -> &BlobProxy {
        &self.inner.images
    }
}
