//! Construction of the object store client and raw object access.

use std::sync::Arc;

use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as ObjectPath;
use object_store::{ObjectStore, PutPayload};
use qbank_config::{StorageBackend, StorageConfig, join_key};
use tracing::{debug, info};

use crate::{LakeError, QbankLake};

impl QbankLake {
    /// Build the object store client selected by `storage.backend`.
    ///
    /// Called once at startup; the returned handle is shared by every request.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::ObjectStore`] if the backend rejects its
    /// configuration (missing credentials, unreadable local directory, ...).
    pub fn connect(storage: &StorageConfig) -> Result<Self, LakeError> {
        let store: Arc<dyn ObjectStore> = match storage.backend {
            StorageBackend::Memory => Arc::new(InMemory::new()),
            StorageBackend::Local => {
                Arc::new(LocalFileSystem::new_with_prefix(&storage.local_path)?)
            }
            StorageBackend::Gcs => {
                let mut builder =
                    GoogleCloudStorageBuilder::from_env().with_bucket_name(&storage.bucket);
                if !storage.service_account_path.is_empty() {
                    builder = builder.with_service_account_path(&storage.service_account_path);
                }
                Arc::new(builder.build()?)
            }
            StorageBackend::S3 => {
                let mut builder = AmazonS3Builder::from_env().with_bucket_name(&storage.bucket);
                if !storage.region.is_empty() {
                    builder = builder.with_region(&storage.region);
                }
                if !storage.endpoint.is_empty() {
                    builder = builder
                        .with_endpoint(&storage.endpoint)
                        .with_allow_http(storage.endpoint.starts_with("http://"));
                }
                if !storage.access_key_id.is_empty() {
                    builder = builder
                        .with_access_key_id(&storage.access_key_id)
                        .with_secret_access_key(&storage.secret_access_key);
                }
                Arc::new(builder.build()?)
            }
        };

        info!(
            backend = storage.backend.as_str(),
            bucket = %storage.bucket,
            root = %storage.root,
            "object store connected"
        );
        Ok(Self::from_store(store, &storage.root))
    }

    /// Wrap an existing store (for testing, or to share a client).
    #[must_use]
    pub fn from_store(store: Arc<dyn ObjectStore>, root: &str) -> Self {
        Self {
            store,
            root: root.to_string(),
        }
    }

    /// An empty process-local lake (for testing).
    #[must_use]
    pub fn in_memory(root: &str) -> Self {
        Self::from_store(Arc::new(InMemory::new()), root)
    }

    /// Key prefix every relative path is resolved against.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Resolve a path relative to the storage root into a validated object path.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::InvalidPath`] for keys with empty, `.` or `..` segments.
    pub fn resolve(&self, relative: &str) -> Result<ObjectPath, LakeError> {
        Ok(ObjectPath::parse(join_key(&self.root, relative))?)
    }

    /// Read a whole object.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::NotFound`] if the object does not exist.
    pub async fn read(&self, relative: &str) -> Result<Bytes, LakeError> {
        let path = self.resolve(relative)?;
        debug!(%path, "reading object");
        match self.store.get(&path).await {
            Ok(result) => Ok(result.bytes().await?),
            Err(object_store::Error::NotFound { .. }) => Err(LakeError::NotFound {
                path: path.to_string(),
            }),
            Err(error) => Err(error.into()),
        }
    }

    /// Check whether an object exists without reading it.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::ObjectStore`] for failures other than "not found".
    pub async fn exists(&self, relative: &str) -> Result<bool, LakeError> {
        let path = self.resolve(relative)?;
        match self.store.head(&path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(error) => Err(error.into()),
        }
    }

    /// Write a whole object, replacing any previous content.
    ///
    /// The service itself never writes; this seeds local and in-memory stores.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::ObjectStore`] if the write fails.
    pub async fn write(&self, relative: &str, content: impl Into<Bytes>) -> Result<(), LakeError> {
        let path = self.resolve(relative)?;
        self.store
            .put(&path, PutPayload::from(content.into()))
            .await?;
        Ok(())
    }
}
