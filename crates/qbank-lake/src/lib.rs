//! # qbank-lake
//!
//! Object storage access for the qbank catalog.
//!
//! Everything the service reads lives under one key prefix (the storage root)
//! in a single bucket:
//! - `<root>/<index_file>`: the subject index (`Subject`, `DataFile` columns)
//! - `<root>/<DataFile>`: one question table per subject
//! - `<root>/<questions_dir>/<image>`: question images
//!
//! [`QbankLake`] owns the one long-lived [`ObjectStore`] client for the
//! process. The dataset loader ([`dataset`]) and the image proxy
//! ([`BlobProxy`]) both borrow it.

pub mod blob;
pub mod dataset;
pub mod error;
mod store;

pub use blob::{BlobProxy, Image};
pub use error::LakeError;

use std::sync::Arc;

use object_store::ObjectStore;

/// Shared handle to the object store, scoped to the storage root.
///
/// Cloning is cheap: clones share the same client.
#[derive(Debug, Clone)]
pub struct QbankLake {
    store: Arc<dyn ObjectStore>,
    root: String,
}
