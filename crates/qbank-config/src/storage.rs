//! Object storage configuration.

use serde::{Deserialize, Serialize};

/// Which object store implementation backs the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local store, empty at startup. Used by tests and demos.
    Memory,
    /// A directory on the local filesystem (`local_path`).
    Local,
    /// Google Cloud Storage bucket.
    #[default]
    Gcs,
    /// S3-compatible bucket (AWS, R2, MinIO).
    S3,
}

impl StorageBackend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Local => "local",
            Self::Gcs => "gcs",
            Self::S3 => "s3",
        }
    }
}

fn default_bucket() -> String {
    String::from("ib_question_bank")
}

fn default_root() -> String {
    String::from("QuestionBank")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Bucket name (gcs / s3).
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Key prefix under which the index, data files and images live.
    #[serde(default = "default_root")]
    pub root: String,

    /// Directory backing the `local` backend.
    #[serde(default)]
    pub local_path: String,

    /// Service account JSON file (gcs). Empty falls back to ambient credentials.
    #[serde(default)]
    pub service_account_path: String,

    /// Region (s3).
    #[serde(default)]
    pub region: String,

    /// Custom endpoint URL (s3-compatible services).
    #[serde(default)]
    pub endpoint: String,

    /// Access key ID (s3). Empty falls back to ambient credentials.
    #[serde(default)]
    pub access_key_id: String,

    /// Secret access key (s3).
    #[serde(default)]
    pub secret_access_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            bucket: default_bucket(),
            root: default_root(),
            local_path: String::new(),
            service_account_path: String::new(),
            region: String::new(),
            endpoint: String::new(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
        }
    }
}

impl StorageConfig {
    /// First field the selected backend needs but does not have.
    ///
    /// S3 credentials are optional, but an access key without its secret is
    /// incomplete.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        match self.backend {
            StorageBackend::Memory => None,
            StorageBackend::Local => self.local_path.is_empty().then_some("local_path"),
            StorageBackend::Gcs => self.bucket.is_empty().then_some("bucket"),
            StorageBackend::S3 if self.bucket.is_empty() => Some("bucket"),
            StorageBackend::S3 => {
                let half_credentials =
                    !self.access_key_id.is_empty() && self.secret_access_key.is_empty();
                half_credentials.then_some("secret_access_key")
            }
        }
    }

    /// Check if the selected backend has the fields it needs.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Join `relative` onto the storage root, yielding an object key.
    ///
    /// Leading and trailing slashes on either side are collapsed so that
    /// `root = "QuestionBank/"` and `relative = "/a.csv"` give `QuestionBank/a.csv`.
    #[must_use]
    pub fn object_key(&self, relative: &str) -> String {
        join_key(&self.root, relative)
    }
}

/// Join two key fragments with a single `/`, ignoring an empty prefix.
#[must_use]
pub fn join_key(prefix: &str, relative: &str) -> String {
    let prefix = prefix.trim_matches('/');
    let relative = relative.trim_start_matches('/');
    if prefix.is_empty() {
        relative.to_string()
    } else {
        format!("{prefix}/{relative}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_gcs_question_bank() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Gcs);
        assert_eq!(config.bucket, "ib_question_bank");
        assert_eq!(config.root, "QuestionBank");
        assert!(config.is_configured());
    }

    #[test]
    fn local_backend_requires_path() {
        let mut config = StorageConfig {
            backend: StorageBackend::Local,
            ..Default::default()
        };
        assert!(!config.is_configured());
        assert_eq!(config.missing_field(), Some("local_path"));
        config.local_path = "/srv/qbank".into();
        assert!(config.is_configured());
    }

    #[test]
    fn s3_access_key_needs_its_secret() {
        let mut config = StorageConfig {
            backend: StorageBackend::S3,
            ..Default::default()
        };
        assert_eq!(config.missing_field(), None);
        config.access_key_id = "AKIA".into();
        assert_eq!(config.missing_field(), Some("secret_access_key"));
        config.secret_access_key = "secret".into();
        assert_eq!(config.missing_field(), None);
        config.bucket.clear();
        assert_eq!(config.missing_field(), Some("bucket"));
    }

    #[test]
    fn object_key_joins_root_and_relative() {
        let config = StorageConfig::default();
        assert_eq!(config.object_key("physics.csv"), "QuestionBank/physics.csv");

        let slashed = StorageConfig {
            root: "QuestionBank/".into(),
            ..Default::default()
        };
        assert_eq!(slashed.object_key("/questions/q1.png"), "QuestionBank/questions/q1.png");

        let bare = StorageConfig {
            root: String::new(),
            ..Default::default()
        };
        assert_eq!(bare.object_key("index.csv"), "index.csv");
    }

    #[test]
    fn backend_names_are_lowercase() {
        assert_eq!(StorageBackend::S3.as_str(), "s3");
        assert_eq!(StorageBackend::Memory.as_str(), "memory");
    }
}
