//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use qbank_config::{QbankConfig, StorageBackend};

#[test]
fn loads_storage_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
backend = "s3"
bucket = "exam-assets"
root = "bank"
region = "auto"
endpoint = "http://localhost:9000"
access_key_id = "key"
secret_access_key = "secret"
"#,
        )?;

        let config: QbankConfig = Figment::from(Serialized::defaults(QbankConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.storage.backend, StorageBackend::S3);
        assert_eq!(config.storage.bucket, "exam-assets");
        assert_eq!(config.storage.endpoint, "http://localhost:9000");
        assert_eq!(config.storage.object_key("physics.csv"), "bank/physics.csv");
        assert!(config.storage.is_configured());
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
port = 9090

[catalog]
image_url_prefix = "https://cdn.example.com/img/"
"#,
        )?;

        let config: QbankConfig = Figment::from(Serialized::defaults(QbankConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.bind_addr(), "127.0.0.1:9090");
        assert!(config.server.cors);
        assert_eq!(config.catalog.image_url_prefix, "https://cdn.example.com/img/");
        assert_eq!(config.catalog.questions_dir, "questions");
        assert_eq!(config.storage.backend, StorageBackend::Gcs);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_figment() {
    Jail::expect_with(|jail| {
        jail.create_dir(".qbank")?;
        jail.create_file(
            ".qbank/config.toml",
            r#"
[storage]
backend = "local"
local_path = "/srv/qbank"
root = ""
"#,
        )?;

        let config = QbankConfig::load().expect("config loads");
        assert_eq!(config.storage.backend, StorageBackend::Local);
        assert_eq!(config.storage.local_path, "/srv/qbank");
        assert_eq!(config.storage.object_key("index.csv"), "index.csv");
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn mistyped_project_value_is_a_load_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".qbank")?;
        jail.create_file(".qbank/config.toml", "[server]\nport = \"eighty\"\n")?;

        let error = QbankConfig::load().unwrap_err();
        assert!(matches!(error, qbank_config::ConfigError::Load(_)));
        assert!(error.to_string().starts_with("failed to load qbank configuration"));
        Ok(())
    });
}
