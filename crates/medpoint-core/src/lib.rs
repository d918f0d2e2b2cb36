//! Shared domain types and configuration for the medpoint workspace.
//!
//! This crate owns the facility roster model, the translation catalog, and
//! environment-driven application configuration. It performs no network or
//! database I/O; the roster and locale tables are plain YAML fixtures read
//! once at startup.

pub mod app_config;
pub mod config;
pub mod facility;
pub mod i18n;
pub mod language;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use facility::{
    load_facilities, Coordinate, FacilitiesFile, FacilityRecord, PHONE_UNKNOWN_SENTINEL,
};
pub use i18n::{load_catalog, Catalog, Category, TranslationNode};
pub use language::Language;

/// Errors raised while loading configuration and fixture data at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read facilities file {path}: {source}")]
    FacilitiesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse facilities file: {0}")]
    FacilitiesFileParse(serde_yaml::Error),

    #[error("failed to read locale file {path}: {source}")]
    LocaleFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse locale file {path}: {source}")]
    LocaleFileParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{0}")]
    Validation(String),
}

/// Domain-level errors that are not tied to configuration loading.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}
