//! Runtime configuration shared by the server and the CLI.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::Language;

/// Deployment environment, from `MEDPOINT_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        };
        f.write_str(name)
    }
}

/// Application settings resolved from the environment. Every field has a
/// default; the variables only override.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Facility roster fixture.
    pub facilities_path: PathBuf,
    /// Directory holding `fr.yaml`, `en.yaml`, and `ar.yaml`.
    pub locales_dir: PathBuf,
    /// Where the CLI persists the selected language.
    pub language_file: PathBuf,
    pub default_language: Language,
    /// WhatsApp number that receives "inform us" messages.
    pub contact_phone: String,
    /// Cards revealed initially and added per load-more step.
    pub page_size: usize,
    /// Initial map zoom level.
    pub map_zoom: u8,
}
