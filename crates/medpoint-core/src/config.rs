//! Environment-variable configuration loading.
//!
//! Every `MEDPOINT_*` variable has a default, so a bare environment yields
//! a working development setup. Values that are present but malformed are
//! hard errors naming the variable, never silently replaced.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::{AppConfig, Environment};
use crate::{ConfigError, Language};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` first, so a local `.env` file is folded
/// into the process environment.
///
/// # Errors
///
/// Returns `ConfigError` if any provided value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from the process environment without
/// touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any provided value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup. The
/// parsing logic takes the lookup as a closure so tests can drive it from a
/// plain map instead of the real environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default =
        |var: &str, default: &str| lookup(var).unwrap_or_else(|_| default.to_string());

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("MEDPOINT_ENV", "development"))?;

    let bind_addr = {
        let var = "MEDPOINT_BIND_ADDR";
        let raw = or_default(var, "0.0.0.0:3000");
        raw.parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))?
    };

    let log_level = or_default("MEDPOINT_LOG_LEVEL", "info");

    let facilities_path = PathBuf::from(or_default(
        "MEDPOINT_FACILITIES_PATH",
        "./config/facilities.yaml",
    ));
    let locales_dir = PathBuf::from(or_default("MEDPOINT_LOCALES_DIR", "./config/locales"));
    let language_file = PathBuf::from(or_default("MEDPOINT_LANGUAGE_FILE", "./config/language"));

    let default_language = {
        let var = "MEDPOINT_DEFAULT_LANGUAGE";
        let raw = or_default(var, "fr");
        Language::from_str(&raw).map_err(|e| invalid(var, e.to_string()))?
    };

    let contact_phone = or_default("MEDPOINT_CONTACT_PHONE", "+22242285899");

    let page_size = {
        let var = "MEDPOINT_PAGE_SIZE";
        let raw = or_default(var, "9");
        let value = raw
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 {
            return Err(invalid(var, "must be at least 1".to_string()));
        }
        value
    };

    let map_zoom = {
        let var = "MEDPOINT_MAP_ZOOM";
        let raw = or_default(var, "13");
        raw.parse::<u8>().map_err(|e| invalid(var, e.to_string()))?
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        facilities_path,
        locales_dir,
        language_file,
        default_language,
        contact_phone,
        page_size,
        map_zoom,
    })
}

fn parse_environment(raw: &str) -> Result<Environment, ConfigError> {
    match raw {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MEDPOINT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}
