//! Language selection and the persisted preference file.
//!
//! The preference file holds a single two-letter code. An absent file or an
//! unknown value silently falls back to the configured default, matching
//! the fail-soft translation lookup.

use std::path::Path;
use std::str::FromStr;

use medpoint_core::{AppConfig, Language};

use crate::LangCommands;

/// Priority for the active language: the `--lang` flag, then the persisted
/// selection, then the configured default.
pub(crate) fn resolve(flag: Option<&str>, config: &AppConfig) -> anyhow::Result<Language> {
    match flag {
        Some(raw) => Language::from_str(raw)
            .map_err(|e| anyhow::anyhow!("{e} (expected one of: fr, en, ar)")),
        None => Ok(load_language(config)),
    }
}

/// Read the persisted language, falling back to the configured default when
/// the file is absent or holds an unknown value.
pub(crate) fn load_language(config: &AppConfig) -> Language {
    match std::fs::read_to_string(&config.language_file) {
        Ok(raw) => Language::from_str(raw.trim()).unwrap_or(config.default_language),
        Err(_) => config.default_language,
    }
}

/// Persist a language selection, creating parent directories as needed.
pub(crate) fn store_language(path: &Path, language: Language) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, format!("{}\n", language.code()))?;
    Ok(())
}

pub(crate) fn run(config: &AppConfig, command: &LangCommands) -> anyhow::Result<()> {
    match command {
        LangCommands::Get => {
            let language = load_language(config);
            println!("{} ({})", language.code(), language.native_label());
            Ok(())
        }
        LangCommands::Set { language } => {
            let parsed = Language::from_str(language)
                .map_err(|e| anyhow::anyhow!("{e} (expected one of: fr, en, ar)"))?;
            store_language(&config.language_file, parsed)?;
            println!("language set to {} ({})", parsed.code(), parsed.native_label());
            Ok(())
        }
    }
}
