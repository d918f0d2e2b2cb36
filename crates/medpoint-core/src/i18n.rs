//! Translation catalog: per-language nested string tables with dotted-key
//! lookup and `{name}` placeholder substitution.
//!
//! Lookup is fail-soft. A key that does not resolve to a string comes back
//! as the key path itself, so a hole in a locale file degrades the display
//! instead of breaking it. Misses are logged at debug level.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::{ConfigError, Language};

/// One node of a locale table: a leaf string or a nested table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Leaf(String),
    Table(BTreeMap<String, TranslationNode>),
}

/// The categorical label tables every locale carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Type,
    Speciality,
    City,
}

impl Category {
    fn table(self) -> &'static str {
        match self {
            Category::Type => "types",
            Category::Speciality => "specialities",
            Category::City => "cities",
        }
    }
}

/// All locale tables, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    fr: TranslationNode,
    en: TranslationNode,
    ar: TranslationNode,
}

impl Catalog {
    #[must_use]
    pub fn new(fr: TranslationNode, en: TranslationNode, ar: TranslationNode) -> Self {
        Self { fr, en, ar }
    }

    fn table(&self, lang: Language) -> &TranslationNode {
        match lang {
            Language::Fr => &self.fr,
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    /// Resolve a dotted key path to its string value, or `None` when the
    /// path is unknown, stops early at a leaf, or ends on a nested table.
    #[must_use]
    pub fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        let mut node = self.table(lang);
        for segment in key.split('.') {
            match node {
                TranslationNode::Table(children) => node = children.get(segment)?,
                TranslationNode::Leaf(_) => return None,
            }
        }
        match node {
            TranslationNode::Leaf(text) => Some(text),
            TranslationNode::Table(_) => None,
        }
    }

    /// Translate a dotted key, falling back to the key path itself when the
    /// lookup misses or resolves to an empty string.
    ///
    /// Each `(name, value)` pair in `args` replaces the first occurrence of
    /// the literal `{name}`, applied once per pair in the order given.
    #[must_use]
    pub fn translate(&self, lang: Language, key: &str, args: &[(&str, &str)]) -> String {
        let Some(resolved) = self.lookup(lang, key) else {
            tracing::debug!(key, lang = %lang, "missing translation key");
            return key.to_string();
        };
        if resolved.is_empty() {
            return key.to_string();
        }

        let mut text = resolved.to_string();
        for (name, value) in args {
            let placeholder = format!("{{{name}}}");
            text = text.replacen(placeholder.as_str(), value, 1);
        }
        text
    }

    /// Label for a raw categorical value: the value is lowercased and looked
    /// up under the category's table, with the usual key fallback.
    #[must_use]
    pub fn category_label(&self, lang: Language, category: Category, raw: &str) -> String {
        let key = format!("{}.{}", category.table(), raw.to_lowercase());
        self.translate(lang, &key, &[])
    }
}

/// Load the locale tables from `<dir>/{fr,en,ar}.yaml`.
///
/// # Errors
///
/// Returns `ConfigError` if any locale file is missing or fails to parse.
pub fn load_catalog(dir: &Path) -> Result<Catalog, ConfigError> {
    let fr = load_locale_table(dir, Language::Fr)?;
    let en = load_locale_table(dir, Language::En)?;
    let ar = load_locale_table(dir, Language::Ar)?;
    Ok(Catalog::new(fr, en, ar))
}

fn load_locale_table(dir: &Path, lang: Language) -> Result<TranslationNode, ConfigError> {
    let path = dir.join(format!("{}.yaml", lang.code()));
    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::LocaleFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yaml::from_str(&content).map_err(|e| ConfigError::LocaleFileParse {
        path: path.display().to_string(),
        source: e,
    })
}
