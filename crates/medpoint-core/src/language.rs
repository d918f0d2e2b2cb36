//! The closed set of interface languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Interface language. French is the default; Arabic is rendered
/// right-to-left and prefers the facility's Arabic name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
    Ar,
}

impl Language {
    /// Every supported language, in selector order.
    pub const ALL: [Language; 3] = [Language::Fr, Language::En, Language::Ar];

    /// Two-letter code used in query parameters, locale file names, and the
    /// persisted preference file.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Native-script label shown by a language selector.
    #[must_use]
    pub fn native_label(self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    /// Arabic is the only right-to-left language.
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(CoreError::UnknownLanguage(other.to_string())),
        }
    }
}
