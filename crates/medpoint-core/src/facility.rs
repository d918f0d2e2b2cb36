//! Facility roster model and the YAML fixture loader.
//!
//! The roster is append-only reference data maintained by hand, so the
//! model is deliberately tolerant: coordinates may be numbers or strings,
//! phones may be empty or carry the historical "informez nous" placeholder,
//! and the Arabic name is optional.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Language};

/// Placeholder some roster rows carry instead of a real phone number.
pub const PHONE_UNKNOWN_SENTINEL: &str = "informez nous";

/// A latitude or longitude as stored in the roster. Older rows used
/// string-typed values; both forms are accepted and preserved as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// Numeric value, only when the roster stored an actual number.
    /// String-typed values are never parsed; the map projection is stricter
    /// than the list-view location check.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Coordinate::Number(n) => Some(*n),
            Coordinate::Text(_) => None,
        }
    }

    /// True for the values the list view treats as "no usable location":
    /// numeric zero or the empty string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Coordinate::Number(n) => *n == 0.0,
            Coordinate::Text(t) => t.is_empty(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Number(n) => write!(f, "{n}"),
            Coordinate::Text(t) => f.write_str(t),
        }
    }
}

/// One medical checkpoint facility as loaded from the roster fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub id: String,
    pub name: String,
    /// Arabic display name, used in place of `name` when the interface
    /// language is Arabic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar_name: Option<String>,
    /// Facility category, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub speciality: String,
    pub city: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Coordinate>,
}

impl FacilityRecord {
    /// Locale-dependent display name: the Arabic name when the language is
    /// Arabic and the roster has one, the primary name otherwise.
    #[must_use]
    pub fn display_name(&self, lang: Language) -> &str {
        if lang == Language::Ar {
            if let Some(ar_name) = &self.ar_name {
                return ar_name;
            }
        }
        &self.name
    }

    /// Phone number usable for a call action, if the roster has one.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        if self.is_phone_missing() {
            None
        } else {
            Some(self.phone.as_str())
        }
    }

    /// True when the roster has no usable phone: absent, empty, or the
    /// literal "informez nous" placeholder.
    #[must_use]
    pub fn is_phone_missing(&self) -> bool {
        self.phone.is_empty() || self.phone == PHONE_UNKNOWN_SENTINEL
    }

    /// True when either coordinate is absent, numeric zero, or an empty
    /// string. Such facilities get an "inform us" action instead of
    /// directions.
    #[must_use]
    pub fn is_location_missing(&self) -> bool {
        let usable = |coord: &Option<Coordinate>| coord.as_ref().is_some_and(|c| !c.is_blank());
        !(usable(&self.latitude) && usable(&self.longitude))
    }

    /// Coordinates for the map projection. Both values must be numeric and
    /// non-zero; string-typed coordinates are good enough for a directions
    /// link but are never plotted.
    #[must_use]
    pub fn map_position(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.as_ref()?.as_number()?;
        let lng = self.longitude.as_ref()?.as_number()?;
        if lat == 0.0 || lng == 0.0 {
            return None;
        }
        Some((lat, lng))
    }
}

/// Top-level shape of the roster fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilitiesFile {
    pub facilities: Vec<FacilityRecord>,
}

/// Load and validate the facility roster from a YAML fixture.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, fails to parse, or
/// fails validation (empty ids or names, duplicate ids).
pub fn load_facilities(path: &Path) -> Result<FacilitiesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FacilitiesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let facilities_file: FacilitiesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::FacilitiesFileParse)?;

    validate_facilities(&facilities_file)?;

    Ok(facilities_file)
}

/// Roster invariants: every facility has a non-empty id and name, and ids
/// are unique case-insensitively.
fn validate_facilities(file: &FacilitiesFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for facility in &file.facilities {
        if facility.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "facility ids must be non-empty".to_string(),
            ));
        }
        if facility.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "facility '{}' has an empty name",
                facility.id
            )));
        }
        if !seen_ids.insert(facility.id.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate facility id: '{}'",
                facility.id
            )));
        }
    }

    Ok(())
}
