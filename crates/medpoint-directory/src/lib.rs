//! In-memory query layer over the facility roster.
//!
//! The directory is loaded once from the fixture and never mutated; every
//! operation here is a pure function over that snapshot, shared freely
//! across server workers. Results preserve roster order.

pub mod card;
pub mod filter;
pub mod links;
pub mod map;
pub mod options;
pub mod page;
pub mod report;
pub mod search;

use std::path::Path;

use medpoint_core::{load_facilities, ConfigError, FacilityRecord, Language};

pub use card::{facility_card, FacilityCard};
pub use filter::{FacilityFilter, ALL_SENTINEL};
pub use links::{contact_url, directions_url, ContactTopic, DirectionsProvider};
pub use map::{map_view, MapPin, MapView};
pub use options::{filter_options, FilterOption, FilterOptions};
pub use page::{normalize_reveal, reveal, Page};
pub use report::{by_city, gaps, CitySummary, GapReport};
pub use search::{matches_query, suggestions, MAX_SUGGESTIONS};

/// The loaded facility roster.
#[derive(Debug, Clone)]
pub struct Directory {
    facilities: Vec<FacilityRecord>,
}

impl Directory {
    #[must_use]
    pub fn new(facilities: Vec<FacilityRecord>) -> Self {
        Self { facilities }
    }

    /// Load the roster fixture from disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the fixture cannot be read, parsed, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = load_facilities(path)?;
        Ok(Self::new(file.facilities))
    }

    #[must_use]
    pub fn facilities(&self) -> &[FacilityRecord] {
        &self.facilities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// Facilities admitted by both the free-text query and the categorical
    /// filter, in roster order.
    #[must_use]
    pub fn select(
        &self,
        lang: Language,
        query: &str,
        filter: &FacilityFilter<'_>,
    ) -> Vec<&FacilityRecord> {
        self.facilities
            .iter()
            .filter(|f| search::matches_query(f, lang, query) && filter.matches(f))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use medpoint_core::{Coordinate, FacilityRecord};

    /// Minimal complete facility for query tests.
    pub(crate) fn facility(id: &str, name: &str, kind: &str, speciality: &str, city: &str) -> FacilityRecord {
        FacilityRecord {
            id: id.to_string(),
            name: name.to_string(),
            ar_name: None,
            kind: kind.to_string(),
            speciality: speciality.to_string(),
            city: city.to_string(),
            phone: "+222 45 00 00 00".to_string(),
            latitude: Some(Coordinate::Number(18.09)),
            longitude: Some(Coordinate::Number(-15.97)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testutil::facility;
    use super::*;

    fn directory() -> Directory {
        Directory::new(vec![
            facility("h1", "Hôpital Cheikh Zayed", "hospital", "cardiology", "nouakchott"),
            facility("c1", "Clinique Kissi", "clinic", "gynecology", "nouakchott"),
            facility("h2", "Hôpital Régional de Nouadhibou", "hospital", "general", "nouadhibou"),
        ])
    }

    #[test]
    fn select_without_constraints_returns_everything_in_order() {
        let d = directory();
        let all = d.select(Language::Fr, "", &FacilityFilter::default());
        let ids: Vec<&str> = all.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["h1", "c1", "h2"]);
    }

    #[test]
    fn select_combines_query_and_filter_with_and() {
        let d = directory();

        let filter = FacilityFilter {
            kind: Some("hospital"),
            ..FacilityFilter::default()
        };
        let hits = d.select(Language::Fr, "nouadhibou", &filter);
        let ids: Vec<&str> = hits.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["h2"]);
    }

    #[test]
    fn loads_the_checked_in_roster() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../config/facilities.yaml");
        let d = Directory::load(&path).unwrap();
        assert_eq!(d.len(), 20);
        assert!(!d.is_empty());
    }
}
