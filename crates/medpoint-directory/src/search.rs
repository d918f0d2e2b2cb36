//! Free-text search and the suggestion list.

use medpoint_core::{Catalog, Category, FacilityRecord, Language};

/// Maximum number of entries a suggestion list carries.
pub const MAX_SUGGESTIONS: usize = 5;

/// Case-insensitive substring match of `query` against the fields a user
/// sees: display name, speciality, city, and type. An empty query matches
/// every facility.
#[must_use]
pub fn matches_query(facility: &FacilityRecord, lang: Language, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    facility.display_name(lang).to_lowercase().contains(&needle)
        || facility.speciality.to_lowercase().contains(&needle)
        || facility.city.to_lowercase().contains(&needle)
        || facility.kind.to_lowercase().contains(&needle)
}

/// Suggestion strings for a partial query, capped at [`MAX_SUGGESTIONS`].
///
/// Facility names are suggested verbatim; categorical hits are suggested as
/// their translated labels even though matching runs on the raw values.
/// Entries are deduplicated in insertion order, scanning the roster in
/// order. A blank query yields nothing.
#[must_use]
pub fn suggestions(
    facilities: &[FacilityRecord],
    catalog: &Catalog,
    lang: Language,
    query: &str,
) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut entries: Vec<String> = Vec::new();

    for facility in facilities {
        let name = facility.display_name(lang);
        if name.to_lowercase().contains(&needle) {
            push_unique(&mut entries, name.to_string());
        }
        if facility.speciality.to_lowercase().contains(&needle) {
            let label = catalog.category_label(lang, Category::Speciality, &facility.speciality);
            push_unique(&mut entries, label);
        }
        if facility.city.to_lowercase().contains(&needle) {
            let label = catalog.category_label(lang, Category::City, &facility.city);
            push_unique(&mut entries, label);
        }
        if facility.kind.to_lowercase().contains(&needle) {
            let label = catalog.category_label(lang, Category::Type, &facility.kind);
            push_unique(&mut entries, label);
        }
    }

    entries.truncate(MAX_SUGGESTIONS);
    entries
}

fn push_unique(entries: &mut Vec<String>, entry: String) {
    if !entries.contains(&entry) {
        entries.push(entry);
    }
}
