//! List-card derivation.
//!
//! A card resolves the missing-data branches into concrete actions: a real
//! phone gets a call link, a missing one gets a WhatsApp "inform us" link,
//! and likewise for the location and directions. Exactly one branch of each
//! pair is present.

use medpoint_core::{Catalog, Category, FacilityRecord, Language};

use crate::links::{contact_url, directions_url, ContactTopic, DirectionsProvider};

/// Everything a list card shows for one facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityCard {
    pub id: String,
    pub display_name: String,
    pub type_label: String,
    pub speciality_label: String,
    pub city_label: String,
    /// Usable phone number; `None` when the roster has none.
    pub phone: Option<String>,
    /// `tel:` link, present exactly when `phone` is.
    pub phone_url: Option<String>,
    /// WhatsApp link reporting the phone number, present when `phone` is not.
    pub inform_phone_url: Option<String>,
    /// Directions links, present when the location is usable.
    pub directions_apple_url: Option<String>,
    pub directions_google_url: Option<String>,
    /// WhatsApp link reporting the location, present when directions are not.
    pub inform_location_url: Option<String>,
}

/// Derive the card for one facility.
#[must_use]
pub fn facility_card(
    facility: &FacilityRecord,
    catalog: &Catalog,
    lang: Language,
    contact_phone: &str,
) -> FacilityCard {
    let phone = facility.phone().map(ToOwned::to_owned);
    let phone_url = phone.as_ref().map(|p| format!("tel:{p}"));
    let inform_phone_url = facility
        .is_phone_missing()
        .then(|| contact_url(contact_phone, facility, lang, ContactTopic::Phone));

    let inform_location_url = facility
        .is_location_missing()
        .then(|| contact_url(contact_phone, facility, lang, ContactTopic::Location));

    FacilityCard {
        id: facility.id.clone(),
        display_name: facility.display_name(lang).to_string(),
        type_label: catalog.category_label(lang, Category::Type, &facility.kind),
        speciality_label: catalog.category_label(lang, Category::Speciality, &facility.speciality),
        city_label: catalog.category_label(lang, Category::City, &facility.city),
        phone,
        phone_url,
        inform_phone_url,
        directions_apple_url: directions_url(facility, DirectionsProvider::Apple),
        directions_google_url: directions_url(facility, DirectionsProvider::Google),
        inform_location_url,
    }
}
