//! Outbound deep links: directions and WhatsApp "inform us" messages.

use medpoint_core::{FacilityRecord, Language};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Which maps application receives a directions request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionsProvider {
    Apple,
    Google,
}

/// What an "inform us" message reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTopic {
    Phone,
    Location,
}

/// Directions URL to a facility, or `None` when its location is missing.
/// Coordinate values are forwarded exactly as stored, string-typed ones
/// included.
#[must_use]
pub fn directions_url(facility: &FacilityRecord, provider: DirectionsProvider) -> Option<String> {
    if facility.is_location_missing() {
        return None;
    }
    let lat = facility.latitude.as_ref()?;
    let lng = facility.longitude.as_ref()?;

    Some(match provider {
        DirectionsProvider::Apple => format!("maps://maps.apple.com/?daddr={lat},{lng}"),
        DirectionsProvider::Google => {
            format!("https://www.google.com/maps/dir/?api=1&destination={lat},{lng}")
        }
    })
}

/// WhatsApp deep link pre-filled with a message asking the maintainers to
/// update the facility's phone number or location. The message references
/// the locale-dependent display name and the stable id.
#[must_use]
pub fn contact_url(
    contact_phone: &str,
    facility: &FacilityRecord,
    lang: Language,
    topic: ContactTopic,
) -> String {
    let subject = match topic {
        ContactTopic::Phone => "phone number",
        ContactTopic::Location => "location",
    };
    let message = format!(
        "Hello, I have information about the {subject} for {name} (ID: {id})",
        name = facility.display_name(lang),
        id = facility.id
    );
    format!(
        "https://wa.me/{contact_phone}?text={}",
        utf8_percent_encode(&message, NON_ALPHANUMERIC)
    )
}
