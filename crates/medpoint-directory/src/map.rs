//! Map pin projection.

use medpoint_core::{FacilityRecord, Language};

/// One plottable facility. Only facilities whose coordinates are numeric
/// and non-zero become pins; string-typed coordinates never plot even when
/// they satisfy the looser list-view location check.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPin {
    pub id: String,
    pub name: String,
    pub speciality: String,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Pin set plus the initial viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub pins: Vec<MapPin>,
    /// First pin's coordinates in roster order; `None` when nothing plots.
    pub center: Option<(f64, f64)>,
    pub zoom: u8,
}

/// Project a selection onto the map.
#[must_use]
pub fn map_view(selection: &[&FacilityRecord], lang: Language, zoom: u8) -> MapView {
    let pins: Vec<MapPin> = selection
        .iter()
        .filter_map(|facility| {
            let (latitude, longitude) = facility.map_position()?;
            Some(MapPin {
                id: facility.id.clone(),
                name: facility.display_name(lang).to_string(),
                speciality: facility.speciality.clone(),
                phone: facility.phone().map(ToOwned::to_owned),
                latitude,
                longitude,
            })
        })
        .collect();

    let center = pins.first().map(|pin| (pin.latitude, pin.longitude));

    MapView { pins, center, zoom }
}
