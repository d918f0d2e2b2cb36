//! Categorical filtering over the roster.

use medpoint_core::FacilityRecord;

/// Selector value meaning "no constraint on this dimension".
pub const ALL_SENTINEL: &str = "_all";

/// Exact-match selectors for the three categorical dimensions. An unset,
/// empty, or `"_all"` selector leaves its dimension unconstrained;
/// constrained dimensions compare raw values case-sensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacilityFilter<'a> {
    pub kind: Option<&'a str>,
    pub speciality: Option<&'a str>,
    pub city: Option<&'a str>,
}

impl FacilityFilter<'_> {
    /// True when the facility passes all three dimension checks.
    #[must_use]
    pub fn matches(&self, facility: &FacilityRecord) -> bool {
        dimension_matches(self.kind, &facility.kind)
            && dimension_matches(self.speciality, &facility.speciality)
            && dimension_matches(self.city, &facility.city)
    }

    /// Constrained dimensions as `(name, value)` pairs, in type,
    /// speciality, city order.
    #[must_use]
    pub fn active_dimensions(&self) -> Vec<(&'static str, &str)> {
        let mut dims = Vec::new();
        if let Some(value) = constraint(self.kind) {
            dims.push(("type", value));
        }
        if let Some(value) = constraint(self.speciality) {
            dims.push(("speciality", value));
        }
        if let Some(value) = constraint(self.city) {
            dims.push(("city", value));
        }
        dims
    }

    /// True when at least one dimension is constrained.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.active_dimensions().is_empty()
    }
}

fn constraint(selector: Option<&str>) -> Option<&str> {
    match selector {
        None => None,
        Some(value) if value.is_empty() || value == ALL_SENTINEL => None,
        Some(value) => Some(value),
    }
}

fn dimension_matches(selector: Option<&str>, raw: &str) -> bool {
    constraint(selector).is_none_or(|wanted| wanted == raw)
}
