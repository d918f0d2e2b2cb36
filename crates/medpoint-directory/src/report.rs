//! Data-completeness reporting over the roster.

use medpoint_core::FacilityRecord;

/// Counts of facilities missing contact or location data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapReport {
    pub total: usize,
    pub missing_phone: usize,
    pub missing_location: usize,
    /// Ids of facilities missing either field, in roster order.
    pub incomplete_ids: Vec<String>,
}

/// Count facilities with missing phone or location data.
#[must_use]
pub fn gaps(facilities: &[FacilityRecord]) -> GapReport {
    let mut report = GapReport {
        total: facilities.len(),
        ..GapReport::default()
    };

    for facility in facilities {
        let phone_gap = facility.is_phone_missing();
        let location_gap = facility.is_location_missing();
        if phone_gap {
            report.missing_phone += 1;
        }
        if location_gap {
            report.missing_location += 1;
        }
        if phone_gap || location_gap {
            report.incomplete_ids.push(facility.id.clone());
        }
    }

    report
}

/// Facility counts for one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitySummary {
    /// Raw city value as stored in the roster.
    pub city: String,
    pub facility_count: usize,
    /// Facilities whose list-view location check passes.
    pub located_count: usize,
}

/// Group facilities by raw city value, ordered by facility count descending
/// and then by city name.
#[must_use]
pub fn by_city(facilities: &[FacilityRecord]) -> Vec<CitySummary> {
    let mut summaries: Vec<CitySummary> = Vec::new();

    for facility in facilities {
        let located = !facility.is_location_missing();
        match summaries.iter_mut().find(|s| s.city == facility.city) {
            Some(summary) => {
                summary.facility_count += 1;
                if located {
                    summary.located_count += 1;
                }
            }
            None => summaries.push(CitySummary {
                city: facility.city.clone(),
                facility_count: 1,
                located_count: usize::from(located),
            }),
        }
    }

    summaries.sort_by(|a, b| {
        b.facility_count
            .cmp(&a.facility_count)
            .then_with(|| a.city.cmp(&b.city))
    });
    summaries
}
