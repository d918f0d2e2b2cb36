//! Distinct categorical values backing the filter selectors.

use medpoint_core::{Catalog, Category, FacilityRecord, Language};

/// One selectable filter value with its translated label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Raw value as stored in the roster, used verbatim when filtering.
    pub value: String,
    pub label: String,
}

/// The distinct values available per dimension, in roster order, with
/// empty values skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub types: Vec<FilterOption>,
    pub specialities: Vec<FilterOption>,
    pub cities: Vec<FilterOption>,
}

/// Collect the selector option lists for all three dimensions.
#[must_use]
pub fn filter_options(
    facilities: &[FacilityRecord],
    catalog: &Catalog,
    lang: Language,
) -> FilterOptions {
    FilterOptions {
        types: collect(facilities, catalog, lang, Category::Type, |f| &f.kind),
        specialities: collect(facilities, catalog, lang, Category::Speciality, |f| {
            &f.speciality
        }),
        cities: collect(facilities, catalog, lang, Category::City, |f| &f.city),
    }
}

fn collect(
    facilities: &[FacilityRecord],
    catalog: &Catalog,
    lang: Language,
    category: Category,
    field: fn(&FacilityRecord) -> &str,
) -> Vec<FilterOption> {
    let mut options: Vec<FilterOption> = Vec::new();
    for facility in facilities {
        let value = field(facility);
        if value.is_empty() || options.iter().any(|option| option.value == value) {
            continue;
        }
        options.push(FilterOption {
            value: value.to_string(),
            label: catalog.category_label(lang, category, value),
        });
    }
    options
}

#[cfg(test)]
mod tests {
    use medpoint_core::{Catalog, TranslationNode};

    use crate::testutil::facility;

    use super::*;

    fn catalog() -> Catalog {
        let fr: TranslationNode = serde_yaml::from_str(
            r#"
types:
  hospital: "Hôpital"
  clinic: "Clinique"
specialities:
  general: "Médecine générale"
  cardiology: "Cardiologie"
cities:
  nouakchott: "Nouakchott"
  atar: "Atar"
"#,
        )
        .unwrap();
        let en: TranslationNode = serde_yaml::from_str("title: \"x\"").unwrap();
        let ar: TranslationNode = serde_yaml::from_str("title: \"x\"").unwrap();
        Catalog::new(fr, en, ar)
    }

    #[test]
    fn values_are_distinct_and_in_roster_order() {
        let roster = vec![
            facility("a", "A", "hospital", "cardiology", "nouakchott"),
            facility("b", "B", "clinic", "general", "atar"),
            facility("c", "C", "hospital", "general", "nouakchott"),
        ];

        let got = filter_options(&roster, &catalog(), Language::Fr);

        let types: Vec<&str> = got.types.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(types, ["hospital", "clinic"]);

        let cities: Vec<&str> = got.cities.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(cities, ["nouakchott", "atar"]);
    }

    #[test]
    fn labels_are_translated() {
        let roster = vec![facility("a", "A", "hospital", "cardiology", "nouakchott")];
        let got = filter_options(&roster, &catalog(), Language::Fr);

        assert_eq!(got.types[0].label, "Hôpital");
        assert_eq!(got.specialities[0].label, "Cardiologie");
        assert_eq!(got.cities[0].label, "Nouakchott");
    }

    #[test]
    fn empty_values_are_skipped() {
        let mut blank = facility("a", "A", "", "general", "nouakchott");
        blank.speciality = String::new();
        let roster = vec![blank, facility("b", "B", "clinic", "general", "atar")];

        let got = filter_options(&roster, &catalog(), Language::Fr);

        assert_eq!(got.types.len(), 1);
        assert_eq!(got.types[0].value, "clinic");
        assert_eq!(got.specialities.len(), 1);
    }

    #[test]
    fn unknown_values_fall_back_to_their_key_path() {
        let roster = vec![facility("a", "A", "checkpoint", "general", "chami")];
        let got = filter_options(&roster, &catalog(), Language::Fr);

        assert_eq!(got.types[0].label, "types.checkpoint");
        assert_eq!(got.cities[0].label, "cities.chami");
    }
}
