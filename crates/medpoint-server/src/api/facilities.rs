//! Facility list, suggestion, filter-option, and coverage handlers.

use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use medpoint_directory::{
    by_city, facility_card, filter_options, normalize_reveal, reveal, suggestions, FacilityCard,
    FacilityFilter, ALL_SENTINEL,
};

use crate::middleware::RequestId;

use super::{resolve_language, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct FacilitiesQuery {
    q: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    speciality: Option<String>,
    city: Option<String>,
    lang: Option<String>,
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct FacilityListData {
    total: usize,
    shown: usize,
    next_limit: Option<usize>,
    items: Vec<FacilityCardItem>,
}

#[derive(Debug, Serialize)]
pub(super) struct FacilityCardItem {
    id: String,
    display_name: String,
    type_label: String,
    speciality_label: String,
    city_label: String,
    phone: Option<String>,
    phone_url: Option<String>,
    inform_phone_url: Option<String>,
    directions_apple_url: Option<String>,
    directions_google_url: Option<String>,
    inform_location_url: Option<String>,
}

impl From<FacilityCard> for FacilityCardItem {
    fn from(card: FacilityCard) -> Self {
        Self {
            id: card.id,
            display_name: card.display_name,
            type_label: card.type_label,
            speciality_label: card.speciality_label,
            city_label: card.city_label,
            phone: card.phone,
            phone_url: card.phone_url,
            inform_phone_url: card.inform_phone_url,
            directions_apple_url: card.directions_apple_url,
            directions_google_url: card.directions_google_url,
            inform_location_url: card.inform_location_url,
        }
    }
}

pub(super) async fn list_facilities(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<FacilitiesQuery>,
) -> Result<Json<ApiResponse<FacilityListData>>, ApiError> {
    let lang = resolve_language(
        &request_id.0,
        query.lang.as_deref(),
        state.config.default_language,
    )?;
    let filter = FacilityFilter {
        kind: query.kind.as_deref(),
        speciality: query.speciality.as_deref(),
        city: query.city.as_deref(),
    };

    let selection = state
        .directory
        .select(lang, query.q.as_deref().unwrap_or(""), &filter);
    let revealed = normalize_reveal(query.limit, state.config.page_size);
    let page = reveal(selection, revealed, state.config.page_size);

    let items: Vec<FacilityCardItem> = page
        .items
        .iter()
        .map(|facility| {
            facility_card(facility, &state.catalog, lang, &state.config.contact_phone).into()
        })
        .collect();

    Ok(Json(ApiResponse {
        data: FacilityListData {
            total: page.total,
            shown: items.len(),
            next_limit: page.next_limit,
            items,
        },
        meta: ResponseMeta::new(request_id.0),
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct SuggestQuery {
    q: Option<String>,
    lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SuggestData {
    suggestions: Vec<String>,
}

pub(super) async fn suggest_facilities(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<SuggestQuery>,
) -> Result<Json<ApiResponse<SuggestData>>, ApiError> {
    let lang = resolve_language(
        &request_id.0,
        query.lang.as_deref(),
        state.config.default_language,
    )?;

    let suggestions = suggestions(
        state.directory.facilities(),
        &state.catalog,
        lang,
        query.q.as_deref().unwrap_or(""),
    );

    Ok(Json(ApiResponse {
        data: SuggestData { suggestions },
        meta: ResponseMeta::new(request_id.0),
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct LangQuery {
    lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct FilterOptionItem {
    value: String,
    label: String,
}

#[derive(Debug, Serialize)]
pub(super) struct FilterOptionsData {
    types: Vec<FilterOptionItem>,
    specialities: Vec<FilterOptionItem>,
    cities: Vec<FilterOptionItem>,
    /// Sentinel clients send to leave a dimension unconstrained.
    all_value: &'static str,
}

pub(super) async fn list_filter_options(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<LangQuery>,
) -> Result<Json<ApiResponse<FilterOptionsData>>, ApiError> {
    let lang = resolve_language(
        &request_id.0,
        query.lang.as_deref(),
        state.config.default_language,
    )?;

    let options = filter_options(state.directory.facilities(), &state.catalog, lang);
    let to_items = |options: Vec<medpoint_directory::FilterOption>| {
        options
            .into_iter()
            .map(|option| FilterOptionItem {
                value: option.value,
                label: option.label,
            })
            .collect()
    };

    Ok(Json(ApiResponse {
        data: FilterOptionsData {
            types: to_items(options.types),
            specialities: to_items(options.specialities),
            cities: to_items(options.cities),
            all_value: ALL_SENTINEL,
        },
        meta: ResponseMeta::new(request_id.0),
    }))
}

#[derive(Debug, Serialize)]
pub(super) struct CitySummaryItem {
    city: String,
    city_label: String,
    facility_count: usize,
    located_count: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct ByCityData {
    cities: Vec<CitySummaryItem>,
}

pub(super) async fn list_facilities_by_city(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<LangQuery>,
) -> Result<Json<ApiResponse<ByCityData>>, ApiError> {
    let lang = resolve_language(
        &request_id.0,
        query.lang.as_deref(),
        state.config.default_language,
    )?;

    let cities = by_city(state.directory.facilities())
        .into_iter()
        .map(|summary| CitySummaryItem {
            city_label: state.catalog.category_label(
                lang,
                medpoint_core::Category::City,
                &summary.city,
            ),
            city: summary.city,
            facility_count: summary.facility_count,
            located_count: summary.located_count,
        })
        .collect();

    Ok(Json(ApiResponse {
        data: ByCityData { cities },
        meta: ResponseMeta::new(request_id.0),
    }))
}
