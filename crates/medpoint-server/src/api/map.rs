//! Map projection handler.

use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use medpoint_directory::{map_view, FacilityFilter, MapPin};

use crate::middleware::RequestId;

use super::{resolve_language, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct MapQuery {
    q: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    speciality: Option<String>,
    city: Option<String>,
    lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct MapData {
    pins: Vec<MapPinItem>,
    /// `[latitude, longitude]` of the first pin in roster order.
    center: Option<[f64; 2]>,
    zoom: u8,
}

#[derive(Debug, Serialize)]
pub(super) struct MapPinItem {
    id: String,
    name: String,
    speciality: String,
    phone: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl From<MapPin> for MapPinItem {
    fn from(pin: MapPin) -> Self {
        Self {
            id: pin.id,
            name: pin.name,
            speciality: pin.speciality,
            phone: pin.phone,
            latitude: pin.latitude,
            longitude: pin.longitude,
        }
    }
}

pub(super) async fn get_map_view(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<MapQuery>,
) -> Result<Json<ApiResponse<MapData>>, ApiError> {
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
    let view = map_view(&selection, lang, state.config.map_zoom);

    Ok(Json(ApiResponse {
        data: MapData {
            pins: view.pins.into_iter().map(MapPinItem::from).collect(),
            center: view.center.map(|(lat, lng)| [lat, lng]),
            zoom: view.zoom,
        },
        meta: ResponseMeta::new(request_id.0),
    }))
}
