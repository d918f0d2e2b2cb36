//! API surface: versioned routes, response envelopes, and error mapping.
//!
//! Every payload rides in an `ApiResponse` envelope carrying the request id
//! and a timestamp; errors use the same `meta` block with a stable `code`
//! that maps onto the HTTP status.

pub mod facilities;
pub mod languages;
pub mod map;

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use medpoint_core::{AppConfig, Catalog, Language};
use medpoint_directory::Directory;

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

/// Shared application state: the immutable roster snapshot, the translation
/// catalog, and runtime settings.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory>,
    pub catalog: Arc<Catalog>,
    pub config: Arc<AppConfig>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    #[must_use]
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.error.code.as_str() {
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "not_found" => StatusCode::NOT_FOUND,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Resolve the `lang` query parameter, falling back to the configured
/// default when absent. Unknown codes are a validation error.
pub(crate) fn resolve_language(
    request_id: &str,
    lang: Option<&str>,
    default: Language,
) -> Result<Language, ApiError> {
    match lang {
        None => Ok(default),
        Some(raw) => raw.parse::<Language>().map_err(|e| {
            ApiError::new(request_id.to_string(), "validation_error", e.to_string())
        }),
    }
}

/// Assemble the router: public health check plus rate-limited directory
/// routes, wrapped in CORS, tracing, and request-id layers.
pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let directory_routes = Router::new()
        .route("/api/v1/facilities", get(facilities::list_facilities))
        .route(
            "/api/v1/facilities/suggest",
            get(facilities::suggest_facilities),
        )
        .route(
            "/api/v1/facilities/filters",
            get(facilities::list_filter_options),
        )
        .route(
            "/api/v1/facilities/by-city",
            get(facilities::list_facilities_by_city),
        )
        .route("/api/v1/map", get(map::get_map_view))
        .route("/api/v1/languages", get(languages::list_languages))
        .route_layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ));

    Router::new()
        .route("/api/v1/health", get(health))
        .merge(directory_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    facilities: usize,
    languages: usize,
}

async fn health(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            facilities: state.directory.len(),
            languages: Language::ALL.len(),
        },
        meta: ResponseMeta::new(request_id.0),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use medpoint_core::{AppConfig, Environment, FacilitiesFile, TranslationNode};

    use super::*;

    const ROSTER_YAML: &str = r#"
facilities:
  - id: "f01"
    name: "Hôpital Cheikh Zayed"
    ar_name: "مستشفى الشيخ زايد"
    type: "hospital"
    speciality: "cardiology"
    city: "nouakchott"
    phone: "+222 45 29 84 98"
    latitude: 18.1021
    longitude: -15.9662
  - id: "f02"
    name: "Clinique Kissi"
    ar_name: "عيادة كيسي"
    type: "clinic"
    speciality: "gynecology"
    city: "nouakchott"
    phone: "+222 45 25 87 66"
    latitude: 18.0903
    longitude: -15.9741
  - id: "f03"
    name: "Clinique Atlas"
    type: "clinic"
    speciality: "ophthalmology"
    city: "nouakchott"
    phone: "informez nous"
    latitude: 18.0794
    longitude: -15.9833
  - id: "f04"
    name: "Centre de Pédiatrie"
    type: "health_center"
    speciality: "pediatrics"
    city: "nouakchott"
    phone: ""
    latitude: "18.1244"
    longitude: "-15.9489"
  - id: "f05"
    name: "Poste d'Urgences de Sebkha"
    type: "checkpoint"
    speciality: "emergency"
    city: "nouakchott"
    phone: "+222 36 30 21 47"
    latitude: 0
    longitude: 0
  - id: "f06"
    name: "Centre Dermatologique"
    type: "clinic"
    speciality: "dermatology"
    city: "nouakchott"
    phone: "+222 44 48 59 12"
  - id: "f07"
    name: "Hôpital Régional de Nouadhibou"
    ar_name: "مستشفى انواذيبو"
    type: "hospital"
    speciality: "general"
    city: "nouadhibou"
    phone: "+222 45 74 51 28"
    latitude: 20.9346
    longitude: -17.0348
  - id: "f08"
    name: "Clinique de la Baie"
    type: "clinic"
    speciality: "cardiology"
    city: "nouadhibou"
    phone: "+222 45 74 60 03"
    latitude: 20.9412
    longitude: -17.0301
  - id: "f09"
    name: "Hôpital d'Akjoujt"
    type: "hospital"
    speciality: "general"
    city: "akjoujt"
    phone: "+222 46 58 33 70"
    latitude: 19.7469
    longitude: -14.3853
  - id: "f10"
    name: "Point de Contrôle de Tasiast"
    type: "checkpoint"
    speciality: "emergency"
    city: "akjoujt"
    latitude: 20.5512
    longitude: -15.4966
  - id: "f11"
    name: "Hôpital Régional d'Atar"
    type: "hospital"
    speciality: "emergency"
    city: "atar"
    phone: "+222 46 44 12 57"
    latitude: 20.5169
    longitude: -13.0499
  - id: "f12"
    name: "Hôpital de Zouerate"
    type: "hospital"
    speciality: "general"
    city: "zouerate"
    phone: "+222 46 50 19 22"
    latitude: 22.7354
    longitude: -12.4697
"#;

    const FR_LOCALE: &str = r#"
types:
  hospital: "Hôpital"
  clinic: "Clinique"
  health_center: "Centre de santé"
  checkpoint: "Point de contrôle"
specialities:
  general: "Médecine générale"
  cardiology: "Cardiologie"
  pediatrics: "Pédiatrie"
  ophthalmology: "Ophtalmologie"
  dermatology: "Dermatologie"
  gynecology: "Gynécologie"
  emergency: "Urgences"
cities:
  nouakchott: "Nouakchott"
  nouadhibou: "Nouadhibou"
  akjoujt: "Akjoujt"
  atar: "Atar"
  zouerate: "Zouérate"
"#;

    const AR_LOCALE: &str = r#"
types:
  hospital: "مستشفى"
specialities:
  cardiology: "أمراض القلب"
cities:
  nouakchott: "انواكشوط"
"#;

    fn test_state() -> AppState {
        let roster: FacilitiesFile = serde_yaml::from_str(ROSTER_YAML).unwrap();
        let fr: TranslationNode = serde_yaml::from_str(FR_LOCALE).unwrap();
        let en: TranslationNode = serde_yaml::from_str("title: \"Medical Checkpoints\"").unwrap();
        let ar: TranslationNode = serde_yaml::from_str(AR_LOCALE).unwrap();

        AppState {
            directory: Arc::new(Directory::new(roster.facilities)),
            catalog: Arc::new(Catalog::new(fr, en, ar)),
            config: Arc::new(AppConfig {
                env: Environment::Test,
                bind_addr: "127.0.0.1:0".parse().unwrap(),
                log_level: "info".to_string(),
                facilities_path: PathBuf::from("unused"),
                locales_dir: PathBuf::from("unused"),
                language_file: PathBuf::from("unused"),
                default_language: Language::Fr,
                contact_phone: "+22242285899".to_string(),
                page_size: 9,
                map_zoom: 13,
            }),
        }
    }

    fn test_app() -> Router {
        build_app(test_state(), RateLimitState::default())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn health_reports_roster_and_language_counts() {
        let (status, json) = get_json(test_app(), "/api/v1/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["facilities"], 12);
        assert_eq!(json["data"]["languages"], 3);
        assert!(json["meta"]["request_id"].is_string());
        assert!(json["meta"]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn list_reveals_one_page_by_default() {
        let (status, json) = get_json(test_app(), "/api/v1/facilities").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["total"], 12);
        assert_eq!(json["data"]["shown"], 9);
        assert_eq!(json["data"]["next_limit"], 18);
        assert_eq!(json["data"]["items"].as_array().unwrap().len(), 9);
        assert_eq!(json["data"]["items"][0]["id"], "f01");
    }

    #[tokio::test]
    async fn list_honors_the_requested_reveal_count() {
        let (_, json) = get_json(test_app(), "/api/v1/facilities?limit=18").await;

        assert_eq!(json["data"]["shown"], 12);
        assert!(json["data"]["next_limit"].is_null());
    }

    #[tokio::test]
    async fn list_clamps_a_zero_reveal_count() {
        let (_, json) = get_json(test_app(), "/api/v1/facilities?limit=0").await;

        assert_eq!(json["data"]["shown"], 1);
        assert_eq!(json["data"]["next_limit"], 10);
    }

    #[tokio::test]
    async fn list_combines_search_and_filters() {
        let (_, json) = get_json(
            test_app(),
            "/api/v1/facilities?q=atar&type=hospital",
        )
        .await;

        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["items"][0]["id"], "f11");
    }

    #[tokio::test]
    async fn list_filter_values_match_case_sensitively() {
        let (_, json) = get_json(test_app(), "/api/v1/facilities?type=Hospital").await;
        assert_eq!(json["data"]["total"], 0);
    }

    #[tokio::test]
    async fn list_treats_the_all_sentinel_as_no_constraint() {
        let (_, json) = get_json(test_app(), "/api/v1/facilities?type=_all&city=_all").await;
        assert_eq!(json["data"]["total"], 12);
    }

    #[tokio::test]
    async fn list_uses_arabic_display_names_with_fallback() {
        let (_, json) = get_json(test_app(), "/api/v1/facilities?lang=ar&city=nouakchott").await;

        let items = json["data"]["items"].as_array().unwrap();
        assert_eq!(items[0]["display_name"], "مستشفى الشيخ زايد");
        // f03 has no Arabic name and keeps the primary one.
        assert_eq!(items[2]["display_name"], "Clinique Atlas");
    }

    #[tokio::test]
    async fn list_rejects_an_unknown_language() {
        let (status, json) = get_json(test_app(), "/api/v1/facilities?lang=zz").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "validation_error");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("unknown language"));
        assert!(json["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn cards_resolve_missing_data_into_actions() {
        let (_, json) = get_json(test_app(), "/api/v1/facilities?limit=12").await;
        let items = json["data"]["items"].as_array().unwrap();

        // f01 is complete.
        assert_eq!(items[0]["phone"], "+222 45 29 84 98");
        assert_eq!(items[0]["phone_url"], "tel:+222 45 29 84 98");
        assert!(items[0]["inform_phone_url"].is_null());
        assert!(items[0]["directions_google_url"]
            .as_str()
            .unwrap()
            .contains("18.1021,-15.9662"));
        assert!(items[0]["inform_location_url"].is_null());

        // f03 carries the "informez nous" placeholder.
        assert!(items[2]["phone"].is_null());
        assert!(items[2]["phone_url"].is_null());
        let inform = items[2]["inform_phone_url"].as_str().unwrap();
        assert!(inform.starts_with("https://wa.me/+22242285899?text="));
        assert!(inform.contains("f03"));

        // f04 has string coordinates: directions work, the map will not plot it.
        assert!(items[3]["directions_apple_url"]
            .as_str()
            .unwrap()
            .contains("18.1244,-15.9489"));

        // f05 sits at 0,0 and f06 has no coordinates at all.
        assert!(items[4]["directions_google_url"].is_null());
        assert!(items[4]["inform_location_url"].is_string());
        assert!(items[5]["inform_location_url"].is_string());
    }

    #[tokio::test]
    async fn suggest_translates_category_hits() {
        let (_, json) = get_json(test_app(), "/api/v1/facilities/suggest?q=cardio").await;
        let got = json["data"]["suggestions"].as_array().unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0], "Cardiologie");
    }

    #[tokio::test]
    async fn suggest_mixes_names_and_labels_in_scan_order() {
        let (_, json) = get_json(test_app(), "/api/v1/facilities/suggest?q=nou").await;
        let got: Vec<&str> = json["data"]["suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            got,
            ["Nouakchott", "Hôpital Régional de Nouadhibou", "Nouadhibou"]
        );
    }

    #[tokio::test]
    async fn suggest_requires_a_non_blank_query() {
        let (status, json) = get_json(test_app(), "/api/v1/facilities/suggest").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["data"]["suggestions"].as_array().unwrap().is_empty());

        let (_, json) = get_json(test_app(), "/api/v1/facilities/suggest?q=%20%20").await;
        assert!(json["data"]["suggestions"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn filter_options_are_distinct_translated_and_ordered() {
        let (_, json) = get_json(test_app(), "/api/v1/facilities/filters").await;

        assert_eq!(json["data"]["all_value"], "_all");

        let types = json["data"]["types"].as_array().unwrap();
        let values: Vec<&str> = types
            .iter()
            .map(|t| t["value"].as_str().unwrap())
            .collect();
        assert_eq!(values, ["hospital", "clinic", "health_center", "checkpoint"]);
        assert_eq!(types[0]["label"], "Hôpital");

        let cities = json["data"]["cities"].as_array().unwrap();
        assert_eq!(cities.len(), 5);
        assert_eq!(cities[0]["value"], "nouakchott");
    }

    #[tokio::test]
    async fn by_city_orders_by_count_then_name() {
        let (_, json) = get_json(test_app(), "/api/v1/facilities/by-city").await;
        let rows = json["data"]["cities"].as_array().unwrap();

        assert_eq!(rows[0]["city"], "nouakchott");
        assert_eq!(rows[0]["facility_count"], 6);
        // f05 (0,0) and f06 (absent) fail the location check.
        assert_eq!(rows[0]["located_count"], 4);
        assert_eq!(rows[1]["city"], "akjoujt");
        assert_eq!(rows[1]["facility_count"], 2);
        assert_eq!(rows[2]["city"], "nouadhibou");
        assert_eq!(rows[2]["facility_count"], 2);
    }

    #[tokio::test]
    async fn map_plots_only_numeric_nonzero_coordinates() {
        let (_, json) = get_json(test_app(), "/api/v1/map").await;

        let pins = json["data"]["pins"].as_array().unwrap();
        assert_eq!(pins.len(), 9);
        let ids: Vec<&str> = pins.iter().map(|p| p["id"].as_str().unwrap()).collect();
        assert!(!ids.contains(&"f04"));
        assert!(!ids.contains(&"f05"));
        assert!(!ids.contains(&"f06"));

        assert_eq!(json["data"]["zoom"], 13);
        let center = json["data"]["center"].as_array().unwrap();
        assert!((center[0].as_f64().unwrap() - 18.1021).abs() < 1e-9);
        assert!((center[1].as_f64().unwrap() - (-15.9662)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn map_respects_filters_and_language() {
        let (_, json) = get_json(test_app(), "/api/v1/map?type=hospital&lang=ar").await;

        let pins = json["data"]["pins"].as_array().unwrap();
        assert_eq!(pins.len(), 5);
        assert_eq!(pins[0]["name"], "مستشفى الشيخ زايد");
        assert_eq!(pins[0]["phone"], "+222 45 29 84 98");
    }

    #[tokio::test]
    async fn map_with_no_plottable_selection_has_no_center() {
        let (_, json) = get_json(test_app(), "/api/v1/map?speciality=dermatology").await;

        assert!(json["data"]["pins"].as_array().unwrap().is_empty());
        assert!(json["data"]["center"].is_null());
    }

    #[tokio::test]
    async fn languages_lists_the_selector_entries() {
        let (_, json) = get_json(test_app(), "/api/v1/languages").await;

        assert_eq!(json["data"]["default"], "fr");
        let languages = json["data"]["languages"].as_array().unwrap();
        assert_eq!(languages.len(), 3);
        assert_eq!(languages[0]["code"], "fr");
        assert_eq!(languages[0]["label"], "Français");
        assert!(!languages[0]["rtl"].as_bool().unwrap());
        assert_eq!(languages[2]["code"], "ar");
        assert_eq!(languages[2]["label"], "العربية");
        assert!(languages[2]["rtl"].as_bool().unwrap());
    }

    #[tokio::test]
    async fn request_id_header_round_trips_into_the_envelope() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header("x-request-id", "trace-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-123");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["meta"]["request_id"], "trace-123");
    }

    #[tokio::test]
    async fn unknown_routes_are_not_found() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
