//! Language selector handler.

use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use medpoint_core::Language;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct LanguageItem {
    code: &'static str,
    label: &'static str,
    rtl: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct LanguagesData {
    languages: Vec<LanguageItem>,
    default: &'static str,
}

pub(super) async fn list_languages(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<ApiResponse<LanguagesData>> {
    let languages = Language::ALL
        .into_iter()
        .map(|lang| LanguageItem {
            code: lang.code(),
            label: lang.native_label(),
            rtl: lang.is_rtl(),
        })
        .collect();

    Json(ApiResponse {
        data: LanguagesData {
            languages,
            default: state.config.default_language.code(),
        },
        meta: ResponseMeta::new(request_id.0),
    })
}
