//! Request-id propagation and rate limiting.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id carried through handlers as an extension, echoed back on the
/// response. Clients may supply their own via the `x-request-id` header.
#[derive(Clone)]
pub struct RequestId(pub String);

pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), ToString::to_string);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Sliding-window rate limiter shared by the directory routes. The dataset
/// is public read-only reference data, so one process-wide window is enough.
#[derive(Clone)]
pub struct RateLimitState {
    hits: Arc<Mutex<VecDeque<Instant>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            hits: Arc::new(Mutex::new(VecDeque::new())),
            max_requests,
            window,
        }
    }
}

impl Default for RateLimitState {
    /// 120 requests per minute.
    fn default() -> Self {
        Self::new(120, Duration::from_secs(60))
    }
}

pub async fn enforce_rate_limit(
    State(state): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    {
        let mut hits = state.hits.lock().await;
        let now = Instant::now();
        while hits
            .front()
            .is_some_and(|oldest| now.duration_since(*oldest) >= state.window)
        {
            hits.pop_front();
        }
        if hits.len() >= state.max_requests {
            tracing::warn!("rate limit exceeded");
            let body = MiddlewareErrorBody {
                error: MiddlewareErrorDetail {
                    code: "rate_limited",
                    message: "rate limit exceeded, retry later",
                },
            };
            return (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
        }
        hits.push_back(now);
    }

    next.run(req).await
}

#[derive(Debug, Serialize)]
struct MiddlewareErrorBody {
    error: MiddlewareErrorDetail,
}

#[derive(Debug, Serialize)]
struct MiddlewareErrorDetail {
    code: &'static str,
    message: &'static str,
}
