// src/logging_middleware.rs
//! Per-request logging: a request id, method, path, status, latency and
//! the admission controller's in-flight count. Error bodies are logged at
//! debug level.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::services::AdmissionController;

const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn log_requests(request: Request, next: Next) -> Result<Response, StatusCode> {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let admission = request
        .extensions()
        .get::<Arc<AdmissionController>>()
        .cloned();

    let started = Instant::now();
    let response = next.run(request).await;
    let latency_ms = started.elapsed().as_millis() as u64;
    let status = response.status();
    let in_flight = admission.as_ref().map(|a| a.in_flight()).unwrap_or(0);

    if status.is_server_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            in_flight,
            "Request failed"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            in_flight,
            "Request completed"
        );
    }

    let (mut parts, body) = response.into_parts();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        parts.headers.insert(REQUEST_ID_HEADER, value);
    }

    if !status.is_client_error() && !status.is_server_error() {
        return Ok(Response::from_parts(parts, body));
    }

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    if let Ok(body_str) = std::str::from_utf8(&bytes) {
        debug!(request_id = %request_id, response_body = %body_str, "📤 Error response");
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
