//! Request logging middleware.
//!
//! Tags every response with an `x-request-id` and writes one
//! `REQUEST_HANDLED` line per request.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::observability::{Event, Logger};

/// Response header carrying the generated request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = Uuid::new_v4().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let elapsed_us = started.elapsed().as_micros().to_string();
    let status = response.status();
    let fields = [
        ("elapsed_us", elapsed_us.as_str()),
        ("method", method.as_str()),
        ("path", path.as_str()),
        ("request_id", request_id.as_str()),
        ("status", status.as_str()),
    ];
    if status.is_server_error() {
        Logger::error(Event::RequestHandled.as_str(), &fields);
    } else {
        Logger::info(Event::RequestHandled.as_str(), &fields);
    }

    response
}
