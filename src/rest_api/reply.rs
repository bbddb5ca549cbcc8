//! Typed JSON responses.
//!
//! A [`Reply`] pairs a status code with any serializable payload and is
//! encoded through the codec only when axum turns it into a response.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::codec::{self, JSON_CONTENT_TYPE};
use crate::observability::{Event, Logger};

/// A status code plus a payload that will be sent as JSON
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub status: StatusCode,
    pub payload: T,
}

impl<T: Serialize> Reply<T> {
    pub fn new(status: StatusCode, payload: T) -> Self {
        Self { status, payload }
    }

    pub fn ok(payload: T) -> Self {
        Self::new(StatusCode::OK, payload)
    }

    pub fn created(payload: T) -> Self {
        Self::new(StatusCode::CREATED, payload)
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match codec::encode(&self.payload) {
            Ok(body) => (
                self.status,
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                body,
            )
                .into_response(),
            // Fatal to this request only: raw error text, process keeps serving
            Err(err) => {
                let message = err.to_string();
                Logger::error(Event::EncodeFailed.as_str(), &[("error", message.as_str())]);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("text/plain; charset=utf-8"),
                    )],
                    message,
                )
                    .into_response()
            }
        }
    }
}
