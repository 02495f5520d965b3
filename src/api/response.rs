// API response utility functions module

use hyper::body::Bytes;
use hyper::StatusCode;
use serde::Serialize;

use super::types::{ErrorResponse, NotFoundResponse};
use super::ENDPOINT_PATHS;
use crate::http::{build_response, HttpResponse};
use crate::logger;

const JSON: &str = "application/json";

/// Build JSON response
pub fn json_response<T: Serialize>(status: StatusCode, body: &T, is_head: bool) -> HttpResponse {
    match serde_json::to_vec(body) {
        Ok(json) => build_response(status, Bytes::from(json), JSON, is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            build_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(br#"{"error":"Internal server error"}"#),
                JSON,
                is_head,
            )
        }
    }
}

/// 404 Not Found response listing the joke endpoints
pub fn not_found(is_head: bool) -> HttpResponse {
    let body = NotFoundResponse {
        error: "Not Found",
        available_endpoints: ENDPOINT_PATHS.to_vec(),
    };
    json_response(StatusCode::NOT_FOUND, &body, is_head)
}

/// 400 Bad Request response
pub fn bad_request(message: String, allowed: Vec<&'static str>, is_head: bool) -> HttpResponse {
    let body = ErrorResponse {
        error: message,
        allowed,
    };
    json_response(StatusCode::BAD_REQUEST, &body, is_head)
}
