//! HTTP response building module
//!
//! Builders for the status responses shared by pages, assets and the API.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN};
use hyper::{Response, StatusCode};

pub type HttpResponse = Response<Full<Bytes>>;

/// Build a 200 response with the given content type.
///
/// For HEAD requests the body is dropped but `Content-Length` still reports
/// the full size.
pub fn build_ok_response(data: Bytes, content_type: &str, is_head: bool) -> HttpResponse {
    build_response(StatusCode::OK, data, content_type, is_head)
}

/// Build a response with any status and content type
pub fn build_response(
    status: StatusCode,
    data: Bytes,
    content_type: &str,
    is_head: bool,
) -> HttpResponse {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build generic HTML response
pub fn build_html_response(content: String, is_head: bool) -> HttpResponse {
    build_ok_response(Bytes::from(content), "text/html; charset=utf-8", is_head)
}

/// Build 404 Not Found response
pub fn build_404_response() -> HttpResponse {
    build_response(
        StatusCode::NOT_FOUND,
        Bytes::from_static(b"404 Not Found"),
        "text/plain",
        false,
    )
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> HttpResponse {
    let mut response = build_response(
        StatusCode::METHOD_NOT_ALLOWED,
        Bytes::from_static(b"405 Method Not Allowed"),
        "text/plain",
        false,
    );
    response
        .headers_mut()
        .insert("Allow", HeaderValue::from_static("GET, HEAD, OPTIONS"));
    response
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> HttpResponse {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build health check response
pub fn build_health_response(status: &'static str) -> HttpResponse {
    build_ok_response(Bytes::from_static(status.as_bytes()), "text/plain", false)
}

/// Stamp the server name and, when enabled, the CORS origin header
pub fn finalize_response(
    mut response: HttpResponse,
    server_name: &str,
    enable_cors: bool,
) -> HttpResponse {
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(server_name) {
        headers.insert("Server", value);
    }
    if enable_cors {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    }
    response
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
