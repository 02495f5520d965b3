//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, access
//! logging and dispatch to health probes, the JSON API, pages and assets.

use crate::api;
use crate::config::AppState;
use crate::handler::{pages, static_files};
use crate::http::{self, HttpResponse};
use crate::logger::{self, AccessLogEntry};
use hyper::body::Body;
use hyper::header::{REFERER, USER_AGENT};
use hyper::{Method, Request, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request information needed by the route handlers
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<HttpResponse, Infallible> {
    let started = Instant::now();
    let method = req.method();
    let uri = req.uri();

    logger::log_request(method, uri, req.version());
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let response = match check_http_method(method, state.config.http.enable_cors) {
        Some(resp) => resp,
        None => {
            let ctx = RequestContext {
                path: uri.path(),
                query: uri.query(),
                is_head: *method == Method::HEAD,
            };
            route_request(&ctx, &state).await
        }
    };

    let response = http::finalize_response(
        response,
        &state.config.http.server_name,
        state.config.http.enable_cors,
    );

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.referer = header_string(&req, REFERER);
        entry.user_agent = header_string(&req, USER_AGENT);
        let body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.finish(response.status().as_u16(), body_bytes, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<HttpResponse> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route request based on path and configuration
pub async fn route_request(ctx: &RequestContext<'_>, state: &AppState) -> HttpResponse {
    let health = &state.config.health;
    if health.enabled && (ctx.path == health.liveness_path || ctx.path == health.readiness_path) {
        return http::build_health_response("ok");
    }

    if ctx.path == "/api" || ctx.path.starts_with("/api/") {
        return api::handle_api_request(ctx, state);
    }

    if let Some(page) = pages::Page::from_path(ctx.path) {
        return pages::serve_page(ctx, page, &state.config.app.site_name);
    }

    if ctx.path.starts_with(static_files::STATIC_PREFIX) {
        return static_files::serve_asset(ctx, &state.config.app.static_dir).await;
    }

    if static_files::FAVICON_PATHS.contains(&ctx.path) {
        return static_files::serve_favicon(ctx, &state.config.app.static_dir).await;
    }

    http::build_404_response()
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

fn header_string<B>(req: &Request<B>, name: hyper::header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
