//! Static file serving module
//!
//! Serves the site's stylesheet, script and favicon from the static directory.

use crate::handler::router::RequestContext;
use crate::http::{self, mime, HttpResponse};
use crate::logger;
use hyper::body::Bytes;
use std::path::Path;
use tokio::fs;

/// URL prefix mapped onto the static directory
pub const STATIC_PREFIX: &str = "/static/";

pub const FAVICON_PATHS: &[&str] = &["/favicon.ico", "/favicon.svg"];

const FAVICON_FILE: &str = "favicon.svg";

/// Serve a file below `/static/`
pub async fn serve_asset(ctx: &RequestContext<'_>, static_dir: &str) -> HttpResponse {
    let relative = ctx.path.trim_start_matches(STATIC_PREFIX);
    match load_from_directory(static_dir, relative).await {
        Some((content, content_type)) => {
            http::build_ok_response(Bytes::from(content), content_type, ctx.is_head)
        }
        None => http::build_404_response(),
    }
}

/// Serve favicon from the static directory
pub async fn serve_favicon(ctx: &RequestContext<'_>, static_dir: &str) -> HttpResponse {
    match load_from_directory(static_dir, FAVICON_FILE).await {
        Some((content, content_type)) => {
            http::build_ok_response(Bytes::from(content), content_type, ctx.is_head)
        }
        None => http::build_404_response(),
    }
}

/// Load a file from `static_dir`, refusing paths that escape it
pub async fn load_from_directory(
    static_dir: &str,
    relative_path: &str,
) -> Option<(Vec<u8>, &'static str)> {
    if relative_path.is_empty() || relative_path.ends_with('/') {
        return None;
    }

    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    // File not found is common (404), no need to log
    let file_path = static_dir_canonical.join(relative_path);
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            relative_path,
            file_path_canonical.display()
        ));
        return None;
    }
    if !file_path_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path_canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type =
        mime::get_content_type(file_path_canonical.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}
