//! HTTP protocol layer module
//!
//! Protocol helpers shared by the page, asset and API handlers.

pub mod mime;
pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_405_response, build_health_response, build_html_response,
    build_ok_response, build_options_response, build_response, finalize_response, HttpResponse,
};
