//! Request handler module
//!
//! Request routing dispatch, HTML pages and static assets.

pub mod pages;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::{handle_request, RequestContext};
