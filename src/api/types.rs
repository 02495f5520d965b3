// API type definitions module
// Request/response bodies of the joke JSON API

use serde::Serialize;

use crate::joke::Category;

/// `{"joke": "..."}`
#[derive(Debug, Serialize)]
pub struct JokeResponse {
    pub joke: String,
}

/// Error body for rejected requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<&'static str>,
}

/// Error body for unknown API paths
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub available_endpoints: Vec<&'static str>,
}

/// A named joke endpoint, as listed on the home page
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JokeLink {
    pub name: &'static str,
    pub url: &'static str,
    /// `None` for the random endpoint
    pub category: Option<Category>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<&'static str>,
    pub endpoints: &'static [JokeLink],
}
