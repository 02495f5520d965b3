// API module entry
// JSON joke endpoints under /api/

mod handlers;
mod response;
mod types;

use crate::config::AppState;
use crate::handler::RequestContext;
use crate::http::HttpResponse;
use crate::joke::Category;

pub use types::JokeLink;

/// Joke endpoints shown on the home page and by `/api/categories`
pub const JOKE_LINKS: &[JokeLink] = &[
    JokeLink {
        name: "Random Jokes",
        url: "/api/random-joke",
        category: None,
    },
    JokeLink {
        name: "Tech Jokes",
        url: "/api/tech-joke",
        category: Some(Category::Tech),
    },
    JokeLink {
        name: "Family Jokes",
        url: "/api/family-joke",
        category: Some(Category::Family),
    },
];

/// Every path the API answers, reported on 404
pub const ENDPOINT_PATHS: &[&str] = &[
    "/api/random-joke",
    "/api/tech-joke",
    "/api/family-joke",
    "/api/joke?category=<name>",
    "/api/categories",
];

/// API route handler
///
/// Dispatches on the path below `/api/`.
pub fn handle_api_request(ctx: &RequestContext<'_>, state: &AppState) -> HttpResponse {
    let Some(endpoint) = ctx.path.strip_prefix("/api/") else {
        return response::not_found(ctx.is_head);
    };

    match endpoint {
        "random-joke" => handlers::handle_random_joke(state, ctx.is_head),
        "joke" => handlers::handle_joke_query(state, ctx.query, ctx.is_head),
        "categories" => handlers::handle_categories(ctx.is_head),
        other => match category_endpoint(other) {
            Some(category) => handlers::handle_category_joke(state, category, ctx.is_head),
            None => response::not_found(ctx.is_head),
        },
    }
}

/// `tech-joke` -> `Category::Tech`, exact names only
fn category_endpoint(endpoint: &str) -> Option<Category> {
    let name = endpoint.strip_suffix("-joke")?;
    Category::ALL.into_iter().find(|c| c.name() == name)
}
