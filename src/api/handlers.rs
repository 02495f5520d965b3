// Joke API handlers module

use hyper::StatusCode;
use url::form_urlencoded;

use super::response::{bad_request, json_response};
use super::types::{CategoriesResponse, JokeResponse};
use super::JOKE_LINKS;
use crate::config::AppState;
use crate::http::HttpResponse;
use crate::joke::{Category, JokeError};
use crate::logger;

/// GET /api/{category}-joke
pub fn handle_category_joke(state: &AppState, category: Category, is_head: bool) -> HttpResponse {
    let joke = state.joke_for(category);
    logger::log_joke(category.name(), &joke);
    json_response(StatusCode::OK, &JokeResponse { joke }, is_head)
}

/// GET /api/random-joke
pub fn handle_random_joke(state: &AppState, is_head: bool) -> HttpResponse {
    joke_response(state.joke(None), "random", is_head)
}

/// GET /api/joke?category=<name>
///
/// A missing or empty `category` picks one at random.
pub fn handle_joke_query(state: &AppState, query: Option<&str>, is_head: bool) -> HttpResponse {
    let category = query
        .and_then(|q| query_param(q, "category"))
        .filter(|c| !c.trim().is_empty());
    let label = category.as_deref().unwrap_or("random").to_string();
    joke_response(state.joke(category.as_deref()), &label, is_head)
}

/// GET /api/categories
pub fn handle_categories(is_head: bool) -> HttpResponse {
    let body = CategoriesResponse {
        categories: Category::names(),
        endpoints: JOKE_LINKS,
    };
    json_response(StatusCode::OK, &body, is_head)
}

fn joke_response(result: Result<String, JokeError>, label: &str, is_head: bool) -> HttpResponse {
    let error = match result {
        Ok(joke) => {
            logger::log_joke(label, &joke);
            return json_response(StatusCode::OK, &JokeResponse { joke }, is_head);
        }
        Err(e) => e,
    };

    match error {
        JokeError::InvalidCategory { ref allowed, .. } => {
            let message = error.to_string();
            logger::log_warning(&message);
            bad_request(message, allowed.clone(), is_head)
        }
        JokeError::Table(_) => {
            logger::log_error(&format!("Joke generation failed: {error}"));
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &serde_json::json!({ "error": "Internal server error" }),
                is_head,
            )
        }
    }
}

/// Find the first value of `key` in a query string, percent-decoded
fn query_param(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("category=tech", "category"), Some("tech".to_string()));
        assert_eq!(
            query_param("a=1&category=family&category=tech", "category"),
            Some("family".to_string())
        );
        assert_eq!(query_param("category", "category"), Some(String::new()));
        assert_eq!(query_param("other=1", "category"), None);
    }

    #[test]
    fn test_query_param_decodes_values() {
        assert_eq!(query_param("category=Tech%20", "category"), Some("Tech ".to_string()));
        assert_eq!(
            query_param("category=not+a+category", "category"),
            Some("not a category".to_string())
        );
        assert_eq!(query_param("category=100%", "category"), Some("100%".to_string()));
        assert_eq!(query_param("category=%zz", "category"), Some("%zz".to_string()));
        assert_eq!(query_param("cat%65gory=family", "category"), Some("family".to_string()));
    }
}
