// Application state module
// Holds the loaded configuration, joke catalog and shared random source

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use super::types::Config;
use crate::joke::{Catalog, Category, JokeError};

/// Application state, shared by every connection
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,

    // Seeded once at startup, never per request
    rng: Mutex<StdRng>,

    // Number of jokes served since startup
    jokes_served: AtomicU64,
}

impl AppState {
    /// Create `AppState` with an entropy-seeded random source
    pub fn new(config: &Config, catalog: Catalog) -> Self {
        Self::with_rng(config, catalog, StdRng::from_entropy())
    }

    /// Create `AppState` with a caller-provided random source
    pub fn with_rng(config: &Config, catalog: Catalog, rng: StdRng) -> Self {
        Self {
            config: config.clone(),
            catalog,
            rng: Mutex::new(rng),
            jokes_served: AtomicU64::new(0),
        }
    }

    /// Generate a joke by category name, `None` for a random category
    pub fn joke(&self, category: Option<&str>) -> Result<String, JokeError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let joke = self.catalog.generate(category, &mut *rng)?;
        self.jokes_served.fetch_add(1, Ordering::Relaxed);
        Ok(joke)
    }

    /// Generate a joke for a known category
    pub fn joke_for(&self, category: Category) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let joke = match category {
            Category::Tech => self.catalog.tech_joke(&mut *rng),
            Category::Family => self.catalog.family_joke(&mut *rng),
        };
        self.jokes_served.fetch_add(1, Ordering::Relaxed);
        joke
    }

    pub fn jokes_served(&self) -> u64 {
        self.jokes_served.load(Ordering::Relaxed)
    }
}

/// State with fixed seed and built-in tables, for handler tests
#[cfg(test)]
pub fn test_state() -> AppState {
    let config = Config::load_with("does-not-exist/joke-server-test-config", Some(false))
        .expect("default configuration loads");
    let catalog = Catalog::load().expect("built-in tables are valid");
    AppState::with_rng(&config, catalog, StdRng::seed_from_u64(7))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joke_for_uses_category_shortcuts() {
        let state = test_state();
        let catalog = Catalog::load().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(state.joke_for(Category::Tech), catalog.tech_joke(&mut rng));
        assert_eq!(state.joke_for(Category::Family), catalog.family_joke(&mut rng));
        assert_eq!(state.jokes_served(), 2);
    }

    #[test]
    fn test_unknown_category_is_not_counted() {
        let state = test_state();
        assert!(state.joke(Some("pirate")).is_err());
        assert!(state.joke(Some("tech")).is_ok());
        assert_eq!(state.jokes_served(), 1);
    }
}
