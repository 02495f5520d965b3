//! Joke generator
//!
//! Builds one joke sentence from a category's tables: a random subject, one of
//! that subject's actions, one of its punchlines and a random template.
//!
//! The generator owns no randomness. Callers pass an `Rng`, which lets the
//! server share one entropy-seeded generator and lets tests use fixed seeds.

mod data;
pub mod table;
pub mod template;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use table::{CategoryTable, TableError};

/// Joke category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Family,
    Tech,
}

impl Category {
    /// Every known category, in listing order
    pub const ALL: [Self; 2] = [Self::Family, Self::Tech];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Tech => "tech",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name()).collect()
    }

    /// Pick a category uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = JokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| JokeError::InvalidCategory {
                requested: s.to_string(),
                allowed: Self::names(),
            })
    }
}

/// Joke generation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JokeError {
    #[error("Invalid category '{requested}'. Choose from: {}", .allowed.join(", "))]
    InvalidCategory {
        requested: String,
        allowed: Vec<&'static str>,
    },
    #[error("invalid joke table: {0}")]
    Table(#[from] TableError),
}

/// Validated tables for every category
#[derive(Debug, Clone)]
pub struct Catalog {
    family: CategoryTable,
    tech: CategoryTable,
}

impl Catalog {
    /// Build and validate the built-in tables
    pub fn load() -> Result<Self, JokeError> {
        Ok(Self {
            family: CategoryTable::new(Category::Family, data::FAMILY_SUBJECTS, data::FAMILY_TEMPLATES)?,
            tech: CategoryTable::new(Category::Tech, data::TECH_SUBJECTS, data::TECH_TEMPLATES)?,
        })
    }

    pub const fn table(&self, category: Category) -> &CategoryTable {
        match category {
            Category::Family => &self.family,
            Category::Tech => &self.tech,
        }
    }

    /// Generate a joke for a category given by name.
    ///
    /// `None` picks a category at random first. Unknown names fail with
    /// `JokeError::InvalidCategory`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        category: Option<&str>,
        rng: &mut R,
    ) -> Result<String, JokeError> {
        let category = match category {
            Some(name) => name.parse()?,
            None => Category::random(rng),
        };
        Ok(self.generate_for(category, rng))
    }

    /// Generate a joke for a known category
    pub fn generate_for<R: Rng + ?Sized>(&self, category: Category, rng: &mut R) -> String {
        self.table(category).pick(rng).render()
    }

    pub fn tech_joke<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.generate_for(Category::Tech, rng)
    }

    pub fn family_joke<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.generate_for(Category::Family, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joke::table::JokeParts;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn catalog() -> Catalog {
        Catalog::load().expect("built-in tables are valid")
    }

    fn ends_with_terminal_punctuation(joke: &str) -> bool {
        joke.trim_end_matches(['\'', '"'])
            .ends_with(['.', '!', '?'])
    }

    #[test]
    fn test_builtin_tables_load() {
        let catalog = catalog();
        assert_eq!(catalog.table(Category::Family).subjects().len(), 6);
        assert_eq!(catalog.table(Category::Tech).subjects().len(), 8);
        for category in Category::ALL {
            assert_eq!(catalog.table(category).templates().len(), 5);
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("tech".parse::<Category>(), Ok(Category::Tech));
        assert_eq!(" Family ".parse::<Category>(), Ok(Category::Family));
        assert_eq!("TECH".parse::<Category>(), Ok(Category::Tech));
    }

    #[test]
    fn test_invalid_category() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = catalog()
            .generate(Some("not-a-real-category"), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            JokeError::InvalidCategory {
                requested: "not-a-real-category".to_string(),
                allowed: vec!["family", "tech"],
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid category 'not-a-real-category'. Choose from: family, tech"
        );
    }

    #[test]
    fn test_no_category_picks_known_one() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(2);
        let known: HashSet<&str> = Category::ALL
            .iter()
            .flat_map(|c| catalog.table(*c).subjects().iter().map(|e| e.subject))
            .collect();
        for _ in 0..50 {
            let joke = catalog.generate(None, &mut rng).unwrap();
            let lowered = joke.to_lowercase();
            assert!(
                known.iter().any(|s| lowered.contains(&s.to_lowercase())),
                "joke has no known subject: {joke}"
            );
        }
    }

    #[test]
    fn test_random_category_reaches_both() {
        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<Category> = (0..100).map(|_| Category::random(&mut rng)).collect();
        assert_eq!(seen.len(), Category::ALL.len());
    }

    #[test]
    fn test_same_seed_same_jokes() {
        let catalog = catalog();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for category in [None, Some("tech"), Some("family")] {
            assert_eq!(
                catalog.generate(category, &mut a).unwrap(),
                catalog.generate(category, &mut b).unwrap()
            );
        }
    }

    #[test]
    fn test_golden_output_from_fixed_parts() {
        let catalog = catalog();
        let table = catalog.table(Category::Family);
        let cat = table.subjects()[0];
        let parts = JokeParts {
            subject: cat.subject,
            action: cat.actions[1],
            punchline: cat.punchlines[0],
            template: &table.templates()[0],
        };
        assert_eq!(
            parts.render(),
            "Why did the cat took a nap? Because it wanted to catch up on dreams!"
        );

        let tech = catalog.table(Category::Tech);
        let ai = tech.subjects()[2];
        let parts = JokeParts {
            subject: ai.subject,
            action: ai.actions[3],
            punchline: ai.punchlines[0],
            template: &tech.templates()[4],
        };
        assert_eq!(parts.render(), "AI wrote poetry. It confused everyone except itself.");
    }

    #[test]
    fn test_tech_coverage() {
        let catalog = catalog();
        let table = catalog.table(Category::Tech);
        let mut rng = StdRng::seed_from_u64(2024);

        let mut subjects = HashSet::new();
        let mut actions = HashSet::new();
        let mut punchlines = HashSet::new();
        let mut templates = HashSet::new();
        for _ in 0..20_000 {
            let parts = table.pick(&mut rng);
            subjects.insert(parts.subject);
            actions.insert(parts.action);
            punchlines.insert(parts.punchline);
            templates.insert(parts.template.as_str());
        }

        for entry in table.subjects() {
            assert!(subjects.contains(entry.subject), "never drew {}", entry.subject);
            for action in entry.actions {
                assert!(actions.contains(action), "never drew action {action}");
            }
            for punchline in entry.punchlines {
                assert!(punchlines.contains(punchline), "never drew punchline {punchline}");
            }
        }
        assert_eq!(templates.len(), table.templates().len());
    }

    #[test]
    fn test_jokes_are_well_formed() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(99);
        for category in Category::ALL {
            for _ in 0..500 {
                let joke = catalog.generate_for(category, &mut rng);
                assert!(!joke.contains('{') && !joke.contains('}'), "unresolved slot: {joke}");
                assert!(ends_with_terminal_punctuation(&joke), "no terminal punctuation: {joke}");
                assert!(
                    joke.chars().next().is_some_and(char::is_uppercase),
                    "not capitalized: {joke}"
                );
            }
        }
    }

    #[test]
    fn test_category_shortcuts() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(5);
        let tech: HashSet<&str> = catalog
            .table(Category::Tech)
            .subjects()
            .iter()
            .map(|e| e.subject)
            .collect();
        let joke = catalog.tech_joke(&mut rng).to_lowercase();
        assert!(tech.iter().any(|s| joke.contains(&s.to_lowercase())));
        assert!(!catalog.family_joke(&mut rng).is_empty());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Tech).unwrap(), r#""tech""#);
    }
}
