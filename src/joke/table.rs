//! Category tables
//!
//! A `CategoryTable` holds the subjects of one category, each with its own
//! actions and punchlines, plus the parsed templates. Construction checks the
//! table invariants, after which every random pick is total.

use rand::Rng;
use thiserror::Error;

use super::template::{capitalize_sentences, Template, TemplateError};
use super::Category;

/// One subject with the actions and punchlines that fit it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectEntry {
    pub subject: &'static str,
    pub actions: &'static [&'static str],
    pub punchlines: &'static [&'static str],
}

/// Table invariant violation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("category '{0}' has no subjects")]
    NoSubjects(Category),
    #[error("category '{0}' has no templates")]
    NoTemplates(Category),
    #[error("subject '{0}' has no actions")]
    EmptyActions(&'static str),
    #[error("subject '{0}' has no punchlines")]
    EmptyPunchlines(&'static str),
    #[error("subject '{0}' is listed twice")]
    DuplicateSubject(&'static str),
    #[error("template {index} of category '{category}': {source}")]
    Template {
        category: Category,
        index: usize,
        #[source]
        source: TemplateError,
    },
}

/// Validated tables for one category
#[derive(Debug, Clone)]
pub struct CategoryTable {
    subjects: &'static [SubjectEntry],
    templates: Vec<Template>,
}

impl CategoryTable {
    pub fn new(
        category: Category,
        subjects: &'static [SubjectEntry],
        templates: &[&str],
    ) -> Result<Self, TableError> {
        if subjects.is_empty() {
            return Err(TableError::NoSubjects(category));
        }
        if templates.is_empty() {
            return Err(TableError::NoTemplates(category));
        }

        for (i, entry) in subjects.iter().enumerate() {
            if entry.actions.is_empty() {
                return Err(TableError::EmptyActions(entry.subject));
            }
            if entry.punchlines.is_empty() {
                return Err(TableError::EmptyPunchlines(entry.subject));
            }
            if subjects[..i].iter().any(|other| other.subject == entry.subject) {
                return Err(TableError::DuplicateSubject(entry.subject));
            }
        }

        let templates = templates
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                Template::parse(raw).map_err(|source| TableError::Template {
                    category,
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            subjects,
            templates,
        })
    }

    #[cfg(test)]
    pub const fn subjects(&self) -> &'static [SubjectEntry] {
        self.subjects
    }

    #[cfg(test)]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Draw subject, action, punchline and template, in that order
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> JokeParts<'_> {
        let entry = pick_one(self.subjects, rng);
        let action = pick_one(entry.actions, rng);
        let punchline = pick_one(entry.punchlines, rng);
        let template = pick_one(&self.templates, rng);

        JokeParts {
            subject: entry.subject,
            action,
            punchline,
            template,
        }
    }
}

/// The four choices that make up one joke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JokeParts<'a> {
    pub subject: &'a str,
    pub action: &'a str,
    pub punchline: &'a str,
    pub template: &'a Template,
}

impl JokeParts<'_> {
    /// Fill the template and capitalize each sentence
    pub fn render(&self) -> String {
        let filled = self
            .template
            .fill(self.subject, self.action, self.punchline);
        capitalize_sentences(&filled)
    }
}

// Callers guarantee `items` is non-empty (checked in `CategoryTable::new`).
fn pick_one<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
