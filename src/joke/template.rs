//! Joke sentence templates
//!
//! A template is a sentence skeleton with exactly three slots:
//! `{subj}`, `{act}` and `{punch}`. Templates are parsed and validated once
//! when a category table is built, so filling one in can never fail.

use std::fmt;
use thiserror::Error;

/// Named slot inside a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Subject,
    Action,
    Punchline,
}

impl Slot {
    pub const ALL: [Self; 3] = [Self::Subject, Self::Action, Self::Punchline];

    /// Marker name as written between braces
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Subject => "subj",
            Self::Action => "act",
            Self::Punchline => "punch",
        }
    }

    fn from_marker(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.marker() == name)
    }

    const fn index(self) -> usize {
        match self {
            Self::Subject => 0,
            Self::Action => 1,
            Self::Punchline => 2,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.marker())
    }
}

/// Template validation failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown slot '{{{0}}}'")]
    UnknownSlot(String),
    #[error("slot {0} appears more than once")]
    DuplicateSlot(Slot),
    #[error("slot {0} is missing")]
    MissingSlot(Slot),
    #[error("unclosed '{{' at byte {0}")]
    Unclosed(usize),
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedClose(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// Parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a raw template, requiring each slot exactly once
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut seen = [false; Slot::ALL.len()];
        let mut rest = raw;
        let mut offset = 0;

        while let Some(open) = rest.find('{') {
            push_literal(&mut segments, &rest[..open], offset)?;

            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or(TemplateError::Unclosed(offset + open))?;
            let name = &after[..close];
            let slot =
                Slot::from_marker(name).ok_or_else(|| TemplateError::UnknownSlot(name.to_string()))?;
            if seen[slot.index()] {
                return Err(TemplateError::DuplicateSlot(slot));
            }
            seen[slot.index()] = true;
            segments.push(Segment::Slot(slot));

            let consumed = open + close + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }
        push_literal(&mut segments, rest, offset)?;

        if let Some(missing) = Slot::ALL.into_iter().find(|slot| !seen[slot.index()]) {
            return Err(TemplateError::MissingSlot(missing));
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Original template text
    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute the three slots, without capitalization
    pub fn fill(&self, subject: &str, action: &str, punchline: &str) -> String {
        let capacity = self.raw.len() + subject.len() + action.len() + punchline.len();
        let mut out = String::with_capacity(capacity);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(Slot::Subject) => out.push_str(subject),
                Segment::Slot(Slot::Action) => out.push_str(action),
                Segment::Slot(Slot::Punchline) => out.push_str(punchline),
            }
        }
        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn push_literal(segments: &mut Vec<Segment>, text: &str, offset: usize) -> Result<(), TemplateError> {
    if let Some(pos) = text.find('}') {
        return Err(TemplateError::UnmatchedClose(offset + pos));
    }
    if !text.is_empty() {
        segments.push(Segment::Literal(text.to_string()));
    }
    Ok(())
}

/// Upper-case the first letter of every sentence.
///
/// A sentence starts at the beginning of the text and after `?`, `!` or a
/// single `.` followed by whitespace. An ellipsis does not end a sentence.
/// Nothing is ever lower-cased, so names like `AI` are preserved.
pub fn capitalize_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = true;
    let mut terminated = false;
    let mut prev = None;

    for c in text.chars() {
        if pending && !c.is_whitespace() {
            pending = false;
            if c.is_alphabetic() {
                out.extend(c.to_uppercase());
                prev = Some(c);
                continue;
            }
        }

        match c {
            '?' | '!' => terminated = true,
            '.' => terminated = prev != Some('.'),
            c if c.is_whitespace() => {
                if terminated {
                    pending = true;
                    terminated = false;
                }
            }
            _ => terminated = false,
        }

        out.push(c);
        prev = Some(c);
    }

    out
}
