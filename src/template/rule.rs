//! Substitution rules and validated candidate lists

use thiserror::Error;

use super::random::RandomSource;
use super::value::BindingValue;

/// Errors raised while building substitution rules
#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    /// A random category has nothing to draw from
    #[error("candidate list for category '{category}' is empty")]
    EmptyCandidateList { category: String },
}

impl TemplateError {
    /// Create an empty candidate list error
    pub fn empty_candidates(category: impl Into<String>) -> Self {
        Self::EmptyCandidateList {
            category: category.into(),
        }
    }
}

/// A non-empty list of words a random token can be replaced with
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateList {
    category: String,
    words: Vec<String>,
}

impl CandidateList {
    /// Build a candidate list, rejecting empty ones
    pub fn new(category: impl Into<String>, words: Vec<String>) -> Result<Self, TemplateError> {
        let category = category.into();
        if words.is_empty() {
            return Err(TemplateError::empty_candidates(category));
        }
        Ok(Self { category, words })
    }

    /// Category this list belongs to
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The candidate words in order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Draw one word uniformly at random
    pub fn draw<S: RandomSource + ?Sized>(&self, source: &mut S) -> &str {
        let index = source.pick_index(self.words.len());
        let word = &self.words[index];
        log::trace!("drew '{}' from {}", word, self.category);
        word
    }
}

/// How one token gets its replacement text
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Every occurrence draws its own word
    PerOccurrence {
        token: String,
        candidates: CandidateList,
    },
    /// One draw shared by every occurrence
    Sticky {
        token: String,
        candidates: CandidateList,
    },
    /// Every occurrence gets the same precomputed value
    Value { token: String, value: BindingValue },
}

impl Rule {
    /// Per-occurrence random rule
    pub fn per_occurrence(token: impl Into<String>, candidates: CandidateList) -> Self {
        Self::PerOccurrence {
            token: token.into(),
            candidates,
        }
    }

    /// Sticky random rule
    pub fn sticky(token: impl Into<String>, candidates: CandidateList) -> Self {
        Self::Sticky {
            token: token.into(),
            candidates,
        }
    }

    /// Direct value rule
    pub fn value(token: impl Into<String>, value: impl Into<BindingValue>) -> Self {
        Self::Value {
            token: token.into(),
            value: value.into(),
        }
    }

    /// The token literal this rule replaces
    pub fn token(&self) -> &str {
        match self {
            Self::PerOccurrence { token, .. }
            | Self::Sticky { token, .. }
            | Self::Value { token, .. } => token,
        }
    }
}
