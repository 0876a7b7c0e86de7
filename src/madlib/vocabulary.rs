//! Word lists and the slots that draw from them

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::template::{CandidateList, Rule, TemplateError};

/// A placeholder token and the category it draws from
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slot {
    /// Literal token in the template, e.g. `<noun>`
    pub token: String,
    /// Category key in the vocabulary
    pub category: String,
    /// Draw once and reuse the word for every occurrence
    #[serde(default)]
    pub sticky: bool,
}

impl Slot {
    /// A slot where every occurrence draws its own word
    pub fn each(token: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            category: category.into(),
            sticky: false,
        }
    }

    /// A slot drawn once for the whole document
    pub fn sticky(token: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            category: category.into(),
            sticky: true,
        }
    }
}

const EXCLAMATIONS: &[&str] = &[
    "Zounds", "Egads", "Yikes", "Goodness", "Oh no", "Jeepers", "Oh my", "Argh", "Holy Moly",
];

const ADVERBS: &[&str] = &[
    "sadly", "rapidly", "happily", "hurriedly", "haphazardly", "madly", "slowly", "awkwardly",
    "fiercely", "fearlessly",
];

const ADJECTIVES: &[&str] = &[
    "scary", "frightening", "funny", "silly", "frightened", "bizarre", "terrifying", "horrid",
    "happy", "skinny",
];

// "twirl" appears twice, so it is drawn twice as often
const VERBS: &[&str] = &[
    "walk", "talk", "meander", "burn", "twirl", "frighten", "leap", "saunter", "totter", "twirl",
];

const NOUNS: &[&str] = &[
    "witch", "monster", "ogre", "zombie", "pumpkin", "cat", "broom", "ghost", "grave", "devil",
];

/// Candidate lists keyed by category, plus the slots that use them
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    words: BTreeMap<String, Vec<String>>,
    slots: Vec<Slot>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        let words = [
            ("exclamation", EXCLAMATIONS),
            ("adverb", ADVERBS),
            ("adjective", ADJECTIVES),
            ("verb", VERBS),
            ("noun", NOUNS),
        ]
        .into_iter()
        .map(|(category, list)| {
            (
                category.to_string(),
                list.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
            )
        })
        .collect();

        Self {
            words,
            slots: default_slots(),
        }
    }
}

/// Generic slots first, sticky noun slots after the generic noun pass
pub fn default_slots() -> Vec<Slot> {
    vec![
        Slot::each("<exclamation>", "exclamation"),
        Slot::each("<adverb>", "adverb"),
        Slot::each("<adjective>", "adjective"),
        Slot::each("<verb>", "verb"),
        Slot::each("<noun>", "noun"),
        Slot::sticky("<noun_1>", "noun"),
        Slot::sticky("<noun_2>", "noun"),
    ]
}

impl Vocabulary {
    /// Create a vocabulary from explicit lists and slots
    pub fn new(words: BTreeMap<String, Vec<String>>, slots: Vec<Slot>) -> Self {
        Self { words, slots }
    }

    /// Replace (or add) the candidate list for one category
    pub fn with_words(mut self, category: impl Into<String>, words: Vec<String>) -> Self {
        self.words.insert(category.into(), words);
        self
    }

    /// Replace the slot list
    pub fn with_slots(mut self, slots: Vec<Slot>) -> Self {
        self.slots = slots;
        self
    }

    /// Candidate list for a category, if known
    pub fn words(&self, category: &str) -> Option<&[String]> {
        self.words.get(category).map(|w| w.as_slice())
    }

    /// Slots in application order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Turn every slot into a substitution rule.
    ///
    /// Fails on the first slot whose category is missing or empty, so a bad
    /// configuration is caught before anything is drawn.
    pub fn rules(&self) -> Result<Vec<Rule>, TemplateError> {
        self.slots
            .iter()
            .map(|slot| {
                let words = self.words.get(&slot.category).cloned().unwrap_or_default();
                let candidates = CandidateList::new(slot.category.clone(), words)?;
                Ok(if slot.sticky {
                    Rule::sticky(slot.token.clone(), candidates)
                } else {
                    Rule::per_occurrence(slot.token.clone(), candidates)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_categories() {
        let vocab = Vocabulary::default();
        for category in ["exclamation", "adverb", "adjective", "verb", "noun"] {
            assert!(!vocab.words(category).unwrap().is_empty(), "{category} is empty");
        }
        assert_eq!(vocab.words("noun").unwrap().len(), 10);
    }

    #[test]
    fn test_default_rules_order() {
        let rules = Vocabulary::default().rules().unwrap();
        let tokens: Vec<&str> = rules.iter().map(|r| r.token()).collect();
        assert_eq!(
            tokens,
            vec![
                "<exclamation>",
                "<adverb>",
                "<adjective>",
                "<verb>",
                "<noun>",
                "<noun_1>",
                "<noun_2>"
            ]
        );
        assert!(matches!(rules[5], Rule::Sticky { .. }));
        assert!(matches!(rules[4], Rule::PerOccurrence { .. }));
    }

    #[test]
    fn test_empty_category_is_rejected() {
        let vocab = Vocabulary::default().with_words("verb", vec![]);
        assert_eq!(vocab.rules().unwrap_err(), TemplateError::empty_candidates("verb"));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let vocab = Vocabulary::default().with_slots(vec![Slot::each("<colour>", "colour")]);
        assert_eq!(vocab.rules().unwrap_err(), TemplateError::empty_candidates("colour"));
    }
}
