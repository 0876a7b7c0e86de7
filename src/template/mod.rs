//! Keyword substitution engine
//!
//! Locates literal placeholder tokens in a text blob and replaces each
//! occurrence with a computed or randomly drawn value. There is no template
//! language here: tokens are plain substrings, matched case-sensitively.
//!
//! # Example
//!
//! ```rust
//! use keyfill::template::{render, CandidateList, Rule, ScriptedSource};
//!
//! let adjectives = CandidateList::new("adjectives", vec!["a".into(), "b".into()]).unwrap();
//! let rules = [Rule::per_occurrence("<adjective>", adjectives)];
//! let mut source = ScriptedSource::new(vec![0, 1]);
//!
//! assert_eq!(render("<adjective> <adjective>", &rules, &mut source), "a b");
//! ```

mod random;
mod renderer;
mod rule;
mod value;

pub use random::{seeded, FirstCandidate, RandomSource, ScriptedSource};
pub use renderer::{render, render_fixed, Rendering};
pub use rule::{CandidateList, Rule, TemplateError};
pub use value::{format_two_decimals, BindingValue};
