//! Random word story generator
//!
//! Fills a story template by drawing words from fixed vocabulary lists.

mod vocabulary;

pub use vocabulary::{default_slots, Slot, Vocabulary};

use crate::template::{render, RandomSource, TemplateError};

/// Fill a story template with words drawn from `vocabulary`.
///
/// All slots are validated before the first draw.
pub fn fill_story<S: RandomSource + ?Sized>(
    template: &str,
    vocabulary: &Vocabulary,
    source: &mut S,
) -> Result<String, TemplateError> {
    let rules = vocabulary.rules()?;
    Ok(render(template, &rules, source))
}
