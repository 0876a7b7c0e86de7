//! Applies substitution rules to template text
//!
//! The text is held as a list of segments. Template text stays open for
//! matching; every inserted replacement is frozen, so no rule ever matches
//! inside a value produced by itself or an earlier rule.

use super::random::{FirstCandidate, RandomSource};
use super::rule::Rule;

#[derive(Debug, Clone)]
enum Segment {
    Open(String),
    Frozen(String),
}

/// Template text part-way through substitution
#[derive(Debug, Clone)]
pub struct Rendering {
    segments: Vec<Segment>,
}

impl Rendering {
    /// Start rendering from raw template text
    pub fn new(template: &str) -> Self {
        Self {
            segments: vec![Segment::Open(template.to_string())],
        }
    }

    /// Number of matchable occurrences of `token`
    pub fn count(&self, token: &str) -> usize {
        if token.is_empty() {
            return 0;
        }
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Open(text) => text.matches(token).count(),
                Segment::Frozen(_) => 0,
            })
            .sum()
    }

    /// Replace occurrences left to right, asking `next` for each replacement.
    ///
    /// `next` is called exactly once per occurrence. Returns the number of
    /// replacements made.
    pub fn replace_each(&mut self, token: &str, mut next: impl FnMut() -> String) -> usize {
        if token.is_empty() {
            return 0;
        }

        let mut replaced = 0;
        let mut segments = Vec::with_capacity(self.segments.len());
        for segment in self.segments.drain(..) {
            let text = match segment {
                Segment::Open(text) if text.contains(token) => text,
                other => {
                    segments.push(other);
                    continue;
                }
            };

            let mut rest = text.as_str();
            while let Some(pos) = rest.find(token) {
                if pos > 0 {
                    segments.push(Segment::Open(rest[..pos].to_string()));
                }
                segments.push(Segment::Frozen(next()));
                replaced += 1;
                rest = &rest[pos + token.len()..];
            }
            if !rest.is_empty() {
                segments.push(Segment::Open(rest.to_string()));
            }
        }
        self.segments = segments;
        replaced
    }

    /// Replace every occurrence with the same value
    pub fn replace_all(&mut self, token: &str, value: &str) -> usize {
        self.replace_each(token, || value.to_string())
    }

    /// Apply one rule
    pub fn apply<S: RandomSource + ?Sized>(&mut self, rule: &Rule, source: &mut S) -> usize {
        match rule {
            Rule::PerOccurrence { token, candidates } => {
                self.replace_each(token, || candidates.draw(&mut *source).to_string())
            }
            Rule::Sticky { token, candidates } => {
                if self.count(token) == 0 {
                    return 0;
                }
                let word = candidates.draw(source).to_string();
                self.replace_all(token, &word)
            }
            Rule::Value { token, value } => self.replace_all(token, &value.render()),
        }
    }

    /// Join the segments back into text
    pub fn finish(self) -> String {
        self.segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Open(text) | Segment::Frozen(text) => text,
            })
            .collect()
    }
}

/// Render a template by applying `rules` in order.
///
/// Tokens without a rule are left in place.
pub fn render<S: RandomSource + ?Sized>(template: &str, rules: &[Rule], source: &mut S) -> String {
    let mut rendering = Rendering::new(template);
    for rule in rules {
        let n = rendering.apply(rule, source);
        log::trace!("replaced {} occurrence(s) of '{}'", n, rule.token());
    }
    rendering.finish()
}

/// Render with random rules resolved to their first candidate
pub fn render_fixed(template: &str, rules: &[Rule]) -> String {
    render(template, rules, &mut FirstCandidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::random::{seeded, ScriptedSource};
    use crate::template::rule::CandidateList;

    fn words(category: &str, list: &[&str]) -> CandidateList {
        CandidateList::new(category, list.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_each_occurrence_draws_independently() {
        let rules = [Rule::per_occurrence("<adjective>", words("adjectives", &["a", "b"]))];
        let mut source = ScriptedSource::new(vec![0, 1]);
        assert_eq!(render("<adjective> <adjective>", &rules, &mut source), "a b");
    }

    #[test]
    fn test_absent_token_makes_no_draws() {
        struct Counting(usize);
        impl RandomSource for Counting {
            fn pick_index(&mut self, _len: usize) -> usize {
                self.0 += 1;
                0
            }
        }

        let rules = [Rule::per_occurrence("<verb>", words("verbs", &["walk"]))];
        let mut source = Counting(0);
        assert_eq!(render("nothing here", &rules, &mut source), "nothing here");
        assert_eq!(source.0, 0);
    }

    #[test]
    fn test_draws_equal_occurrences() {
        struct Counting(usize);
        impl RandomSource for Counting {
            fn pick_index(&mut self, _len: usize) -> usize {
                self.0 += 1;
                0
            }
        }

        let rules = [Rule::per_occurrence("<noun>", words("nouns", &["<noun><noun>"]))];
        let mut source = Counting(0);
        let out = render("<noun>, <noun> and <noun>", &rules, &mut source);
        assert_eq!(source.0, 3);
        assert_eq!(out, "<noun><noun>, <noun><noun> and <noun><noun>");
    }

    #[test]
    fn test_sticky_token_draws_once() {
        let rules = [Rule::sticky("<noun_1>", words("nouns", &["cat", "ghost", "ogre"]))];
        let mut source = ScriptedSource::new(vec![1, 2]);
        let out = render("<noun_1> met <noun_1> near <noun_1>", &rules, &mut source);
        assert_eq!(out, "ghost met ghost near ghost");
    }

    #[test]
    fn test_later_rules_do_not_rescan_values() {
        let rules = [
            Rule::value("+name+", "+PPSN+"),
            Rule::value("+PPSN+", "1234567T"),
        ];
        let out = render_fixed("+name+ / +PPSN+", &rules);
        assert_eq!(out, "+PPSN+ / 1234567T");
    }

    #[test]
    fn test_token_split_across_replacement_is_not_matched() {
        let rules = [Rule::value("<b>", "<"), Rule::value("<a>", "x")];
        let out = render_fixed("<b>a>", &rules);
        assert_eq!(out, "<a>");
    }

    #[test]
    fn test_unresolved_tokens_left_verbatim() {
        let rules = [Rule::value("+date+", "2024-01-01")];
        assert_eq!(render_fixed("+date+ +unknown+", &rules), "2024-01-01 +unknown+");
    }

    #[test]
    fn test_single_candidate_equals_global_replace() {
        let template = "<verb> and <verb>, then <verb> again";
        let rules = [Rule::per_occurrence("<verb>", words("verbs", &["leap"]))];
        let mut rng = seeded(Some(3));
        assert_eq!(render(template, &rules, &mut rng), template.replace("<verb>", "leap"));
    }

    #[test]
    fn test_numeric_value_formatted() {
        let rules = [Rule::value("+gross-pay+", 840.0)];
        assert_eq!(render_fixed("Gross: +gross-pay+", &rules), "Gross: 840.00");
    }

    #[test]
    fn test_empty_token_ignored() {
        let mut rendering = Rendering::new("abc");
        assert_eq!(rendering.replace_all("", "x"), 0);
        assert_eq!(rendering.finish(), "abc");
    }

    #[test]
    fn test_count_skips_frozen_segments() {
        let mut rendering = Rendering::new("<x> <y>");
        rendering.replace_all("<x>", "<y>");
        assert_eq!(rendering.count("<y>"), 1);
    }
}
