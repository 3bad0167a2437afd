//! Proposition model
//!
//! Interface to the external natural-language dependency parser. The parser
//! takes (normalized) comment text and returns one proposition per clause: a
//! subject string, a predicate string and a negation flag, grouped into
//! series that also expose the head word of the clause's parse graph. The
//! head word feeds parameter-identifier mining in the collector; the
//! subject/predicate pairs feed the matchers.

use crate::comment::DocumentedMember;

/// A subject/predicate pair extracted from one clause of a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposition {
    pub subject: String,
    pub predicate: String,
    /// True when the clause carries a negation cue ("not", "never", ...).
    pub negative: bool,
}

impl Proposition {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, negative: bool) -> Self {
        Proposition {
            subject: subject.into(),
            predicate: predicate.into(),
            negative,
        }
    }
}

/// All propositions extracted from one sentence, together with the root word
/// of the sentence's dependency parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropositionSeries {
    pub propositions: Vec<Proposition>,
    /// Head word of the parse graph; used as a candidate identifier when
    /// mining a parameter's documentation tag.
    pub head_word: String,
}

impl PropositionSeries {
    pub fn new(head_word: impl Into<String>, propositions: Vec<Proposition>) -> Self {
        PropositionSeries {
            propositions,
            head_word: head_word.into(),
        }
    }
}

/// External dependency-parsing capability.
///
/// Implementations are linguistic collaborators (e.g. a wrapper over a
/// dependency parser); the translation core only consumes their output and
/// makes no assumption about parse quality.
pub trait PropositionSource {
    /// Parse `text` into proposition series. The documented member is
    /// available for parser-side disambiguation and may be ignored.
    fn parse(&self, text: &str, member: &DocumentedMember) -> Vec<PropositionSeries>;
}
