//! Comment-to-guard translation pipeline
//!
//! This module contains:
//! - `normalizer`: modal-phrase rewriting that gives elliptical sentences an
//!   explicit subject
//! - `code_element`: the candidate-element model (identifiers, expressions,
//!   distance, pools)
//! - `collector`: candidate-pool construction per documented member
//! - `matcher`: subject and predicate matching against the pool
//!
//! [`Translator`] composes the three entry points per proposition; callers
//! needing finer control use [`Collector`] and [`Matcher`] directly.

pub mod code_element;
pub mod collector;
pub mod matcher;
pub mod normalizer;

use std::fmt;

use crate::comment::DocumentedMember;
use crate::config::TranslatorConfig;
use crate::nlp::PropositionSource;
use crate::program::ProgramModel;

pub use collector::Collector;
pub use matcher::Matcher;

/// An executable boolean guard produced from one proposition of a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guard {
    /// Java expression evaluating to the guarded condition.
    pub expression: String,
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Translates one member's comment text into guard expressions.
pub struct Translator<'a> {
    model: &'a dyn ProgramModel,
    nlp: &'a dyn PropositionSource,
    config: &'a TranslatorConfig,
}

impl<'a> Translator<'a> {
    pub fn new(
        model: &'a dyn ProgramModel,
        nlp: &'a dyn PropositionSource,
        config: &'a TranslatorConfig,
    ) -> Self {
        Translator { model, nlp, config }
    }

    /// The matcher this translator composes, for callers driving the
    /// pipeline proposition by proposition.
    pub fn matcher(&self) -> Matcher<'a> {
        Matcher::new(self.model, self.nlp, self.config)
    }

    /// Translate `comment` (already normalized where applicable) against the
    /// given member.
    ///
    /// Each proposition is translated independently: its subject is matched
    /// against the member's candidate pool, then every candidate is tried in
    /// order until one yields a predicate translation. Propositions with no
    /// subject or predicate match are skipped; a comment may legitimately
    /// produce no guards at all.
    pub fn translate(&self, comment: &str, member: &DocumentedMember) -> Vec<Guard> {
        let matcher = self.matcher();
        let mut guards = Vec::new();

        for series in self.nlp.parse(comment, member) {
            for proposition in &series.propositions {
                let candidates = matcher.subject_match(&proposition.subject, member);
                if candidates.is_empty() {
                    log::debug!("no subject match for {:?}; skipping", proposition.subject);
                    continue;
                }
                let translated = candidates.iter().find_map(|subject| {
                    matcher.predicate_match(
                        member,
                        subject,
                        &proposition.predicate,
                        proposition.negative,
                    )
                });
                match translated {
                    Some(expression) => guards.push(Guard { expression }),
                    None => {
                        log::debug!("no predicate match for {:?}; skipping", proposition.predicate)
                    }
                }
            }
        }

        guards
    }
}
