//! Phrase normalizer
//!
//! Documentation comments routinely attach a constraint to a parameter
//! without restating the parameter as a subject ("must not be null", "should
//! be positive"). A dependency parser given such an elliptical sentence
//! produces a proposition with no usable subject. This pass rewrites every
//! occurrence of a known modal-verb phrase so the parameter name appears as
//! an explicit subject right before it, forcing a clause boundary the parser
//! can work with.

use once_cell::sync::Lazy;
use regex::Regex;

/// Modal-verb trigger phrases, matched case-sensitively and rewritten in
/// catalogue order. Earlier entries win when rewrites overlap.
const MODAL_TRIGGERS: &[&str] = &[
    "must be",
    "must not be",
    "will be",
    "will not be",
    "can't be",
    "cannot be",
    "should be",
    "should not be",
    "shouldn't be",
    "may not be",
    "Must be",
    "Must not be",
    "Will be",
    "Will not be",
    "Can't be",
    "Cannot be",
    "Should be",
    "Should not be",
    "Shouldn't be",
    "May not be",
];

/// Subject-less adjectival phrases, applied only when no modal trigger fired.
const VERBLESS_TRIGGERS: &[&str] = &["not null"];

static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*").expect("valid regex"));

/// Rewrite recurring modal constructions in `comment` so that
/// `parameter_name` appears as an explicit subject before each of them.
///
/// A full stop separates the inserted subject from the preceding text so the
/// downstream parser sees a new clause; when the comment contains a
/// parenthetical, a plain space is used instead to avoid splitting it. If no
/// modal phrase matched at all, a secondary catalogue of verbless phrases is
/// prefixed with "`. <parameter_name> is `". Purely functional; the input is
/// never mutated in place.
pub fn normalize(comment: &str, parameter_name: &str) -> String {
    let separator = if PARENTHETICAL.is_match(comment) {
        " "
    } else {
        "."
    };

    let mut text = comment.to_string();
    let mut replaced = false;
    for trigger in MODAL_TRIGGERS {
        if text.contains(trigger) {
            let replacement = format!("{} {} {}", separator, parameter_name, trigger);
            text = text.replace(trigger, &replacement);
            replaced = true;
        }
    }

    if !replaced {
        for trigger in VERBLESS_TRIGGERS {
            let replacement = format!(". {} is {}", parameter_name, trigger);
            text = text.replace(trigger, &replacement);
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_subject_before_modal_phrase() {
        assert_eq!(
            normalize("must not be null", "index"),
            ". index must not be null"
        );
    }

    #[test]
    fn test_space_separator_inside_parenthetical() {
        assert_eq!(
            normalize("the limit (must be positive)", "limit"),
            "the limit ( limit must be positive)"
        );
    }

    #[test]
    fn test_multiple_distinct_triggers_rewritten_independently() {
        let normalized = normalize("must be positive and cannot be zero", "count");
        assert_eq!(
            normalized,
            ". count must be positive and . count cannot be zero"
        );
    }

    #[test]
    fn test_every_occurrence_rewritten() {
        let normalized = normalize("will be open or will be closed", "channel");
        assert_eq!(
            normalized,
            ". channel will be open or . channel will be closed"
        );
    }

    #[test]
    fn test_capitalized_trigger() {
        assert_eq!(
            normalize("Must not be empty", "name"),
            ". name Must not be empty"
        );
    }

    #[test]
    fn test_verbless_fallback_when_no_modal_matched() {
        assert_eq!(normalize("not null", "value"), ". value is not null");
    }

    #[test]
    fn test_verbless_catalogue_skipped_when_modal_matched() {
        // "not null" also appears, but the modal rewrite already fired.
        let normalized = normalize("must be valid, not null", "value");
        assert_eq!(normalized, ". value must be valid, not null");
    }

    #[test]
    fn test_no_trigger_leaves_text_untouched() {
        assert_eq!(normalize("the queue capacity", "capacity"), "the queue capacity");
    }
}
