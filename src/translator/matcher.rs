//! Subject and predicate matchers
//!
//! Translates the subject and predicate of a proposition into a Java guard
//! expression. Subjects are approximate-matched against the member's
//! candidate pool. Predicates resolve either through a fixed catalogue of
//! simple patterns (boolean/null equality, sign tests, numeric relations, a
//! type test) or, failing that, by approximate-matching against the
//! boolean-valued members reachable from the matched subject.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::comment::DocumentedMember;
use crate::config::TranslatorConfig;
use crate::nlp::PropositionSource;
use crate::program::{JavaType, ProgramModel};
use crate::translator::code_element::{
    CodeElement, DerivedElement, FieldElement, MethodElement, Pool, StaticMethodElement,
    RECEIVER_TOKEN,
};
use crate::translator::collector::Collector;

static NEGATED_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(is |are )?!= ?(true|false|null|zero|positive|strictly positive|negative|strictly negative)",
    )
    .expect("valid regex")
});

static WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(is |are )?(==|=)? ?(true|false|null|zero|positive|strictly positive|negative|strictly negative)",
    )
    .expect("valid regex")
});

static NUMBER_RELATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(is |are )?(<=|>=|<|>|!=|==|=)? ?(-?[0-9]+)").expect("valid regex"));

static INSTANCE_OF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"instanceof (.*)").expect("valid regex"));

/// Matches proposition subjects and predicates against code elements.
pub struct Matcher<'a> {
    model: &'a dyn ProgramModel,
    nlp: &'a dyn PropositionSource,
    config: &'a TranslatorConfig,
}

impl<'a> Matcher<'a> {
    pub fn new(
        model: &'a dyn ProgramModel,
        nlp: &'a dyn PropositionSource,
        config: &'a TranslatorConfig,
    ) -> Self {
        Matcher { model, nlp, config }
    }

    /// All code elements of `member`'s candidate pool whose name is closest
    /// to `subject`, within the configured distance threshold.
    ///
    /// An empty result means "no subject match": the proposition cannot be
    /// translated, which is an expected outcome rather than an error.
    pub fn subject_match(&self, subject: &str, member: &DocumentedMember) -> Vec<CodeElement> {
        // Connective lead-ins do not contribute to identity and would only
        // inflate the distance.
        let cleaned = subject
            .strip_prefix("either ")
            .or_else(|| subject.strip_prefix("both "))
            .unwrap_or(subject)
            .trim();

        let pool = Collector::new(self.model, self.nlp).collect(member);
        filter_matching(cleaned, pool, self.config.distance_threshold)
    }

    /// Translate `predicate` against an already-matched `subject` element.
    ///
    /// Returns the full guard expression, or `None` when the predicate
    /// matches neither the simple catalogue nor any boolean member reachable
    /// from the subject; the caller skips the proposition in that case.
    pub fn predicate_match(
        &self,
        member: &DocumentedMember,
        subject: &CodeElement,
        predicate: &str,
        negate: bool,
    ) -> Option<String> {
        let matched = match simple_match(predicate) {
            Some(suffix) => format!("{}{}", subject.java_expression(), suffix),
            None => {
                let candidates = self.boolean_candidates(member, subject)?;
                let matches =
                    filter_matching(predicate, candidates, self.config.distance_threshold);
                // Equally distant candidates are all valid matches; the first
                // one discovered is taken.
                matches.into_iter().next()?.java_expression()
            }
        };

        // A type-level subject can never validly be compared to null.
        if matched == "target==null" {
            return None;
        }

        if negate {
            return Some(format!("({}) == false", matched));
        }
        Some(matched)
    }

    /// The secondary candidate pool for a predicate: boolean-valued members
    /// reachable from the subject. Subjects that expose no such pool
    /// (fields, derived elements) yield `None`.
    fn boolean_candidates(
        &self,
        member: &DocumentedMember,
        subject: &CodeElement,
    ) -> Option<Pool> {
        match subject {
            CodeElement::Parameter(parameter) => {
                let mut pool =
                    self.boolean_elements(&subject.java_expression(), parameter.java_type());
                // Static predicates of the containing type taking the
                // parameter itself as their only argument also apply.
                if let Some(info) = self.model.resolve(&member.containing_type) {
                    for method in &info.methods {
                        if method.is_static
                            && method.params.len() < 2
                            && method.return_type.is_boolean()
                            && method.params.iter().all(|p| p == parameter.java_type())
                        {
                            pool.insert(CodeElement::StaticMethod(
                                StaticMethodElement::with_argument(
                                    method.clone(),
                                    subject.java_expression(),
                                ),
                            ));
                        }
                    }
                }
                Some(pool)
            }
            CodeElement::Type(element) => Some(self.boolean_elements(
                RECEIVER_TOKEN,
                &JavaType::new(element.qualified_name()),
            )),
            CodeElement::Method(element) => Some(
                self.boolean_elements(&subject.java_expression(), &element.method().return_type),
            ),
            CodeElement::StaticMethod(element) => Some(
                self.boolean_elements(&subject.java_expression(), &element.method().return_type),
            ),
            _ => None,
        }
    }

    /// Boolean-valued fields and zero-argument boolean methods of `ty`,
    /// composed behind `receiver_expression`. Array types synthesize the
    /// length pseudo-properties instead of introspecting.
    fn boolean_elements(&self, receiver_expression: &str, ty: &JavaType) -> Pool {
        let mut pool = Pool::new();

        if ty.is_array() {
            pool.insert(CodeElement::Derived(DerivedElement::new(
                format!("{}.length==0", receiver_expression),
                vec!["isEmpty".to_string()],
            )));
            pool.insert(CodeElement::Derived(DerivedElement::new(
                format!("{}.length", receiver_expression),
                vec!["length".to_string()],
            )));
            return pool;
        }

        let Some(info) = self.model.resolve(ty.qualified_name()) else {
            log::debug!("type {} cannot be resolved; no boolean members", ty);
            return pool;
        };

        for field in &info.fields {
            if field.field_type.is_boolean() {
                pool.insert(CodeElement::Field(FieldElement::new(
                    receiver_expression,
                    field.clone(),
                )));
            }
        }
        for method in &info.methods {
            if method.params.is_empty() && method.return_type.is_boolean() {
                pool.insert(CodeElement::Method(MethodElement::new(
                    receiver_expression,
                    method.clone(),
                )));
            }
        }

        pool
    }
}

/// Keep the elements at minimum distance from `filter`, provided that
/// minimum does not exceed `threshold`.
fn filter_matching(
    filter: &str,
    elements: impl IntoIterator<Item = CodeElement>,
    threshold: usize,
) -> Vec<CodeElement> {
    let mut minimum = threshold;
    let mut best: Vec<CodeElement> = Vec::new();
    for element in elements {
        let distance = element.distance_from(filter);
        if distance < minimum {
            minimum = distance;
            best.clear();
            best.push(element);
        } else if distance == minimum {
            best.push(element);
        }
    }
    best
}

/// Attempt to resolve a predicate purely from the fixed pattern catalogue.
///
/// The returned string is a relational suffix to concatenate onto the
/// subject's expression (for `instanceof`, the full clause tail). `None`
/// means the predicate needs the secondary pool; a malformed numeric literal
/// also falls out as `None` rather than an error.
fn simple_match(predicate: &str) -> Option<String> {
    if let Some(captures) = NEGATED_WORD.captures(predicate) {
        let word = captures.get(2).expect("mandatory group").as_str();
        return Some(match word {
            "true" | "false" | "null" => format!("!={}", word),
            "zero" => "!=0".to_string(),
            "positive" | "strictly positive" => "<0".to_string(),
            _ => ">=0".to_string(), // not negative
        });
    }

    if let Some(captures) = WORD.captures(predicate) {
        let word = captures.get(3).expect("mandatory group").as_str();
        return Some(match word {
            "true" | "false" | "null" => format!("=={}", word),
            "zero" => "==0".to_string(),
            "positive" | "strictly positive" => ">0".to_string(),
            _ => "<0".to_string(), // negative
        });
    }

    if let Some(captures) = NUMBER_RELATION.captures(predicate) {
        let literal = captures.get(3).expect("mandatory group").as_str();
        // Text that merely looks numeric falls through to the secondary pool.
        let number: i64 = literal.parse().ok()?;
        let relation = captures.get(2).map(|m| m.as_str());
        return Some(match relation {
            None | Some("=") => format!("=={}", number),
            Some(relation) => format!("{}{}", relation, number),
        });
    }

    if predicate == "been set" {
        return Some("!=null".to_string());
    }

    if let Some(captures) = INSTANCE_OF.captures(predicate) {
        let ty = captures.get(1).expect("mandatory group").as_str();
        return Some(format!(" instanceof {}", ty));
    }

    None
}
