//! # doc-guard
//!
//! Translates free-text documentation comments attached to a program's
//! callable members (methods and constructors) into executable boolean guard
//! expressions written against that program's own code elements.
//!
//! The pipeline, per documented member:
//! 1. Normalize recurring modal-verb phrasing so elliptical sentences gain an
//!    explicit subject (`translator::normalize`).
//! 2. Parse the normalized text into subject/predicate propositions through an
//!    external dependency parser (the [`nlp::PropositionSource`] trait).
//! 3. Collect a candidate pool of code elements reachable from the member
//!    through introspection (`translator::Collector`).
//! 4. Match each proposition's subject against the pool by edit distance, and
//!    its predicate against either a fixed pattern catalogue or the
//!    boolean-valued members reachable from the matched subject
//!    (`translator::Matcher`).
//!
//! ## Usage
//!
//! ```no_run
//! use doc_guard::{DocumentedMember, InMemoryModel, TranslatorConfig, Translator};
//! # fn parser() -> Box<dyn doc_guard::PropositionSource> { unimplemented!() }
//! # fn member() -> DocumentedMember { unimplemented!() }
//!
//! let model = InMemoryModel::new();
//! let parser = parser();
//! let config = TranslatorConfig::default();
//!
//! let translator = Translator::new(&model, parser.as_ref(), &config);
//! let guards = translator.translate("must not be null", &member());
//! for guard in guards {
//!     println!("{}", guard.expression);
//! }
//! ```
//!
//! Introspection and linguistic parsing are injected capabilities: the crate
//! depends only on the [`program::ProgramModel`] and
//! [`nlp::PropositionSource`] contracts, so any static-analysis backend or
//! parser can be substituted.

pub mod comment;
pub mod config;
pub mod nlp;
pub mod program;
pub mod translator;

#[cfg(test)]
pub(crate) mod fixtures;

pub use comment::{DocParameter, DocumentedMember, ParamTag};
pub use config::{ConfigError, TranslatorConfig};
pub use nlp::{Proposition, PropositionSeries, PropositionSource};
pub use program::{FieldInfo, InMemoryModel, JavaType, MethodInfo, ProgramModel, TypeInfo, TypeKind};
pub use translator::code_element::{CodeElement, Pool, RECEIVER_TOKEN};
pub use translator::collector::Collector;
pub use translator::matcher::Matcher;
pub use translator::normalizer::normalize;
pub use translator::{Guard, Translator};
