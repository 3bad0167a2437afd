//! Shared test fixtures: an in-memory program model for a small collection
//! class and a scripted proposition source.

use std::collections::HashMap;

use crate::comment::{DocParameter, DocumentedMember};
use crate::nlp::{Proposition, PropositionSeries, PropositionSource};
use crate::program::{FieldInfo, InMemoryModel, JavaType, MethodInfo, TypeInfo, TypeKind};

/// Proposition source answering from a fixed text -> series table.
#[derive(Debug, Default)]
pub(crate) struct StubParser {
    series: HashMap<String, Vec<PropositionSeries>>,
}

impl StubParser {
    pub(crate) fn new() -> Self {
        StubParser::default()
    }

    /// Script the series returned for an exact input text.
    pub(crate) fn on(mut self, text: &str, series: Vec<PropositionSeries>) -> Self {
        self.series.insert(text.to_string(), series);
        self
    }
}

impl PropositionSource for StubParser {
    fn parse(&self, text: &str, _member: &DocumentedMember) -> Vec<PropositionSeries> {
        self.series.get(text).cloned().unwrap_or_default()
    }
}

/// One-clause series with a single proposition.
pub(crate) fn single_proposition(
    head_word: &str,
    subject: &str,
    predicate: &str,
    negative: bool,
) -> PropositionSeries {
    PropositionSeries::new(head_word, vec![Proposition::new(subject, predicate, negative)])
}

pub(crate) const QUEUE_TYPE: &str = "com.acme.collect.BoundedQueue";

/// Program model for a bounded queue class exercising every collection rule:
/// instance/static/boolean members, an overload touching an out-of-scope
/// type, and public fields.
pub(crate) fn queue_model() -> InMemoryModel {
    let queue = TypeInfo::new(QUEUE_TYPE, TypeKind::Class)
        .with_method(MethodInfo::instance(
            QUEUE_TYPE,
            "isEmpty",
            Vec::new(),
            JavaType::new("boolean"),
        ))
        .with_method(MethodInfo::instance(
            QUEUE_TYPE,
            "isFull",
            Vec::new(),
            JavaType::new("boolean"),
        ))
        .with_method(MethodInfo::instance(
            QUEUE_TYPE,
            "size",
            Vec::new(),
            JavaType::new("int"),
        ))
        .with_method(MethodInfo::instance(
            QUEUE_TYPE,
            "contains",
            vec![JavaType::new("java.lang.Object")],
            JavaType::new("boolean"),
        ))
        .with_method(MethodInfo::instance(
            QUEUE_TYPE,
            "clear",
            Vec::new(),
            JavaType::new("void"),
        ))
        .with_method(MethodInfo::instance(
            QUEUE_TYPE,
            "merge",
            vec![JavaType::new(QUEUE_TYPE)],
            JavaType::new("void"),
        ))
        .with_method(MethodInfo::instance(
            QUEUE_TYPE,
            "rebalance",
            vec![JavaType::new("com.acme.io.Channel")],
            JavaType::new("void"),
        ))
        .with_method(MethodInfo::instance(
            QUEUE_TYPE,
            "subQueue",
            Vec::new(),
            JavaType::new(QUEUE_TYPE),
        ))
        .with_method(MethodInfo::static_method(
            QUEUE_TYPE,
            "isValidCapacity",
            vec![JavaType::new("int")],
            JavaType::new("boolean"),
        ))
        .with_method(MethodInfo::instance(
            QUEUE_TYPE,
            "offer",
            vec![JavaType::new("java.lang.Object"), JavaType::new("int")],
            JavaType::new("boolean"),
        ))
        .with_field(FieldInfo::new(QUEUE_TYPE, "capacity", JavaType::new("int")))
        .with_field(FieldInfo::new(QUEUE_TYPE, "frozen", JavaType::new("boolean")));

    InMemoryModel::new().with_type(queue)
}

/// The documented member most tests translate against:
/// `boolean offer(Object element, int count)` on the bounded queue.
pub(crate) fn queue_member() -> DocumentedMember {
    DocumentedMember::method(
        QUEUE_TYPE,
        "offer",
        vec![
            DocParameter::new("element", JavaType::new("java.lang.Object")),
            DocParameter::new("count", JavaType::new("int")),
        ],
    )
}
