//! Code-element model
//!
//! A code element is an introspected or derived program entity usable as a
//! match target: it exposes the identifier strings a human might use to refer
//! to it in prose, and the Java-expression fragment emitted when it is
//! selected. The open-ended candidate set is represented as a closed tagged
//! union; expression composition dispatches on the variant tag.

use std::collections::HashSet;

use crate::program::{simple_name, FieldInfo, JavaType, MethodInfo};

/// Fixed receiver token standing for the object under test in
/// instance-member expressions.
pub const RECEIVER_TOKEN: &str = "target";

/// An introspected or derived program entity eligible for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeElement {
    /// The containing type itself.
    Type(TypeElement),
    /// One formal parameter of the documented member.
    Parameter(ParameterElement),
    /// An instance method reachable through a receiver expression.
    Method(MethodElement),
    /// A static method, callable without a receiver instance.
    StaticMethod(StaticMethodElement),
    /// A field reachable through a receiver expression.
    Field(FieldElement),
    /// A synthetic element not backed by an introspected member, carrying a
    /// precomputed expression (e.g. the array-length pseudo-properties).
    Derived(DerivedElement),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeElement {
    qualified_name: String,
    identifiers: Vec<String>,
}

impl TypeElement {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple = simple_name(&qualified_name).to_string();
        let mut identifiers = vec![simple.clone()];
        // A camel-cased name is often referred to by its capitalized suffix:
        // "AmortizedQueue" reads as "the queue" in prose.
        if let Some(suffix) = capitalized_suffix(&simple) {
            identifiers.push(suffix.to_string());
        }
        TypeElement {
            qualified_name,
            identifiers,
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterElement {
    name: String,
    index: usize,
    java_type: JavaType,
    identifiers: Vec<String>,
}

impl ParameterElement {
    /// A parameter element whose identifier set is the declared name plus the
    /// given mined identifiers (already disambiguated by the collector).
    pub fn new(
        name: impl Into<String>,
        index: usize,
        java_type: JavaType,
        mined_identifiers: Vec<String>,
    ) -> Self {
        let name = name.into();
        let mut identifiers = vec![name.clone()];
        identifiers.extend(mined_identifiers.into_iter().filter(|id| *id != name));
        ParameterElement {
            name,
            index,
            java_type,
            identifiers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn java_type(&self) -> &JavaType {
        &self.java_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodElement {
    receiver: String,
    method: MethodInfo,
}

impl MethodElement {
    pub fn new(receiver: impl Into<String>, method: MethodInfo) -> Self {
        MethodElement {
            receiver: receiver.into(),
            method,
        }
    }

    pub fn method(&self) -> &MethodInfo {
        &self.method
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMethodElement {
    method: MethodInfo,
    /// Literal argument expression for derived static predicates (the
    /// matched parameter is passed to the method).
    argument: Option<String>,
}

impl StaticMethodElement {
    pub fn new(method: MethodInfo) -> Self {
        StaticMethodElement {
            method,
            argument: None,
        }
    }

    pub fn with_argument(method: MethodInfo, argument: impl Into<String>) -> Self {
        StaticMethodElement {
            method,
            argument: Some(argument.into()),
        }
    }

    pub fn method(&self) -> &MethodInfo {
        &self.method
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldElement {
    receiver: String,
    field: FieldInfo,
}

impl FieldElement {
    pub fn new(receiver: impl Into<String>, field: FieldInfo) -> Self {
        FieldElement {
            receiver: receiver.into(),
            field,
        }
    }

    pub fn field(&self) -> &FieldInfo {
        &self.field
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedElement {
    expression: String,
    identifiers: Vec<String>,
}

impl DerivedElement {
    pub fn new(expression: impl Into<String>, identifiers: Vec<String>) -> Self {
        DerivedElement {
            expression: expression.into(),
            identifiers,
        }
    }
}

impl CodeElement {
    /// Candidate identifier strings a comment might use to refer to this
    /// element. Never empty for elements admitted into a pool.
    pub fn identifiers(&self) -> Vec<&str> {
        match self {
            CodeElement::Type(e) => e.identifiers.iter().map(String::as_str).collect(),
            CodeElement::Parameter(e) => e.identifiers.iter().map(String::as_str).collect(),
            CodeElement::Method(e) => vec![e.method.name.as_str()],
            CodeElement::StaticMethod(e) => vec![e.method.name.as_str()],
            CodeElement::Field(e) => vec![e.field.name.as_str()],
            CodeElement::Derived(e) => e.identifiers.iter().map(String::as_str).collect(),
        }
    }

    /// The guard-expression fragment produced when this element is selected.
    pub fn java_expression(&self) -> String {
        match self {
            CodeElement::Type(_) => RECEIVER_TOKEN.to_string(),
            CodeElement::Parameter(e) => e.name.clone(),
            CodeElement::Method(e) => format!("{}.{}()", e.receiver, e.method.name),
            CodeElement::StaticMethod(e) => {
                let class = simple_name(&e.method.declaring_type);
                match &e.argument {
                    Some(argument) => format!("{}.{}({})", class, e.method.name, argument),
                    None => format!("{}.{}()", class, e.method.name),
                }
            }
            CodeElement::Field(e) => format!("{}.{}", e.receiver, e.field.name),
            CodeElement::Derived(e) => e.expression.clone(),
        }
    }

    /// Minimum case-insensitive edit distance between `text` and any of this
    /// element's identifiers.
    pub fn distance_from(&self, text: &str) -> usize {
        let text = text.to_lowercase();
        self.identifiers()
            .iter()
            .map(|id| strsim::levenshtein(&text, &id.to_lowercase()))
            .min()
            .unwrap_or(usize::MAX)
    }

    /// Structural identity of the underlying member: two elements with the
    /// same key refer to the same introspected entity and collapse in a pool.
    pub fn key(&self) -> ElementKey {
        match self {
            CodeElement::Type(e) => ElementKey::Type(e.qualified_name.clone()),
            CodeElement::Parameter(e) => ElementKey::Parameter(e.name.clone(), e.index),
            CodeElement::Method(e) => ElementKey::Method(e.method.signature()),
            CodeElement::StaticMethod(e) => {
                ElementKey::StaticMethod(e.method.signature(), e.argument.clone())
            }
            CodeElement::Field(e) => {
                ElementKey::Field(e.field.declaring_type.clone(), e.field.name.clone())
            }
            CodeElement::Derived(e) => ElementKey::Derived(e.expression.clone()),
        }
    }
}

/// Structural identity key for pool membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKey {
    Type(String),
    Parameter(String, usize),
    Method(String),
    StaticMethod(String, Option<String>),
    Field(String, String),
    Derived(String),
}

/// Insertion-ordered set of code elements with structural dedup.
///
/// Built fresh per documented member and discarded after its comment is
/// translated; there is no cross-member caching.
#[derive(Debug, Clone, Default)]
pub struct Pool {
    elements: Vec<CodeElement>,
    keys: HashSet<ElementKey>,
}

impl Pool {
    pub fn new() -> Self {
        Pool::default()
    }

    /// Insert an element unless the pool already holds one with the same
    /// structural key. Returns whether the element was admitted.
    pub fn insert(&mut self, element: CodeElement) -> bool {
        if !self.keys.insert(element.key()) {
            return false;
        }
        self.elements.push(element);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeElement> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[CodeElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl IntoIterator for Pool {
    type Item = CodeElement;
    type IntoIter = std::vec::IntoIter<CodeElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

/// The suffix starting at the last interior uppercase letter of a
/// camel-cased name ("AmortizedQueue" -> "Queue"). None when the name has no
/// interior capital.
fn capitalized_suffix(simple: &str) -> Option<&str> {
    let position = simple
        .char_indices()
        .skip(1)
        .filter(|(_, c)| c.is_uppercase())
        .map(|(i, _)| i)
        .last()?;
    Some(&simple[position..])
}
