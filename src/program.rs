//! Program introspection model
//!
//! The translation core never performs introspection itself. It consumes an
//! injected [`ProgramModel`] capability that resolves qualified type names to
//! immutable [`TypeInfo`] snapshots (public methods, public fields, kind).
//! Any backend able to answer those questions (runtime reflection, a
//! compiler's symbol table, a static-analysis index) can implement the
//! trait. [`InMemoryModel`] is the reference implementation backed by a map.

use std::collections::HashMap;
use std::fmt;

/// A reference to a declared Java type: qualified name plus array dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaType {
    qualified_name: String,
    dimensions: usize,
}

impl JavaType {
    /// A non-array type, e.g. `JavaType::new("java.lang.String")`.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        JavaType {
            qualified_name: qualified_name.into(),
            dimensions: 0,
        }
    }

    /// An array type with the given element type and dimension count.
    pub fn array(element: impl Into<String>, dimensions: usize) -> Self {
        JavaType {
            qualified_name: element.into(),
            dimensions,
        }
    }

    /// Qualified name of the type (element type for arrays).
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Simple (unqualified) name of the type.
    pub fn simple_name(&self) -> &str {
        simple_name(&self.qualified_name)
    }

    pub fn is_array(&self) -> bool {
        self.dimensions > 0
    }

    /// The type obtained by stripping one array dimension.
    pub fn element_type(&self) -> Option<JavaType> {
        if self.dimensions == 0 {
            return None;
        }
        Some(JavaType {
            qualified_name: self.qualified_name.clone(),
            dimensions: self.dimensions - 1,
        })
    }

    /// True for `boolean` and its boxed form `java.lang.Boolean`.
    pub fn is_boolean(&self) -> bool {
        self.dimensions == 0
            && (self.qualified_name == "boolean" || self.qualified_name == "java.lang.Boolean")
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name)?;
        for _ in 0..self.dimensions {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
}

/// Immutable snapshot of a resolved type: its public methods and fields.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    /// Qualified type name (e.g. "com.acme.collect.BoundedQueue").
    pub qualified_name: String,
    pub kind: TypeKind,
    /// Public methods, in declaration order.
    pub methods: Vec<MethodInfo>,
    /// Public fields, in declaration order.
    pub fields: Vec<FieldInfo>,
}

impl TypeInfo {
    pub fn new(qualified_name: impl Into<String>, kind: TypeKind) -> Self {
        TypeInfo {
            qualified_name: qualified_name.into(),
            kind,
            methods: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.qualified_name)
    }

    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }
}

/// A public method of a resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    /// Qualified name of the declaring type.
    pub declaring_type: String,
    pub name: String,
    pub is_static: bool,
    /// Formal parameter types, in declaration order.
    pub params: Vec<JavaType>,
    pub return_type: JavaType,
}

impl MethodInfo {
    pub fn instance(
        declaring_type: impl Into<String>,
        name: impl Into<String>,
        params: Vec<JavaType>,
        return_type: JavaType,
    ) -> Self {
        MethodInfo {
            declaring_type: declaring_type.into(),
            name: name.into(),
            is_static: false,
            params,
            return_type,
        }
    }

    pub fn static_method(
        declaring_type: impl Into<String>,
        name: impl Into<String>,
        params: Vec<JavaType>,
        return_type: JavaType,
    ) -> Self {
        MethodInfo {
            declaring_type: declaring_type.into(),
            name: name.into(),
            is_static: true,
            params,
            return_type,
        }
    }

    /// Structural signature used to compare members across introspection
    /// sources: declaring type, name and parameter types.
    pub fn signature(&self) -> String {
        signature(&self.declaring_type, &self.name, &self.params)
    }
}

/// A public field of a resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// Qualified name of the declaring type.
    pub declaring_type: String,
    pub name: String,
    pub field_type: JavaType,
}

impl FieldInfo {
    pub fn new(
        declaring_type: impl Into<String>,
        name: impl Into<String>,
        field_type: JavaType,
    ) -> Self {
        FieldInfo {
            declaring_type: declaring_type.into(),
            name: name.into(),
            field_type,
        }
    }
}

/// Introspection capability consumed by the translation core.
///
/// Resolution is allowed to fail: a type outside the analyzed program simply
/// yields `None`, and callers degrade to an empty candidate pool.
pub trait ProgramModel {
    /// Resolve a qualified type name to its snapshot.
    fn resolve(&self, qualified_name: &str) -> Option<&TypeInfo>;
}

/// Map-backed [`ProgramModel`] populated up front.
#[derive(Debug, Default)]
pub struct InMemoryModel {
    types: HashMap<String, TypeInfo>,
}

impl InMemoryModel {
    pub fn new() -> Self {
        InMemoryModel::default()
    }

    /// Register a type snapshot, replacing any previous one of the same name.
    pub fn insert(&mut self, info: TypeInfo) {
        self.types.insert(info.qualified_name.clone(), info);
    }

    pub fn with_type(mut self, info: TypeInfo) -> Self {
        self.insert(info);
        self
    }
}

impl ProgramModel for InMemoryModel {
    fn resolve(&self, qualified_name: &str) -> Option<&TypeInfo> {
        self.types.get(qualified_name)
    }
}

/// Last segment of a dot-qualified name.
pub(crate) fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Structural member signature: `declaring.name(type,type)`.
pub(crate) fn signature(declaring_type: &str, name: &str, params: &[JavaType]) -> String {
    let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
    format!("{}.{}({})", declaring_type, name, params.join(","))
}
