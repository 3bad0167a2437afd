//! Documented-member model
//!
//! Plain data handed over by the documentation-extraction layer: the callable
//! member under translation, its formal parameters with declared types, and
//! the per-parameter documentation tags carrying raw comment text.

use crate::program::{signature, JavaType};

/// One formal parameter of a documented member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParameter {
    /// Declared parameter name as written in the source.
    pub name: String,
    pub java_type: JavaType,
}

impl DocParameter {
    pub fn new(name: impl Into<String>, java_type: JavaType) -> Self {
        DocParameter {
            name: name.into(),
            java_type,
        }
    }
}

/// A per-parameter documentation tag: the parameter name it documents and the
/// raw comment text attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamTag {
    pub name: String,
    pub comment: String,
}

impl ParamTag {
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        ParamTag {
            name: name.into(),
            comment: comment.into(),
        }
    }
}

/// A callable member (method or constructor) together with its structured
/// documentation comment.
#[derive(Debug, Clone)]
pub struct DocumentedMember {
    /// Qualified name of the containing type.
    pub containing_type: String,
    /// Member name; for constructors, the simple name of the containing type.
    pub name: String,
    pub is_constructor: bool,
    /// Formal parameters in declaration order.
    pub params: Vec<DocParameter>,
    /// Documentation tags, one per documented parameter.
    pub param_tags: Vec<ParamTag>,
}

impl DocumentedMember {
    pub fn method(
        containing_type: impl Into<String>,
        name: impl Into<String>,
        params: Vec<DocParameter>,
    ) -> Self {
        DocumentedMember {
            containing_type: containing_type.into(),
            name: name.into(),
            is_constructor: false,
            params,
            param_tags: Vec::new(),
        }
    }

    pub fn constructor(containing_type: impl Into<String>, params: Vec<DocParameter>) -> Self {
        let containing_type = containing_type.into();
        let name = crate::program::simple_name(&containing_type).to_string();
        DocumentedMember {
            containing_type,
            name,
            is_constructor: true,
            params,
            param_tags: Vec::new(),
        }
    }

    pub fn with_param_tag(mut self, tag: ParamTag) -> Self {
        self.param_tags.push(tag);
        self
    }

    /// The documentation tag attached to the named parameter, if any.
    pub fn param_tag(&self, parameter_name: &str) -> Option<&ParamTag> {
        self.param_tags.iter().find(|t| t.name == parameter_name)
    }

    /// Structural signature of this member, comparable with
    /// [`crate::program::MethodInfo::signature`].
    pub fn signature(&self) -> String {
        let params: Vec<JavaType> = self.params.iter().map(|p| p.java_type.clone()).collect();
        signature(&self.containing_type, &self.name, &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_tag_lookup() {
        let member = DocumentedMember::method(
            "com.acme.Queue",
            "offer",
            vec![DocParameter::new("element", JavaType::new("java.lang.Object"))],
        )
        .with_param_tag(ParamTag::new("element", "the element to add"));

        assert_eq!(
            member.param_tag("element").map(|t| t.comment.as_str()),
            Some("the element to add")
        );
        assert!(member.param_tag("missing").is_none());
    }

    #[test]
    fn test_member_signature_matches_method_signature() {
        let member = DocumentedMember::method(
            "com.acme.Queue",
            "offer",
            vec![DocParameter::new("element", JavaType::new("java.lang.Object"))],
        );
        let method = crate::program::MethodInfo::instance(
            "com.acme.Queue",
            "offer",
            vec![JavaType::new("java.lang.Object")],
            JavaType::new("boolean"),
        );
        assert_eq!(member.signature(), method.signature());
    }

    #[test]
    fn test_constructor_takes_type_simple_name() {
        let member = DocumentedMember::constructor("com.acme.Queue", Vec::new());
        assert!(member.is_constructor);
        assert_eq!(member.name, "Queue");
        assert_eq!(member.signature(), "com.acme.Queue.Queue()");
    }
}
