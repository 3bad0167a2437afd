//! Code-element collector
//!
//! Builds the candidate pool for one documented member: the containing type,
//! every declared parameter (with extra identifiers mined from the
//! parameter's own documentation tag), and every applicable method and field
//! of the containing type. The pool lives only for the duration of one
//! member's translation.

use std::collections::{BTreeSet, HashMap};

use crate::comment::{DocParameter, DocumentedMember};
use crate::nlp::PropositionSource;
use crate::program::{JavaType, ProgramModel, TypeKind};
use crate::translator::code_element::{
    CodeElement, FieldElement, MethodElement, ParameterElement, Pool, StaticMethodElement,
    TypeElement, RECEIVER_TOKEN,
};
use crate::translator::normalizer::normalize;

/// Collects the code elements usable for translating one member's comment.
pub struct Collector<'a> {
    model: &'a dyn ProgramModel,
    nlp: &'a dyn PropositionSource,
}

impl<'a> Collector<'a> {
    pub fn new(model: &'a dyn ProgramModel, nlp: &'a dyn PropositionSource) -> Self {
        Collector { model, nlp }
    }

    /// Build the full candidate pool for `member`.
    ///
    /// A containing type that cannot be resolved contributes no translatable
    /// context: the result is an empty pool, not an error.
    pub fn collect(&self, member: &DocumentedMember) -> Pool {
        let mut pool = Pool::new();

        let Some(info) = self.model.resolve(&member.containing_type) else {
            log::warn!(
                "containing type {} cannot be resolved; collecting no code elements",
                member.containing_type
            );
            return pool;
        };

        pool.insert(CodeElement::Type(TypeElement::new(&member.containing_type)));

        let mut in_scope: Vec<JavaType> = vec![JavaType::new(&member.containing_type)];

        // The first two formal parameters of an enum constructor are
        // compiler-synthesized and absent from the documented signature.
        let parameters: &[DocParameter] =
            if info.kind == TypeKind::Enum && member.is_constructor && member.params.len() >= 2 {
                &member.params[2..]
            } else {
                &member.params
            };

        // Two passes over the mined identifiers: count first, then keep only
        // identifiers produced by exactly one parameter. An identifier shared
        // by several parameters cannot designate a subject unambiguously.
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut mined: Vec<BTreeSet<String>> = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            let identifiers = self.mine_identifiers(member, &parameter.name);
            for identifier in &identifiers {
                *counts.entry(identifier.clone()).or_insert(0) += 1;
            }
            mined.push(identifiers);
        }

        for (index, (parameter, identifiers)) in parameters.iter().zip(mined).enumerate() {
            let unique: Vec<String> = identifiers
                .into_iter()
                .filter(|id| counts.get(id).copied() == Some(1))
                .collect();
            pool.insert(CodeElement::Parameter(ParameterElement::new(
                &parameter.name,
                index,
                parameter.java_type.clone(),
                unique,
            )));
            in_scope.push(parameter.java_type.clone());
        }

        // Methods of the containing type, minus the documented member itself
        // and any overload touching a type outside the member's scope.
        let member_signature = member.signature();
        for method in &info.methods {
            if method.signature() == member_signature {
                continue;
            }
            if !method.params.iter().all(|p| in_scope.contains(p)) {
                continue;
            }
            if method.is_static {
                pool.insert(CodeElement::StaticMethod(StaticMethodElement::new(
                    method.clone(),
                )));
            } else if !member.is_constructor {
                // No receiver instance exists yet while a constructor runs.
                pool.insert(CodeElement::Method(MethodElement::new(
                    RECEIVER_TOKEN,
                    method.clone(),
                )));
            }
        }

        for field in &info.fields {
            pool.insert(CodeElement::Field(FieldElement::new(
                RECEIVER_TOKEN,
                field.clone(),
            )));
        }

        pool
    }

    /// Mine candidate identifiers for one parameter: normalize its tag
    /// comment, parse it, and keep the head word of every resulting series.
    fn mine_identifiers(&self, member: &DocumentedMember, parameter_name: &str) -> BTreeSet<String> {
        let Some(tag) = member.param_tag(parameter_name) else {
            return BTreeSet::new();
        };
        let normalized = normalize(&tag.comment, parameter_name);
        self.nlp
            .parse(&normalized, member)
            .into_iter()
            .map(|series| series.head_word)
            .filter(|word| !word.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::{DocParameter, DocumentedMember, ParamTag};
    use crate::fixtures::{queue_member, queue_model, StubParser};
    use crate::nlp::PropositionSeries;
    use crate::program::{InMemoryModel, TypeInfo};

    fn collect(member: &DocumentedMember) -> Pool {
        let model = queue_model();
        let nlp = StubParser::new();
        Collector::new(&model, &nlp).collect(member)
    }

    fn identifiers_of(pool: &Pool) -> Vec<String> {
        pool.iter()
            .map(|e| e.identifiers().join("/"))
            .collect()
    }

    #[test]
    fn test_unresolvable_type_yields_empty_pool() {
        let model = InMemoryModel::new();
        let nlp = StubParser::new();
        let pool = Collector::new(&model, &nlp).collect(&queue_member());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pool_contains_type_parameters_methods_and_fields() {
        let pool = collect(&queue_member());
        let ids = identifiers_of(&pool);
        assert!(ids.contains(&"BoundedQueue/Queue".to_string()));
        assert!(ids.contains(&"element".to_string()));
        assert!(ids.contains(&"count".to_string()));
        assert!(ids.contains(&"isEmpty".to_string()));
        assert!(ids.contains(&"isValidCapacity".to_string()));
        assert!(ids.contains(&"capacity".to_string()));
        assert!(ids.contains(&"frozen".to_string()));
    }

    #[test]
    fn test_documented_member_is_excluded_from_its_own_pool() {
        let pool = collect(&queue_member());
        assert!(!identifiers_of(&pool).contains(&"offer".to_string()));
    }

    #[test]
    fn test_methods_with_out_of_scope_parameter_types_are_excluded() {
        // rebalance(com.acme.io.Channel) touches a type no parameter declares.
        let pool = collect(&queue_member());
        assert!(!identifiers_of(&pool).contains(&"rebalance".to_string()));
        // merge(BoundedQueue) stays: the containing type is always in scope.
        assert!(identifiers_of(&pool).contains(&"merge".to_string()));
    }

    #[test]
    fn test_instance_methods_omitted_for_constructors() {
        let member = DocumentedMember::constructor(
            "com.acme.collect.BoundedQueue",
            vec![DocParameter::new("count", JavaType::new("int"))],
        );
        let pool = collect(&member);
        let ids = identifiers_of(&pool);
        assert!(!ids.contains(&"isEmpty".to_string()));
        // Static methods need no receiver and survive.
        assert!(ids.contains(&"isValidCapacity".to_string()));
        // Fields are still collected.
        assert!(ids.contains(&"frozen".to_string()));
    }

    #[test]
    fn test_enum_constructor_drops_synthetic_parameters() {
        let model = InMemoryModel::new()
            .with_type(TypeInfo::new("com.acme.collect.Priority", TypeKind::Enum));
        let member = DocumentedMember::constructor(
            "com.acme.collect.Priority",
            vec![
                DocParameter::new("$enum$name", JavaType::new("java.lang.String")),
                DocParameter::new("$enum$ordinal", JavaType::new("int")),
                DocParameter::new("weight", JavaType::new("int")),
            ],
        );
        let nlp = StubParser::new();
        let pool = Collector::new(&model, &nlp).collect(&member);

        let parameters: Vec<&ParameterElement> = pool
            .iter()
            .filter_map(|e| match e {
                CodeElement::Parameter(p) => Some(p),
                _ => None,
            })
            .collect();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name(), "weight");
        assert_eq!(parameters[0].index(), 0);
    }

    #[test]
    fn test_mined_identifiers_attach_to_their_parameter() {
        let member = queue_member().with_param_tag(ParamTag::new(
            "count",
            "the number of slots, must be positive",
        ));
        let normalized = normalize("the number of slots, must be positive", "count");
        let nlp = StubParser::new().on(
            &normalized,
            vec![PropositionSeries::new("slots", Vec::new())],
        );
        let model = queue_model();
        let pool = Collector::new(&model, &nlp).collect(&member);

        let count = pool
            .iter()
            .find_map(|e| match e {
                CodeElement::Parameter(p) if p.name() == "count" => Some(e.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(count.identifiers(), vec!["count", "slots"]);
    }

    #[test]
    fn test_ambiguous_mined_identifier_removed_from_every_parameter() {
        let member = queue_member()
            .with_param_tag(ParamTag::new("element", "the value to add"))
            .with_param_tag(ParamTag::new("count", "the value of the capacity"));
        let nlp = StubParser::new()
            .on(
                &normalize("the value to add", "element"),
                vec![PropositionSeries::new("value", Vec::new())],
            )
            .on(
                &normalize("the value of the capacity", "count"),
                vec![
                    PropositionSeries::new("value", Vec::new()),
                    PropositionSeries::new("capacity", Vec::new()),
                ],
            );
        let model = queue_model();
        let pool = Collector::new(&model, &nlp).collect(&member);

        for element in pool.iter() {
            if let CodeElement::Parameter(p) = element {
                assert!(
                    !element.identifiers().contains(&"value"),
                    "ambiguous identifier kept on parameter {}",
                    p.name()
                );
            }
        }
        // The identifier produced by exactly one parameter survives.
        let count = pool
            .iter()
            .find(|e| matches!(e, CodeElement::Parameter(p) if p.name() == "count"))
            .unwrap();
        assert!(count.identifiers().contains(&"capacity"));
    }

    #[test]
    fn test_no_duplicate_members_in_pool() {
        let pool = collect(&queue_member());
        let mut keys: Vec<_> = pool.iter().map(|e| e.key()).collect();
        let total = keys.len();
        keys.sort_by_key(|k| format!("{:?}", k));
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}
