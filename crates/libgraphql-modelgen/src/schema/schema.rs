use crate::operation::OperationKind;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a fully built and immutable GraphQL schema.
///
/// Types are kept in definition order (built-in scalars first), which makes
/// every enumeration over the schema -- most importantly
/// [`Schema::possible_types()`] -- deterministic.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// All types defined in this schema (including built-in scalars), keyed
    /// by name.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// The schema's `Mutation` root operation type, if one is defined.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type.as_ref()
            .and_then(|type_ref| type_ref.resolve(self))
            .and_then(|type_| type_.as_object())
    }

    /// The concrete object types that a value of the named type may have at
    /// runtime.
    ///
    /// * For an object type this is the object type itself.
    /// * For an interface type this is every object type that implements the
    ///   interface (directly or transitively), in schema definition order.
    /// * For a union type this is the union's members, in declaration order.
    /// * For any other (or unknown) type this is empty.
    pub fn possible_types(&self, type_name: &str) -> Vec<&ObjectType> {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(obj_type)) => vec![obj_type],

            Some(GraphQLType::Interface(_)) =>
                self.types
                    .values()
                    .filter_map(|type_| type_.as_object())
                    .filter(|obj_type| {
                        obj_type.implements_interface(self, type_name)
                    })
                    .collect(),

            Some(GraphQLType::Union(union_type)) =>
                union_type.member_types(self),

            _ => vec![],
        }
    }

    /// The schema's `Query` root operation type.
    pub fn query_type(&self) -> Option<&ObjectType> {
        self.query_type
            .resolve(self)
            .and_then(|type_| type_.as_object())
    }

    /// The root operation type for the given [`OperationKind`], if the
    /// schema defines one.
    pub fn root_operation_type(&self, kind: &OperationKind) -> Option<&ObjectType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => self.query_type(),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// The schema's `Subscription` root operation type, if one is defined.
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type.as_ref()
            .and_then(|type_ref| type_ref.resolve(self))
            .and_then(|type_| type_.as_object())
    }
}
