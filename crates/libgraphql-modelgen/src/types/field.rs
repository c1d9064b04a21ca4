use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeAnnotation;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parent_type: NamedGraphQLTypeRef,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of the object or interface type this field is defined on.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type.name()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// The innermost named type of this field's declared type, with all
    /// list and non-null wrappers removed.
    pub fn inner_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.type_annotation
            .inner_named_type_ref()
            .resolve(schema)
    }

    pub(crate) fn typename_meta_field(
        parent_type_name: &str,
        parent_def_location: &loc::SourceLocation,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            name: "__typename".to_string(),
            parent_type: NamedGraphQLTypeRef::new(
                parent_type_name,
                parent_def_location.to_owned(),
            ),
            type_annotation: TypeAnnotation::non_null_named(
                "String",
                parent_def_location,
            ),
        }
    }
}
