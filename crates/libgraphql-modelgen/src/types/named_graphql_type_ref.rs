use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// A reference, by name, to a type owned by the [`Schema`].
///
/// Types refer to one another this way (implemented interfaces, union
/// members, field types, root operation types) so that the schema can own
/// every type without self-references. The reference is resolved by handing
/// it the schema.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedGraphQLTypeRef {
    name: String,
    ref_location: loc::SourceLocation,
}
impl NamedGraphQLTypeRef {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>, ref_location: loc::SourceLocation) -> Self {
        Self {
            name: name.into(),
            ref_location,
        }
    }

    /// Where the reference was written (not where the type is defined).
    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }

    /// `None` only for a dangling reference, which
    /// [`SchemaBuilder::build()`](crate::schema::SchemaBuilder::build)
    /// rejects.
    pub fn resolve<'schema>(&self, schema: &'schema Schema) -> Option<&'schema GraphQLType> {
        schema.lookup_type(self.name.as_str())
    }
}
