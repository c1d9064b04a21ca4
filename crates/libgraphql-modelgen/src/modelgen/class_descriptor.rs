use crate::modelgen::InterfaceDescriptor;
use crate::modelgen::descriptor::serialize_names;
use std::sync::Arc;

/// A concrete generated class that one or more runtime types of a selection
/// are deserialized into.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ClassDescriptor {
    pub(crate) graphql_type: String,
    #[serde(serialize_with = "serialize_names")]
    pub(crate) implements: Vec<Arc<InterfaceDescriptor>>,
    pub(crate) name: String,
}
impl ClassDescriptor {
    /// The schema type this class represents. For a class that stands in
    /// for every possible type of an abstract selection, this is the
    /// abstract type.
    pub fn graphql_type(&self) -> &str {
        self.graphql_type.as_str()
    }

    pub fn implements(&self) -> &[Arc<InterfaceDescriptor>] {
        self.implements.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
