use crate::modelgen::FieldDescriptor;
use crate::modelgen::descriptor::serialize_names;
use std::collections::HashSet;
use std::sync::Arc;

/// A generated interface: the fields one fragment (or selection) declares
/// itself, plus the interfaces of the fragments nested in it as bases.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InterfaceDescriptor {
    pub(crate) fields: Vec<FieldDescriptor>,
    pub(crate) graphql_type: String,
    #[serde(serialize_with = "serialize_names")]
    pub(crate) implements: Vec<Arc<InterfaceDescriptor>>,
    pub(crate) name: String,
}
impl InterfaceDescriptor {
    /// Response names of every field exposed by this interface, whether
    /// declared here or by any (transitive) base.
    pub fn all_field_names(&self) -> HashSet<&str> {
        let mut names: HashSet<&str> = self.fields
            .iter()
            .map(|field| field.response_name())
            .collect();
        for base in &self.implements {
            names.extend(base.all_field_names());
        }
        names
    }

    /// The fields declared by this interface itself (not by its bases).
    pub fn fields(&self) -> &[FieldDescriptor] {
        self.fields.as_slice()
    }

    /// The name of the schema type backing this interface.
    pub fn graphql_type(&self) -> &str {
        self.graphql_type.as_str()
    }

    /// The base interfaces of this interface, in declaration order.
    pub fn implements(&self) -> &[Arc<InterfaceDescriptor>] {
        self.implements.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
