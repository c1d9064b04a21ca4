use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects)
/// defined within some [`Schema`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The [`loc::SourceLocation`] indicating where this [`ObjectType`] was
    /// defined in the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    /// The description of this [`ObjectType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`] in the schema, including the implicit `__typename`.
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of fields defined on the type in the
    /// schema.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// Indicates whether this type implements the named interface, either
    /// directly or through one of the interfaces it implements.
    pub fn implements_interface(
        &self,
        schema: &Schema,
        interface_name: &str,
    ) -> bool {
        self.0.implements_interface(schema, interface_name)
    }

    /// The list of [`InterfaceType`]s directly implemented by this type, in
    /// the order they were declared.
    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    /// The names of all [`InterfaceType`]s directly implemented by this type.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
impl ObjectType {
    /// Indicates whether a value of this object type may appear wherever the
    /// named (possibly abstract) type is expected.
    ///
    /// An object type is a possible type of itself, of every interface it
    /// implements (transitively), and of every union it is a member of.
    pub fn is_possible_type_of(&self, schema: &Schema, type_name: &str) -> bool {
        if self.name() == type_name {
            return true;
        }

        match schema.lookup_type(type_name) {
            Some(GraphQLType::Interface(_)) =>
                self.implements_interface(schema, type_name),
            Some(GraphQLType::Union(union_type)) =>
                union_type.member_type_names().contains(&self.name()),
            _ => false,
        }
    }
}
