use crate::loc;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use std::sync::OnceLock;

fn builtin_location() -> &'static loc::SourceLocation {
    static BUILTIN: OnceLock<loc::SourceLocation> = OnceLock::new();
    BUILTIN.get_or_init(|| loc::SourceLocation::GraphQLBuiltIn)
}

/// Represents a defined GraphQL type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    /// If this is a [`GraphQLType::Interface`], unwrap and return its inner
    /// [`InterfaceType`].
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// If this is a [`GraphQLType::Object`], unwrap and return its inner
    /// [`ObjectType`].
    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// If this is a [`GraphQLType::Union`], unwrap and return its inner
    /// [`UnionType`].
    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String
                => builtin_location(),
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    /// Look up an output field selectable on this type.
    ///
    /// Only object and interface types declare fields. Union types expose
    /// nothing besides the implicit `__typename` meta field, which is
    /// resolved by [`crate::modelgen::FieldCollector`] rather than here.
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        match self {
            Self::Interface(t) => t.fields().get(field_name),
            Self::Object(t) => t.fields().get(field_name),
            _ => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        GraphQLTypeKind::from(self).is_composite()
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}
