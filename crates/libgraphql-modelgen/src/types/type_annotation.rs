use crate::ast;
use crate::loc;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;

/// The declared type of a schema field or of an operation variable, with
/// its list and non-null wrappers.
///
/// Displays in SDL notation, e.g. `[SearchResult!]!`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self { Some(annot) } else { None }
    }

    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self { Some(annot) } else { None }
    }

    /// Where this annotation was written.
    pub fn ref_location(&self) -> &loc::SourceLocation {
        match self {
            Self::List(annot) => annot.ref_location(),
            Self::Named(annot) => annot.ref_location(),
        }
    }

    /// Converts a `graphql-parser` type. A `NonNullType` wrapper is folded
    /// into the nullability of the annotation it wraps.
    pub(crate) fn from_ast_type(
        location: &loc::SourceLocation,
        ast_type: &ast::operation::Type,
    ) -> Self {
        let mut ast_type = ast_type;
        let mut nullable = true;
        if let ast::operation::Type::NonNullType(inner) = ast_type {
            ast_type = inner.as_ref();
            nullable = false;
        }

        match ast_type {
            ast::operation::Type::ListType(inner) => Self::List(ListTypeAnnotation {
                inner: Box::new(Self::from_ast_type(location, inner)),
                nullable,
                ref_location: location.to_owned(),
            }),

            ast::operation::Type::NamedType(type_name) => Self::Named(NamedTypeAnnotation {
                nullable,
                type_ref: NamedGraphQLTypeRef::new(type_name, location.to_owned()),
            }),

            // graphql-parser never nests one NonNullType directly in another.
            ast::operation::Type::NonNullType(inner) => Self::from_ast_type(location, inner),
        }
    }

    /// The `T` of `[[T!]]!`.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(annot) => annot.inner_type_annotation().innermost_named_type_annotation(),
            Self::Named(annot) => annot,
        }
    }

    pub(crate) fn inner_named_type_ref(&self) -> &NamedGraphQLTypeRef {
        &self.innermost_named_type_annotation().type_ref
    }

    /// Nullability of the outermost wrapper.
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(annot) => annot.nullable(),
            Self::Named(annot) => annot.nullable(),
        }
    }

    pub(crate) fn non_null_named(
        type_name: &str,
        location: &loc::SourceLocation,
    ) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable: false,
            type_ref: NamedGraphQLTypeRef::new(type_name, location.to_owned()),
        })
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(annot) => write!(f, "[{}]", annot.inner_type_annotation())?,
            Self::Named(annot) => write!(f, "{}", annot.graphql_type_name())?,
        }
        if !self.nullable() {
            write!(f, "!")?;
        }
        Ok(())
    }
}
