use crate::loc;
use crate::types::TypeAnnotation;

/// `[T]` or `[T]!`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(crate) inner: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
    pub(crate) ref_location: loc::SourceLocation,
}
impl ListTypeAnnotation {
    /// The annotation of the list's items.
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}
