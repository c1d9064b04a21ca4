use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;

/// One field declared by an [`InterfaceDescriptor`].
///
/// [`InterfaceDescriptor`]: crate::modelgen::InterfaceDescriptor
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FieldDescriptor {
    pub(crate) field_name: String,
    pub(crate) model_type: FieldModelType,
    pub(crate) response_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl FieldDescriptor {
    /// The name of the schema field being selected.
    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    /// What the field's innermost (unwrapped) type is modelled as.
    pub fn model_type(&self) -> &FieldModelType {
        &self.model_type
    }

    /// The key this field appears under in a response (its alias, if any).
    pub fn response_name(&self) -> &str {
        self.response_name.as_str()
    }

    /// The field's declared type, including list and non-null wrappers.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum FieldModelType {
    /// A composite field, modelled by the named generated interface.
    Composite {
        model_name: String,
    },

    /// A scalar or enum field.
    Leaf {
        kind: GraphQLTypeKind,
        type_name: String,
    },
}
impl FieldModelType {
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite { .. })
    }

    /// The generated interface or schema leaf type this model type names.
    pub fn name(&self) -> &str {
        match self {
            Self::Composite { model_name } => model_name.as_str(),
            Self::Leaf { type_name, .. } => type_name.as_str(),
        }
    }
}
