use crate::modelgen::InterfaceDescriptor;
use crate::modelgen::ResultParserDescriptor;
use crate::modelgen::descriptor::serialize_name;
use crate::operation::OperationKind;
use crate::types::TypeAnnotation;
use std::sync::Arc;

/// One executable operation of a compiled document, tying its variables to
/// the model of its response.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationDescriptor {
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    #[serde(serialize_with = "serialize_name")]
    pub(crate) result_parser: Arc<ResultParserDescriptor>,
    #[serde(serialize_with = "serialize_name")]
    pub(crate) result_type: Arc<InterfaceDescriptor>,
    pub(crate) root_type: String,
    pub(crate) variables: Vec<VariableDescriptor>,
}
impl OperationDescriptor {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn result_parser(&self) -> &Arc<ResultParserDescriptor> {
        &self.result_parser
    }

    pub fn result_type(&self) -> &Arc<InterfaceDescriptor> {
        &self.result_type
    }

    /// The name of the schema's root operation type this operation selects
    /// from.
    pub fn root_type(&self) -> &str {
        self.root_type.as_str()
    }

    pub fn variables(&self) -> &[VariableDescriptor] {
        self.variables.as_slice()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VariableDescriptor {
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl VariableDescriptor {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
