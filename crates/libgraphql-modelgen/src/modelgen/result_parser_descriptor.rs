use crate::modelgen::ClassDescriptor;
use crate::modelgen::InterfaceDescriptor;
use crate::modelgen::ModelPath;
use crate::modelgen::descriptor::serialize_name;
use crate::modelgen::descriptor::serialize_names;
use crate::operation::OperationKind;
use indexmap::IndexMap;
use std::sync::Arc;

/// The plan for deserializing one field's (or operation's) response value:
/// which class to construct for each runtime `__typename`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResultParserDescriptor {
    #[serde(serialize_with = "serialize_names")]
    pub(crate) classes: Vec<Arc<ClassDescriptor>>,
    pub(crate) discriminators: IndexMap<String, String>,
    pub(crate) name: String,
    pub(crate) path: ModelPath,
    #[serde(serialize_with = "serialize_name")]
    pub(crate) return_type: Arc<InterfaceDescriptor>,
    pub(crate) source: ResultParserSource,
}
impl ResultParserDescriptor {
    /// The classes this parser chooses between, in schema order.
    pub fn classes(&self) -> &[Arc<ClassDescriptor>] {
        self.classes.as_slice()
    }

    /// The class to construct for a given runtime type name.
    pub fn class_for(&self, type_name: &str) -> Option<&Arc<ClassDescriptor>> {
        let class_name = self.discriminators.get(type_name)?;
        self.classes.iter().find(|class| class.name() == class_name)
    }

    /// Runtime type name (`__typename`) -> class name, for every possible
    /// type of the parsed selection.
    pub fn discriminators(&self) -> &IndexMap<String, String> {
        &self.discriminators
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn path(&self) -> &ModelPath {
        &self.path
    }

    /// The interface the parsed value is statically typed as.
    pub fn return_type(&self) -> &Arc<InterfaceDescriptor> {
        &self.return_type
    }

    pub fn source(&self) -> &ResultParserSource {
        &self.source
    }
}

/// What a [`ResultParserDescriptor`] parses.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ResultParserSource {
    Field {
        field_name: String,
        parent_type: String,
        response_name: String,
    },

    Operation {
        kind: OperationKind,
        name: String,
    },
}
