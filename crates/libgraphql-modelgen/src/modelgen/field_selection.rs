use crate::ast;
use crate::loc;
use crate::modelgen::ModelPath;
use crate::modelgen::NodeIdentity;
use crate::types::Field;

/// One response key of a field collection: the schema [`Field`] it resolves
/// to plus every AST field node merged under that key.
#[derive(Clone, Debug)]
pub struct FieldSelection<'ctx> {
    pub(crate) field: Field,
    pub(crate) locations: Vec<loc::SourceLocation>,
    pub(crate) nodes: Vec<&'ctx ast::operation::Field>,
    pub(crate) path: ModelPath,
    pub(crate) response_key: String,
}
impl<'ctx> FieldSelection<'ctx> {
    /// The resolved schema field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Two selections are equal for the purposes of type-case collapsing
    /// when they select the same schema field through the very same AST
    /// field nodes.
    pub fn is_selection_equal(&self, other: &Self) -> bool {
        self.field.name() == other.field.name()
            && self.locations == other.locations
    }

    /// Source locations of the merged AST field nodes, in document order.
    pub fn locations(&self) -> &[loc::SourceLocation] {
        self.locations.as_slice()
    }

    /// The items of every merged node's sub-selection, concatenated in
    /// document order.
    pub fn nested_selections(&self) -> Vec<&'ctx ast::operation::Selection> {
        self.nodes
            .iter()
            .flat_map(|node| node.selection_set.items.iter())
            .collect()
    }

    pub fn nodes(&self) -> &[&'ctx ast::operation::Field] {
        self.nodes.as_slice()
    }

    pub fn path(&self) -> &ModelPath {
        &self.path
    }

    pub fn response_key(&self) -> &str {
        self.response_key.as_str()
    }

    /// The identity of this field's nested selection set.
    pub fn selection_identity(&self) -> NodeIdentity {
        NodeIdentity::Selection {
            locations: self.locations.clone(),
        }
    }
}
