use crate::ast;
use crate::modelgen::FieldSelection;
use crate::modelgen::FragmentNode;
use crate::types::GraphQLType;

/// The result of collecting a selection set against one type: its flattened
/// fields, the fragment nodes that apply, and the raw selections.
///
/// When the type is a concrete object type beneath an abstract field, this
/// is one "type case" of that field.
#[derive(Clone, Debug)]
pub struct SelectionInfo<'ctx> {
    pub(crate) fields: Vec<FieldSelection<'ctx>>,
    pub(crate) fragments: Vec<FragmentNode<'ctx>>,
    pub(crate) graphql_type: &'ctx GraphQLType,
    pub(crate) selections: Vec<&'ctx ast::operation::Selection>,
}
impl<'ctx> SelectionInfo<'ctx> {
    pub fn fields(&self) -> &[FieldSelection<'ctx>] {
        self.fields.as_slice()
    }

    pub fn fragments(&self) -> &[FragmentNode<'ctx>] {
        self.fragments.as_slice()
    }

    pub fn graphql_type(&self) -> &'ctx GraphQLType {
        self.graphql_type
    }

    /// Same number of fields, pairwise selection-equal, in the same order.
    pub fn is_field_selection_equal(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self.fields
                .iter()
                .zip(other.fields.iter())
                .all(|(a, b)| a.is_selection_equal(b))
    }

    pub fn selections(&self) -> &[&'ctx ast::operation::Selection] {
        self.selections.as_slice()
    }
}
