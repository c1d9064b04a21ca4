use crate::ast;
use crate::modelgen::FragmentKey;
use crate::modelgen::NodeIdentity;
use crate::types::GraphQLType;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FragmentKind {
    Inline,
    Named,
    /// A wrapper assembled by the generator (the selection set of a field or
    /// operation, or one type case of it).
    Synthetic,
}

/// A node in the tree of fragments reachable from one selection in one type
/// context.
#[derive(Clone, Debug)]
pub struct FragmentNode<'ctx> {
    pub(crate) children: Vec<FragmentNode<'ctx>>,
    pub(crate) key: FragmentKey,
    pub(crate) kind: FragmentKind,
    pub(crate) name: String,
    pub(crate) selections: Vec<&'ctx ast::operation::Selection>,
    pub(crate) type_condition: &'ctx GraphQLType,
}
impl<'ctx> FragmentNode<'ctx> {
    pub fn children(&self) -> &[FragmentNode<'ctx>] {
        self.children.as_slice()
    }

    /// Adds the key of this node and of every node beneath it to `keys`.
    pub fn collect_keys(&self, keys: &mut HashSet<FragmentKey>) {
        keys.insert(self.key.to_owned());
        for child in &self.children {
            child.collect_keys(keys);
        }
    }

    /// Whether this node's own selection set selects any field directly
    /// (as opposed to only through fragments).
    pub fn has_direct_fields(&self) -> bool {
        self.selections
            .iter()
            .any(|selection| matches!(selection, ast::operation::Selection::Field(_)))
    }

    pub fn identity(&self) -> &NodeIdentity {
        self.key.identity()
    }

    pub fn key(&self) -> &FragmentKey {
        &self.key
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// The base name models derived from this node are named after.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn new(
        kind: FragmentKind,
        identity: NodeIdentity,
        name: impl Into<String>,
        type_condition: &'ctx GraphQLType,
        selections: Vec<&'ctx ast::operation::Selection>,
        children: Vec<FragmentNode<'ctx>>,
    ) -> Self {
        let key = FragmentKey::new(
            identity,
            children.iter().map(|child| child.key.to_owned()).collect(),
        );
        Self {
            children,
            key,
            kind,
            name: name.into(),
            selections,
            type_condition,
        }
    }

    pub fn selections(&self) -> &[&'ctx ast::operation::Selection] {
        self.selections.as_slice()
    }

    /// The type this node's selections apply under.
    pub fn condition_type(&self) -> &'ctx GraphQLType {
        self.type_condition
    }

    /// The name of the type this node's selections apply under.
    pub fn type_condition(&self) -> &str {
        self.type_condition.name()
    }
}
