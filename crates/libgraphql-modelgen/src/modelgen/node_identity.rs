use crate::loc;

/// A stable identity for the AST node (or synthesized wrapper) that a
/// generated type is derived from.
///
/// AST nodes carry no identity of their own, so identities are built from
/// source locations. Locations always include the document's path, which
/// keeps identities from distinct documents apart.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NodeIdentity {
    /// The concrete class generated for one type case of a selection.
    Class {
        concrete_type: String,
        selection: Vec<loc::SourceLocation>,
    },

    /// `type_condition` is the written condition, or the static type of the
    /// enclosing selection set when there is none.
    InlineFragment {
        location: loc::SourceLocation,
        type_condition: String,
    },

    NamedFragment {
        location: loc::SourceLocation,
        name: String,
    },

    Operation {
        location: loc::SourceLocation,
    },

    ResultParser {
        selection: Vec<loc::SourceLocation>,
    },

    /// The selection set of a field (the locations of every field node
    /// merged under one response key) or of an operation.
    Selection {
        locations: Vec<loc::SourceLocation>,
    },

    /// The per-concrete-type wrapper over a selection.
    TypeCase {
        concrete_type: String,
        selection: Vec<loc::SourceLocation>,
    },
}

/// Identity of a fragment node *in its type context*: the node's own
/// identity plus the keys of the child fragments collected beneath it.
///
/// The same named fragment collected under two different concrete types may
/// pick up different nested inline fragments, and so yields two distinct
/// keys. Collected twice under the same type context, it yields equal keys.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FragmentKey {
    children: Vec<FragmentKey>,
    identity: NodeIdentity,
}
impl FragmentKey {
    pub fn children(&self) -> &[FragmentKey] {
        self.children.as_slice()
    }

    pub fn identity(&self) -> &NodeIdentity {
        &self.identity
    }

    pub fn new(identity: NodeIdentity, children: Vec<FragmentKey>) -> Self {
        Self {
            children,
            identity,
        }
    }
}
impl std::convert::From<NodeIdentity> for FragmentKey {
    fn from(identity: NodeIdentity) -> Self {
        Self::new(identity, vec![])
    }
}
