use crate::modelgen::FragmentKey;
use crate::modelgen::FragmentKind;
use crate::modelgen::FragmentNode;
use std::collections::HashSet;

/// Replaces pass-through wrappers with the fragment they wrap.
///
/// While `node` selects no fields directly and has exactly one child whose
/// type condition is `type_name`, the child stands in for it. This makes a
/// selection like `{ ...Frag }` modelled *as* `Frag` rather than as an empty
/// subtype of it.
pub fn hoist_fragment<'a, 'ctx>(
    type_name: &str,
    node: &'a FragmentNode<'ctx>,
) -> &'a FragmentNode<'ctx> {
    let mut node = node;
    loop {
        match node.children() {
            [child] if !node.has_direct_fields()
                && child.type_condition() == type_name => {
                log::trace!(
                    "Hoisting `{}` in place of `{}` (on `{type_name}`).",
                    child.name(),
                    node.name(),
                );
                node = child;
            },
            _ => return node,
        }
    }
}

/// The fragment nodes of one (hoisted) type case that need an interface of
/// their own beyond the selection's return interface.
///
/// Synthetic wrappers are looked through. Nodes the return type's fragment
/// tree already contains (`return_keys`) are shed, along with everything
/// beneath them. Fragments whose type condition does not apply to the case's
/// concrete type never reach a case's tree in the first place.
pub fn extra_case_fragments<'a, 'ctx>(
    case_node: &'a FragmentNode<'ctx>,
    return_keys: &HashSet<FragmentKey>,
) -> Vec<&'a FragmentNode<'ctx>> {
    let mut extras = vec![];
    visit_case_fragment(case_node, return_keys, &mut extras);
    extras
}

fn visit_case_fragment<'a, 'ctx>(
    node: &'a FragmentNode<'ctx>,
    return_keys: &HashSet<FragmentKey>,
    extras: &mut Vec<&'a FragmentNode<'ctx>>,
) {
    if node.kind() == FragmentKind::Synthetic {
        for child in node.children() {
            visit_case_fragment(child, return_keys, extras);
        }
    } else if return_keys.contains(node.key()) {
        log::trace!("`{}` is already covered by the return type.", node.name());
    } else {
        extras.push(node);
    }
}
