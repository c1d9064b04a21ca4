use super::first_field_selections;
use super::parse_document;
use super::setup_schema;
use crate::modelgen::FieldCollector;
use crate::modelgen::FragmentKind;
use crate::modelgen::FragmentNode;
use crate::modelgen::ModelPath;
use crate::modelgen::NodeIdentity;
use crate::modelgen::SelectionInfo;
use crate::modelgen::extra_case_fragments;
use crate::modelgen::hoist_fragment;
use crate::operation::ExecutableDocument;
use crate::schema::Schema;
use std::collections::HashSet;

fn collect_hero<'ctx>(
    schema: &'ctx Schema,
    document: &'ctx ExecutableDocument,
    type_name: &str,
) -> SelectionInfo<'ctx> {
    FieldCollector::new(schema, document).collect(
        schema.lookup_type(type_name).unwrap(),
        &first_field_selections(document),
        &ModelPath::root("Test").child("hero"),
    ).unwrap()
}

/// The wrapper a selection's own fragment tree hangs off of.
fn synthetic_root<'ctx>(info: &SelectionInfo<'ctx>) -> FragmentNode<'ctx> {
    FragmentNode::new(
        FragmentKind::Synthetic,
        NodeIdentity::Selection { locations: vec![] },
        "Hero",
        info.graphql_type(),
        info.selections().to_vec(),
        info.fragments().to_vec(),
    )
}

#[test]
fn lone_spread_is_hoisted() {
    let schema = setup_schema();
    let document = parse_document("
        { hero { ...Frag } }
        fragment Frag on Node { id }
    ");
    let info = collect_hero(&schema, &document, "Node");
    let root = synthetic_root(&info);

    let hoisted = hoist_fragment("Node", &root);

    assert_eq!(hoisted.name(), "Frag");
    assert_eq!(hoisted.kind(), FragmentKind::Named);
}

#[test]
fn direct_fields_prevent_hoisting() {
    let schema = setup_schema();
    let document = parse_document("
        { hero { id ...Frag } }
        fragment Frag on Node { id }
    ");
    let info = collect_hero(&schema, &document, "Node");
    let root = synthetic_root(&info);

    let hoisted = hoist_fragment("Node", &root);

    assert_eq!(hoisted.name(), "Hero");
    assert_eq!(hoisted.kind(), FragmentKind::Synthetic);
}

#[test]
fn fragment_on_another_type_is_not_hoisted() {
    let schema = setup_schema();
    let document = parse_document("
        { hero { ...Frag } }
        fragment Frag on Node { id }
    ");
    let info = collect_hero(&schema, &document, "Droid");
    let root = synthetic_root(&info);

    assert_eq!(info.fragments().len(), 1);
    assert_eq!(hoist_fragment("Droid", &root).name(), "Hero");
}

#[test]
fn nested_pass_through_fragments_hoist_repeatedly() {
    let schema = setup_schema();
    let document = parse_document("
        { hero { ...Outer } }
        fragment Outer on Node { ...Inner }
        fragment Inner on Node { id }
    ");
    let info = collect_hero(&schema, &document, "Node");
    let root = synthetic_root(&info);

    assert_eq!(hoist_fragment("Node", &root).name(), "Inner");
}

#[test]
fn hoisting_stops_at_a_fragment_with_fields() {
    let schema = setup_schema();
    let document = parse_document("
        { hero { ...Outer } }
        fragment Outer on Node { id ...Inner }
        fragment Inner on Node { id }
    ");
    let info = collect_hero(&schema, &document, "Node");
    let root = synthetic_root(&info);

    assert_eq!(hoist_fragment("Node", &root).name(), "Outer");
}

#[test]
fn several_children_prevent_hoisting() {
    let schema = setup_schema();
    let document = parse_document("
        { hero { ...A ...B } }
        fragment A on Node { id }
        fragment B on Node { id }
    ");
    let info = collect_hero(&schema, &document, "Node");
    let root = synthetic_root(&info);

    assert_eq!(hoist_fragment("Node", &root).name(), "Hero");
}

#[test]
fn case_fragments_already_in_the_return_tree_are_shed() {
    let schema = setup_schema();
    let document = parse_document("
        { hero { ...Frag ... on Droid { name } } }
        fragment Frag on Node { id }
    ");

    let return_info = collect_hero(&schema, &document, "Node");
    let return_root = synthetic_root(&return_info);
    let return_node = hoist_fragment("Node", &return_root);
    assert_eq!(return_node.name(), "Frag");

    let mut return_keys = HashSet::new();
    return_node.collect_keys(&mut return_keys);

    let case_info = collect_hero(&schema, &document, "Droid");
    let case_root = synthetic_root(&case_info);
    let extras = extra_case_fragments(&case_root, &return_keys);

    let names: Vec<&str> = extras.iter().map(|node| node.name()).collect();
    assert_eq!(names, vec!["Droid"]);
    assert_eq!(extras[0].kind(), FragmentKind::Inline);
}

#[test]
fn fragment_picking_up_case_specific_children_is_kept() {
    let schema = setup_schema();
    let document = parse_document("
        { hero { ...Frag } }
        fragment Frag on Node { id ... on Droid { name } }
    ");

    let return_info = collect_hero(&schema, &document, "Node");
    let return_root = synthetic_root(&return_info);
    let mut return_keys = HashSet::new();
    hoist_fragment("Node", &return_root).collect_keys(&mut return_keys);

    let case_info = collect_hero(&schema, &document, "Droid");
    let case_root = synthetic_root(&case_info);
    let extras = extra_case_fragments(&case_root, &return_keys);

    assert_eq!(extras.len(), 1);
    assert_eq!(extras[0].name(), "Frag");
    assert_eq!(extras[0].children().len(), 1);
    assert_ne!(extras[0].key(), return_info.fragments()[0].key());
    assert_eq!(extras[0].identity(), return_info.fragments()[0].identity());
}

#[test]
fn case_without_fragments_has_no_extras() {
    let schema = setup_schema();
    let document = parse_document("{ hero { id } }");

    let case_info = collect_hero(&schema, &document, "Human");
    let case_root = synthetic_root(&case_info);

    assert!(extra_case_fragments(&case_root, &HashSet::new()).is_empty());
}
