use crate::ast;
use crate::loc;
use crate::operation::ExecutableDocument;
use crate::operation::ExecutableDocumentBuildError;
use crate::operation::OperationInfo;
use crate::operation::OperationKind;
use std::path::Path;
use std::path::PathBuf;

#[test]
fn operations_and_fragments_are_split_in_document_order() {
    let doc = ExecutableDocument::from_str("
        query First { a }
        fragment F1 on Query { a }
        mutation Second { b }
        fragment F2 on Query { c }
    ", None).unwrap();

    let op_names: Vec<Option<&str>> = doc.operations()
        .iter()
        .map(|op_def| OperationInfo::from_ast(op_def).name)
        .collect();
    assert_eq!(op_names, vec![Some("First"), Some("Second")]);

    let fragment_names: Vec<&str> = doc.fragment_registry()
        .fragments()
        .keys()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(fragment_names, vec!["F1", "F2"]);
}

#[test]
fn string_documents_get_distinct_synthetic_paths() {
    let doc1 = ExecutableDocument::from_str("{ a }", None).unwrap();
    let doc2 = ExecutableDocument::from_str("{ a }", None).unwrap();

    assert!(doc1.file_path().to_string_lossy().starts_with("str://"));
    assert!(doc2.file_path().to_string_lossy().starts_with("str://"));
    assert_ne!(doc1.file_path(), doc2.file_path());
}

#[test]
fn explicit_file_path_is_used_for_locations() {
    let doc = ExecutableDocument::from_str(
        "\n\nfragment F on Query { a }",
        Some(Path::new("queries/hero.graphql")),
    ).unwrap();

    match doc.fragment_registry().def_location("F") {
        Some(loc::SourceLocation::ExecutableDocument(file_pos)) => {
            assert_eq!(*file_pos.file, PathBuf::from("queries/hero.graphql"));
            assert_eq!(file_pos.line, 3);
        },
        other => panic!("Expected an executable-document location, found: {other:#?}"),
    }
}

#[test]
fn operation_info_covers_every_operation_shape() {
    let doc = ExecutableDocument::from_str("
        { a }
        query Q($id: ID!) { a }
        mutation M { b }
        subscription S { c }
    ", None).unwrap();

    let infos: Vec<(OperationKind, Option<&str>, usize)> = doc.operations()
        .iter()
        .map(|op_def| {
            let info = OperationInfo::from_ast(op_def);
            (info.kind, info.name, info.variable_definitions.len())
        })
        .collect();

    assert_eq!(infos, vec![
        (OperationKind::Query, None, 0),
        (OperationKind::Query, Some("Q"), 1),
        (OperationKind::Mutation, Some("M"), 0),
        (OperationKind::Subscription, Some("S"), 0),
    ]);
}

#[test]
fn operation_lookup_by_name() {
    let doc = ExecutableDocument::from_str("
        { a }
        query Named { b }
    ", None).unwrap();

    assert!(doc.operation("Named").is_some());
    assert!(doc.operation("Missing").is_none());
}

#[test]
fn duplicate_fragment_names_are_rejected() {
    let result = ExecutableDocument::from_str("
        fragment F on Query { a }
        fragment F on Query { b }
    ", None);

    match result {
        Err(ExecutableDocumentBuildError::DuplicateFragmentDefinition {
            fragment_name,
            first_def_location,
            second_def_location,
        }) => {
            assert_eq!(fragment_name, "F");
            assert_ne!(first_def_location, second_def_location);
        },
        other => panic!("Expected DuplicateFragmentDefinition, found: {other:#?}"),
    }
}

#[test]
fn direct_fragment_cycle_is_rejected() {
    let result = ExecutableDocument::from_str("
        fragment A on Query { ...A }
    ", None);

    match result {
        Err(ExecutableDocumentBuildError::FragmentCycleDetected { cycle_path }) =>
            assert_eq!(cycle_path, vec!["A", "A"]),
        other => panic!("Expected FragmentCycleDetected, found: {other:#?}"),
    }
}

#[test]
fn nested_fragment_cycle_is_rejected() {
    let result = ExecutableDocument::from_str("
        fragment A on Query { x { ...B } }
        fragment B on Query { ... on Query { ...C } }
        fragment C on Query { ...A }
    ", None);

    match result {
        Err(ExecutableDocumentBuildError::FragmentCycleDetected { cycle_path }) =>
            assert_eq!(cycle_path, vec!["A", "B", "C", "A"]),
        other => panic!("Expected FragmentCycleDetected, found: {other:#?}"),
    }
}

/// Fragments `L0` .. `L{depth}`, where each level spreads both fragments of
/// the next level, and the last level spreads `bottom_spread`.
fn fragment_diamond(depth: usize, bottom_spread: &str) -> String {
    let mut content = String::new();
    for level in 0..depth {
        let next = level + 1;
        for side in ["A", "B"] {
            content.push_str(&format!(
                "fragment L{level}{side} on Query {{ ...L{next}A ...L{next}B }}\n",
            ));
        }
    }
    for side in ["A", "B"] {
        content.push_str(&format!(
            "fragment L{depth}{side} on Query {{ a {bottom_spread} }}\n",
        ));
    }
    content
}

#[test]
fn deep_fragment_diamonds_are_walked_once_per_fragment() {
    // Walking every path through 40 levels would never finish.
    let doc = ExecutableDocument::from_str(&fragment_diamond(40, ""), None).unwrap();
    assert_eq!(doc.fragment_registry().len(), 82);
}

#[test]
fn cycles_beneath_a_fragment_diamond_are_rejected() {
    let result = ExecutableDocument::from_str(
        &fragment_diamond(40, "...L39A"),
        None,
    );

    match result {
        Err(ExecutableDocumentBuildError::FragmentCycleDetected { cycle_path }) => {
            assert_eq!(cycle_path.first(), cycle_path.last());
            assert!(cycle_path.iter().any(|name| name == "L39A"));
        },
        other => panic!("Expected FragmentCycleDetected, found: {other:#?}"),
    }
}

#[test]
fn spreads_of_undefined_fragments_are_not_a_build_error() {
    let doc = ExecutableDocument::from_str("
        fragment A on Query { ...Missing }
    ", None).unwrap();

    assert!(doc.fragment_registry().get("Missing").is_none());
    assert!(doc.fragment_registry().get("A").is_some());
}

#[test]
fn parse_errors_name_the_document() {
    let result = ExecutableDocument::from_str(
        "query {",
        Some(Path::new("broken.graphql")),
    );

    match result {
        Err(ExecutableDocumentBuildError::ParseError { file, .. }) =>
            assert_eq!(file, PathBuf::from("broken.graphql")),
        other => panic!("Expected ParseError, found: {other:#?}"),
    }
}

#[test]
fn from_ast_accepts_a_preparsed_document() {
    let ast_doc = ast::operation::parse("query Q { a }").unwrap();
    let doc = ExecutableDocument::from_ast(ast_doc, None).unwrap();

    assert_eq!(doc.operations().len(), 1);
    assert!(doc.fragment_registry().is_empty());
}
