use crate::ast;
use crate::loc;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;

fn var_type_of(operation_src: &str) -> ast::operation::Type {
    let doc = ast::operation::parse(operation_src).unwrap();
    match doc.definitions.into_iter().next() {
        Some(ast::operation::Definition::Operation(
            ast::operation::OperationDefinition::Query(query),
        )) => query.variable_definitions
            .into_iter()
            .next()
            .expect("query declares a variable")
            .var_type,
        other => panic!("Expected a query definition, found: {other:#?}"),
    }
}

#[test]
fn named_annotation_resolves_against_the_schema() {
    let schema = crate::schema::SchemaBuilder::from_str(None, "
        type Query { hero: Droid }
        type Droid { id: ID }
    ").unwrap().build().unwrap();
    let location = loc::SourceLocation::Schema;

    let droid = NamedTypeAnnotation {
        nullable: true,
        type_ref: NamedGraphQLTypeRef::new("Droid", location.to_owned()),
    };
    let missing = NamedTypeAnnotation {
        nullable: false,
        type_ref: NamedGraphQLTypeRef::new("Starship", location),
    };

    assert_eq!(droid.graphql_type(&schema).map(|type_| type_.name()), Some("Droid"));
    assert!(missing.graphql_type(&schema).is_none());
    assert!(!missing.nullable());
}

#[test]
fn from_ast_type_tracks_nullability_per_level() {
    let var_type = var_type_of("query Q($ids: [ID!]) { hero { id } }");
    let annot = TypeAnnotation::from_ast_type(
        &loc::SourceLocation::Schema,
        &var_type,
    );

    let list_annot = annot.as_list_annotation().expect("list annotation");
    assert!(list_annot.nullable());

    let inner = list_annot.inner_type_annotation()
        .as_named_annotation()
        .expect("named inner annotation");
    assert!(!inner.nullable());
    assert_eq!(inner.graphql_type_name(), "ID");
    assert_eq!(annot.innermost_named_type_annotation().graphql_type_name(), "ID");
}

#[test]
fn display_renders_graphql_syntax() {
    let var_type = var_type_of("query Q($matrix: [[Int]!]!) { hero { id } }");
    let annot = TypeAnnotation::from_ast_type(
        &loc::SourceLocation::Schema,
        &var_type,
    );

    assert_eq!(annot.to_string(), "[[Int]!]!");
}

#[test]
fn outermost_nullability_and_location_are_reported() {
    let location = loc::SourceLocation::ExecutableDocument(loc::FilePosition {
        col: 9,
        file: Box::new("str://0".into()),
        line: 1,
    });
    let non_null_list = TypeAnnotation::from_ast_type(
        &location,
        &var_type_of("query Q($x: [Int]!) { hero { id } }"),
    );
    let nullable_named = TypeAnnotation::from_ast_type(
        &location,
        &var_type_of("query Q($x: Int) { hero { id } }"),
    );

    assert!(!non_null_list.nullable());
    assert!(nullable_named.nullable());
    assert_eq!(non_null_list.ref_location(), &location);
    assert_eq!(nullable_named.to_string(), "Int");
    assert!(nullable_named.as_list_annotation().is_none());
}
