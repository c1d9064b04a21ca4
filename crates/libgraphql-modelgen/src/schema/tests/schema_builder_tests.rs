use crate::loc;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use std::path::PathBuf;

#[test]
fn builtin_scalars_are_always_defined() {
    let schema = SchemaBuilder::from_str(None, "type Query { id: ID }")
        .unwrap()
        .build()
        .unwrap();

    for (name, kind) in [
        ("Boolean", GraphQLTypeKind::Bool),
        ("Float", GraphQLTypeKind::Float),
        ("ID", GraphQLTypeKind::ID),
        ("Int", GraphQLTypeKind::Int),
        ("String", GraphQLTypeKind::String),
    ] {
        let type_ = schema.lookup_type(name).unwrap();
        assert_eq!(type_.kind(), kind);
        assert_eq!(type_.def_location(), &loc::SourceLocation::GraphQLBuiltIn);
    }
}

#[test]
fn object_types_carry_an_implicit_typename_field() {
    let schema = SchemaBuilder::from_str(None, "type Query { id: ID! }")
        .unwrap()
        .build()
        .unwrap();

    let query_type = schema.query_type().unwrap();
    let field_names: Vec<&str> =
        query_type.fields().keys().map(|name| name.as_str()).collect();
    assert_eq!(field_names, vec!["__typename", "id"]);

    let typename_field = query_type.fields().get("__typename").unwrap();
    assert_eq!(typename_field.type_annotation().to_string(), "String!");
    assert_eq!(typename_field.parent_type_name(), "Query");
}

#[test]
fn schema_block_overrides_default_root_names() {
    let schema = SchemaBuilder::from_str(None, "
        schema {
          query: RootQuery
          mutation: RootMutation
        }
        type RootQuery { a: Int }
        type RootMutation { b: Int }
    ").unwrap().build().unwrap();

    assert_eq!(schema.query_type().unwrap().name(), "RootQuery");
    assert_eq!(schema.mutation_type().unwrap().name(), "RootMutation");
    assert!(schema.subscription_type().is_none());
}

#[test]
fn default_root_types_are_picked_up_by_name() {
    let schema = SchemaBuilder::from_str(None, "
        type Query { a: Int }
        type Subscription { b: Int }
    ").unwrap().build().unwrap();

    assert_eq!(schema.query_type().unwrap().name(), "Query");
    assert!(schema.mutation_type().is_none());
    assert_eq!(schema.subscription_type().unwrap().name(), "Subscription");
}

#[test]
fn missing_query_type_is_an_error() {
    let result = SchemaBuilder::from_str(None, "type Foo { a: Int }")
        .unwrap()
        .build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::NoQueryOperationTypeDefined),
    ));
}

#[test]
fn non_object_root_type_is_an_error() {
    let result = SchemaBuilder::from_str(None, "
        schema { query: Thing }
        interface Thing { a: Int }
    ").unwrap().build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::InvalidRootOperationType { type_name, .. })
            if type_name == "Thing",
    ));
}

#[test]
fn duplicate_type_definitions_report_both_locations() {
    let result = SchemaBuilder::from_str(
        Some(PathBuf::from("schema.graphql")),
        "type Query { a: Int }\ntype Query { b: Int }",
    );

    match result {
        Err(SchemaBuildError::DuplicateTypeDefinition { type_name, def1, def2 }) => {
            assert_eq!(type_name, "Query");
            assert_eq!(def1.file_position().unwrap().line, 1);
            assert_eq!(def2.file_position().unwrap().line, 2);
        },
        other => panic!("Expected DuplicateTypeDefinition, found: {other:#?}"),
    }
}

#[test]
fn redefining_a_builtin_scalar_is_a_duplicate() {
    let result = SchemaBuilder::from_str(None, "scalar String");

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateTypeDefinition {
            def1: loc::SourceLocation::GraphQLBuiltIn,
            ..
        }),
    ));
}

#[test]
fn dunder_prefixed_names_are_rejected() {
    let type_result = SchemaBuilder::from_str(None, "type __Foo { a: Int }");
    assert!(matches!(
        type_result,
        Err(SchemaBuildError::InvalidDunderPrefixedTypeName { type_name, .. })
            if type_name == "__Foo",
    ));

    let field_result = SchemaBuilder::from_str(None, "type Query { __a: Int }");
    assert!(matches!(
        field_result,
        Err(SchemaBuildError::InvalidDunderPrefixedFieldName { field_name, .. })
            if field_name == "__a",
    ));
}

#[test]
fn duplicate_field_names_are_rejected() {
    let result = SchemaBuilder::from_str(None, "type Query { a: Int a: String }");

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateFieldNameDefinition { type_name, field_name, .. })
            if type_name == "Query" && field_name == "a",
    ));
}

#[test]
fn dangling_field_type_reference_is_an_error() {
    let result = SchemaBuilder::from_str(None, "type Query { a: Missing }")
        .unwrap()
        .build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::UndefinedTypeReference { type_name, .. })
            if type_name == "Missing",
    ));
}

#[test]
fn implementing_a_non_interface_is_an_error() {
    let result = SchemaBuilder::from_str(None, "
        type Query { a: Int }
        type Foo implements Query { a: Int }
    ").unwrap().build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::ImplementsNonInterfaceType {
            type_name,
            implemented_type_name,
            ..
        }) if type_name == "Foo" && implemented_type_name == "Query",
    ));
}

#[test]
fn union_members_must_be_object_types() {
    let result = SchemaBuilder::from_str(None, "
        type Query { a: Int }
        interface Node { id: ID }
        union Thing = Query | Node
    ").unwrap().build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::InvalidUnionMemberType { union_name, member_name, .. })
            if union_name == "Thing" && member_name == "Node",
    ));
}

#[test]
fn extensions_merge_into_previously_defined_types() {
    let schema = SchemaBuilder::from_str(None, "
        type Query { a: Int }
        interface Node { id: ID! }
        type Droid { name: String }
        union Thing = Droid
        enum Episode { NEWHOPE }
    ").unwrap().load_str(None, "
        extend type Droid implements Node { id: ID! }
        type Human implements Node { id: ID! }
        extend union Thing = Human
        extend enum Episode { EMPIRE }
    ").unwrap().build().unwrap();

    let droid = schema.lookup_type("Droid").unwrap().as_object().unwrap();
    assert!(droid.fields().contains_key("id"));
    assert_eq!(droid.interface_names(), vec!["Node"]);

    let thing = schema.lookup_type("Thing").unwrap().as_union().unwrap();
    assert_eq!(thing.member_type_names(), vec!["Droid", "Human"]);

    match schema.lookup_type("Episode") {
        Some(GraphQLType::Enum(episode)) =>
            assert_eq!(episode.values(), ["NEWHOPE", "EMPIRE"]),
        other => panic!("Expected an enum type, found: {other:#?}"),
    }
}

#[test]
fn extension_may_precede_its_definition() {
    let schema = SchemaBuilder::from_str(None, "
        extend type Query { b: Int }
    ").unwrap().load_str(None, "
        type Query { a: Int }
    ").unwrap().build().unwrap();

    let query_type = schema.query_type().unwrap();
    assert!(query_type.fields().contains_key("a"));
    assert!(query_type.fields().contains_key("b"));
}

#[test]
fn extension_of_undefined_type_is_an_error() {
    let result = SchemaBuilder::from_str(None, "
        type Query { a: Int }
        extend type Missing { b: Int }
    ").unwrap().build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
            if type_name == "Missing",
    ));
}

#[test]
fn extension_of_a_different_kind_is_an_error() {
    let result = SchemaBuilder::from_str(None, "
        type Query { a: Int }
        interface Node { id: ID }
        extend type Node { b: Int }
    ").unwrap().build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::InvalidExtensionType {
            type_kind: GraphQLTypeKind::Interface,
            ..
        }),
    ));
}

#[test]
fn parse_errors_name_a_synthetic_path_for_string_input() {
    let result = SchemaBuilder::new().load_str(None, "type Query {");

    match result {
        Err(SchemaBuildError::ParseError { file, .. }) =>
            assert_eq!(file, PathBuf::from("str://0")),
        other => panic!("Expected ParseError, found: {other:#?}"),
    }
}

#[test]
fn loading_a_missing_file_is_an_error() {
    let result = SchemaBuilder::new()
        .load_file("/this/path/does/not/exist.graphql");

    assert!(matches!(
        result,
        Err(SchemaBuildError::SchemaFileReadError { .. }),
    ));
}
