use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;

fn setup_schema() -> Schema {
    SchemaBuilder::from_str(None, "
        type Query {
          hero: Character
          search: SearchResult
        }
        type Mutation { noop: Boolean }
        interface Node { id: ID! }
        interface Character implements Node { id: ID! name: String }
        type Human implements Character & Node { id: ID! name: String height: Float }
        type Starship { id: ID! }
        type Droid implements Character & Node { id: ID! name: String primaryFunction: String }
        union SearchResult = Starship | Human
    ").unwrap().build().unwrap()
}

fn names<'a>(types: Vec<&'a crate::types::ObjectType>) -> Vec<&'a str> {
    types.into_iter().map(|type_| type_.name()).collect()
}

#[test]
fn possible_types_of_object_is_itself() {
    let schema = setup_schema();
    assert_eq!(names(schema.possible_types("Human")), vec!["Human"]);
}

#[test]
fn possible_types_of_interface_follow_definition_order() {
    let schema = setup_schema();
    assert_eq!(names(schema.possible_types("Character")), vec!["Human", "Droid"]);
    assert_eq!(names(schema.possible_types("Node")), vec!["Human", "Droid"]);
}

#[test]
fn possible_types_of_union_follow_member_order() {
    let schema = setup_schema();
    assert_eq!(
        names(schema.possible_types("SearchResult")),
        vec!["Starship", "Human"],
    );
}

#[test]
fn possible_types_of_leaf_or_unknown_type_is_empty() {
    let schema = setup_schema();
    assert!(schema.possible_types("String").is_empty());
    assert!(schema.possible_types("Nope").is_empty());
}

#[test]
fn is_possible_type_of_covers_interfaces_and_unions() {
    let schema = setup_schema();
    let human = schema.lookup_type("Human").unwrap().as_object().unwrap();

    assert!(human.is_possible_type_of(&schema, "Human"));
    assert!(human.is_possible_type_of(&schema, "Character"));
    assert!(human.is_possible_type_of(&schema, "SearchResult"));
    assert!(!human.is_possible_type_of(&schema, "Droid"));
}

#[test]
fn root_operation_type_by_kind() {
    let schema = setup_schema();
    assert_eq!(
        schema.root_operation_type(&OperationKind::Query).unwrap().name(),
        "Query",
    );
    assert_eq!(
        schema.root_operation_type(&OperationKind::Mutation).unwrap().name(),
        "Mutation",
    );
    assert!(schema.root_operation_type(&OperationKind::Subscription).is_none());
}
