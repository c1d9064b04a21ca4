mod descriptor_registry_tests;
mod fragment_hoister_tests;

use crate::ast;
use crate::operation::ExecutableDocument;
use crate::operation::OperationInfo;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;

const STAR_WARS_SCHEMA: &str = "
    type Query {
      droid(id: ID!): Droid
      hero: Node
      search: [SearchResult!]!
    }
    type Mutation {
      rename(id: ID!, name: String!): Node
    }
    interface Node {
      id: ID
    }
    type Droid implements Node {
      friends: [Node]
      id: ID
      name: String
      primaryFunction: String
    }
    type Human implements Node {
      id: ID
      name: String
    }
    union SearchResult = Droid | Human
";

fn setup_schema() -> Schema {
    SchemaBuilder::from_str(None, STAR_WARS_SCHEMA)
        .unwrap()
        .build()
        .unwrap()
}

fn parse_document(content: &str) -> ExecutableDocument {
    ExecutableDocument::from_str(content, None).unwrap()
}

/// The root selections of the document's first operation.
fn root_selections(document: &ExecutableDocument) -> Vec<&ast::operation::Selection> {
    OperationInfo::from_ast(&document.operations()[0])
        .selection_set
        .items
        .iter()
        .collect()
}

/// The sub-selections of the first root field of the document's first
/// operation.
fn first_field_selections(document: &ExecutableDocument) -> Vec<&ast::operation::Selection> {
    match root_selections(document).first().copied() {
        Some(ast::operation::Selection::Field(field)) =>
            field.selection_set.items.iter().collect(),
        other => panic!("Expected a field selection, found: {other:#?}"),
    }
}
