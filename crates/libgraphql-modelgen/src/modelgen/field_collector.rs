use crate::ast;
use crate::loc;
use crate::modelgen::FieldSelection;
use crate::modelgen::FragmentKind;
use crate::modelgen::FragmentNode;
use crate::modelgen::ModelGenError;
use crate::modelgen::ModelPath;
use crate::modelgen::NodeIdentity;
use crate::modelgen::SelectionInfo;
use crate::operation::ExecutableDocument;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, ModelGenError>;

/// Flattens a selection set against one type into its fields (merged by
/// response key) and the tree of fragments that apply to that type.
///
/// Nested selection sets of the collected fields are *not* descended into;
/// those are modelled separately.
#[derive(Clone, Copy, Debug)]
pub struct FieldCollector<'ctx> {
    document: &'ctx ExecutableDocument,
    schema: &'ctx Schema,
}
impl<'ctx> FieldCollector<'ctx> {
    /// Collects `selections` against `graphql_type`.
    ///
    /// Fields reached through applicable fragments are merged into the same
    /// response-key map as direct fields. Each distinct applicable fragment
    /// spread or inline fragment at a given level becomes one
    /// [`FragmentNode`], whose children are collected recursively in the
    /// same type context.
    pub fn collect(
        &self,
        graphql_type: &'ctx GraphQLType,
        selections: &[&'ctx ast::operation::Selection],
        path: &ModelPath,
    ) -> Result<SelectionInfo<'ctx>> {
        self.collect_in_scope(graphql_type, graphql_type, selections, path)
    }

    /// Like [`FieldCollector::collect`], for `selections` written in a
    /// selection set whose static type is `scope_type` (for instance the
    /// declared interface of a field, while `graphql_type` is one of its
    /// possible types).
    ///
    /// An inline fragment without a type condition applies under the scope
    /// of the selection set it is written in, so it keeps one identity no
    /// matter which type it is collected against.
    pub fn collect_in_scope(
        &self,
        scope_type: &'ctx GraphQLType,
        graphql_type: &'ctx GraphQLType,
        selections: &[&'ctx ast::operation::Selection],
        path: &ModelPath,
    ) -> Result<SelectionInfo<'ctx>> {
        let mut fields = IndexMap::new();
        let fragments = self.collect_into(
            scope_type,
            graphql_type,
            selections,
            path,
            &mut fields,
        )?;
        Ok(SelectionInfo {
            fields: fields.into_values().collect(),
            fragments,
            graphql_type,
            selections: selections.to_vec(),
        })
    }

    /// Collects only the field nodes that appear directly in `selections`,
    /// merged by response key. Fragments are ignored.
    pub fn collect_direct_fields(
        &self,
        graphql_type: &'ctx GraphQLType,
        selections: &[&'ctx ast::operation::Selection],
        path: &ModelPath,
    ) -> Result<Vec<FieldSelection<'ctx>>> {
        let mut fields = IndexMap::new();
        for &selection in selections {
            if let ast::operation::Selection::Field(field) = selection {
                self.merge_field(graphql_type, field, path, &mut fields)?;
            }
        }
        Ok(fields.into_values().collect())
    }

    /// Re-flattens an already collected fragment tree into its fields, merged
    /// by response key in document order.
    ///
    /// Only the fragments recorded in `node`'s tree are followed, so the
    /// result matches what collecting the tree's selections produced.
    pub fn fragment_tree_fields(
        &self,
        node: &FragmentNode<'ctx>,
        path: &ModelPath,
    ) -> Result<Vec<FieldSelection<'ctx>>> {
        let mut fields = IndexMap::new();
        self.merge_fragment_tree(node, path, &mut fields)?;
        Ok(fields.into_values().collect())
    }

    pub fn document(&self) -> &'ctx ExecutableDocument {
        self.document
    }

    pub fn new(schema: &'ctx Schema, document: &'ctx ExecutableDocument) -> Self {
        Self {
            document,
            schema,
        }
    }

    pub fn schema(&self) -> &'ctx Schema {
        self.schema
    }

    /// Whether a fragment with type condition `condition` applies to values
    /// of `graphql_type`.
    ///
    /// It does when both name the same type, when `graphql_type` is an
    /// object type that is a possible type of `condition`, or when
    /// `graphql_type` is an interface that implements the `condition`
    /// interface.
    pub fn type_applies(
        &self,
        condition: &GraphQLType,
        graphql_type: &GraphQLType,
    ) -> bool {
        if condition.name() == graphql_type.name() {
            return true;
        }

        match graphql_type {
            GraphQLType::Object(obj_type) =>
                obj_type.is_possible_type_of(self.schema, condition.name()),
            GraphQLType::Interface(iface_type) =>
                matches!(condition, GraphQLType::Interface(_))
                    && iface_type.implements_interface(self.schema, condition.name()),
            _ => false,
        }
    }

    fn collect_into(
        &self,
        scope_type: &'ctx GraphQLType,
        graphql_type: &'ctx GraphQLType,
        selections: &[&'ctx ast::operation::Selection],
        path: &ModelPath,
        fields: &mut IndexMap<String, FieldSelection<'ctx>>,
    ) -> Result<Vec<FragmentNode<'ctx>>> {
        let mut fragments: Vec<FragmentNode<'ctx>> = vec![];

        for &selection in selections {
            match selection {
                ast::operation::Selection::Field(field) =>
                    self.merge_field(graphql_type, field, path, fields)?,

                ast::operation::Selection::FragmentSpread(spread) => {
                    let document = self.document;
                    let Some(fragment_def) =
                        document.fragment_registry().get(&spread.fragment_name) else {
                        return Err(ModelGenError::UndefinedFragment {
                            fragment_name: spread.fragment_name.to_owned(),
                            location: document.location_of(&spread.position),
                            path: path.to_owned(),
                        });
                    };

                    let def_location = document.location_of(&fragment_def.position);
                    let ast::operation::TypeCondition::On(condition_name) =
                        &fragment_def.type_condition;
                    let condition = self.resolve_type_condition(
                        condition_name,
                        Some(&fragment_def.name),
                        &def_location,
                        path,
                    )?;
                    if !self.type_applies(condition, graphql_type) {
                        log::trace!(
                            "Skipping `...{}` (on `{condition_name}`) for `{}` at `{path}`.",
                            fragment_def.name,
                            graphql_type.name(),
                        );
                        continue;
                    }

                    let identity = NodeIdentity::NamedFragment {
                        location: def_location,
                        name: fragment_def.name.to_owned(),
                    };
                    if fragments.iter().any(|node| node.identity() == &identity) {
                        continue;
                    }

                    let fragment_selections: Vec<&'ctx ast::operation::Selection> =
                        fragment_def.selection_set.items.iter().collect();
                    let children = self.collect_into(
                        condition,
                        graphql_type,
                        &fragment_selections,
                        path,
                        fields,
                    )?;
                    fragments.push(FragmentNode::new(
                        FragmentKind::Named,
                        identity,
                        fragment_def.name.as_str(),
                        condition,
                        fragment_selections,
                        children,
                    ));
                },

                ast::operation::Selection::InlineFragment(inline) => {
                    let location = self.document.location_of(&inline.position);
                    let condition = match &inline.type_condition {
                        Some(ast::operation::TypeCondition::On(condition_name)) =>
                            self.resolve_type_condition(
                                condition_name,
                                None,
                                &location,
                                path,
                            )?,
                        None => scope_type,
                    };
                    if !self.type_applies(condition, graphql_type) {
                        log::trace!(
                            "Skipping `... on {}` for `{}` at `{path}`.",
                            condition.name(),
                            graphql_type.name(),
                        );
                        continue;
                    }

                    let identity = NodeIdentity::InlineFragment {
                        location,
                        type_condition: condition.name().to_string(),
                    };
                    if fragments.iter().any(|node| node.identity() == &identity) {
                        continue;
                    }

                    let inline_selections: Vec<&'ctx ast::operation::Selection> =
                        inline.selection_set.items.iter().collect();
                    let children = self.collect_into(
                        condition,
                        graphql_type,
                        &inline_selections,
                        path,
                        fields,
                    )?;
                    fragments.push(FragmentNode::new(
                        FragmentKind::Inline,
                        identity,
                        condition.name(),
                        condition,
                        inline_selections,
                        children,
                    ));
                },
            }
        }

        Ok(fragments)
    }

    fn merge_fragment_tree(
        &self,
        node: &FragmentNode<'ctx>,
        path: &ModelPath,
        fields: &mut IndexMap<String, FieldSelection<'ctx>>,
    ) -> Result<()> {
        let mut visited = HashSet::new();
        for &selection in node.selections() {
            let child_index = match selection {
                ast::operation::Selection::Field(field) => {
                    self.merge_field(node.condition_type(), field, path, fields)?;
                    continue;
                },

                ast::operation::Selection::FragmentSpread(spread) =>
                    node.children().iter().position(|child| matches!(
                        child.identity(),
                        NodeIdentity::NamedFragment { name, .. }
                            if name == &spread.fragment_name,
                    )),

                ast::operation::Selection::InlineFragment(inline) => {
                    let location = self.document.location_of(&inline.position);
                    node.children().iter().position(|child| matches!(
                        child.identity(),
                        NodeIdentity::InlineFragment { location: child_location, .. }
                            if child_location == &location,
                    ))
                },
            };

            // Fragments missing from the tree did not apply.
            let Some(child_index) = child_index else {
                continue;
            };
            if visited.insert(child_index) {
                self.merge_fragment_tree(&node.children()[child_index], path, fields)?;
            }
        }
        Ok(())
    }

    fn merge_field(
        &self,
        graphql_type: &'ctx GraphQLType,
        field: &'ctx ast::operation::Field,
        path: &ModelPath,
        fields: &mut IndexMap<String, FieldSelection<'ctx>>,
    ) -> Result<()> {
        let location = self.document.location_of(&field.position);
        let response_key = field.alias.as_ref().unwrap_or(&field.name);

        let Some(schema_field) = resolve_field(graphql_type, &field.name) else {
            return Err(ModelGenError::UnknownField {
                field_name: field.name.to_owned(),
                type_name: graphql_type.name().to_string(),
                location,
                path: path.child(response_key.as_str()),
            });
        };

        if let Some(existing) = fields.get_mut(response_key) {
            existing.nodes.push(field);
            existing.locations.push(location);
            return Ok(());
        }

        fields.insert(response_key.to_owned(), FieldSelection {
            field: schema_field,
            locations: vec![location],
            nodes: vec![field],
            path: path.child(response_key.as_str()),
            response_key: response_key.to_owned(),
        });
        Ok(())
    }

    fn resolve_type_condition(
        &self,
        type_name: &str,
        fragment_name: Option<&str>,
        location: &loc::SourceLocation,
        path: &ModelPath,
    ) -> Result<&'ctx GraphQLType> {
        self.schema.lookup_type(type_name).ok_or_else(|| {
            ModelGenError::UnresolvableTypeCondition {
                type_name: type_name.to_string(),
                fragment_name: fragment_name.map(str::to_string),
                location: location.to_owned(),
                path: path.to_owned(),
            }
        })
    }
}

/// Resolves a selected field name on `graphql_type`. Unions expose no fields
/// other than the `__typename` meta field.
fn resolve_field(graphql_type: &GraphQLType, field_name: &str) -> Option<Field> {
    match graphql_type {
        GraphQLType::Union(union_type) if field_name == "__typename" =>
            Some(Field::typename_meta_field(
                union_type.name(),
                union_type.def_location(),
            )),
        _ => graphql_type.field(field_name).cloned(),
    }
}
