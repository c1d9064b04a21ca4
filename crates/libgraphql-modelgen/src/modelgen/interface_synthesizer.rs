use crate::modelgen::Descriptor;
use crate::modelgen::FieldDescriptor;
use crate::modelgen::FieldModelType;
use crate::modelgen::FieldSelection;
use crate::modelgen::FragmentNode;
use crate::modelgen::InterfaceDescriptor;
use crate::modelgen::ModelContext;
use crate::modelgen::ModelGenError;
use crate::modelgen::ModelPath;
use std::collections::HashSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ModelGenError>;

/// Builds (or fetches from the context's cache) the interface for one
/// fragment node.
///
/// Child fragments become base interfaces, synthesized first. The node's
/// own direct fields are then declared, minus any field a base already
/// exposes. Composite fields request a model for their sub-selection and
/// refer to it by name.
///
/// A composite field a base exposes is redeclared when this node's tree
/// selects more of it than any one base models. The redeclared field is
/// modelled from the merged selection, and that model extends the models
/// the bases declare the field with.
pub fn synthesize_interface<'ctx>(
    context: &mut ModelContext<'ctx>,
    node: &FragmentNode<'ctx>,
    path: &ModelPath,
) -> Result<Arc<InterfaceDescriptor>> {
    if let Some(iface) = context.cached_interface(node.key()) {
        log::trace!("Reusing interface `{}` for `{}`.", iface.name(), node.name());
        return Ok(iface);
    }

    let collector = context.collector();
    let mut bases: Vec<Arc<InterfaceDescriptor>> = vec![];
    let mut shadowed: HashSet<String> = HashSet::new();
    let mut base_fields: Vec<Vec<FieldSelection<'ctx>>> = vec![];
    for child in node.children() {
        let base = synthesize_interface(context, child, path)?;
        shadowed.extend(base.all_field_names().into_iter().map(str::to_string));
        base_fields.push(collector.fragment_tree_fields(child, path)?);
        if !bases.iter().any(|existing| existing.name() == base.name()) {
            bases.push(base);
        }
    }

    let graphql_type = node.condition_type();
    let mut fields = vec![];
    for field in &collector.fragment_tree_fields(node, path)? {
        if !shadowed.contains(field.response_key()) {
            fields.push(field_descriptor(context, field, &[])?);
            continue;
        }

        let overridden: Vec<&FieldSelection<'ctx>> = base_fields
            .iter()
            .filter_map(|child_fields| {
                child_fields
                    .iter()
                    .find(|base_field| base_field.response_key() == field.response_key())
            })
            .collect();
        let covered = overridden
            .iter()
            .any(|base_field| base_field.locations() == field.locations());
        if covered || !is_composite_field(context, field) {
            log::trace!(
                "`{}` is declared by a base of `{}`; not redeclaring it.",
                field.response_key(),
                node.name(),
            );
            continue;
        }

        log::trace!(
            "`{}` selects more of `{}` than its bases model; redeclaring it.",
            node.name(),
            field.response_key(),
        );
        fields.push(field_descriptor(context, field, &overridden)?);
    }

    let name = context.get_or_create_name(
        node.key(),
        &context.interface_name(node.name()),
    )?;
    let iface = Arc::new(InterfaceDescriptor {
        fields,
        graphql_type: graphql_type.name().to_string(),
        implements: bases,
        name,
    });

    log::debug!(
        "Synthesized interface `{}` ({} own field(s), {} base(s)).",
        iface.name(),
        iface.fields().len(),
        iface.implements().len(),
    );
    context.cache_interface(node.key().to_owned(), iface.to_owned());
    context.register(Descriptor::Interface(iface.to_owned()));
    Ok(iface)
}

fn is_composite_field(context: &ModelContext<'_>, field: &FieldSelection<'_>) -> bool {
    let inner_type_name = field.field()
        .type_annotation()
        .innermost_named_type_annotation()
        .graphql_type_name();
    context.schema()
        .lookup_type(inner_type_name)
        .is_some_and(|inner_type| inner_type.is_composite())
}

/// `overridden` are the selections of the same response key that base
/// interfaces already model; the field's model extends theirs.
fn field_descriptor<'ctx>(
    context: &mut ModelContext<'ctx>,
    field: &FieldSelection<'ctx>,
    overridden: &[&FieldSelection<'ctx>],
) -> Result<FieldDescriptor> {
    let type_annotation = field.field().type_annotation();
    let inner_type_name = type_annotation
        .innermost_named_type_annotation()
        .graphql_type_name();
    let Some(inner_type) = context.schema().lookup_type(inner_type_name) else {
        return Err(ModelGenError::InconsistentTypeCases {
            type_name: inner_type_name.to_string(),
            path: field.path().to_owned(),
        });
    };

    let model_type = if inner_type.is_composite() {
        FieldModelType::Composite {
            model_name: context.request_field_model(field, inner_type, overridden)?,
        }
    } else {
        let has_sub_selection = field.nodes()
            .iter()
            .any(|node| !node.selection_set.items.is_empty());
        if has_sub_selection {
            return Err(ModelGenError::NonCompositeSelectionType {
                type_name: inner_type_name.to_string(),
                path: field.path().to_owned(),
            });
        }
        FieldModelType::Leaf {
            kind: inner_type.kind(),
            type_name: inner_type_name.to_string(),
        }
    };

    Ok(FieldDescriptor {
        field_name: field.field().name().to_string(),
        model_type,
        response_name: field.response_key().to_string(),
        type_annotation: type_annotation.to_owned(),
    })
}
