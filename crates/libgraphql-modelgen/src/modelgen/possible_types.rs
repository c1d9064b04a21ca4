use crate::ast;
use crate::modelgen::FieldCollector;
use crate::modelgen::ModelGenError;
use crate::modelgen::ModelPath;
use crate::modelgen::SelectionInfo;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ObjectType;

type Result<T> = std::result::Result<T, ModelGenError>;

/// The concrete object types a selection on `declared_type` may resolve to
/// at runtime, in schema order.
pub fn possible_types<'ctx>(
    schema: &'ctx Schema,
    declared_type: &GraphQLType,
    path: &ModelPath,
) -> Result<Vec<&'ctx ObjectType>> {
    if !declared_type.is_composite() {
        return Err(ModelGenError::NonCompositeSelectionType {
            type_name: declared_type.name().to_string(),
            path: path.to_owned(),
        });
    }

    let possible_types = schema.possible_types(declared_type.name());
    if possible_types.is_empty() {
        return Err(ModelGenError::InconsistentTypeCases {
            type_name: declared_type.name().to_string(),
            path: path.to_owned(),
        });
    }
    Ok(possible_types)
}

/// Collects one type case per possible type of `declared_type`.
pub fn collect_type_cases<'ctx>(
    collector: &FieldCollector<'ctx>,
    declared_type: &'ctx GraphQLType,
    selections: &[&'ctx ast::operation::Selection],
    path: &ModelPath,
) -> Result<Vec<SelectionInfo<'ctx>>> {
    let schema = collector.schema();
    let mut type_cases = vec![];
    for obj_type in possible_types(schema, declared_type, path)? {
        let Some(concrete_type) = schema.lookup_type(obj_type.name()) else {
            return Err(ModelGenError::InconsistentTypeCases {
                type_name: declared_type.name().to_string(),
                path: path.to_owned(),
            });
        };
        type_cases.push(collector.collect_in_scope(
            declared_type,
            concrete_type,
            selections,
            path,
        )?);
    }

    log::trace!(
        "`{path}` ({}) has {} type case(s).",
        declared_type.name(),
        type_cases.len(),
    );
    Ok(type_cases)
}
