use crate::modelgen::SelectionInfo;

/// Collapses a field's type cases into just the first one when every case
/// selects the same fields (see [`SelectionInfo::is_field_selection_equal`]).
/// Otherwise returns the cases unchanged.
pub fn normalize_type_cases<'ctx>(
    mut type_cases: Vec<SelectionInfo<'ctx>>,
) -> Vec<SelectionInfo<'ctx>> {
    if type_cases.len() <= 1 {
        return type_cases;
    }

    let all_equal = type_cases[1..]
        .iter()
        .all(|type_case| type_cases[0].is_field_selection_equal(type_case));
    if all_equal {
        log::trace!(
            "Collapsing {} field-equal type cases into `{}`.",
            type_cases.len(),
            type_cases[0].graphql_type().name(),
        );
        type_cases.truncate(1);
    }
    type_cases
}
