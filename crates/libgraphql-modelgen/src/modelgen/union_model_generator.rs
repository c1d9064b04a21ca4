use crate::modelgen::GeneratedModel;
use crate::modelgen::ModelContext;
use crate::modelgen::ModelGenError;
use crate::modelgen::ModelRequest;
use crate::modelgen::SelectionInfo;
use crate::modelgen::SelectionSetModelGenerator;
use crate::modelgen::selection_set_model_generator::generate_abstract;

type Result<T> = std::result::Result<T, ModelGenError>;

/// Models a selection on a union type.
///
/// Unions declare no fields beyond `__typename`, so the return interface
/// exists mostly as the common supertype of the per-member classes.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnionModelGenerator;
impl SelectionSetModelGenerator for UnionModelGenerator {
    fn generate<'ctx>(
        &self,
        context: &mut ModelContext<'ctx>,
        request: &ModelRequest<'ctx>,
        type_cases: Vec<SelectionInfo<'ctx>>,
    ) -> Result<GeneratedModel> {
        log::trace!(
            "Modelling `{}` as union `{}` with {} member(s).",
            request.path(),
            request.declared_type().name(),
            type_cases.len(),
        );
        generate_abstract(context, request, type_cases)
    }
}
