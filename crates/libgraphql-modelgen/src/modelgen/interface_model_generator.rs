use crate::modelgen::GeneratedModel;
use crate::modelgen::ModelContext;
use crate::modelgen::ModelGenError;
use crate::modelgen::ModelRequest;
use crate::modelgen::SelectionInfo;
use crate::modelgen::SelectionSetModelGenerator;
use crate::modelgen::selection_set_model_generator::generate_abstract;

type Result<T> = std::result::Result<T, ModelGenError>;

/// Models a selection on an interface type.
///
/// The return interface carries the fields selected on the interface
/// itself. Each type case that still differs after normalization gets a
/// class named after its concrete type.
#[derive(Clone, Copy, Debug, Default)]
pub struct InterfaceModelGenerator;
impl SelectionSetModelGenerator for InterfaceModelGenerator {
    fn generate<'ctx>(
        &self,
        context: &mut ModelContext<'ctx>,
        request: &ModelRequest<'ctx>,
        type_cases: Vec<SelectionInfo<'ctx>>,
    ) -> Result<GeneratedModel> {
        log::trace!(
            "Modelling `{}` as interface `{}` with {} possible type(s).",
            request.path(),
            request.declared_type().name(),
            type_cases.len(),
        );
        generate_abstract(context, request, type_cases)
    }
}
