use crate::modelgen::GeneratedModel;
use crate::modelgen::ModelContext;
use crate::modelgen::ModelGenError;
use crate::modelgen::ModelRequest;
use crate::modelgen::SelectionInfo;
use crate::modelgen::SelectionSetModelGenerator;
use crate::modelgen::selection_set_model_generator::case_class;
use crate::modelgen::selection_set_model_generator::result_parser;
use crate::modelgen::selection_set_model_generator::return_interface;
use crate::modelgen::selection_set_model_generator::return_keys;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ModelGenError>;

/// Models a selection on an object type: one class implementing the return
/// interface.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectModelGenerator;
impl SelectionSetModelGenerator for ObjectModelGenerator {
    fn generate<'ctx>(
        &self,
        context: &mut ModelContext<'ctx>,
        request: &ModelRequest<'ctx>,
        type_cases: Vec<SelectionInfo<'ctx>>,
    ) -> Result<GeneratedModel> {
        let [type_case] = type_cases.as_slice() else {
            return Err(ModelGenError::InconsistentTypeCases {
                type_name: request.declared_type().name().to_string(),
                path: request.path().to_owned(),
            });
        };

        let return_type = return_interface(context, request)?;
        let return_keys = return_keys(request);
        let type_name = type_case.graphql_type().name();
        let class = case_class(
            context,
            request,
            &return_type,
            &return_keys,
            type_case,
            &[type_case.graphql_type()],
            type_name,
            request.model_name(),
        )?;

        let discriminators =
            IndexMap::from([(type_name.to_string(), class.name().to_string())]);
        let result_parser = result_parser(
            context,
            request,
            return_type.to_owned(),
            vec![class],
            discriminators,
        )?;
        Ok(GeneratedModel {
            result_parser,
            return_type,
        })
    }
}
