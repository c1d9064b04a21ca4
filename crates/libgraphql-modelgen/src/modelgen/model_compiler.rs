use crate::ast;
use crate::modelgen::Descriptor;
use crate::modelgen::FragmentKey;
use crate::modelgen::InterfaceModelGenerator;
use crate::modelgen::ModelContext;
use crate::modelgen::ModelGenConfig;
use crate::modelgen::ModelGenError;
use crate::modelgen::ModelGraph;
use crate::modelgen::ModelRequest;
use crate::modelgen::NamingRegistry;
use crate::modelgen::NodeIdentity;
use crate::modelgen::ObjectModelGenerator;
use crate::modelgen::OperationDescriptor;
use crate::modelgen::SelectionSetModelGenerator;
use crate::modelgen::SharedNamingRegistry;
use crate::modelgen::UnionModelGenerator;
use crate::modelgen::possible_types::collect_type_cases;
use crate::operation::ExecutableDocument;
use crate::schema::Schema;
use crate::types::GraphQLType;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ModelGenError>;

/// Compiles executable documents into [`ModelGraph`]s against one schema.
///
/// ```
/// use libgraphql_modelgen::modelgen::ModelCompiler;
/// use libgraphql_modelgen::operation::ExecutableDocument;
/// use libgraphql_modelgen::schema::SchemaBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::from_str(None, "
///     type Query { hero: Droid }
///     type Droid { name: String }
/// ")?.build()?;
/// let document = ExecutableDocument::from_str(
///     "query GetHero { hero { name } }",
///     None,
/// )?;
///
/// let graph = ModelCompiler::new(&schema).compile(&document)?;
/// assert!(graph.interface("IHero").is_some());
/// assert!(graph.class("Hero").is_some());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct ModelCompiler<'schema> {
    config: ModelGenConfig,
    naming: Option<SharedNamingRegistry>,
    schema: &'schema Schema,
}
impl<'schema> ModelCompiler<'schema> {
    /// Compiles every operation of `document`, in document order.
    ///
    /// Any error aborts the whole document.
    pub fn compile(&self, document: &ExecutableDocument) -> Result<ModelGraph> {
        self.compile_operations(document, document.operations().iter().collect())
    }

    /// Compiles only the named operation of `document` (along with every
    /// fragment it reaches).
    pub fn compile_operation(
        &self,
        document: &ExecutableDocument,
        operation_name: &str,
    ) -> Result<ModelGraph> {
        let op_def = document.operation(operation_name).ok_or_else(|| {
            ModelGenError::UnknownOperation {
                operation_name: operation_name.to_string(),
            }
        })?;
        self.compile_operations(document, vec![op_def])
    }

    pub fn config(&self) -> &ModelGenConfig {
        &self.config
    }

    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            config: ModelGenConfig::default(),
            naming: None,
            schema,
        }
    }

    pub fn with_config(mut self, config: ModelGenConfig) -> Self {
        self.config = config;
        self
    }

    /// Draws every name from `naming` rather than from a fresh registry per
    /// compiled document, so that the models of several documents share one
    /// namespace.
    pub fn with_naming_registry(mut self, naming: SharedNamingRegistry) -> Self {
        self.naming = Some(naming);
        self
    }

    fn compile_operations<'ctx>(
        &'ctx self,
        document: &'ctx ExecutableDocument,
        op_defs: Vec<&'ctx ast::operation::OperationDefinition>,
    ) -> Result<ModelGraph> {
        let naming = self.naming.to_owned().unwrap_or_else(|| {
            SharedNamingRegistry::new(
                NamingRegistry::with_max_suffix(self.config.max_name_suffix),
            )
        });
        let mut context = ModelContext::new(
            self.schema,
            document,
            &self.config,
            naming,
        );

        for op_def in op_defs {
            context.request_operation_model(op_def)?;
        }
        while let Some(request) = context.next_request() {
            process_request(&mut context, request)?;
        }

        let graph = context.into_model_graph();
        log::debug!(
            "Compiled `{}` into {} descriptor(s).",
            document.file_path().display(),
            graph.len(),
        );
        Ok(graph)
    }
}

fn process_request<'ctx>(
    context: &mut ModelContext<'ctx>,
    request: ModelRequest<'ctx>,
) -> Result<()> {
    log::debug!(
        "Modelling `{}` ({}).",
        request.path(),
        request.declared_type().name(),
    );

    let type_cases = collect_type_cases(
        &context.collector(),
        request.declared_type(),
        request.selections(),
        request.path(),
    )?;

    let generated = match request.declared_type() {
        GraphQLType::Object(_) =>
            ObjectModelGenerator.generate(context, &request, type_cases)?,
        GraphQLType::Interface(_) =>
            InterfaceModelGenerator.generate(context, &request, type_cases)?,
        GraphQLType::Union(_) =>
            UnionModelGenerator.generate(context, &request, type_cases)?,
        declared_type => return Err(ModelGenError::NonCompositeSelectionType {
            type_name: declared_type.name().to_string(),
            path: request.path().to_owned(),
        }),
    };

    if let Some(operation) = request.operation {
        let proposed_name = format!(
            "{}{}",
            request.model_name,
            operation.kind.default_root_type_name(),
        );
        let name = context.get_or_create_name(
            &FragmentKey::from(NodeIdentity::Operation {
                location: operation.location,
            }),
            &proposed_name,
        )?;
        context.register(Descriptor::Operation(Arc::new(OperationDescriptor {
            kind: operation.kind,
            name,
            result_parser: generated.result_parser,
            result_type: generated.return_type,
            root_type: operation.root_type,
            variables: operation.variables,
        })));
    }

    Ok(())
}
