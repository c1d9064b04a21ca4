use crate::ast;
use crate::loc;
use crate::modelgen::Descriptor;
use crate::modelgen::DescriptorRegistry;
use crate::modelgen::FieldCollector;
use crate::modelgen::FieldSelection;
use crate::modelgen::FragmentKey;
use crate::modelgen::FragmentKind;
use crate::modelgen::FragmentNode;
use crate::modelgen::InterfaceDescriptor;
use crate::modelgen::ModelGenConfig;
use crate::modelgen::ModelGenError;
use crate::modelgen::ModelGraph;
use crate::modelgen::ModelPath;
use crate::modelgen::NodeIdentity;
use crate::modelgen::ResultParserSource;
use crate::modelgen::SharedNamingRegistry;
use crate::modelgen::VariableDescriptor;
use crate::modelgen::fragment_hoister::hoist_fragment;
use crate::modelgen::naming_registry::pascal_case;
use crate::operation::ExecutableDocument;
use crate::operation::OperationInfo;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ModelGenError>;

/// A pending request to model one selection set: an operation's root
/// selection, or the sub-selection of a composite field.
///
/// The selection's return type is resolved (and its interface name
/// reserved) when the request is made; everything else happens when the
/// request is dequeued.
#[derive(Clone, Debug)]
pub struct ModelRequest<'ctx> {
    pub(crate) declared_type: &'ctx GraphQLType,
    pub(crate) model_name: String,
    pub(crate) operation: Option<OperationRequest>,
    pub(crate) path: ModelPath,
    pub(crate) return_node: FragmentNode<'ctx>,
    pub(crate) return_type_name: String,
    pub(crate) selection: Vec<loc::SourceLocation>,
    pub(crate) selections: Vec<&'ctx ast::operation::Selection>,
    pub(crate) source: ResultParserSource,
}
impl<'ctx> ModelRequest<'ctx> {
    /// The declared (possibly abstract) type of the selection.
    pub fn declared_type(&self) -> &'ctx GraphQLType {
        self.declared_type
    }

    /// The base name of every model generated for this selection.
    pub fn model_name(&self) -> &str {
        self.model_name.as_str()
    }

    pub fn path(&self) -> &ModelPath {
        &self.path
    }

    /// The hoisted fragment node representing the selection at its declared
    /// type.
    pub fn return_node(&self) -> &FragmentNode<'ctx> {
        &self.return_node
    }

    /// Identity of the selection, used to key the names of models that are
    /// unique to it.
    pub fn selection_identity(&self) -> Vec<loc::SourceLocation> {
        self.selection.clone()
    }

    pub fn selections(&self) -> &[&'ctx ast::operation::Selection] {
        self.selections.as_slice()
    }

    pub fn source(&self) -> &ResultParserSource {
        &self.source
    }
}

/// The operation-level details carried by a root [`ModelRequest`].
#[derive(Clone, Debug)]
pub struct OperationRequest {
    pub(crate) kind: OperationKind,
    pub(crate) location: loc::SourceLocation,
    pub(crate) root_type: String,
    pub(crate) variables: Vec<VariableDescriptor>,
}

/// State threaded through the compilation of one document: the schema and
/// document being compiled, the naming scope, every descriptor generated so
/// far, the interface cache, and the FIFO worklist of pending selections.
pub struct ModelContext<'ctx> {
    collector: FieldCollector<'ctx>,
    config: &'ctx ModelGenConfig,
    interfaces: HashMap<FragmentKey, Arc<InterfaceDescriptor>>,
    naming: SharedNamingRegistry,
    registry: DescriptorRegistry,
    requested: HashMap<NodeIdentity, String>,
    return_nodes: HashMap<NodeIdentity, FragmentNode<'ctx>>,
    worklist: VecDeque<ModelRequest<'ctx>>,
}
impl<'ctx> ModelContext<'ctx> {
    pub fn cache_interface(&mut self, key: FragmentKey, iface: Arc<InterfaceDescriptor>) {
        self.interfaces.insert(key, iface);
    }

    pub fn cached_interface(&self, key: &FragmentKey) -> Option<Arc<InterfaceDescriptor>> {
        self.interfaces.get(key).cloned()
    }

    pub fn collector(&self) -> FieldCollector<'ctx> {
        self.collector
    }

    pub fn config(&self) -> &'ctx ModelGenConfig {
        self.config
    }

    pub fn document(&self) -> &'ctx ExecutableDocument {
        self.collector.document()
    }

    pub fn get_or_create_name(
        &self,
        key: &FragmentKey,
        proposed_name: &str,
    ) -> Result<String> {
        self.naming.get_or_create_name(key, proposed_name)
    }

    /// The name of the interface modelling a node named `model_name`.
    pub fn interface_name(&self, model_name: &str) -> String {
        format!("{}{model_name}", self.config.interface_prefix)
    }

    pub fn into_model_graph(self) -> ModelGraph {
        self.registry.into_model_graph()
    }

    pub fn new(
        schema: &'ctx Schema,
        document: &'ctx ExecutableDocument,
        config: &'ctx ModelGenConfig,
        naming: SharedNamingRegistry,
    ) -> Self {
        Self {
            collector: FieldCollector::new(schema, document),
            config,
            interfaces: HashMap::new(),
            naming,
            registry: DescriptorRegistry::new(),
            requested: HashMap::new(),
            return_nodes: HashMap::new(),
            worklist: VecDeque::new(),
        }
    }

    pub fn next_request(&mut self) -> Option<ModelRequest<'ctx>> {
        self.worklist.pop_front()
    }

    pub fn register(&mut self, descriptor: Descriptor) {
        self.registry.register(descriptor);
    }

    pub fn registry(&self) -> &DescriptorRegistry {
        &self.registry
    }

    /// Enqueues the sub-selection of a composite field for modelling
    /// (unless that very selection was already requested) and returns the
    /// name of the interface that will model it.
    ///
    /// The model of `field` extends the models already requested for each
    /// of the `overridden` selections.
    pub fn request_field_model(
        &mut self,
        field: &FieldSelection<'ctx>,
        declared_type: &'ctx GraphQLType,
        overridden: &[&FieldSelection<'ctx>],
    ) -> Result<String> {
        let identity = field.selection_identity();
        if let Some(model_name) = self.requested.get(&identity) {
            return Ok(model_name.to_owned());
        }

        let mut base_nodes: Vec<FragmentNode<'ctx>> = vec![];
        for base_field in overridden {
            let Some(base_node) = self.return_nodes.get(&base_field.selection_identity()) else {
                log::trace!(
                    "No model was requested for the `{}` selection `{}` overrides.",
                    base_field.path(),
                    field.path(),
                );
                continue;
            };
            if !base_nodes.iter().any(|node| node.key() == base_node.key()) {
                base_nodes.push(base_node.to_owned());
            }
        }

        let request = self.build_request(
            declared_type,
            pascal_case(field.response_key()),
            field.path().to_owned(),
            field.locations().to_vec(),
            field.nested_selections(),
            ResultParserSource::Field {
                field_name: field.field().name().to_string(),
                parent_type: field.field().parent_type_name().to_string(),
                response_name: field.response_key().to_string(),
            },
            None,
            base_nodes,
        )?;
        let return_type_name = request.return_type_name.to_owned();
        self.requested.insert(identity.to_owned(), return_type_name.to_owned());
        self.return_nodes.insert(identity, request.return_node.to_owned());
        self.worklist.push_back(request);
        Ok(return_type_name)
    }

    /// Enqueues an operation's root selection set for modelling.
    pub fn request_operation_model(
        &mut self,
        op_def: &'ctx ast::operation::OperationDefinition,
    ) -> Result<()> {
        let op_info = OperationInfo::from_ast(op_def);
        let config = self.config;
        let document = self.document();
        let schema = self.schema();
        let location = document.location_of(&op_info.position);
        let operation_name = op_info.name
            .unwrap_or(config.anonymous_operation_name.as_str());

        let declared_type = schema.root_operation_type(&op_info.kind)
            .and_then(|root_type| schema.lookup_type(root_type.name()))
            .ok_or_else(|| ModelGenError::MissingRootOperationType {
                kind: op_info.kind,
                operation_name: operation_name.to_string(),
                location: location.to_owned(),
            })?;

        let variables = op_info.variable_definitions
            .iter()
            .map(|var_def| VariableDescriptor {
                name: var_def.name.to_owned(),
                type_annotation: TypeAnnotation::from_ast_type(
                    &document.location_of(&var_def.position),
                    &var_def.var_type,
                ),
            })
            .collect();

        let identity = NodeIdentity::Selection {
            locations: vec![location.to_owned()],
        };
        let request = self.build_request(
            declared_type,
            pascal_case(operation_name),
            ModelPath::root(operation_name),
            vec![location.to_owned()],
            op_info.selection_set.items.iter().collect(),
            ResultParserSource::Operation {
                kind: op_info.kind,
                name: operation_name.to_string(),
            },
            Some(OperationRequest {
                kind: op_info.kind,
                location,
                root_type: declared_type.name().to_string(),
                variables,
            }),
            vec![],
        )?;
        self.requested.insert(identity.to_owned(), request.return_type_name.to_owned());
        self.return_nodes.insert(identity, request.return_node.to_owned());
        self.worklist.push_back(request);
        Ok(())
    }

    pub fn schema(&self) -> &'ctx Schema {
        self.collector.schema()
    }

    #[allow(clippy::too_many_arguments)]
    fn build_request(
        &mut self,
        declared_type: &'ctx GraphQLType,
        model_name: String,
        path: ModelPath,
        selection: Vec<loc::SourceLocation>,
        selections: Vec<&'ctx ast::operation::Selection>,
        source: ResultParserSource,
        operation: Option<OperationRequest>,
        base_nodes: Vec<FragmentNode<'ctx>>,
    ) -> Result<ModelRequest<'ctx>> {
        let selection_info = self.collector.collect(declared_type, &selections, &path)?;
        let mut children = selection_info.fragments;
        for base_node in base_nodes {
            if !children.iter().any(|child| child.key() == base_node.key()) {
                children.push(base_node);
            }
        }
        let wrapper = FragmentNode::new(
            FragmentKind::Synthetic,
            NodeIdentity::Selection {
                locations: selection.to_owned(),
            },
            model_name.as_str(),
            declared_type,
            selections.to_owned(),
            children,
        );
        let return_node = hoist_fragment(declared_type.name(), &wrapper).to_owned();
        let return_type_name = self.get_or_create_name(
            return_node.key(),
            &self.interface_name(return_node.name()),
        )?;

        log::debug!(
            "Requested a model for `{path}` ({}), returning `{return_type_name}`.",
            declared_type.name(),
        );

        Ok(ModelRequest {
            declared_type,
            model_name,
            operation,
            path,
            return_node,
            return_type_name,
            selection,
            selections,
            source,
        })
    }
}
