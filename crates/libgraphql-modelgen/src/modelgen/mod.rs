//! Compiles executable documents into graphs of typed model descriptors.
//!
//! For every selection set of every operation, the compiler determines the
//! concrete types the selection may resolve to at runtime, synthesizes an
//! interface per fragment (mirroring fragment nesting as interface
//! inheritance), generates one class per distinct type case, and plans how
//! to discriminate between those classes when parsing a response.
//!
//! [`ModelCompiler`] is the entry point.

mod class_descriptor;
mod descriptor;
mod descriptor_registry;
mod field_collector;
mod field_descriptor;
mod field_selection;
mod fragment_hoister;
mod fragment_node;
mod interface_descriptor;
mod interface_model_generator;
mod interface_synthesizer;
mod model_compiler;
mod model_context;
mod model_gen_config;
mod model_gen_error;
mod model_graph;
mod model_path;
mod naming_registry;
mod node_identity;
mod object_model_generator;
mod operation_descriptor;
mod possible_types;
mod result_parser_descriptor;
mod selection_info;
mod selection_set_model_generator;
mod type_case_normalizer;
mod union_model_generator;

pub use class_descriptor::ClassDescriptor;
pub use descriptor::Descriptor;
pub use descriptor_registry::DescriptorRegistry;
pub use field_collector::FieldCollector;
pub use field_descriptor::FieldDescriptor;
pub use field_descriptor::FieldModelType;
pub use field_selection::FieldSelection;
pub use fragment_hoister::extra_case_fragments;
pub use fragment_hoister::hoist_fragment;
pub use fragment_node::FragmentKind;
pub use fragment_node::FragmentNode;
pub use interface_descriptor::InterfaceDescriptor;
pub use interface_model_generator::InterfaceModelGenerator;
pub use interface_synthesizer::synthesize_interface;
pub use model_compiler::ModelCompiler;
pub use model_context::ModelContext;
pub use model_context::ModelRequest;
pub use model_context::OperationRequest;
pub use model_gen_config::ModelGenConfig;
pub use model_gen_error::ModelGenError;
pub use model_graph::ModelGraph;
pub use model_path::ModelPath;
pub use naming_registry::NamingRegistry;
pub use naming_registry::SharedNamingRegistry;
pub use node_identity::FragmentKey;
pub use node_identity::NodeIdentity;
pub use object_model_generator::ObjectModelGenerator;
pub use operation_descriptor::OperationDescriptor;
pub use operation_descriptor::VariableDescriptor;
pub use possible_types::collect_type_cases;
pub use possible_types::possible_types;
pub use result_parser_descriptor::ResultParserDescriptor;
pub use result_parser_descriptor::ResultParserSource;
pub use selection_info::SelectionInfo;
pub use selection_set_model_generator::GeneratedModel;
pub use selection_set_model_generator::SelectionSetModelGenerator;
pub use type_case_normalizer::normalize_type_cases;
pub use union_model_generator::UnionModelGenerator;

#[cfg(test)]
mod tests;
