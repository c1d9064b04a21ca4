use crate::modelgen::ClassDescriptor;
use crate::modelgen::Descriptor;
use crate::modelgen::InterfaceDescriptor;
use crate::modelgen::OperationDescriptor;
use crate::modelgen::ResultParserDescriptor;
use indexmap::IndexMap;
use std::sync::Arc;

/// Every descriptor generated for one compiled document, ready to be handed
/// to an emitter.
///
/// Descriptor names are unique within a graph. Iteration follows the order
/// descriptors were registered in, which is deterministic for a given
/// schema and document.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ModelGraph {
    pub(crate) descriptors: IndexMap<String, Descriptor>,
}
impl ModelGraph {
    pub fn class(&self, name: &str) -> Option<&Arc<ClassDescriptor>> {
        self.get(name).and_then(Descriptor::as_class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &Arc<ClassDescriptor>> {
        self.descriptors.values().filter_map(Descriptor::as_class)
    }

    pub fn descriptors(&self) -> &IndexMap<String, Descriptor> {
        &self.descriptors
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors.get(name)
    }

    pub fn interface(&self, name: &str) -> Option<&Arc<InterfaceDescriptor>> {
        self.get(name).and_then(Descriptor::as_interface)
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &Arc<InterfaceDescriptor>> {
        self.descriptors.values().filter_map(Descriptor::as_interface)
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn operation(&self, name: &str) -> Option<&Arc<OperationDescriptor>> {
        self.get(name).and_then(Descriptor::as_operation)
    }

    pub fn operations(&self) -> impl Iterator<Item = &Arc<OperationDescriptor>> {
        self.descriptors.values().filter_map(Descriptor::as_operation)
    }

    pub fn result_parser(&self, name: &str) -> Option<&Arc<ResultParserDescriptor>> {
        self.get(name).and_then(Descriptor::as_result_parser)
    }

    pub fn result_parsers(&self) -> impl Iterator<Item = &Arc<ResultParserDescriptor>> {
        self.descriptors.values().filter_map(Descriptor::as_result_parser)
    }
}
