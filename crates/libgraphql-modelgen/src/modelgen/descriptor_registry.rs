use crate::modelgen::Descriptor;
use crate::modelgen::ModelGraph;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// Accumulates the descriptors generated while compiling one document,
/// keyed by name in registration order.
#[derive(Clone, Debug, Default)]
pub struct DescriptorRegistry {
    descriptors: IndexMap<String, Descriptor>,
}
impl DescriptorRegistry {
    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors.get(name)
    }

    pub fn into_model_graph(self) -> ModelGraph {
        ModelGraph {
            descriptors: self.descriptors,
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `descriptor` along with every descriptor reachable from it,
    /// breadth-first. Descriptors whose name is already registered are left
    /// as they are (and not traversed again).
    pub fn register(&mut self, descriptor: Descriptor) {
        let mut queue = VecDeque::from([descriptor]);
        while let Some(descriptor) = queue.pop_front() {
            if self.descriptors.contains_key(descriptor.name()) {
                continue;
            }
            queue.extend(descriptor.referenced_descriptors());
            log::trace!("Registered descriptor `{}`.", descriptor.name());
            self.descriptors.insert(descriptor.name().to_string(), descriptor);
        }
    }
}
