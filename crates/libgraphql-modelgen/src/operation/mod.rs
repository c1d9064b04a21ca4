mod executable_document;
mod fragment_registry;
mod operation_kind;

pub use executable_document::ExecutableDocument;
pub use executable_document::ExecutableDocumentBuildError;
pub use executable_document::OperationInfo;
pub use fragment_registry::FragmentRegistry;
pub use operation_kind::OperationKind;

#[cfg(test)]
mod tests;
