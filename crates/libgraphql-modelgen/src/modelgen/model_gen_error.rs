use crate::loc;
use crate::modelgen::ModelPath;
use crate::operation::OperationKind;
use thiserror::Error;

/// Fatal errors raised while compiling a document into a model graph.
///
/// Any of these aborts compilation of the whole document; no partial graph
/// is ever produced.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelGenError {
    #[error(
        "No possible object types were found for `{type_name}` while \
        modelling `{path}`"
    )]
    InconsistentTypeCases {
        type_name: String,
        path: ModelPath,
    },

    #[error(
        "The schema defines no {kind} root operation type (needed by the \
        `{operation_name}` operation at {location})"
    )]
    MissingRootOperationType {
        kind: OperationKind,
        operation_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Unable to find a unique name for `{proposed_name}` after trying \
        suffixes up to {max_suffix}"
    )]
    NamingExhausted {
        proposed_name: String,
        max_suffix: u32,
    },

    #[error(
        "`{path}` selects a selection set on `{type_name}`, which is not an \
        object, interface, or union type"
    )]
    NonCompositeSelectionType {
        type_name: String,
        path: ModelPath,
    },

    #[error(
        "The fragment `{fragment_name}` is spread at `{path}` ({location}) but \
        is never defined"
    )]
    UndefinedFragment {
        fragment_name: String,
        location: loc::SourceLocation,
        path: ModelPath,
    },

    #[error(
        "The `{type_name}` type has no field named `{field_name}` (selected \
        at `{path}`, {location})"
    )]
    UnknownField {
        field_name: String,
        type_name: String,
        location: loc::SourceLocation,
        path: ModelPath,
    },

    #[error("The document defines no operation named `{operation_name}`")]
    UnknownOperation {
        operation_name: String,
    },

    #[error(
        "The type condition `{type_name}`{} does not name a type defined in \
        the schema (at `{path}`, {location})",
        .fragment_name.as_ref()
            .map(|name| format!(" of fragment `{name}`"))
            .unwrap_or_default(),
    )]
    UnresolvableTypeCondition {
        type_name: String,
        fragment_name: Option<String>,
        location: loc::SourceLocation,
        path: ModelPath,
    },
}
