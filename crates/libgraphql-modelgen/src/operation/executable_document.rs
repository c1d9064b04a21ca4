use crate::ast;
use crate::loc;
use crate::operation::FragmentRegistry;
use crate::operation::OperationKind;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use thiserror::Error;

type Result<T> = std::result::Result<T, ExecutableDocumentBuildError>;

static STR_DOCUMENT_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A parsed executable (operation + fragment) document along with the
/// resolver for its fragment spreads.
///
/// Every document is associated with a file path. Documents loaded from a
/// string without one are assigned a unique synthetic `str://N` path so that
/// [`loc::SourceLocation`]s from distinct documents never compare equal.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutableDocument {
    file_path: PathBuf,
    fragment_registry: FragmentRegistry,
    operations: Vec<ast::operation::OperationDefinition>,
}
impl ExecutableDocument {
    pub fn file_path(&self) -> &Path {
        self.file_path.as_path()
    }

    pub fn fragment_registry(&self) -> &FragmentRegistry {
        &self.fragment_registry
    }

    pub fn from_ast(
        ast_doc: ast::operation::Document,
        file_path: Option<&Path>,
    ) -> Result<Self> {
        let file_path = file_path
            .map(Path::to_path_buf)
            .unwrap_or_else(next_str_path);

        let mut fragment_defs = vec![];
        let mut operations = vec![];
        for def in ast_doc.definitions {
            match def {
                ast::operation::Definition::Fragment(fragment_def) =>
                    fragment_defs.push(fragment_def),
                ast::operation::Definition::Operation(op_def) =>
                    operations.push(op_def),
            }
        }

        let fragment_registry = FragmentRegistry::build(&file_path, fragment_defs)?;

        log::debug!(
            "Loaded executable document `{}` ({} operation(s), {} fragment(s)).",
            file_path.display(),
            operations.len(),
            fragment_registry.len(),
        );

        Ok(Self {
            file_path,
            fragment_registry,
            operations,
        })
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path)
            .map_err(|err| ExecutableDocumentBuildError::FileReadError {
                file: file_path.to_path_buf(),
                err: Arc::new(err),
            })?;
        Self::from_str(&content, Some(file_path))
    }

    pub fn from_str(content: &str, file_path: Option<&Path>) -> Result<Self> {
        let file_path = file_path
            .map(Path::to_path_buf)
            .unwrap_or_else(next_str_path);
        let ast_doc = ast::operation::parse(content).map_err(|err| {
            ExecutableDocumentBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            }
        })?;
        Self::from_ast(ast_doc, Some(file_path.as_path()))
    }

    /// Translates a position within this document into a
    /// [`loc::SourceLocation`].
    pub fn location_of(&self, pos: &ast::Pos) -> loc::SourceLocation {
        loc::SourceLocation::from_execdoc_ast_position(self.file_path.as_path(), pos)
    }

    /// Looks up an operation by name. Anonymous operations are never
    /// returned.
    pub fn operation(&self, name: &str) -> Option<&ast::operation::OperationDefinition> {
        self.operations.iter().find(|op_def| {
            OperationInfo::from_ast(op_def).name == Some(name)
        })
    }

    /// The operation definitions of this document, in document order.
    pub fn operations(&self) -> &[ast::operation::OperationDefinition] {
        self.operations.as_slice()
    }
}

fn next_str_path() -> PathBuf {
    let ctr = STR_DOCUMENT_COUNTER.fetch_add(1, Ordering::Relaxed);
    PathBuf::from(format!("str://{ctr}"))
}

/// A uniform view over the four shapes of
/// [`ast::operation::OperationDefinition`].
#[derive(Clone, Copy, Debug)]
pub struct OperationInfo<'a> {
    pub kind: OperationKind,
    pub name: Option<&'a str>,
    pub position: ast::Pos,
    pub selection_set: &'a ast::operation::SelectionSet,
    pub variable_definitions: &'a [ast::operation::VariableDefinition],
}
impl<'a> OperationInfo<'a> {
    pub fn from_ast(op_def: &'a ast::operation::OperationDefinition) -> Self {
        use ast::operation::OperationDefinition;
        match op_def {
            OperationDefinition::Mutation(mutation) => Self {
                kind: OperationKind::Mutation,
                name: mutation.name.as_deref(),
                position: mutation.position,
                selection_set: &mutation.selection_set,
                variable_definitions: mutation.variable_definitions.as_slice(),
            },

            OperationDefinition::Query(query) => Self {
                kind: OperationKind::Query,
                name: query.name.as_deref(),
                position: query.position,
                selection_set: &query.selection_set,
                variable_definitions: query.variable_definitions.as_slice(),
            },

            // Shorthand `{ ... }` query.
            OperationDefinition::SelectionSet(selection_set) => Self {
                kind: OperationKind::Query,
                name: None,
                position: selection_set.span.0,
                selection_set,
                variable_definitions: &[],
            },

            OperationDefinition::Subscription(subscription) => Self {
                kind: OperationKind::Subscription,
                name: subscription.name.as_deref(),
                position: subscription.position,
                selection_set: &subscription.selection_set,
                variable_definitions: subscription.variable_definitions.as_slice(),
            },
        }
    }
}

#[derive(Clone, Debug, Error)]
pub enum ExecutableDocumentBuildError {
    #[error("Multiple fragments named `{fragment_name}` were defined")]
    DuplicateFragmentDefinition {
        fragment_name: String,
        first_def_location: loc::SourceLocation,
        second_def_location: loc::SourceLocation,
    },

    #[error("Failure while reading the document file `{}`: {err}", file.display())]
    FileReadError {
        file: PathBuf,
        err: Arc<std::io::Error>,
    },

    #[error("Fragment cycle detected: {}", cycle_path.join(" -> "))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error("Error parsing executable document `{}`: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },
}
