use crate::ast;
use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a path to the file the position refers to.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct FilePosition {
    pub col: usize,
    pub file: Box<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(file: &Path, pos: ast::Pos) -> Self {
        Self {
            col: pos.column,
            file: Box::new(file.to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where some schema or executable-document entity was defined.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum SourceLocation {
    /// Built into every GraphQL schema (e.g. `String`, `__typename`).
    GraphQLBuiltIn,

    /// A position within an executable (operation/fragment) document.
    ///
    /// Documents that were not loaded from disk are assigned a synthetic
    /// `str://N` path so that every position remains distinguishable.
    ExecutableDocument(FilePosition),

    /// A schema definition that was not loaded from any file path.
    Schema,

    /// A position within a schema file.
    SchemaFile(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_execdoc_ast_position(
        file_path: &Path,
        pos: &ast::Pos,
    ) -> Self {
        Self::ExecutableDocument(FilePosition::from_pos(file_path, *pos))
    }

    pub(crate) fn from_schema_ast_position(
        file_path: Option<&Path>,
        pos: &ast::Pos,
    ) -> Self {
        match file_path {
            Some(file_path) => Self::SchemaFile(
                FilePosition::from_pos(file_path, *pos),
            ),
            None => Self::Schema,
        }
    }

    /// The [`FilePosition`] carried by this location, if any.
    pub fn file_position(&self) -> Option<&FilePosition> {
        match self {
            Self::ExecutableDocument(pos) | Self::SchemaFile(pos) => Some(pos),
            Self::GraphQLBuiltIn | Self::Schema => None,
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<graphql built-in>"),
            Self::Schema => write!(f, "<schema>"),
            Self::ExecutableDocument(pos) | Self::SchemaFile(pos) =>
                write!(f, "{pos}"),
        }
    }
}
