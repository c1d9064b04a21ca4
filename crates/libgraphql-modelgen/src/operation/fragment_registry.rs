use crate::ast;
use crate::loc;
use crate::operation::ExecutableDocumentBuildError;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ExecutableDocumentBuildError>;

/// The fragment definitions of one [`ExecutableDocument`], keyed by name in
/// document order.
///
/// A registry is only ever constructed once its fragments are known to have
/// unique names and to be free of spread cycles, so walking fragment spreads
/// through a registry always terminates.
///
/// [`ExecutableDocument`]: crate::operation::ExecutableDocument
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentRegistry {
    pub(super) file_path: PathBuf,
    pub(super) fragments: IndexMap<String, ast::operation::FragmentDefinition>,
}
impl FragmentRegistry {
    pub(super) fn build(
        file_path: &Path,
        fragment_defs: Vec<ast::operation::FragmentDefinition>,
    ) -> Result<Self> {
        let mut fragments: IndexMap<String, ast::operation::FragmentDefinition> =
            IndexMap::new();

        for fragment_def in fragment_defs {
            if let Some(existing) = fragments.get(&fragment_def.name) {
                return Err(ExecutableDocumentBuildError::DuplicateFragmentDefinition {
                    fragment_name: fragment_def.name.to_owned(),
                    first_def_location: loc::SourceLocation::from_execdoc_ast_position(
                        file_path,
                        &existing.position,
                    ),
                    second_def_location: loc::SourceLocation::from_execdoc_ast_position(
                        file_path,
                        &fragment_def.position,
                    ),
                });
            }
            fragments.insert(fragment_def.name.to_owned(), fragment_def);
        }

        let registry = Self {
            file_path: file_path.to_path_buf(),
            fragments,
        };

        if let Some(cycle_path) = registry.find_cycles().into_iter().next() {
            return Err(ExecutableDocumentBuildError::FragmentCycleDetected {
                cycle_path,
            });
        }

        log::trace!(
            "Registered {} fragment(s) from `{}`.",
            registry.fragments.len(),
            registry.file_path.display(),
        );

        Ok(registry)
    }

    /// The [`loc::SourceLocation`] of the named fragment's definition.
    pub fn def_location(&self, fragment_name: &str) -> Option<loc::SourceLocation> {
        self.fragments.get(fragment_name).map(|fragment_def| {
            loc::SourceLocation::from_execdoc_ast_position(
                self.file_path.as_path(),
                &fragment_def.position,
            )
        })
    }

    pub fn fragments(&self) -> &IndexMap<String, ast::operation::FragmentDefinition> {
        &self.fragments
    }

    /// Resolves a fragment spread's name to its definition.
    pub fn get(&self, fragment_name: &str) -> Option<&ast::operation::FragmentDefinition> {
        self.fragments.get(fragment_name)
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Finds cycles of fragment spreads.
    ///
    /// Each fragment's spreads are explored at most once. Any cycle in the
    /// document yields at least one reported cycle, though not every distinct
    /// cycle through a shared fragment is listed. Phase-shifted cycles (A -> B -> A vs
    /// B -> A -> B) are reported once. Spreads of undefined fragments are
    /// ignored here.
    fn find_cycles(&self) -> Vec<Vec<String>> {
        let mut all_cycles = vec![];
        let mut seen_normalized_cycles = HashSet::new();
        let mut done = HashSet::new();

        for fragment_name in self.fragments.keys() {
            let mut path = vec![];
            let mut visiting = HashSet::new();
            self.check_fragment_cycles(
                fragment_name,
                &mut path,
                &mut visiting,
                &mut done,
                &mut all_cycles,
                &mut seen_normalized_cycles,
            );
        }

        all_cycles
    }

    fn check_fragment_cycles(
        &self,
        fragment_name: &str,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        done: &mut HashSet<String>,
        cycles: &mut Vec<Vec<String>>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        if visiting.contains(fragment_name) {
            path.push(fragment_name.to_string());
            // Only the portion of the path that loops back is the cycle.
            let cycle_start = path.iter()
                .position(|name| name == fragment_name)
                .unwrap_or(0);
            let cycle = path[cycle_start..].to_vec();
            let normalized = normalize_cycle(&cycle);
            if seen_normalized.insert(normalized) {
                cycles.push(cycle);
            }
            path.pop();
            return;
        }
        if done.contains(fragment_name) {
            return;
        }

        let Some(fragment_def) = self.fragments.get(fragment_name) else {
            return;
        };

        path.push(fragment_name.to_string());
        visiting.insert(fragment_name.to_string());

        self.check_selection_set_cycles(
            &fragment_def.selection_set,
            path,
            visiting,
            done,
            cycles,
            seen_normalized,
        );

        path.pop();
        visiting.remove(fragment_name);
        done.insert(fragment_name.to_string());
    }

    fn check_selection_set_cycles(
        &self,
        selection_set: &ast::operation::SelectionSet,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        done: &mut HashSet<String>,
        cycles: &mut Vec<Vec<String>>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::operation::Selection::FragmentSpread(spread) =>
                    self.check_fragment_cycles(
                        &spread.fragment_name,
                        path,
                        visiting,
                        done,
                        cycles,
                        seen_normalized,
                    ),

                ast::operation::Selection::InlineFragment(inline) =>
                    self.check_selection_set_cycles(
                        &inline.selection_set,
                        path,
                        visiting,
                        done,
                        cycles,
                        seen_normalized,
                    ),

                ast::operation::Selection::Field(field) =>
                    self.check_selection_set_cycles(
                        &field.selection_set,
                        path,
                        visiting,
                        done,
                        cycles,
                        seen_normalized,
                    ),
            }
        }
    }
}

/// Rotates a cycle (`[A, B, C, A]`) so that it starts at its
/// lexicographically smallest fragment name, so that every phase of the
/// same cycle normalizes identically.
fn normalize_cycle(cycle: &[String]) -> Vec<String> {
    let Some((_, cycle_without_repeat)) = cycle.split_last() else {
        return vec![];
    };

    let min_idx = cycle_without_repeat
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut normalized = Vec::with_capacity(cycle.len());
    normalized.extend_from_slice(&cycle_without_repeat[min_idx..]);
    normalized.extend_from_slice(&cycle_without_repeat[..min_idx]);
    if let Some(first) = normalized.first().cloned() {
        normalized.push(first);
    }
    normalized
}
