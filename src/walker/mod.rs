//! Pruning filesystem traversal producing candidate directories
//!
//! Architecture: Service Layer - the walker encapsulates traversal and pruning rules
//! - Excluded subtrees are pruned before descent, never filtered after the fact
//! - Only directories strictly below the root become candidates; files never do
//! - Unreadable entries below the root are skipped with a warning, the run continues

use crate::domain::violations::LintResult;
use crate::paths::ExclusionSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List every candidate directory strictly below `root`, honoring exclusions.
///
/// A child whose absolute path is a member of `exclusions` is pruned before
/// descent, so a badly-named directory nested inside an excluded subtree is
/// never visited or reported. Sibling order is not meaningful. An empty tree
/// yields zero candidates, which is a valid passing result.
pub fn list_candidates(root: &Path, exclusions: &ExclusionSet) -> LintResult<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !exclusions.contains(entry.path()));

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => {
                candidates.push(entry.path().to_path_buf());
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!("skipping unreadable entry during traversal: {}", err);
            }
        }
    }

    Ok(candidates)
}
