//! Root resolution and exclusion handling
//!
//! Architecture: Service Layer - path services validate configuration before traversal
//! - Root resolution is eager so configuration errors surface before any walking
//! - ExclusionSet encapsulates the exact-path membership rule for pruning
//! - Relative-path rendering strips the known root prefix, never matches on segment names

use crate::domain::violations::{LintError, LintResult};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Canonicalize a path against the current working directory.
///
/// Expands relative segments and symlinks. Fails with a configuration error
/// when the path does not exist on the filesystem.
pub fn resolve(path: &Path) -> LintResult<PathBuf> {
    fs::canonicalize(path).map_err(|e| {
        LintError::config(format!("root '{}' is not a valid path: {}", path.display(), e))
    })
}

/// Resolve and validate the root of a check run.
///
/// The root must exist, be a directory, and be listable. Any failure here is
/// a configuration error raised before traversal starts.
pub fn resolve_root(path: &Path) -> LintResult<PathBuf> {
    let resolved = resolve(path)?;

    if !resolved.is_dir() {
        return Err(LintError::config(format!(
            "root '{}' is not a directory",
            path.display()
        )));
    }

    // An unreadable root would otherwise walk as zero candidates and pass silently.
    fs::read_dir(&resolved).map_err(|e| {
        LintError::config(format!("root '{}' is not readable: {}", resolved.display(), e))
    })?;

    Ok(resolved)
}

/// The set of subtrees to prune from traversal, keyed by absolute path.
///
/// Membership is exact path equality: excluding `root/a/b` prunes `a/b` and
/// everything beneath it, but not `a/bc`. Members are never checked for
/// existence; excluding a path that does not exist is a silent no-op.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    paths: HashSet<PathBuf>,
}

impl ExclusionSet {
    /// An exclusion set that prunes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the set by joining each relative path onto the resolved root
    pub fn build(root: &Path, relative_paths: &[PathBuf]) -> Self {
        let paths = relative_paths.iter().map(|rel| root.join(rel)).collect();
        Self { paths }
    }

    /// Whether the given absolute path is excluded
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Number of excluded subtrees
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the set prunes nothing
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Render a candidate path relative to the resolved root.
///
/// A candidate that does not carry the root prefix falls back to its
/// absolute path rather than failing the run.
pub fn relative_to_root(root: &Path, candidate: &Path) -> PathBuf {
    candidate.strip_prefix(root).map(Path::to_path_buf).unwrap_or_else(|_| candidate.to_path_buf())
}
