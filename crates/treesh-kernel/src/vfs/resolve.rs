//! Path resolution.
//!
//! Paths are `/`-separated. A leading `/` starts at the root, anything else
//! starts at the current directory. Empty segments (`a//b`, trailing `/`)
//! are ignored, so `"/"` has no segments at all.

use super::error::{VfsError, VfsResult};
use super::node::NodeId;
use super::tree::Tree;

/// Split a path into its non-empty segments.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// The last segment of a path, if it has one.
pub fn last_segment(path: &str) -> Option<&str> {
    segments(path).pop()
}

impl Tree {
    /// Resolve `path` relative to `cwd`, leaving the last `skip_levels`
    /// segments unconsumed.
    ///
    /// `Ok(None)` means some segment does not exist (or crosses a dangling
    /// alias). Descending into a file is `Err(NotADirectory)`. Skipping more
    /// segments than the path has returns the starting node.
    pub fn resolve(&self, cwd: NodeId, path: &str, skip_levels: usize) -> VfsResult<Option<NodeId>> {
        let mut current = if path.starts_with('/') { self.root() } else { cwd };
        if !self.is_live(current) {
            return Ok(None);
        }

        let parts = segments(path);
        let consumed = parts.len().saturating_sub(skip_levels);

        for segment in &parts[..consumed] {
            if *segment == ".." {
                current = match self.get(current) {
                    Some(node) => node.parent(),
                    None => return Ok(None),
                };
                continue;
            }
            if self.is_file(current) {
                return Err(VfsError::NotADirectory(path.to_string()));
            }
            if *segment == "." {
                continue;
            }
            match self.child(current, segment) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }

        Ok(Some(current))
    }
}
