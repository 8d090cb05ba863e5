//! Saving and restoring the whole filesystem.
//!
//! The snapshot is the serialized [`Vfs`]: the arena (tombstones included,
//! so alias handles stay valid), and the current directory.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use super::node::{NodeId, NodeKind};
use super::ops::Vfs;
use super::tree::Tree;

impl Vfs {
    /// Write the snapshot to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string(self).context("failed to serialize snapshot")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        tracing::debug!(path = %path.display(), nodes = self.tree.live_count(), "saved snapshot");
        Ok(())
    }

    /// Read a snapshot written by [`save`](Self::save).
    ///
    /// Structural damage is an error: a missing root, parent links that
    /// dangle or loop, and child maps that disagree with those links. A
    /// current directory that no longer resolves to a directory falls back
    /// to the root.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let mut vfs: Vfs = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))?;

        if let Err(damage) = check_structure(&vfs.tree) {
            bail!("snapshot {} has {}", path.display(), damage);
        }

        let cwd_ok = vfs
            .tree
            .effective(vfs.cwd)
            .is_some_and(|id| vfs.tree.is_dir(id));
        if !cwd_ok {
            tracing::warn!(path = %path.display(), "snapshot cwd is gone, starting at /");
            vfs.cwd = NodeId::ROOT;
        }
        Ok(vfs)
    }
}

/// Confirm the arena is a tree hanging off slot 0.
///
/// Every live node must reach the root through live directories within
/// `live_count` steps, and must be listed under its own key in its parent.
/// Every child-map entry must be live and point back at the map's owner.
fn check_structure(tree: &Tree) -> Result<(), &'static str> {
    let root_ok = tree.is_plain_dir(NodeId::ROOT)
        && tree.get(NodeId::ROOT).is_some_and(|n| n.parent == NodeId::ROOT);
    if !root_ok {
        return Err("no root directory");
    }

    let bound = tree.live_count();
    for id in tree.live_ids() {
        let Some(node) = tree.get(id) else {
            continue;
        };

        if id != NodeId::ROOT {
            let listed = tree.get(node.parent).is_some_and(|parent| match &parent.kind {
                NodeKind::Directory { children } => children.get(&node.key()) == Some(&id),
                NodeKind::File { .. } => false,
            });
            if !listed {
                return Err("an orphaned node");
            }
        }

        let mut current = id;
        let mut steps = 0;
        while current != NodeId::ROOT {
            if steps == bound {
                return Err("a parent cycle");
            }
            let Some(n) = tree.get(current) else {
                return Err("an orphaned node");
            };
            current = n.parent;
            steps += 1;
        }

        if let NodeKind::Directory { children } = &node.kind {
            let consistent = children.iter().all(|(key, &child)| {
                child != NodeId::ROOT
                    && tree
                        .get(child)
                        .is_some_and(|c| c.parent == id && c.key() == *key)
            });
            if !consistent {
                return Err("a child entry that does not point back");
            }
        }
    }
    Ok(())
}
