//! Tree entries: directories, files, and aliases to either.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Handle to a node slot in the [`Tree`](super::Tree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root directory always lives in slot 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// What a node holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Children keyed by lower-cased name.
    Directory { children: BTreeMap<String, NodeId> },
    File { content: String },
}

/// A single entry in the tree.
///
/// An alias keeps its own (normally empty) directory or file payload next to
/// the `alias` target; that payload is what the alias falls back on when it
/// sits inside its target's subtree.
///
/// A freshly built node is detached; `parent` is filled in by
/// [`Tree::add_item`](super::Tree::add_item) when it is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) parent: NodeId,
    pub(crate) kind: NodeKind,
    pub(crate) alias: Option<NodeId>,
}

impl Node {
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: NodeId::ROOT,
            kind: NodeKind::Directory {
                children: BTreeMap::new(),
            },
            alias: None,
        }
    }

    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: NodeId::ROOT,
            kind: NodeKind::File {
                content: content.into(),
            },
            alias: None,
        }
    }

    /// An alias shaped like its target: a directory alias for directories,
    /// a file alias for files.
    pub fn alias(name: impl Into<String>, target: NodeId, target_is_dir: bool) -> Self {
        let mut node = if target_is_dir {
            Self::directory(name)
        } else {
            Self::file(name, "")
        };
        node.alias = Some(target);
        node
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lookup key used by the parent's child map.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    pub fn is_alias(&self) -> bool {
        self.alias.is_some()
    }

    pub fn alias_target(&self) -> Option<NodeId> {
        self.alias
    }
}
