//! Arena-backed node tree.
//!
//! All nodes live in one `Vec` and refer to each other by [`NodeId`]. The root
//! sits in slot 0 and is its own parent, which is where `..` stops. Removed
//! nodes leave a tombstone; slots are never handed out twice, so an alias can
//! tell that its target is gone.
//!
//! # Aliases
//!
//! Content and listing capabilities go through [`Tree::effective`], which
//! forwards an alias to its target unless the alias lives inside the target's
//! own subtree. In that case the alias answers for itself, which keeps a
//! directory linked inside itself from recursing forever.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::node::{Node, NodeId, NodeKind};

/// The node arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    nodes: Vec<Option<Node>>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree holding only the root directory.
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Node::directory(""))],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn is_live(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes, root included.
    pub fn live_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    /// Handles of every live node, in slot order.
    pub fn live_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| NodeId(index))
    }

    pub fn is_dir(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_dir)
    }

    pub fn is_file(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_file)
    }

    pub fn is_alias(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_alias)
    }

    /// A directory that is not an alias.
    pub fn is_plain_dir(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| n.is_dir() && !n.is_alias())
    }

    /// Canonical path derived from the parent chain.
    ///
    /// Directories end in `/`, the root is `/`. Returns an empty string for
    /// a removed node.
    pub fn path(&self, id: NodeId) -> String {
        let Some(node) = self.get(id) else {
            return String::new();
        };

        let mut segments = Vec::new();
        let mut current = id;
        while current != NodeId::ROOT {
            let Some(n) = self.get(current) else {
                return String::new();
            };
            segments.push(n.name.as_str());
            current = n.parent;
        }

        let mut path = String::from("/");
        for segment in segments.iter().rev() {
            path.push_str(segment);
            path.push('/');
        }
        if node.is_file() {
            path.pop();
        }
        path
    }

    /// True if `id` is `ancestor` or sits somewhere below it.
    pub fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == ancestor {
                return true;
            }
            if current == NodeId::ROOT {
                return false;
            }
            match self.get(current) {
                Some(node) => current = node.parent,
                None => return false,
            }
        }
    }

    /// The node that answers capability calls for `id`.
    ///
    /// Plain nodes answer for themselves. Aliases forward to their target,
    /// except when they sit inside the target's subtree. A dangling alias
    /// (target removed) yields `None`.
    pub fn effective(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        // Targets are collapsed at link time, the bound only guards against
        // hand-edited snapshots.
        for _ in 0..self.nodes.len() {
            let node = self.get(current)?;
            match node.alias {
                None => return Some(current),
                Some(target) => {
                    if !self.is_live(target) {
                        return None;
                    }
                    if self.is_within(current, target) {
                        return Some(current);
                    }
                    current = target;
                }
            }
        }
        None
    }

    fn children_map(&self, dir: NodeId) -> Option<&BTreeMap<String, NodeId>> {
        let effective = self.effective(dir)?;
        match &self.get(effective)?.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, dir: NodeId, name: &str) -> bool {
        self.child(dir, name).is_some()
    }

    pub fn child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.children_map(dir)?.get(&name.to_lowercase()).copied()
    }

    /// Direct children in listing order, alias-forwarded.
    pub fn children(&self, dir: NodeId) -> Vec<NodeId> {
        self.children_map(dir)
            .map(|children| children.values().copied().collect())
            .unwrap_or_default()
    }

    /// Children stored in this node's own map, ignoring any alias target.
    pub fn own_children(&self, dir: NodeId) -> Vec<NodeId> {
        match self.get(dir).map(|n| &n.kind) {
            Some(NodeKind::Directory { children }) => children.values().copied().collect(),
            _ => Vec::new(),
        }
    }

    /// Display names of the direct children, in listing order.
    pub fn names(&self, dir: NodeId) -> Vec<String> {
        self.children(dir)
            .into_iter()
            .filter_map(|id| self.get(id).map(|n| n.name.clone()))
            .collect()
    }

    /// Colon-prefixed listing: `":"` followed by `"\n<name>"` per child.
    ///
    /// Files and dangling aliases list as the empty string.
    pub fn list(&self, dir: NodeId) -> String {
        if self.children_map(dir).is_none() {
            return String::new();
        }
        let mut listing = String::from(":");
        for name in self.names(dir) {
            listing.push('\n');
            listing.push_str(&name);
        }
        listing
    }

    /// Number of direct children; `None` for files and dangling aliases.
    pub fn size(&self, id: NodeId) -> Option<usize> {
        self.children_map(id).map(BTreeMap::len)
    }

    pub fn content(&self, id: NodeId) -> Option<&str> {
        let effective = self.effective(id)?;
        match &self.get(effective)?.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    fn content_mut(&mut self, id: NodeId) -> Option<&mut String> {
        let effective = self.effective(id)?;
        match &mut self.get_mut(effective)?.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Replace a file's content. Returns false if `id` is not a readable file.
    pub fn set_content(&mut self, id: NodeId, text: &str) -> bool {
        match self.content_mut(id) {
            Some(content) => {
                content.clear();
                content.push_str(text);
                true
            }
            None => false,
        }
    }

    pub fn append_content(&mut self, id: NodeId, text: &str) -> bool {
        match self.content_mut(id) {
            Some(content) => {
                content.push_str(text);
                true
            }
            None => false,
        }
    }

    /// Insert a new node under `dir`, replacing any entry with the same key.
    ///
    /// Callers check for collisions first where "already exists" matters.
    /// Returns `None` if `dir` does not resolve to a directory.
    pub fn insert(&mut self, dir: NodeId, node: Node) -> Option<NodeId> {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(node));
        if self.add_item(dir, id) {
            Some(id)
        } else {
            self.nodes[id.0] = None;
            None
        }
    }

    /// Attach an existing detached node under `dir`.
    pub fn add_item(&mut self, dir: NodeId, id: NodeId) -> bool {
        let Some(dir) = self.effective(dir) else {
            return false;
        };
        if !self.is_dir(dir) {
            return false;
        }
        let Some(key) = self.get(id).map(Node::key) else {
            return false;
        };
        if let Some(node) = self.get_mut(id) {
            node.parent = dir;
        }

        let displaced = match self.get_mut(dir).map(|n| &mut n.kind) {
            Some(NodeKind::Directory { children }) => children.insert(key, id),
            _ => None,
        };
        if let Some(old) = displaced.filter(|old| *old != id) {
            self.free(old);
        }
        true
    }

    /// Unlink `id` from its parent and drop it along with everything it owns.
    ///
    /// The root is never removed.
    pub fn remove_item(&mut self, id: NodeId) {
        if id == NodeId::ROOT {
            return;
        }
        self.detach(id);
        self.free(id);
    }

    /// Unlink `id` from its parent's map without dropping it.
    pub(crate) fn detach(&mut self, id: NodeId) {
        let Some((parent, key)) = self.get(id).map(|n| (n.parent, n.key())) else {
            return;
        };
        if let Some(NodeKind::Directory { children }) = self.get_mut(parent).map(|n| &mut n.kind) {
            if children.get(&key) == Some(&id) {
                children.remove(&key);
            }
        }
    }

    pub(crate) fn rename(&mut self, id: NodeId, name: &str) {
        if let Some(node) = self.get_mut(id) {
            node.name = name.to_string();
        }
    }

    fn free(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if current == NodeId::ROOT {
                continue;
            }
            pending.extend(self.own_children(current));
            if let Some(slot) = self.nodes.get_mut(current.0) {
                *slot = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Tree, NodeId, NodeId, NodeId) {
        let mut tree = Tree::new();
        let home = tree.insert(NodeId::ROOT, Node::directory("home")).unwrap();
        let docs = tree.insert(home, Node::directory("Documents")).unwrap();
        let readme = tree.insert(docs, Node::file("readme.txt", "Hello World.")).unwrap();
        (tree, home, docs, readme)
    }

    #[test]
    fn root_is_its_own_parent() {
        let tree = Tree::new();
        assert_eq!(tree.get(NodeId::ROOT).unwrap().parent(), NodeId::ROOT);
        assert_eq!(tree.path(NodeId::ROOT), "/");
    }

    #[test]
    fn paths_follow_parent_chain() {
        let (tree, home, docs, readme) = sample();
        assert_eq!(tree.path(home), "/home/");
        assert_eq!(tree.path(docs), "/home/Documents/");
        assert_eq!(tree.path(readme), "/home/Documents/readme.txt");
    }

    #[test]
    fn attaching_sets_parent() {
        let (mut tree, home, docs, readme) = sample();
        assert_eq!(tree.get(docs).unwrap().parent(), home);
        assert_eq!(tree.get(readme).unwrap().parent(), docs);

        tree.detach(readme);
        assert!(tree.add_item(home, readme));
        assert_eq!(tree.get(readme).unwrap().parent(), home);
        assert_eq!(tree.path(readme), "/home/readme.txt");
    }

    #[test]
    fn lookup_ignores_case() {
        let (tree, home, docs, _) = sample();
        assert!(tree.contains(home, "documents"));
        assert!(tree.contains(home, "DOCUMENTS"));
        assert_eq!(tree.child(home, "dOcUmEnTs"), Some(docs));
        assert!(!tree.contains(home, "Desktop"));
    }

    #[test]
    fn insert_replaces_same_key() {
        let (mut tree, home, docs, readme) = sample();
        let replacement = tree.insert(home, Node::file("DOCUMENTS", "")).unwrap();
        assert_eq!(tree.child(home, "documents"), Some(replacement));
        assert!(!tree.is_live(docs));
        assert!(!tree.is_live(readme));
    }

    #[test]
    fn list_and_size() {
        let (mut tree, home, docs, _) = sample();
        tree.insert(home, Node::directory("Desktop")).unwrap();
        assert_eq!(tree.list(home), ":\nDesktop\nDocuments");
        assert_eq!(tree.size(home), Some(2));
        assert_eq!(tree.size(docs), Some(1));

        let empty = tree.insert(home, Node::directory("empty")).unwrap();
        assert_eq!(tree.list(empty), ":");
        assert_eq!(tree.size(empty), Some(0));
    }

    #[test]
    fn files_have_no_size_or_listing() {
        let (tree, _, _, readme) = sample();
        assert_eq!(tree.size(readme), None);
        assert_eq!(tree.list(readme), "");
        assert_eq!(tree.content(readme), Some("Hello World."));
    }

    #[test]
    fn remove_item_drops_subtree() {
        let (mut tree, home, docs, readme) = sample();
        tree.remove_item(docs);
        assert!(!tree.contains(home, "documents"));
        assert!(!tree.is_live(docs));
        assert!(!tree.is_live(readme));
        assert_eq!(tree.live_count(), 2);
    }

    #[test]
    fn root_is_never_removed() {
        let mut tree = Tree::new();
        tree.remove_item(NodeId::ROOT);
        assert!(tree.is_live(NodeId::ROOT));
    }

    #[test]
    fn file_alias_forwards_reads_and_writes() {
        let (mut tree, _, _, readme) = sample();
        let link = tree.insert(NodeId::ROOT, Node::alias("link", readme, false)).unwrap();
        assert_eq!(tree.content(link), Some("Hello World."));

        assert!(tree.set_content(link, "changed"));
        assert_eq!(tree.content(readme), Some("changed"));

        assert!(tree.append_content(readme, "!"));
        assert_eq!(tree.content(link), Some("changed!"));
    }

    #[test]
    fn directory_alias_forwards_listing_and_inserts() {
        let (mut tree, home, docs, _) = sample();
        let link = tree.insert(NodeId::ROOT, Node::alias("docs", docs, true)).unwrap();
        assert_eq!(tree.path(link), "/docs/");
        assert_eq!(tree.list(link), ":\nreadme.txt");
        assert_eq!(tree.size(link), Some(1));

        let added = tree.insert(link, Node::file("new.txt", "")).unwrap();
        assert_eq!(tree.get(added).unwrap().parent(), docs);
        assert_eq!(tree.path(added), "/home/Documents/new.txt");
        assert!(tree.contains(docs, "new.txt"));
        assert!(!tree.contains(home, "new.txt"));
    }

    #[test]
    fn alias_inside_its_target_answers_for_itself() {
        let (mut tree, home, _, _) = sample();
        let link = tree.insert(home, Node::alias("self", home, true)).unwrap();
        assert!(tree.is_within(link, home));
        assert_eq!(tree.effective(link), Some(link));
        assert_eq!(tree.size(link), Some(0));
        assert_eq!(tree.list(link), ":");
    }

    #[test]
    fn dangling_alias_resolves_to_nothing() {
        let (mut tree, _, docs, readme) = sample();
        let file_link = tree.insert(NodeId::ROOT, Node::alias("f", readme, false)).unwrap();
        let dir_link = tree.insert(NodeId::ROOT, Node::alias("d", docs, true)).unwrap();
        tree.remove_item(docs);

        assert!(tree.is_live(file_link));
        assert_eq!(tree.effective(file_link), None);
        assert_eq!(tree.content(file_link), None);
        assert!(!tree.set_content(file_link, "x"));
        assert_eq!(tree.size(dir_link), None);
        assert!(tree.children(dir_link).is_empty());
    }
}
