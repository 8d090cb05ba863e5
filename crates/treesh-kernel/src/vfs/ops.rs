//! Tree operations on the [`Vfs`] context.
//!
//! `Vfs` is the tree plus the current directory. Every command goes through
//! it; there is no global state.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{VfsError, VfsResult};
use super::node::{Node, NodeId, NodeKind};
use super::resolve::last_segment;
use super::tree::Tree;

/// Answer to a removal prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Anything unrecognised; the same question is asked again.
    Repeat,
}

impl Answer {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "y" => Answer::Yes,
            "n" => Answer::No,
            _ => Answer::Repeat,
        }
    }
}

/// Interactive confirmation used by [`Vfs::remove`].
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Answer;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> Answer,
{
    fn confirm(&mut self, prompt: &str) -> Answer {
        self(prompt)
    }
}

/// How [`Vfs::write`] treats existing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Overwrite,
    Append,
}

/// Result of removing a batch of paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// Number of nodes actually removed.
    pub removed: usize,
    /// Input paths that did not resolve.
    pub missing: Vec<String>,
}

/// One entry of `grep` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrepEntry {
    /// A file with at least one matching line.
    Match { path: String, lines: Vec<String> },
    /// A directory given without the recursive flag.
    Directory(String),
    NotFound(String),
}

/// Where a move, copy or link lands.
struct Destination {
    dir: NodeId,
    name: String,
}

/// The virtual filesystem: a tree and a current directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vfs {
    pub(crate) tree: Tree,
    pub(crate) cwd: NodeId,
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

fn is_entry_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".."
}

impl Vfs {
    /// An empty filesystem positioned at the root.
    pub fn new() -> Self {
        Self {
            tree: Tree::new(),
            cwd: NodeId::ROOT,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    /// Path of the current directory.
    pub fn pwd(&self) -> String {
        self.tree.path(self.cwd)
    }

    pub fn path(&self, id: NodeId) -> String {
        self.tree.path(id)
    }

    /// Resolve relative to the current directory.
    pub fn resolve(&self, path: &str, skip_levels: usize) -> VfsResult<Option<NodeId>> {
        self.tree.resolve(self.cwd, path, skip_levels)
    }

    /// Resolve a path that must exist.
    pub fn lookup(&self, path: &str) -> VfsResult<NodeId> {
        self.resolve(path, 0)?
            .ok_or_else(|| VfsError::NotFound(path.to_string()))
    }

    /// Create a single directory. The parent must already exist.
    pub fn mkdir(&mut self, path: &str) -> VfsResult<NodeId> {
        let trimmed = path.trim_end_matches('/');
        let name = last_segment(trimmed)
            .filter(|name| is_entry_name(name))
            .ok_or_else(|| VfsError::PathInvalid(path.to_string()))?;

        let parent = self
            .resolve(trimmed, 1)?
            .and_then(|id| self.tree.effective(id))
            .ok_or_else(|| VfsError::PathInvalid(path.to_string()))?;
        if self.tree.is_file(parent) {
            return Err(VfsError::NotADirectory(path.to_string()));
        }
        if self.tree.contains(parent, name) {
            return Err(VfsError::AlreadyExists(path.to_string()));
        }

        let id = self
            .tree
            .insert(parent, Node::directory(name))
            .ok_or_else(|| VfsError::PathInvalid(path.to_string()))?;
        debug!(path = %self.tree.path(id), "created directory");
        Ok(id)
    }

    /// Create every path in turn. A failure does not stop the batch; the
    /// errors come back in input order.
    pub fn create_directories<S: AsRef<str>>(&mut self, paths: &[S]) -> Vec<VfsError> {
        paths
            .iter()
            .filter_map(|path| self.mkdir(path.as_ref()).err())
            .collect()
    }

    pub fn change_directory(&mut self, path: &str) -> VfsResult<()> {
        let id = self
            .resolve(path, 0)?
            .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        let target = self
            .tree
            .effective(id)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        if self.tree.is_file(target) {
            return Err(VfsError::NotADirectory(path.to_string()));
        }
        self.cwd = id;
        Ok(())
    }

    /// Work out the destination directory and entry name for `new`.
    ///
    /// A trailing `/` (or a bare `.`/`..` ending) names the directory itself
    /// and keeps `current_name`. Otherwise the last segment is the new name
    /// and the rest is the directory. The directory is returned already
    /// dereferenced through aliases.
    fn destination(&self, new: &str, current_name: &str) -> VfsResult<Destination> {
        let invalid = || VfsError::InvalidDestination(new.to_string());

        let (dir, name) = match last_segment(new) {
            Some(name) if !new.ends_with('/') && is_entry_name(name) => {
                (self.resolve(new, 1)?, name.to_string())
            }
            _ => (self.resolve(new, 0)?, current_name.to_string()),
        };

        let dir = dir.ok_or_else(invalid)?;
        let dir = self.tree.effective(dir).ok_or_else(invalid)?;
        if self.tree.is_file(dir) {
            return Err(VfsError::NotADirectory(new.to_string()));
        }
        Ok(Destination { dir, name })
    }

    fn name_of(&self, id: NodeId) -> String {
        self.tree
            .get(id)
            .map(|n| n.name().to_string())
            .unwrap_or_default()
    }

    /// Move (and possibly rename) a node.
    ///
    /// Every check runs before the tree is touched, so a failed move leaves
    /// everything where it was.
    pub fn move_node(&mut self, old: &str, new: &str) -> VfsResult<()> {
        let source = self.lookup(old)?;
        let dest = self.destination(new, &self.name_of(source))?;

        if self.tree.is_within(dest.dir, source) {
            return Err(VfsError::SelfContainment {
                path: old.to_string(),
                destination: new.to_string(),
            });
        }
        if self.tree.contains(dest.dir, &dest.name) {
            return Err(VfsError::AlreadyExists(new.to_string()));
        }

        self.tree.detach(source);
        self.tree.rename(source, &dest.name);
        self.tree.add_item(dest.dir, source);
        debug!(from = old, to = %self.tree.path(source), "moved");
        Ok(())
    }

    /// Deep-copy a node. Copying a path onto itself is a no-op.
    pub fn copy(&mut self, old: &str, new: &str) -> VfsResult<()> {
        if old == new {
            return Ok(());
        }
        let source = self.lookup(old)?;
        let concrete = self
            .tree
            .effective(source)
            .ok_or_else(|| VfsError::NotFound(old.to_string()))?;
        let dest = self.destination(new, &self.name_of(source))?;

        if self.tree.is_within(dest.dir, source) || self.tree.is_within(dest.dir, concrete) {
            return Err(VfsError::CopyIntoItself {
                path: old.to_string(),
                destination: new.to_string(),
            });
        }
        if self.tree.contains(dest.dir, &dest.name) {
            return Err(VfsError::AlreadyExists(new.to_string()));
        }

        let copied = self
            .copy_node(concrete, dest.dir, &dest.name)
            .ok_or_else(|| VfsError::InvalidDestination(new.to_string()))?;
        debug!(from = old, to = %self.tree.path(copied), "copied");
        Ok(())
    }

    /// Recreate `source` as `name` under `dir`. Aliases met on the way stay
    /// aliases to the same target.
    fn copy_node(&mut self, source: NodeId, dir: NodeId, name: &str) -> Option<NodeId> {
        let node = self.tree.get(source)?.clone();
        let copy = match (node.alias_target(), node.kind()) {
            (Some(target), _) => Node::alias(name, target, node.is_dir()),
            (None, NodeKind::File { content }) => Node::file(name, content.clone()),
            (None, NodeKind::Directory { .. }) => Node::directory(name),
        };
        let id = self.tree.insert(dir, copy)?;

        if !node.is_alias() && node.is_dir() {
            for child in self.tree.own_children(source) {
                let child_name = self.name_of(child);
                self.copy_node(child, id, &child_name)?;
            }
        }
        Some(id)
    }

    /// Remove every path in `paths`.
    ///
    /// Each input is walked deepest first. Unless `force` is set, files and
    /// aliases are confirmed before removal; a directory goes once it is
    /// empty, so a declined child keeps its directory alive. Missing paths
    /// are reported, not fatal. The root itself is never removed.
    pub fn remove<S: AsRef<str>>(
        &mut self,
        paths: &[S],
        force: bool,
        confirm: &mut dyn Confirm,
    ) -> RemoveOutcome {
        let mut outcome = RemoveOutcome::default();

        for path in paths {
            let path = path.as_ref();
            let Ok(Some(id)) = self.resolve(path, 0) else {
                outcome.missing.push(path.to_string());
                continue;
            };

            for entry in self.walk(id, true) {
                if entry == NodeId::ROOT || !self.tree.is_live(entry) {
                    continue;
                }
                let plain_dir = self.tree.is_plain_dir(entry);
                if plain_dir && self.tree.size(entry) != Some(0) {
                    continue;
                }
                if !force && !plain_dir && !self.confirm_removal(entry, confirm) {
                    continue;
                }
                self.remove_node(entry);
                outcome.removed += 1;
            }
        }
        outcome
    }

    fn confirm_removal(&self, id: NodeId, confirm: &mut dyn Confirm) -> bool {
        let Some(node) = self.tree.get(id) else {
            return false;
        };
        let prompt = format!(
            "Really remove {} from {}? (y/n) ",
            node.name(),
            self.tree.path(node.parent())
        );
        loop {
            match confirm.confirm(&prompt) {
                Answer::Yes => return true,
                Answer::No => return false,
                Answer::Repeat => {}
            }
        }
    }

    fn remove_node(&mut self, id: NodeId) {
        if self.tree.is_within(self.cwd, id) {
            self.cwd = self
                .tree
                .get(id)
                .map(Node::parent)
                .unwrap_or(NodeId::ROOT);
        }
        debug!(path = %self.tree.path(id), "removed");
        self.tree.remove_item(id);
    }

    /// Depth-first enumeration under `id`, children before their parent.
    ///
    /// Aliases are recorded but never entered. With `include_files` false
    /// only plain directories are reported.
    pub fn walk(&self, id: NodeId, include_files: bool) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk_into(id, include_files, &mut out);
        out
    }

    fn walk_into(&self, id: NodeId, include_files: bool, out: &mut Vec<NodeId>) {
        let Some(node) = self.tree.get(id) else {
            return;
        };
        if node.is_alias() || node.is_file() {
            if include_files {
                out.push(id);
            }
            return;
        }
        for child in self.tree.own_children(id) {
            self.walk_into(child, include_files, out);
        }
        out.push(id);
    }

    /// [`walk`](Self::walk) rendered as paths.
    pub fn walk_paths(&self, path: &str, include_files: bool) -> VfsResult<Vec<String>> {
        let id = self.lookup(path)?;
        Ok(self
            .walk(id, include_files)
            .into_iter()
            .map(|id| self.tree.path(id))
            .collect())
    }

    /// Plain directories under `id` (itself included), parents first.
    pub fn directories_preorder(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if !self.tree.is_plain_dir(current) {
                continue;
            }
            out.push(current);
            pending.extend(self.tree.own_children(current).into_iter().rev());
        }
        out
    }

    /// Paths under each input that match `pattern`.
    ///
    /// An empty `paths` searches the current directory. A directory alias
    /// given as input is searched through its target. Inputs that do not
    /// resolve contribute nothing.
    pub fn find<S: AsRef<str>>(&self, pattern: &Regex, paths: &[S]) -> Vec<String> {
        let roots: Vec<NodeId> = if paths.is_empty() {
            vec![self.cwd]
        } else {
            paths
                .iter()
                .filter_map(|p| self.resolve(p.as_ref(), 0).ok().flatten())
                .collect()
        };

        roots
            .into_iter()
            .filter_map(|id| self.tree.effective(id))
            .flat_map(|id| self.walk(id, true))
            .map(|id| self.tree.path(id))
            .filter(|path| pattern.is_match(path))
            .collect()
    }

    /// Literal line search.
    pub fn grep<S: AsRef<str>>(&self, pattern: &str, paths: &[S], recursive: bool) -> Vec<GrepEntry> {
        let mut entries = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let Ok(Some(id)) = self.resolve(path, 0) else {
                entries.push(GrepEntry::NotFound(path.to_string()));
                continue;
            };
            let Some(target) = self.tree.effective(id) else {
                entries.push(GrepEntry::NotFound(path.to_string()));
                continue;
            };

            if self.tree.is_file(target) {
                entries.extend(self.grep_file(id, pattern));
            } else if recursive {
                for entry in self.walk(target, true) {
                    if self.tree.is_file(entry) {
                        entries.extend(self.grep_file(entry, pattern));
                    }
                }
            } else {
                entries.push(GrepEntry::Directory(path.to_string()));
            }
        }
        entries
    }

    fn grep_file(&self, id: NodeId, pattern: &str) -> Option<GrepEntry> {
        let content = self.tree.content(id)?;
        let lines: Vec<String> = content
            .split('\n')
            .filter(|line| line.contains(pattern))
            .map(str::to_string)
            .collect();
        if lines.is_empty() {
            return None;
        }
        Some(GrepEntry::Match {
            path: self.tree.path(id),
            lines,
        })
    }

    /// Create an alias at `link_path` pointing at `target`.
    ///
    /// Chains collapse: linking to an alias points the new alias at whatever
    /// that alias resolves to.
    pub fn link(&mut self, target: &str, link_path: &str) -> VfsResult<NodeId> {
        let source = self.lookup(target)?;
        let concrete = self
            .tree
            .effective(source)
            .ok_or_else(|| VfsError::NotFound(target.to_string()))?;
        let dest = self.destination(link_path, &self.name_of(source))?;
        if self.tree.contains(dest.dir, &dest.name) {
            return Err(VfsError::AlreadyExists(link_path.to_string()));
        }

        let is_dir = self.tree.is_dir(concrete);
        let id = self
            .tree
            .insert(dest.dir, Node::alias(dest.name, concrete, is_dir))
            .ok_or_else(|| VfsError::InvalidDestination(link_path.to_string()))?;
        debug!(link = %self.tree.path(id), target = %self.tree.path(concrete), "linked");
        Ok(id)
    }

    /// File content at `path`.
    pub fn read(&self, path: &str) -> VfsResult<String> {
        let id = self.lookup(path)?;
        let target = self
            .tree
            .effective(id)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        if self.tree.is_dir(target) {
            return Err(VfsError::NotAFile(path.to_string()));
        }
        self.tree
            .content(target)
            .map(str::to_string)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))
    }

    /// Write `text` to the file at `path`, creating it if needed.
    pub fn write(&mut self, path: &str, text: &str, mode: WriteMode) -> VfsResult<NodeId> {
        if let Some(id) = self.resolve(path, 0)? {
            let target = self
                .tree
                .effective(id)
                .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
            if self.tree.is_dir(target) {
                return Err(VfsError::NotAFile(path.to_string()));
            }
            let written = match mode {
                WriteMode::Overwrite => self.tree.set_content(id, text),
                WriteMode::Append => self.tree.append_content(id, text),
            };
            if !written {
                return Err(VfsError::NotFound(path.to_string()));
            }
            return Ok(id);
        }

        let invalid = || VfsError::InvalidDestination(path.to_string());
        let name = last_segment(path)
            .filter(|name| !path.ends_with('/') && is_entry_name(name))
            .ok_or_else(invalid)?;
        let dir = self
            .resolve(path, 1)?
            .and_then(|id| self.tree.effective(id))
            .ok_or_else(invalid)?;
        if self.tree.is_file(dir) {
            return Err(VfsError::NotADirectory(path.to_string()));
        }

        let id = self
            .tree
            .insert(dir, Node::file(name, text))
            .ok_or_else(invalid)?;
        debug!(path = %self.tree.path(id), "created file");
        Ok(id)
    }
}
