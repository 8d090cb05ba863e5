//! In-memory virtual filesystem.
//!
//! - **Tree**: node arena with derived paths and alias forwarding
//! - **resolve**: `.`/`..`/absolute/relative path resolution
//! - **Vfs**: the tree plus a current directory, and every operation the
//!   shell offers on it (mkdir, cd, mv, cp, rm, ln, find, grep, read/write)
//! - **snapshot**: JSON persistence of a whole `Vfs`
//!
//! # Aliases
//!
//! `ln` creates aliases. An alias occupies a slot in its own parent but
//! forwards content and listings to its target. Recursive operations record
//! aliases and never walk through them:
//!
//! ```text
//! /
//! ├── home/
//! │   └── notes.txt
//! └── link -> /home/notes.txt
//! ```

mod error;
mod node;
mod ops;
mod resolve;
mod snapshot;
mod tree;

pub use error::{ErrorKind, VfsError, VfsResult};
pub use node::{Node, NodeId, NodeKind};
pub use ops::{Answer, Confirm, GrepEntry, RemoveOutcome, Vfs, WriteMode};
pub use resolve::{last_segment, segments};
pub use tree::Tree;
