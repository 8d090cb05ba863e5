//! treesh-kernel: an in-memory filesystem and the shell commands over it.
//!
//! This crate provides:
//!
//! - **VFS**: Node arena, path resolution, aliases, tree operations, snapshots
//! - **Lexer**: Splits a command line into command, arguments, flags, redirect
//! - **Glob**: `*`/`?` patterns for `find`
//! - **Tools**: Tool trait, registry, and the builtin commands
//! - **Kernel**: Dispatches one command line at a time
//! - **Paths**: XDG-compliant path helpers

pub mod glob;
pub mod help;
pub mod kernel;
pub mod lexer;
pub mod paths;
pub mod result;
pub mod tools;
pub mod vfs;

pub use kernel::{Kernel, KernelConfig};
pub use result::ExecResult;
pub use vfs::{Answer, Confirm, Vfs, VfsError, WriteMode};
