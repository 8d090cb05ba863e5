//! Tool system for treesh.
//!
//! Every command is a tool. The kernel lexes a line, looks the command up
//! in the registry, and hands the tool its arguments and the context that
//! owns the filesystem.
//!
//! # Architecture
//!
//! ```text
//! ToolRegistry
//! └── Builtins (mkdir, cd, ls, pwd, mv, cp, cat, rm, ln, find, grep, echo, man, exit)
//! ```

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::{Decline, ExecContext};
pub use registry::ToolRegistry;
pub use traits::{Example, ParamSchema, Tool, ToolArgs, ToolSchema};
