//! Execution context for tools.

use crate::vfs::{Answer, Confirm, Vfs};

use super::traits::ToolSchema;

/// Confirmation used when nothing interactive is attached: every prompt is
/// declined, so `rm` without `-f` removes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Decline;

impl Confirm for Decline {
    fn confirm(&mut self, _prompt: &str) -> Answer {
        Answer::No
    }
}

/// Execution context passed to tools.
///
/// Owns the filesystem and the confirmation capability used by `rm`.
pub struct ExecContext {
    /// The filesystem being operated on.
    pub vfs: Vfs,
    /// Asked before each non-forced removal.
    pub confirm: Box<dyn Confirm>,
    /// Tool schemas, for help listings.
    pub tool_schemas: Vec<ToolSchema>,
    /// Set by `exit`.
    pub exit_requested: bool,
}

impl ExecContext {
    /// A context over `vfs` that declines every removal prompt.
    pub fn new(vfs: Vfs) -> Self {
        Self {
            vfs,
            confirm: Box::new(Decline),
            tool_schemas: Vec::new(),
            exit_requested: false,
        }
    }

    /// Replace the confirmation capability.
    pub fn with_confirm(mut self, confirm: Box<dyn Confirm>) -> Self {
        self.confirm = confirm;
        self
    }

    /// Set the tool schemas for help.
    pub fn set_tool_schemas(&mut self, schemas: Vec<ToolSchema>) {
        self.tool_schemas = schemas;
    }
}

impl Default for ExecContext {
    fn default() -> Self {
        Self::new(Vfs::new())
    }
}
