//! rm: Remove files and directories.
//!
//! Directories go with everything inside them, deepest first. Without `-f`
//! each file and alias is confirmed through the context's
//! [`Confirm`](crate::vfs::Confirm).

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Rm tool: remove items from the tree.
pub struct Rm;

impl Tool for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rm", "Remove files and directories")
            .param(ParamSchema::required("paths", "path...", "Items to remove"))
            .param(ParamSchema::optional("-f", "flag", "Do not ask for confirmation"))
            .example("Remove without prompting", "rm -f /tmp")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.is_empty() {
            return ExecResult::failure(1, "rm: missing operand");
        }

        let force = args.has_flag('f');
        let outcome = ctx.vfs.remove(&args.positional, force, ctx.confirm.as_mut());
        tracing::debug!(removed = outcome.removed, missing = outcome.missing.len(), "rm");

        if outcome.missing.is_empty() {
            return ExecResult::success("");
        }
        let messages: Vec<String> = outcome
            .missing
            .iter()
            .map(|path| format!("rm: {}: does not exist.", path))
            .collect();
        ExecResult::from_output(1, "", messages.join("\n"))
    }
}
