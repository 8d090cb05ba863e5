//! exit: Leave the shell.

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Exit tool: ask the kernel to shut down. Saving happens in
/// [`Kernel::shutdown`](crate::Kernel::shutdown).
pub struct Exit;

impl Tool for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("exit", "Save the filesystem and quit")
    }

    fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        ctx.exit_requested = true;
        ExecResult::success("")
    }
}
