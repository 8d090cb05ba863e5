//! pwd: Print working directory.

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Pwd tool: print current working directory.
pub struct Pwd;

impl Tool for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("pwd", "Print current working directory")
            .example("Show current directory", "pwd")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let cwd = ctx.vfs.pwd();
        if args.is_empty() {
            ExecResult::success(cwd)
        } else {
            ExecResult::success(format!("pwd: ignoring non-option arguments\n{}", cwd))
        }
    }
}
