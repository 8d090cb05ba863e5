//! mkdir: Create directories.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Mkdir tool: create one directory per argument.
pub struct Mkdir;

impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mkdir", "Create directories")
            .param(ParamSchema::required("paths", "path...", "Directories to create; parents must exist"))
            .example("Create two directories", "mkdir /home /home/docs")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.is_empty() {
            return ExecResult::failure(1, "mkdir: missing operand");
        }

        let errors = ctx.vfs.create_directories(&args.positional);
        if errors.is_empty() {
            ExecResult::success("")
        } else {
            let messages: Vec<String> = errors.iter().map(|e| format!("mkdir: {}", e)).collect();
            ExecResult::failure(1, messages.join("\n"))
        }
    }
}
