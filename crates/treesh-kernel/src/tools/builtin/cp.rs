//! cp: Copy files and directories.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Cp tool: deep-copy a file or directory.
pub struct Cp;

impl Tool for Cp {
    fn name(&self) -> &str {
        "cp"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cp", "Copy a file or directory")
            .param(ParamSchema::required("source", "path", "Item to copy"))
            .param(ParamSchema::required("destination", "path", "New path, or a directory ending in /"))
            .example("Back up a directory", "cp /home /backup")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(source), Some(dest), 2) = (args.get_positional(0), args.get_positional(1), args.len()) else {
            return ExecResult::failure(1, "cp: missing file operand\nSpecify OLDFILE and NEWFILE");
        };

        match ctx.vfs.copy(source, dest) {
            Ok(()) => ExecResult::success(""),
            Err(e) => ExecResult::failure(1, format!("cp: {}", e)),
        }
    }
}
