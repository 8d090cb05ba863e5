//! cat: Print file contents.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Cat tool: print one file.
pub struct Cat;

impl Tool for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cat", "Print file contents")
            .param(ParamSchema::required("path", "path", "File to print"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(path), 1) = (args.get_positional(0), args.len()) else {
            return ExecResult::failure(1, "cat: missing file operand\nInvalid filename");
        };

        match ctx.vfs.read(path) {
            Ok(content) => ExecResult::success(content),
            Err(e) => ExecResult::failure(1, format!("cat: {}", e)),
        }
    }
}
