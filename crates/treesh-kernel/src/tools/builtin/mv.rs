//! mv: Move or rename.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Mv tool: move a file or directory.
pub struct Mv;

impl Tool for Mv {
    fn name(&self) -> &str {
        "mv"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mv", "Move or rename a file or directory")
            .param(ParamSchema::required("source", "path", "Item to move"))
            .param(ParamSchema::required("destination", "path", "New path, or a directory ending in /"))
            .example("Rename", "mv notes.txt todo.txt")
            .example("Move into a directory", "mv notes.txt /home/")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(source), Some(dest), 2) = (args.get_positional(0), args.get_positional(1), args.len()) else {
            return ExecResult::failure(1, "mv: missing file operand\nSpecify OLDFILE and NEWFILE");
        };

        match ctx.vfs.move_node(source, dest) {
            Ok(()) => ExecResult::success(""),
            Err(e) => ExecResult::failure(1, format!("mv: {}", e)),
        }
    }
}
