//! ln: Create aliases.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Ln tool: make a file or directory alias.
pub struct Ln;

impl Tool for Ln {
    fn name(&self) -> &str {
        "ln"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ln", "Create an alias to a file or directory")
            .param(ParamSchema::required("target", "path", "Existing item the alias points at"))
            .param(ParamSchema::required("link", "path", "Where the alias goes"))
            .example("Shortcut to a directory", "ln /home/Documents /docs")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(target), Some(link), 2) = (args.get_positional(0), args.get_positional(1), args.len()) else {
            return ExecResult::failure(1, "ln: missing file operand\nSpecify PATH1 and PATH2");
        };

        match ctx.vfs.link(target, link) {
            Ok(_) => ExecResult::success(""),
            Err(e) => ExecResult::failure(1, format!("ln: {}", e)),
        }
    }
}
