//! man: Print a manual page.

use crate::help;
use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Man tool: print the embedded manual for a command.
pub struct Man;

impl Tool for Man {
    fn name(&self) -> &str {
        "man"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("man", "Show the manual for a command")
            .param(ParamSchema::optional("command", "string", "Command to document"))
    }

    fn execute(&self, args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
        let command = args.get_positional(0).unwrap_or("");
        if command.is_empty() {
            return ExecResult::success("What manual page do you want?");
        }
        match help::manual(command) {
            Some(text) => ExecResult::success(text),
            None => ExecResult::failure(1, "There is no manual for this command."),
        }
    }
}
