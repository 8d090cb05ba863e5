//! echo: Print quoted text.
//!
//! The text must be wrapped in double quotes. A literal `\n` inside it
//! becomes a newline. Redirection (`> file`, `>> file`) is applied by the
//! kernel to whatever echo prints.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Echo tool: print its quoted argument.
pub struct Echo;

impl Tool for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("echo", "Print quoted text")
            .param(ParamSchema::optional("text", "string", "Text surrounded by double quotes"))
            .example("Write a file", "echo \"hello\" > /greeting.txt")
            .example("Append a line", "echo \"\\nmore\" >> /greeting.txt")
    }

    fn execute(&self, args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
        if args.is_empty() {
            return ExecResult::success("");
        }

        let text = args.positional.join(" ");
        match text.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
            Some(inner) => ExecResult::success(inner.replace("\\n", "\n")),
            None => ExecResult::failure(1, "Echo requires a string with \" & \" surrounding the words"),
        }
    }
}
