//! find: Search paths by glob.

use crate::glob;
use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Find tool: print every path under the inputs that matches a glob.
pub struct Find;

impl Tool for Find {
    fn name(&self) -> &str {
        "find"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("find", "Find paths matching a pattern")
            .param(ParamSchema::optional("pattern", "glob", "Pattern with * and ? (default: everything)"))
            .param(ParamSchema::optional("paths", "path...", "Where to search (default: .)"))
            .example("All text files under /home", "find *.txt /home")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let pattern = args.get_positional(0).unwrap_or("");
        let paths = args.positional.get(1..).unwrap_or_default();

        let regex = match glob::compile(pattern) {
            Ok(regex) => regex,
            Err(e) => return ExecResult::failure(1, format!("find: {}: {}", pattern, e)),
        };

        let matches = ctx.vfs.find(&regex, paths);
        if matches.is_empty() {
            ExecResult::failure(1, "find: no such file or directory.")
        } else {
            ExecResult::success(matches.join("\n"))
        }
    }
}
