//! grep: Search file contents.
//!
//! The pattern is a literal string. A pattern that opens with `"` runs over
//! as many arguments as it takes to find the closing quote, so
//! `grep "two words" /notes` searches for `two words`.

use crate::glob::strip_quotes;
use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};
use crate::vfs::GrepEntry;

const USAGE: &str = "Usage: grep [OPTION]... PATTERN [FILE]...";

/// Grep tool: print matching lines per file.
pub struct Grep;

impl Tool for Grep {
    fn name(&self) -> &str {
        "grep"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("grep", "Print lines containing a pattern")
            .param(ParamSchema::required("pattern", "string", "Text to look for; quote it to include spaces"))
            .param(ParamSchema::required("paths", "path...", "Files, or directories with -R"))
            .param(ParamSchema::optional("-R", "flag", "Search directories recursively"))
            .example("Search a tree", "grep -R \"hello world\" /home")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.len() < 2 {
            return ExecResult::failure(1, USAGE);
        }
        let (pattern, paths) = split_pattern(&args.positional);
        if paths.is_empty() {
            return ExecResult::failure(1, USAGE);
        }

        let mut matches = Vec::new();
        let mut errors = Vec::new();
        for entry in ctx.vfs.grep(&pattern, paths, args.has_flag('R')) {
            match entry {
                GrepEntry::Match { path, lines } => {
                    matches.push(format!("{}:\n{}", path, lines.join("\n")));
                }
                GrepEntry::Directory(_) => {
                    errors.push("Cannot call grep on a directory without -R.".to_string());
                }
                GrepEntry::NotFound(path) => {
                    errors.push(format!("grep: {}: No such file or directory", path));
                }
            }
        }

        let code = if errors.is_empty() { 0 } else { 1 };
        ExecResult::from_output(code, matches.join("\n"), errors.join("\n"))
    }
}

/// Separate the (possibly quoted, multi-word) pattern from the paths.
fn split_pattern(args: &[String]) -> (String, &[String]) {
    let Some(first) = args.first() else {
        return (String::new(), args);
    };
    if !first.starts_with('"') {
        return (first.clone(), &args[1..]);
    }

    let mut pattern = first.clone();
    let mut used = 1;
    while !(pattern.len() >= 2 && pattern.ends_with('"')) && used < args.len() {
        pattern.push(' ');
        pattern.push_str(&args[used]);
        used += 1;
    }
    (strip_quotes(&pattern).to_string(), &args[used..])
}
