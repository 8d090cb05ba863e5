//! ls: List directory contents.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};
use crate::vfs::{NodeId, Vfs};

/// Ls tool: list directory contents.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List directory contents")
            .param(ParamSchema::optional("paths", "path...", "Files or directories to list (default: .)"))
            .param(ParamSchema::optional("-R", "flag", "List subdirectories recursively"))
            .example("List the current directory", "ls")
            .example("List a tree", "ls -R /home")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let recursive = args.has_flag('R');
        let vfs = &ctx.vfs;

        if args.is_empty() && !recursive {
            return ExecResult::success(vfs.tree().names(vfs.cwd()).join("\n"));
        }

        let paths = if args.is_empty() {
            vec![vfs.pwd()]
        } else {
            args.positional
        };
        let blocks: Vec<String> = paths
            .iter()
            .map(|path| list_path(vfs, path, recursive))
            .collect();
        ExecResult::success(blocks.join("\n\n"))
    }
}

fn list_path(vfs: &Vfs, arg: &str, recursive: bool) -> String {
    let not_found = || format!("{}: No such file or directory", arg);
    let Ok(Some(id)) = vfs.resolve(arg, 0) else {
        return not_found();
    };
    let tree = vfs.tree();
    if tree.effective(id).is_none() {
        return not_found();
    }
    if !tree.is_dir(id) {
        return arg.to_string();
    }
    if !recursive || !tree.is_plain_dir(id) {
        return block(vfs, arg, id);
    }

    vfs.directories_preorder(id)
        .into_iter()
        .map(|dir| {
            if dir == id {
                block(vfs, arg, dir)
            } else {
                block(vfs, &vfs.path(dir), dir)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn block(vfs: &Vfs, label: &str, dir: NodeId) -> String {
    format!("{}{}", label, vfs.tree().list(dir))
}
