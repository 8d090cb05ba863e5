//! cd: Change working directory.

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};
use crate::vfs::ErrorKind;

/// Cd tool: change current working directory.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change current working directory")
            .param(ParamSchema::optional("path", "path", "Directory to change to (default: /)"))
            .example("Go up one level", "cd ..")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.len() > 1 {
            return ExecResult::failure(1, "cd: Too many arguments.");
        }
        let path = args.get_positional(0).unwrap_or("/");

        match ctx.vfs.change_directory(path) {
            Ok(()) => ExecResult::success(""),
            Err(e) => {
                let msg = match e.kind() {
                    ErrorKind::NotFound => format!("{}: no such directory.", path),
                    ErrorKind::InvalidType => format!("{}: Not a directory.", path),
                    _ => e.to_string(),
                };
                ExecResult::failure(1, format!("cd: {}", msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::{Answer, WriteMode};

    fn make_ctx() -> ExecContext {
        let mut ctx = ExecContext::default();
        ctx.vfs.mkdir("/subdir").unwrap();
        ctx.vfs.write("/file.txt", "data", WriteMode::Overwrite).unwrap();
        ctx
    }

    #[test]
    fn test_cd_into_subdir() {
        let mut ctx = make_ctx();
        let result = Cd.execute(ToolArgs::from_positional(["SUBDIR"]), &mut ctx);
        assert!(result.ok());
        assert_eq!(ctx.vfs.pwd(), "/subdir/");
    }

    #[test]
    fn test_cd_no_arg_goes_to_root() {
        let mut ctx = make_ctx();
        ctx.vfs.change_directory("/subdir").unwrap();
        let result = Cd.execute(ToolArgs::new(), &mut ctx);
        assert!(result.ok());
        assert_eq!(ctx.vfs.pwd(), "/");
    }

    #[test]
    fn test_cd_errors() {
        let mut ctx = make_ctx();
        let result = Cd.execute(ToolArgs::from_positional(["file.txt"]), &mut ctx);
        assert_eq!(result.err, "cd: file.txt: Not a directory.");

        let result = Cd.execute(ToolArgs::from_positional(["missing"]), &mut ctx);
        assert_eq!(result.err, "cd: missing: no such directory.");

        ctx.vfs.link("/subdir", "/dangling").unwrap();
        ctx.vfs.remove(&["/subdir"], true, &mut |_: &str| Answer::No);
        let result = Cd.execute(ToolArgs::from_positional(["dangling"]), &mut ctx);
        assert_eq!(result.err, "cd: dangling: no such directory.");

        let result = Cd.execute(ToolArgs::from_positional(["file.txt/x"]), &mut ctx);
        assert_eq!(result.err, "cd: file.txt/x: Not a directory.");

        let result = Cd.execute(ToolArgs::from_positional(["a", "b"]), &mut ctx);
        assert_eq!(result.err, "cd: Too many arguments.");
        assert_eq!(ctx.vfs.pwd(), "/");
    }
}
