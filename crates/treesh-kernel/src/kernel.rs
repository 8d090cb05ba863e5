//! The Kernel: owns the filesystem and runs one command line at a time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   Kernel                    │
//! │  ┌──────────────┐  ┌─────────────────────┐  │
//! │  │ ToolRegistry │  │ ExecContext         │  │
//! │  │  (builtins)  │  │  Vfs (tree + cwd)   │  │
//! │  │              │  │  Confirm (rm)       │  │
//! │  └──────────────┘  └─────────────────────┘  │
//! │          snapshot path (optional)           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! A line is lexed, dispatched to its tool, and if it carried `> file` or
//! `>> file` the tool's output is written into the tree instead of being
//! returned.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::lexer;
use crate::paths;
use crate::result::ExecResult;
use crate::tools::{ExecContext, ToolArgs, ToolRegistry, ToolSchema, register_builtins};
use crate::vfs::{Confirm, Vfs};

/// Configuration for kernel initialization.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Name of this kernel (for identification in logs).
    pub name: String,

    /// Where the filesystem is loaded from at startup and saved to on
    /// shutdown. `None` keeps everything in memory.
    pub snapshot: Option<PathBuf>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::repl()
    }
}

impl KernelConfig {
    /// Interactive use: persist to the XDG snapshot path.
    pub fn repl() -> Self {
        Self {
            name: "repl".to_string(),
            snapshot: Some(paths::snapshot_path()),
        }
    }

    /// Memory only. Nothing is read or written on disk.
    ///
    /// Useful for tests and one-shot commands.
    pub fn isolated() -> Self {
        Self {
            name: "isolated".to_string(),
            snapshot: None,
        }
    }

    /// Create a config with the given name (memory only).
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            snapshot: None,
        }
    }

    /// Persist to a specific snapshot file.
    pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot = Some(path.into());
        self
    }

    /// Drop persistence.
    pub fn without_snapshot(mut self) -> Self {
        self.snapshot = None;
        self
    }
}

/// The treesh kernel.
pub struct Kernel {
    name: String,
    tools: ToolRegistry,
    ctx: ExecContext,
    snapshot: Option<PathBuf>,
}

impl Kernel {
    /// Create a new kernel with the given configuration.
    ///
    /// An existing snapshot is loaded; one that cannot be read is logged
    /// and replaced by an empty filesystem.
    pub fn new(config: KernelConfig) -> Result<Self> {
        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);

        let vfs = match &config.snapshot {
            Some(path) if path.exists() => Self::load_snapshot(path),
            _ => Vfs::new(),
        };

        let mut ctx = ExecContext::new(vfs);
        ctx.set_tool_schemas(tools.schemas());

        tracing::debug!(name = %config.name, snapshot = ?config.snapshot, "kernel ready");
        Ok(Self {
            name: config.name,
            tools,
            ctx,
            snapshot: config.snapshot,
        })
    }

    /// A memory-only kernel.
    pub fn transient() -> Result<Self> {
        Self::new(KernelConfig::isolated())
    }

    fn load_snapshot(path: &Path) -> Vfs {
        match Vfs::load(path) {
            Ok(vfs) => {
                tracing::info!(path = %path.display(), "loaded snapshot");
                vfs
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %format!("{:#}", e), "ignoring unreadable snapshot");
                Vfs::new()
            }
        }
    }

    /// Install the confirmation used by `rm` without `-f`.
    pub fn with_confirm(mut self, confirm: Box<dyn Confirm>) -> Self {
        self.set_confirm(confirm);
        self
    }

    pub fn set_confirm(&mut self, confirm: Box<dyn Confirm>) {
        self.ctx.confirm = confirm;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vfs(&self) -> &Vfs {
        &self.ctx.vfs
    }

    /// Current directory path, as `pwd` prints it.
    pub fn cwd(&self) -> String {
        self.ctx.vfs.pwd()
    }

    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        self.tools.schemas()
    }

    /// True once `exit` has run.
    pub fn exit_requested(&self) -> bool {
        self.ctx.exit_requested
    }

    /// Run one command line.
    #[tracing::instrument(level = "info", skip(self), fields(kernel = %self.name))]
    pub fn execute(&mut self, input: &str) -> ExecResult {
        let Some(line) = lexer::parse(input) else {
            return ExecResult::success("");
        };
        let Some(tool) = self.tools.get(&line.command) else {
            return ExecResult::failure(127, format!("treesh: {}: command not found", line.command));
        };

        let args = ToolArgs {
            positional: line.args,
            flags: line.flags,
        };
        let mut result = tool.execute(args, &mut self.ctx);
        tracing::debug!(command = %line.command, code = result.code, "dispatched");

        if let Some(redirect) = line.redirect {
            if result.ok() {
                match self.ctx.vfs.write(&redirect.path, &result.out, redirect.mode) {
                    Ok(_) => result.out.clear(),
                    Err(e) => {
                        result = ExecResult::failure(1, format!("{}: {}", line.command, e));
                    }
                }
            }
        }
        result
    }

    /// Persist the filesystem, if this kernel has a snapshot path.
    pub fn shutdown(&self) -> Result<()> {
        match &self.snapshot {
            Some(path) => self.ctx.vfs.save(path),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("name", &self.name)
            .field("cwd", &self.cwd())
            .field("snapshot", &self.snapshot)
            .finish()
    }
}
