//! treesh REPL: interactive front end for the in-memory filesystem.
//!
//! This REPL provides an interactive interface to the treesh kernel.
//! It handles:
//! - Meta-commands: `/help`, `/quit`, `/cwd`, `/tools`
//! - Command execution via the Kernel
//! - `rm` confirmations read from stdin
//! - Command history via rustyline

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use treesh_kernel::help::{HelpTopic, get_help};
use treesh_kernel::{Answer, Confirm, ExecResult, Kernel, KernelConfig, paths};

/// Result from meta-command handling.
#[derive(Debug)]
enum MetaResult {
    /// Continue with optional output
    Continue(Option<String>),
    /// Leave the REPL
    Exit,
}

/// Reads `rm` confirmations from standard input.
///
/// End of input or a read error counts as `n`, so a closed stdin can never
/// keep re-prompting.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Answer {
        let mut stdout = std::io::stdout();
        if write!(stdout, "{}", prompt).and_then(|_| stdout.flush()).is_err() {
            return Answer::No;
        }
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) => Answer::No,
            Ok(_) => Answer::parse(&line),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                Answer::No
            }
        }
    }
}

/// REPL state: the kernel plus whether the user asked to leave.
pub struct Repl {
    kernel: Kernel,
    done: bool,
}

impl Repl {
    /// A REPL over the persistent, XDG-located filesystem.
    pub fn new() -> Result<Self> {
        Self::with_config(KernelConfig::repl())
    }

    /// Create a new REPL with a custom kernel configuration.
    ///
    /// Removal prompts are declined until [`Repl::interactive`] is called.
    pub fn with_config(config: KernelConfig) -> Result<Self> {
        let kernel = Kernel::new(config).context("Failed to create kernel")?;
        Ok(Self {
            kernel,
            done: false,
        })
    }

    /// Ask on stdin before each non-forced removal.
    pub fn interactive(mut self) -> Self {
        self.kernel.set_confirm(Box::new(StdinConfirm));
        self
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Prompt shown before each line: the current directory and `# `.
    pub fn prompt(&self) -> String {
        format!("{}# ", self.kernel.cwd())
    }

    /// True once `/quit` or `exit` has been processed.
    pub fn should_exit(&self) -> bool {
        self.done || self.kernel.exit_requested()
    }

    /// Process a single line of input.
    ///
    /// Returns `Ok(None)` when there is nothing to print.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        let trimmed = line.trim();

        if trimmed.starts_with('/') {
            return match self.handle_meta_command(trimmed) {
                MetaResult::Continue(output) => Ok(output),
                MetaResult::Exit => {
                    self.done = true;
                    Ok(None)
                }
            };
        }

        if trimmed.is_empty() {
            return Ok(None);
        }

        let result = self.kernel.execute(trimmed);
        Ok(format_result(&result))
    }

    /// Handle a meta-command (starts with /).
    fn handle_meta_command(&mut self, cmd: &str) -> MetaResult {
        let parts: Vec<&str> = cmd.split_whitespace().collect();
        let command = parts.first().copied().unwrap_or("");

        match command {
            "/quit" | "/q" | "/exit" => MetaResult::Exit,
            "/help" | "/h" | "/?" => {
                let topic = match parts.get(1) {
                    Some(name) => HelpTopic::parse_topic(name),
                    None => HelpTopic::Overview,
                };
                MetaResult::Continue(Some(get_help(&topic, &self.kernel.tool_schemas())))
            }
            "/cwd" => MetaResult::Continue(Some(self.kernel.cwd())),
            "/tools" => MetaResult::Continue(Some(get_help(
                &HelpTopic::Tools,
                &self.kernel.tool_schemas(),
            ))),
            _ => MetaResult::Continue(Some(format!(
                "Unknown command: {}\nType /help for available commands.",
                command
            ))),
        }
    }

    /// Save the filesystem snapshot, if the kernel has one.
    pub fn shutdown(&self) -> Result<()> {
        self.kernel.shutdown().context("Failed to save snapshot")
    }
}

/// Format an ExecResult for display. `None` when the command was silent.
fn format_result(result: &ExecResult) -> Option<String> {
    let text = result.display();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Save REPL history to disk.
fn save_history(rl: &mut Editor<(), DefaultHistory>, history_path: &Path) {
    if let Some(parent) = history_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("Failed to create history directory: {}", e);
        }
    }
    if let Err(e) = rl.save_history(history_path) {
        tracing::warn!("Failed to save history: {}", e);
    }
}

/// Run the REPL until `exit`, `/quit`, or end of input, then save.
pub fn run(config: KernelConfig) -> Result<()> {
    println!("treesh v{}", env!("CARGO_PKG_VERSION"));
    println!("Type /help for commands, exit to leave.");

    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("Failed to create editor")?;

    let history_path = paths::history_path();
    if let Err(e) = rl.load_history(&history_path) {
        // Missing on first run
        let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
        if !is_not_found {
            tracing::warn!("Failed to load history: {}", e);
        }
    }

    let mut repl = Repl::with_config(config)?.interactive();
    println!();

    while !repl.should_exit() {
        match rl.readline(&repl.prompt()) {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::warn!("Failed to add history entry: {}", e);
                }

                match repl.process_line(&line) {
                    Ok(Some(output)) => println!("{}", output),
                    Ok(None) => {}
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    save_history(&mut rl, &history_path);
    repl.shutdown()
}
