//! treesh CLI entry point.
//!
//! Usage:
//!   treesh                         # Interactive REPL
//!   treesh -c <command>            # Execute command and exit
//!   treesh --snapshot=<path> ...   # Persist to a specific file
//!   treesh --no-persist ...        # Keep everything in memory

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use treesh_kernel::{Kernel, KernelConfig};

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let mut args = env::args().skip(1).peekable();
    let mut config = KernelConfig::repl();

    // Persistence options come before the mode
    while let Some(arg) = args.peek() {
        if let Some(path) = arg.strip_prefix("--snapshot=") {
            config = config.with_snapshot(path);
        } else if arg == "--no-persist" {
            config = config.without_snapshot();
        } else {
            break;
        }
        args.next();
    }

    match args.next().as_deref() {
        None => {
            treesh_repl::run(config)?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("treesh {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some("-c") => {
            let cmd = args.next().context("-c requires a command argument")?;
            run_command(config, &cmd)
        }

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'treesh --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(
        r#"treesh v{}

An interactive shell over an in-memory directory tree.

Usage:
  treesh [OPTIONS]                 Interactive REPL
  treesh [OPTIONS] -c <command>    Execute command and exit

Options:
  -c <command>                     Execute command string and exit
  --snapshot=<path>                Load from and save to <path>
  --no-persist                     Do not load or save a snapshot
  -h, --help                       Show this help
  -V, --version                    Show version

The snapshot defaults to $XDG_DATA_HOME/treesh/snapshot.json.
Set RUST_LOG=debug for diagnostics.

Examples:
  treesh                           # Start interactive REPL
  treesh -c 'mkdir /notes'         # Run a command against the saved tree
  treesh --no-persist -c 'ls -R /' # Run against an empty tree
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// Execute a command string, save the tree, and exit with its code.
fn run_command(config: KernelConfig, cmd: &str) -> Result<ExitCode> {
    let mut kernel = Kernel::new(config)
        .context("Failed to create kernel")?
        .with_confirm(Box::new(treesh_repl::StdinConfirm));

    let result = kernel.execute(cmd);
    if !result.out.is_empty() {
        println!("{}", result.out);
    }
    if !result.err.is_empty() {
        eprintln!("{}", result.err);
    }

    kernel.shutdown().context("Failed to save snapshot")?;

    if result.ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(u8::try_from(result.code).unwrap_or(1)))
    }
}
