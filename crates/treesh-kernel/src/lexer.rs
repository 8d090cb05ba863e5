//! Command-line lexer.
//!
//! One line is one command. The line is split on whitespace; the first word
//! names the command and the rest are arguments:
//!
//! - Words starting with `-` (and longer than `-` itself) are option flags.
//!   `-rf` sets both `r` and `f`.
//! - If the second-to-last argument is `>` or `>>`, the last two arguments
//!   become an output redirect and are removed from the arguments.
//!
//! Quotes are not interpreted here. `echo "a b"` yields the two arguments
//! `"a` and `b"`; commands that accept quoted text put it back together.

use std::collections::BTreeSet;

use crate::vfs::WriteMode;

/// Output redirection requested on a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub mode: WriteMode,
    pub path: String,
}

/// A lexed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: String,
    pub args: Vec<String>,
    pub flags: BTreeSet<char>,
    pub redirect: Option<Redirect>,
}

impl CommandLine {
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }
}

/// Lex a line. Returns `None` for a blank line.
pub fn parse(line: &str) -> Option<CommandLine> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_string();

    let mut args = Vec::new();
    let mut flags = BTreeSet::new();
    for word in words {
        match word.strip_prefix('-') {
            Some(letters) if !letters.is_empty() => flags.extend(letters.chars()),
            _ => args.push(word.to_string()),
        }
    }

    let redirect = split_redirect(&mut args);
    Some(CommandLine {
        command,
        args,
        flags,
        redirect,
    })
}

fn split_redirect(args: &mut Vec<String>) -> Option<Redirect> {
    let len = args.len();
    if len < 2 {
        return None;
    }
    let mode = match args[len - 2].as_str() {
        ">" => WriteMode::Overwrite,
        ">>" => WriteMode::Append,
        _ => return None,
    };
    let path = args.pop()?;
    args.pop();
    Some(Redirect { mode, path })
}
