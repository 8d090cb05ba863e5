//! Help and manual pages.
//!
//! Manual pages and the overview are embedded at compile time from the
//! crate-local docs/ directory. Tool listings are generated from schemas.

use crate::tools::ToolSchema;

/// Help topics shown by the REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpTopic {
    /// What treesh is and how to get further help.
    Overview,
    /// Every registered command with its parameters.
    Tools,
    /// Schema help for one command.
    Tool(String),
}

impl HelpTopic {
    pub fn parse_topic(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" | "overview" | "help" => Self::Overview,
            "tools" | "builtins" | "commands" => Self::Tools,
            other => Self::Tool(other.to_string()),
        }
    }
}

const OVERVIEW: &str = include_str!("../docs/help/overview.md");

const MANUALS: &[(&str, &str)] = &[
    ("cat", include_str!("../docs/man/cat.txt")),
    ("cd", include_str!("../docs/man/cd.txt")),
    ("cp", include_str!("../docs/man/cp.txt")),
    ("echo", include_str!("../docs/man/echo.txt")),
    ("exit", include_str!("../docs/man/exit.txt")),
    ("find", include_str!("../docs/man/find.txt")),
    ("grep", include_str!("../docs/man/grep.txt")),
    ("ln", include_str!("../docs/man/ln.txt")),
    ("ls", include_str!("../docs/man/ls.txt")),
    ("man", include_str!("../docs/man/man.txt")),
    ("mkdir", include_str!("../docs/man/mkdir.txt")),
    ("mv", include_str!("../docs/man/mv.txt")),
    ("pwd", include_str!("../docs/man/pwd.txt")),
    ("rm", include_str!("../docs/man/rm.txt")),
];

/// Manual page for `command`, if there is one.
pub fn manual(command: &str) -> Option<&'static str> {
    MANUALS
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, text)| text.trim_end())
}

/// Names of every command with a manual page.
pub fn manual_names() -> impl Iterator<Item = &'static str> {
    MANUALS.iter().map(|(name, _)| *name)
}

pub fn get_help(topic: &HelpTopic, tool_schemas: &[ToolSchema]) -> String {
    match topic {
        HelpTopic::Overview => OVERVIEW.trim_end().to_string(),
        HelpTopic::Tools => format_tool_list(tool_schemas),
        HelpTopic::Tool(name) => format_tool_help(name, tool_schemas),
    }
}

fn format_tool_help(name: &str, schemas: &[ToolSchema]) -> String {
    let Some(schema) = schemas.iter().find(|s| s.name == name) else {
        return format!("Unknown command: {}\n\nUse '/tools' for the command list.", name);
    };

    let mut output = format!("{} — {}\n", schema.name, schema.description);
    if !schema.params.is_empty() {
        output.push_str("\nParameters:\n");
        for param in &schema.params {
            let req = if param.required { " (required)" } else { "" };
            output.push_str(&format!(
                "  {} : {}{}\n    {}\n",
                param.name, param.param_type, req, param.description
            ));
        }
    }
    if !schema.examples.is_empty() {
        output.push_str("\nExamples:\n");
        for example in &schema.examples {
            output.push_str(&format!("  # {}\n  {}\n", example.description, example.code));
        }
    }
    output.trim_end().to_string()
}

fn format_tool_list(schemas: &[ToolSchema]) -> String {
    let width = schemas.iter().map(|s| s.name.len()).max().unwrap_or(0);
    schemas
        .iter()
        .map(|s| format!("  {:width$}  {}", s.name, s.description, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
