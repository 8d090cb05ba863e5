//! Core tool traits and types.

use std::collections::BTreeSet;

use crate::result::ExecResult;

use super::context::ExecContext;

/// Schema for a tool parameter.
#[derive(Debug, Clone)]
pub struct ParamSchema {
    /// Parameter name.
    pub name: String,
    /// Type hint (string, path, glob).
    pub param_type: String,
    /// Whether this parameter is required.
    pub required: bool,
    /// Description for help text.
    pub description: String,
}

impl ParamSchema {
    /// Create a required parameter.
    pub fn required(name: impl Into<String>, param_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            required: true,
            description: description.into(),
        }
    }

    /// Create an optional parameter.
    pub fn optional(name: impl Into<String>, param_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            required: false,
            description: description.into(),
        }
    }
}

/// A usage example shown in tool help.
#[derive(Debug, Clone)]
pub struct Example {
    pub description: String,
    pub code: String,
}

/// Schema describing a tool's interface.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    /// Tool name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Parameter definitions.
    pub params: Vec<ParamSchema>,
    /// Usage examples.
    pub examples: Vec<Example>,
}

impl ToolSchema {
    /// Create a new tool schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Add a parameter to the schema.
    pub fn param(mut self, param: ParamSchema) -> Self {
        self.params.push(param);
        self
    }

    /// Add a usage example.
    pub fn example(mut self, description: impl Into<String>, code: impl Into<String>) -> Self {
        self.examples.push(Example {
            description: description.into(),
            code: code.into(),
        });
        self
    }
}

/// Parsed arguments ready for tool execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Positional arguments in order.
    pub positional: Vec<String>,
    /// Single-letter flags (`-R`, `-f`).
    pub flags: BTreeSet<char>,
}

impl ToolArgs {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional arguments only.
    pub fn from_positional<I, S>(positional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positional: positional.into_iter().map(Into::into).collect(),
            flags: BTreeSet::new(),
        }
    }

    /// Add a flag.
    pub fn with_flag(mut self, flag: char) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Get a positional argument by index.
    pub fn get_positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    /// Check if a flag is set.
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }
}

/// A command that can be executed.
pub trait Tool: Send + Sync {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult;
}
