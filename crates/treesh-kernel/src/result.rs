//! ExecResult: what every command hands back to the kernel.
//!
//! `out` is what the command prints (or what a redirect writes to a file);
//! `err` carries diagnostics. A command can succeed and still say something
//! on `err`, as `rm` does for paths that were not there.

/// The result of executing one command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Standard output, without a trailing newline.
    pub out: String,
    /// Diagnostics, one message per line.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// Create a result from raw output streams.
    pub fn from_output(code: i64, out: impl Into<String>, err: impl Into<String>) -> Self {
        Self {
            code,
            out: out.into(),
            err: err.into(),
        }
    }

    /// True if the exit code is 0.
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// Everything the user should see, output first.
    pub fn display(&self) -> String {
        match (self.out.is_empty(), self.err.is_empty()) {
            (_, true) => self.out.clone(),
            (true, false) => self.err.clone(),
            (false, false) => format!("{}\n{}", self.out, self.err),
        }
    }
}
