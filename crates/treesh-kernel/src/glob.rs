//! Glob patterns for `find`.
//!
//! Only two wildcards exist:
//! - `*` matches any run of characters (lazily)
//! - `?` matches at most one character
//!
//! Everything else is literal. Patterns become regexes that are searched,
//! not anchored, so `re` finds `/home/Desktop/readme.txt`.

use regex::Regex;

/// Translate a glob into regex source.
///
/// # Examples
/// ```
/// use treesh_kernel::glob::glob_to_regex;
///
/// assert_eq!(glob_to_regex("*.txt"), r".*?\.txt");
/// assert_eq!(glob_to_regex("file?"), "file.?");
/// ```
pub fn glob_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut buf = [0u8; 4];
    for c in pattern.chars() {
        match c {
            '*' => out.push_str(".*?"),
            '?' => out.push_str(".?"),
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    out
}

/// Compile a glob, dropping one layer of surrounding double quotes.
pub fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&glob_to_regex(strip_quotes(pattern)))
}

/// `"text"` → `text`; anything not wrapped in quotes is returned as is.
pub fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(text)
}
