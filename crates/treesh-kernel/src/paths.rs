//! XDG paths for treesh state.
//!
//! | What | Location |
//! |------|----------|
//! | Snapshot | `$XDG_DATA_HOME/treesh/snapshot.json` |
//! | REPL history | `$XDG_DATA_HOME/treesh/history.txt` |
//!
//! `$XDG_DATA_HOME` defaults to `~/.local/share`.

use std::path::PathBuf;

use directories::BaseDirs;

/// The user's home directory, or `/tmp` when `$HOME` is unset.
pub fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

/// `$XDG_DATA_HOME`, falling back to `~/.local/share`.
pub fn xdg_data_home() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_dir().join(".local").join("share"))
}

/// Directory holding everything treesh persists.
pub fn data_dir() -> PathBuf {
    xdg_data_home().join("treesh")
}

/// Default location of the filesystem snapshot.
pub fn snapshot_path() -> PathBuf {
    data_dir().join("snapshot.json")
}

/// Default location of the REPL history file.
pub fn history_path() -> PathBuf {
    data_dir().join("history.txt")
}
