//! Persistence across kernel restarts.

use std::fs;

use tempfile::tempdir;
use treesh_kernel::{Kernel, KernelConfig};

#[test]
fn state_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");

    let mut first = Kernel::new(KernelConfig::named("first").with_snapshot(&path)).unwrap();
    for line in ["mkdir /home", "echo \"kept\" > /home/f", "ln /home/f /link", "cd /home", "exit"] {
        assert!(first.execute(line).ok(), "{line}");
    }
    assert!(first.exit_requested());
    first.shutdown().unwrap();

    let mut second = Kernel::new(KernelConfig::named("second").with_snapshot(&path)).unwrap();
    assert_eq!(second.cwd(), "/home/");
    assert_eq!(second.execute("cat /link").out, "kept");
    assert!(!second.exit_requested());
}

#[test]
fn corrupt_snapshot_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(&path, "{ definitely not a tree").unwrap();

    let mut kernel = Kernel::new(KernelConfig::named("corrupt").with_snapshot(&path)).unwrap();
    assert_eq!(kernel.execute("ls").out, "");
    assert_eq!(kernel.cwd(), "/");
}

#[test]
fn cyclic_snapshot_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(
        &path,
        r#"{"tree":{"nodes":[
            {"name":"","parent":0,"kind":{"Directory":{"children":{}}},"alias":null},
            {"name":"a","parent":2,"kind":{"Directory":{"children":{"b":2}}},"alias":null},
            {"name":"b","parent":1,"kind":{"Directory":{"children":{"a":1}}},"alias":null}
        ]},"cwd":2}"#,
    )
    .unwrap();

    let mut kernel = Kernel::new(KernelConfig::named("cyclic").with_snapshot(&path)).unwrap();
    assert_eq!(kernel.cwd(), "/");
    assert_eq!(kernel.execute("ls").out, "");
    assert!(kernel.execute("mkdir /fresh").ok());
    assert!(kernel.execute("cd /fresh").ok());
    assert_eq!(kernel.cwd(), "/fresh/");
}

#[test]
fn isolated_kernel_writes_nothing() {
    let kernel = Kernel::new(KernelConfig::isolated()).unwrap();
    kernel.shutdown().unwrap();
}
