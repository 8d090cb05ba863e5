//! End-to-end command tests through the kernel.
//!
//! Each test drives a memory-only kernel with the same lines a user would
//! type and checks what comes back.

use treesh_kernel::{Answer, ExecResult, Kernel};

fn kernel() -> Kernel {
    Kernel::transient().expect("kernel")
}

fn run(kernel: &mut Kernel, line: &str) -> ExecResult {
    kernel.execute(line)
}

fn run_all(kernel: &mut Kernel, lines: &[&str]) {
    for line in lines {
        let result = kernel.execute(line);
        assert!(result.ok(), "{:?} failed: {}", line, result.err);
    }
}

fn out(kernel: &mut Kernel, line: &str) -> String {
    let result = kernel.execute(line);
    assert!(result.ok(), "{:?} failed: {}", line, result.err);
    result.out
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn mkdir_cd_pwd() {
    let mut k = kernel();
    run_all(&mut k, &["mkdir /home", "mkdir /home/docs", "cd /home"]);
    assert_eq!(out(&mut k, "pwd"), "/home/");
}

#[test]
fn cd_relative_and_up() {
    let mut k = kernel();
    run_all(&mut k, &["mkdir /a /a/b /a/b/c", "cd /a/b/c", "cd ../.."]);
    assert_eq!(out(&mut k, "pwd"), "/a/");
    run_all(&mut k, &["cd b/./c"]);
    assert_eq!(out(&mut k, "pwd"), "/a/b/c/");
    run_all(&mut k, &["cd"]);
    assert_eq!(out(&mut k, "pwd"), "/");
}

#[test]
fn paths_are_case_insensitive() {
    let mut k = kernel();
    run_all(&mut k, &["mkdir /Home", "cd /HOME"]);
    assert_eq!(out(&mut k, "pwd"), "/Home/");
    assert_eq!(run(&mut k, "mkdir /home").err, "mkdir: /home: already exists.");
}

// ============================================================================
// Echo, cat, redirection
// ============================================================================

#[test]
fn echo_redirect_and_append() {
    let mut k = kernel();
    let result = run(&mut k, "echo \"hi\" > /f.txt");
    assert!(result.ok());
    assert_eq!(result.out, "");
    assert_eq!(out(&mut k, "cat /f.txt"), "hi");

    run_all(&mut k, &["echo \"!\" >> /f.txt"]);
    assert_eq!(out(&mut k, "cat /f.txt"), "hi!");

    run_all(&mut k, &["echo \"reset\" > /f.txt"]);
    assert_eq!(out(&mut k, "cat /f.txt"), "reset");
}

#[test]
fn redirect_any_command() {
    let mut k = kernel();
    run_all(&mut k, &["mkdir /a /b", "ls > /listing", "pwd >> /listing"]);
    assert_eq!(out(&mut k, "cat /listing"), "a\nb/");
}

#[test]
fn redirect_into_directory_fails() {
    let mut k = kernel();
    run_all(&mut k, &["mkdir /d"]);
    let result = run(&mut k, "echo \"x\" > /d");
    assert!(!result.ok());
    assert_eq!(result.err, "echo: /d: is not a file.");
}

#[test]
fn failed_command_does_not_redirect() {
    let mut k = kernel();
    let result = run(&mut k, "cat /missing > /out");
    assert!(!result.ok());
    assert!(run(&mut k, "cat /out").err.contains("No such file or directory"));
}

// ============================================================================
// ls
// ============================================================================

#[test]
fn ls_root_listing() {
    let mut k = kernel();
    run_all(
        &mut k,
        &["mkdir /dir1 /dir1/subDir1 /dir1/subDir2 /dir2", "echo \"\" > /file1"],
    );
    assert_eq!(out(&mut k, "ls"), "dir1\ndir2\nfile1");
    assert_eq!(out(&mut k, "ls /dir1"), "/dir1:\nsubDir1\nsubDir2");
}

// ============================================================================
// mv / cp
// ============================================================================

#[test]
fn move_preserves_content() {
    let mut k = kernel();
    run_all(
        &mut k,
        &[
            "mkdir /a /a/sub /b",
            "echo \"one\" > /a/x",
            "echo \"two\" > /a/sub/y",
            "mv /a /b/",
        ],
    );
    assert_eq!(out(&mut k, "cat /b/a/x"), "one");
    assert_eq!(out(&mut k, "cat /b/a/sub/y"), "two");
    assert!(!run(&mut k, "cd /a").ok());
}

#[test]
fn move_and_copy_into_self_fail() {
    let mut k = kernel();
    run_all(&mut k, &["mkdir /a /a/sub", "echo \"keep\" > /a/f"]);

    let result = run(&mut k, "mv /a /a/sub/");
    assert_eq!(result.err, "mv: cannot move '/a' to a subdirectory of itself, '/a/sub/'");
    let result = run(&mut k, "cp /a /a/sub/");
    assert_eq!(result.err, "cp: cannot copy '/a' into itself, '/a/sub/'");

    assert_eq!(out(&mut k, "ls -R /a"), "/a:\nf\nsub\n\n/a/sub/:");
    assert_eq!(out(&mut k, "cat /a/f"), "keep");
}

#[test]
fn copy_is_independent() {
    let mut k = kernel();
    run_all(
        &mut k,
        &[
            "mkdir /src",
            "echo \"original\" > /src/f",
            "cp /src /dst",
            "echo \"changed\" > /dst/f",
        ],
    );
    assert_eq!(out(&mut k, "cat /src/f"), "original");
    run_all(&mut k, &["echo \" more\" >> /src/f"]);
    assert_eq!(out(&mut k, "cat /dst/f"), "changed");
}

// ============================================================================
// rm
// ============================================================================

#[test]
fn rm_force_is_idempotent() {
    let mut k = kernel();
    run_all(&mut k, &["mkdir /a /a/b", "echo \"x\" > /a/b/f", "rm -f /a"]);
    assert_eq!(out(&mut k, "ls"), "");
    let again = run(&mut k, "rm -f /a");
    assert_eq!(again.err, "rm: /a: does not exist.");
}

#[test]
fn rm_prompts_through_confirm() {
    let mut k = kernel().with_confirm(Box::new(|prompt: &str| {
        if prompt.starts_with("Really remove keep") {
            Answer::No
        } else {
            Answer::Yes
        }
    }));
    run_all(&mut k, &["mkdir /d", "echo \"\" > /d/keep", "echo \"\" > /d/drop", "rm /d"]);
    assert_eq!(out(&mut k, "ls /d"), "/d:\nkeep");
}

#[test]
fn rm_root_keeps_root() {
    let mut k = kernel();
    run_all(&mut k, &["mkdir /a", "cd /a", "rm -f /"]);
    assert_eq!(out(&mut k, "pwd"), "/");
    assert_eq!(out(&mut k, "ls"), "");
}

// ============================================================================
// ln
// ============================================================================

#[test]
fn file_alias_round_trip() {
    let mut k = kernel();
    run_all(&mut k, &["echo \"base\" > /orig", "ln /orig /alias", "echo \"+\" >> /alias"]);
    assert_eq!(out(&mut k, "cat /orig"), "base+");
    run_all(&mut k, &["echo \"new\" > /orig"]);
    assert_eq!(out(&mut k, "cat /alias"), "new");

    run_all(&mut k, &["rm -f /alias"]);
    assert_eq!(out(&mut k, "cat /orig"), "new");
}

#[test]
fn directory_alias_lists_target() {
    let mut k = kernel();
    run_all(&mut k, &["mkdir /home /home/docs", "echo \"x\" > /home/docs/a", "ln /home/docs /d"]);
    assert_eq!(out(&mut k, "ls /d"), "/d:\na");
    run_all(&mut k, &["cd /d", "echo \"y\" > b"]);
    assert_eq!(out(&mut k, "ls /home/docs"), "/home/docs:\na\nb");
}

#[test]
fn dangling_alias_is_not_found() {
    let mut k = kernel();
    run_all(&mut k, &["echo \"x\" > /f", "ln /f /g", "rm -f /f"]);
    assert_eq!(run(&mut k, "cat /g").err, "cat: /g: No such file or directory");
    assert_eq!(out(&mut k, "ls /g"), "/g: No such file or directory");
}

#[test]
fn alias_inside_its_target_does_not_recurse() {
    let mut k = kernel();
    run_all(&mut k, &["mkdir /a", "ln /a /a/self", "cp /a /b"]);
    assert_eq!(out(&mut k, "find * /a"), "/a/self/\n/a/");
    assert_eq!(out(&mut k, "ls -R /b"), "/b:\nself");
}

// ============================================================================
// find / grep
// ============================================================================

#[test]
fn find_example() {
    let mut k = kernel();
    run_all(
        &mut k,
        &["mkdir /home /home/Desktop", "echo \"Hello\" > /home/Desktop/readme.txt"],
    );
    assert_eq!(out(&mut k, "find re /home/"), "/home/Desktop/readme.txt");
    assert_eq!(run(&mut k, "find zzz /home").err, "find: no such file or directory.");
}

#[test]
fn grep_recursive() {
    let mut k = kernel();
    run_all(
        &mut k,
        &[
            "mkdir /n /n/deep",
            "echo \"alpha\\nbeta gamma\" > /n/one",
            "echo \"gamma ray\" > /n/deep/two",
        ],
    );
    assert_eq!(
        out(&mut k, "grep -R gamma /n"),
        "/n/deep/two:\ngamma ray\n/n/one:\nbeta gamma"
    );
    assert_eq!(out(&mut k, "grep \"beta gamma\" /n/one"), "/n/one:\nbeta gamma");
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn unknown_command() {
    let mut k = kernel();
    let result = run(&mut k, "frobnicate now");
    assert_eq!(result.code, 127);
    assert_eq!(result.err, "treesh: frobnicate: command not found");
}

#[test]
fn blank_line_is_a_noop() {
    let mut k = kernel();
    assert_eq!(run(&mut k, "   "), ExecResult::success(""));
}

#[test]
fn exit_sets_flag() {
    let mut k = kernel();
    assert!(!k.exit_requested());
    run_all(&mut k, &["exit"]);
    assert!(k.exit_requested());
}

#[test]
fn man_ln() {
    let mut k = kernel();
    assert_eq!(
        out(&mut k, "man ln"),
        "ln PATH1 PATH2\nMake PATH1 a symbolic link to PATH2. Both PATH1 and PATH2 may\n\
         be relative to the current directory or may be full paths. PATH1 is a\n\
         synonym for PATH2, If PATH2 is deleted or moved, then PATH1 will still\n\
         exist but is invalid."
    );
}
