//! Lexer tests using rstest for parameterization.

use rstest::rstest;
use treesh_kernel::WriteMode;
use treesh_kernel::lexer::{CommandLine, parse};

fn lex(input: &str) -> CommandLine {
    parse(input).unwrap_or_else(|| panic!("expected a command in {:?}", input))
}

#[rstest]
#[case::bare("pwd", "pwd", &[])]
#[case::one_arg("cd /home", "cd", &["/home"])]
#[case::extra_spaces("  mv\t/a    /b  ", "mv", &["/a", "/b"])]
#[case::quoted_words("echo \"hello world\"", "echo", &["\"hello", "world\""])]
#[case::dots("cd ../..", "cd", &["../.."])]
fn lexer_commands(#[case] input: &str, #[case] command: &str, #[case] args: &[&str]) {
    let line = lex(input);
    assert_eq!(line.command, command);
    assert_eq!(line.args, args);
}

#[rstest]
#[case::single("ls -R /", &['R'])]
#[case::combined("rm -rf /x", &['f', 'r'])]
#[case::separate("rm -f -r /x", &['f', 'r'])]
#[case::none("ls /", &[])]
fn lexer_flags(#[case] input: &str, #[case] expected: &[char]) {
    let line = lex(input);
    let flags: Vec<char> = line.flags.iter().copied().collect();
    assert_eq!(flags, expected);
}

#[rstest]
#[case::overwrite("echo \"hi\" > /f.txt", WriteMode::Overwrite, "/f.txt", &["\"hi\""])]
#[case::append("echo \"!\" >> /f.txt", WriteMode::Append, "/f.txt", &["\"!\""])]
#[case::after_pwd("pwd > here", WriteMode::Overwrite, "here", &[])]
#[case::ls_output("ls /a /b >> out", WriteMode::Append, "out", &["/a", "/b"])]
fn lexer_redirects(
    #[case] input: &str,
    #[case] mode: WriteMode,
    #[case] path: &str,
    #[case] args: &[&str],
) {
    let line = lex(input);
    let redirect = line.redirect.expect("redirect");
    assert_eq!(redirect.mode, mode);
    assert_eq!(redirect.path, path);
    assert_eq!(line.args, args);
}

#[rstest]
#[case::not_second_to_last("echo > a b")]
#[case::trailing_operator("echo \"x\" >")]
#[case::glued("echo \"x\" >file")]
fn lexer_no_redirect(#[case] input: &str) {
    assert_eq!(lex(input).redirect, None);
}

#[rstest]
#[case::empty("")]
#[case::spaces("    ")]
#[case::tabs("\t\t")]
fn lexer_blank(#[case] input: &str) {
    assert!(parse(input).is_none());
}
