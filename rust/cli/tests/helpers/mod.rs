#![allow(dead_code)]

use std::io::Cursor;

pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the CLI in-process with `input` as stdin.
pub fn run_cli(args: &[&str], input: &str) -> CliResult {
    let mut argv = vec!["blackjack"];
    argv.extend_from_slice(args);
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit_code = blackjack_cli::run_with_input(argv, &mut out, &mut err, &mut stdin);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

/// Answers that finish exactly one round whatever the deal: offers read
/// "n" as a skip, play prompts reject it and re-prompt, then "S" stands.
pub const ONE_ROUND_STANDING: &str = "5\nn\nn\nS\n";
