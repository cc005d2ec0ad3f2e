//! `urlsmith completions <shell>` – emit shell completion scripts.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

pub fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "urlsmith", &mut io::stdout());
}
