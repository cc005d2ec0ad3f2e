//! `urlsmith rebuild <url>` – apply component edits and print the result.

use anyhow::{Context, Result};
use urlsmith_core::url_model::{decompose, recompose};

use crate::cli::SetArg;

pub fn run_rebuild(url: &str, edits: &[SetArg]) -> Result<()> {
    let mut components = decompose(url).context("could not parse URL")?;
    for edit in edits {
        components.set(edit.component, edit.value.as_str());
    }
    println!("{}", recompose(&components));
    Ok(())
}
