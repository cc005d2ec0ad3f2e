//! `urlsmith parse <url>` – split a URL into its six components.

use anyhow::{Context, Result};
use urlsmith_core::url_model::decompose;

use crate::cli::render;

pub fn run_parse(url: &str, json: bool) -> Result<()> {
    let components = decompose(url).context("could not parse URL")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&components)?);
    } else {
        render::print_components(&components);
    }
    Ok(())
}
