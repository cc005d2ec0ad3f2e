//! `urlsmith probe <url>` – one GET request, status panel out.

use anyhow::Result;
use urlsmith_core::probe::{probe_with, ProbeOptions};

use crate::cli::render;

pub fn run_probe(url: &str, opts: &ProbeOptions, json: bool) -> Result<()> {
    let outcome = probe_with(url, opts);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render::print_outcome(&outcome);
    }
    Ok(())
}
