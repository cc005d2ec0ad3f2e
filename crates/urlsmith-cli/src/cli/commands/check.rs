//! `urlsmith check <url>` – the full parse/edit/rebuild/probe workflow.

use anyhow::{Context, Result};
use urlsmith_core::probe::{probe_with, ProbeOptions};
use urlsmith_core::session::Session;

use crate::cli::render;
use crate::cli::SetArg;

pub fn run_check(url: &str, edits: &[SetArg], opts: &ProbeOptions, json: bool) -> Result<()> {
    let mut session = Session::new();
    session.parse(url).context("could not parse URL")?;
    for edit in edits {
        session.edit(edit.component, &edit.value);
    }

    let target = session.current_url(url);
    let outcome = probe_with(&target, opts);
    session.record_status(outcome);

    if json {
        let value = serde_json::json!({
            "components": session.components(),
            "current_url": target,
            "status": session.status(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if let Some(components) = session.components() {
        render::print_components(components);
        println!();
    }
    println!("Current URL: {target}");
    println!();
    if let Some(status) = session.status() {
        render::print_outcome(status);
    }
    Ok(())
}
