//! CLI for the urlsmith URL workbench.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::time::Duration;
use urlsmith_core::config::{self, UrlsmithConfig};
use urlsmith_core::probe::ProbeOptions;
use urlsmith_core::url_model::Component;

use commands::{run_check, run_completions, run_parse, run_probe, run_rebuild};

/// One `--set PART=VALUE` component edit.
#[derive(Debug, Clone)]
pub struct SetArg {
    pub component: Component,
    pub value: String,
}

/// Parses `PART=VALUE` with a case-insensitive part name.
fn parse_set(arg: &str) -> Result<SetArg, String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected PART=VALUE, got {arg:?}"))?;
    let component: Component = name.trim().parse().map_err(|e| format!("{e}"))?;
    Ok(SetArg {
        component,
        value: value.to_string(),
    })
}

/// Top-level CLI for the urlsmith URL workbench.
#[derive(Debug, Parser)]
#[command(name = "urlsmith")]
#[command(about = "urlsmith: split, edit, rebuild and status-check URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a URL into its six components.
    Parse {
        /// URL (or any string) to decompose.
        url: String,
        /// Emit the components as a JSON object.
        #[arg(long)]
        json: bool,
    },

    /// Apply component edits to a URL and print the rebuilt result.
    Rebuild {
        /// URL to decompose and rebuild.
        url: String,
        /// Overwrite one component, e.g. --set query=a=1 (repeatable).
        #[arg(long, value_name = "PART=VALUE", value_parser = parse_set)]
        set: Vec<SetArg>,
    },

    /// Send one GET request to a URL and report its status.
    Probe {
        /// URL to probe.
        url: String,
        /// Override the probe timeout in milliseconds.
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,
        /// Emit the probe outcome as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Parse, edit, rebuild and probe in one pass.
    Check {
        /// URL to work on.
        url: String,
        /// Overwrite one component before rebuilding (repeatable).
        #[arg(long, value_name = "PART=VALUE", value_parser = parse_set)]
        set: Vec<SetArg>,
        /// Override the probe timeout in milliseconds.
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,
        /// Emit everything as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { url, json } => run_parse(&url, json)?,
            CliCommand::Rebuild { url, set } => run_rebuild(&url, &set)?,
            CliCommand::Probe {
                url,
                timeout_ms,
                json,
            } => run_probe(&url, &probe_options(&cfg, timeout_ms), json)?,
            CliCommand::Check {
                url,
                set,
                timeout_ms,
                json,
            } => run_check(&url, &set, &probe_options(&cfg, timeout_ms), json)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

/// Config-derived probe options, with the CLI timeout override applied.
fn probe_options(cfg: &UrlsmithConfig, timeout_ms: Option<u64>) -> ProbeOptions {
    let mut opts = cfg.probe_options();
    if let Some(ms) = timeout_ms {
        opts.timeout = Duration::from_millis(ms);
    }
    opts
}

#[cfg(test)]
mod tests;
