//! Tests for the probe, check and completions subcommands.

use super::parse;
use crate::cli::{probe_options, CliCommand};
use std::time::Duration;
use urlsmith_core::config::UrlsmithConfig;
use urlsmith_core::url_model::Component;

#[test]
fn cli_parse_probe_defaults() {
    match parse(&["urlsmith", "probe", "https://example.com"]) {
        CliCommand::Probe {
            url,
            timeout_ms,
            json,
        } => {
            assert_eq!(url, "https://example.com");
            assert!(timeout_ms.is_none());
            assert!(!json);
        }
        _ => panic!("expected Probe"),
    }
}

#[test]
fn cli_parse_probe_timeout_and_json() {
    match parse(&[
        "urlsmith",
        "probe",
        "https://example.com",
        "--timeout-ms",
        "1500",
        "--json",
    ]) {
        CliCommand::Probe {
            timeout_ms, json, ..
        } => {
            assert_eq!(timeout_ms, Some(1500));
            assert!(json);
        }
        _ => panic!("expected Probe with overrides"),
    }
}

#[test]
fn cli_parse_check() {
    match parse(&[
        "urlsmith",
        "check",
        "https://example.com/p",
        "--set",
        "fragment=top",
        "--timeout-ms",
        "2000",
    ]) {
        CliCommand::Check {
            url,
            set,
            timeout_ms,
            json,
        } => {
            assert_eq!(url, "https://example.com/p");
            assert_eq!(set.len(), 1);
            assert_eq!(set[0].component, Component::Fragment);
            assert_eq!(set[0].value, "top");
            assert_eq!(timeout_ms, Some(2000));
            assert!(!json);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["urlsmith", "completions", "bash"]) {
        CliCommand::Completions { shell } => {
            assert_eq!(shell.to_string(), "bash");
        }
        _ => panic!("expected Completions"),
    }
}

#[test]
fn timeout_override_wins_over_config() {
    let cfg = UrlsmithConfig::default();

    let opts = probe_options(&cfg, None);
    assert_eq!(opts.timeout, Duration::from_millis(10_000));
    assert_eq!(opts.max_redirects, 30);

    let opts = probe_options(&cfg, Some(1500));
    assert_eq!(opts.timeout, Duration::from_millis(1500));
}
