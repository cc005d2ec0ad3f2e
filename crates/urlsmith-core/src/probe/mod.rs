//! Single-shot HTTP status probing.
//!
//! Uses the curl crate (libcurl) to issue exactly one blocking GET with
//! redirect-following, then reports the final status code and reason phrase,
//! content type, received body length and effective URL. Transport failures
//! are classified into Timeout / Connection Error / Error and returned as
//! values; nothing here panics or kills the caller.

mod classify;
mod response;

pub use response::{ProbeError, ProbeErrorKind, ProbeOutcome, ProbeReport};

use response::ResponseObserver;
use std::time::Duration;

/// Knobs for one probe. Defaults match the interactive tool: 10 s total
/// deadline, up to 30 redirect hops, libcurl's stock user agent.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Total-operation deadline covering connect and transfer.
    pub timeout: Duration,
    /// Redirect hops to follow before giving up.
    pub max_redirects: u32,
    /// Custom `User-Agent` header, if any.
    pub user_agent: Option<String>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_redirects: 30,
            user_agent: None,
        }
    }
}

/// Probes `url` with default options.
pub fn probe(url: &str) -> ProbeOutcome {
    probe_with(url, &ProbeOptions::default())
}

/// Issues one GET against `url` and classifies the outcome.
///
/// Exactly one request is attempted; redirects within it are followed by
/// libcurl. The call returns within the configured timeout plus a small
/// overhead. Malformed URLs are not rejected up front; they surface as a
/// transport failure.
pub fn probe_with(url: &str, opts: &ProbeOptions) -> ProbeOutcome {
    tracing::debug!(url, timeout_ms = opts.timeout.as_millis() as u64, "probing URL");
    let outcome = match perform(url, opts) {
        Ok(report) => ProbeOutcome::Response(report),
        Err(err) => ProbeOutcome::Failed(classify::classify(&err)),
    };
    tracing::info!("status check completed: {}", outcome.status_label());
    outcome
}

fn perform(url: &str, opts: &ProbeOptions) -> Result<ProbeReport, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirects)?;
    easy.timeout(opts.timeout)?;
    if let Some(agent) = &opts.user_agent {
        easy.useragent(agent)?;
    }

    let mut observer = ResponseObserver::default();
    let mut body_bytes: u64 = 0;
    {
        let observer = &mut observer;
        let body_bytes = &mut body_bytes;
        let mut transfer = easy.transfer();
        transfer.header_function(move |line| {
            observer.observe(line);
            true
        })?;
        transfer.write_function(move |data| {
            *body_bytes += data.len() as u64;
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status_code = easy.response_code()? as u16;
    let final_url = easy
        .effective_url()?
        .unwrap_or(url)
        .to_string();

    Ok(ProbeReport {
        status_code,
        status_text: observer.status_text(status_code),
        redirected: final_url != url,
        content_type: observer.content_type(),
        content_length: body_bytes,
        final_url,
    })
}
