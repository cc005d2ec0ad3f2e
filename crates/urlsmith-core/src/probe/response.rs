//! Probe result types and per-response header collection.

use serde::Serialize;
use std::fmt;
use std::str;

/// Outcome of one status probe. Failures are values, never process errors.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The server answered; HTTP error codes (4xx/5xx) land here too.
    Response(ProbeReport),
    /// The transport failed before a final response was obtained.
    Failed(ProbeError),
}

impl ProbeOutcome {
    /// Short label for log lines: the status code, or the error label.
    pub fn status_label(&self) -> String {
        match self {
            ProbeOutcome::Response(report) => report.status_code.to_string(),
            ProbeOutcome::Failed(error) => error.kind.label().to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ProbeOutcome::Failed(_))
    }
}

/// Final response details after following redirects.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub status_code: u16,
    /// Server's reason phrase, or the canonical phrase when it sent none.
    pub status_text: String,
    /// Effective URL after following all redirects.
    pub final_url: String,
    /// Byte-wise inequality of final URL vs the requested URL.
    pub redirected: bool,
    /// Declared `Content-Type` of the final response, or `"Unknown"`.
    pub content_type: String,
    /// Bytes actually received in the body.
    pub content_length: u64,
}

/// A classified transport failure.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeError {
    #[serde(rename = "status_code")]
    pub kind: ProbeErrorKind,
    #[serde(rename = "status_text")]
    pub message: String,
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// The three transport failure classes, with their fixed display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProbeErrorKind {
    /// The operation exceeded its deadline.
    #[serde(rename = "Timeout")]
    Timeout,
    /// No connection could be established, or it was lost mid-transfer.
    #[serde(rename = "Connection Error")]
    Connection,
    /// Any other transport-level failure.
    #[serde(rename = "Error")]
    Other,
}

impl ProbeErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProbeErrorKind::Timeout => "Timeout",
            ProbeErrorKind::Connection => "Connection Error",
            ProbeErrorKind::Other => "Error",
        }
    }
}

impl fmt::Display for ProbeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Collects the reason phrase and content type from header callbacks.
///
/// Redirect hops each start with a new status line; state resets there so the
/// final response wins.
#[derive(Debug, Default)]
pub(super) struct ResponseObserver {
    reason: Option<String>,
    content_type: Option<String>,
}

impl ResponseObserver {
    pub(super) fn observe(&mut self, line: &[u8]) {
        let Ok(line) = str::from_utf8(line) else {
            return;
        };
        let line = line.trim_end();
        if line.starts_with("HTTP/") {
            self.reason = parse_reason(line);
            self.content_type = None;
            return;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                self.content_type = Some(value.trim().to_string());
            }
        }
    }

    /// Reason phrase of the final status line, or the canonical phrase for
    /// `code` when the server sent none (HTTP/2 never sends one).
    pub(super) fn status_text(&self, code: u16) -> String {
        if let Some(reason) = &self.reason {
            return reason.clone();
        }
        http::StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or_default()
            .to_string()
    }

    /// Declared content type of the final response, or `"Unknown"`.
    pub(super) fn content_type(&self) -> String {
        self.content_type
            .clone()
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Extracts the reason phrase from `HTTP/x.y CODE [REASON]`.
fn parse_reason(status_line: &str) -> Option<String> {
    let mut parts = status_line.splitn(3, ' ');
    parts.next()?;
    parts.next()?;
    let reason = parts.next()?.trim();
    (!reason.is_empty()).then(|| reason.to_string())
}
