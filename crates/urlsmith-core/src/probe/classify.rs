//! Classify curl transport errors into the three probe failure kinds.

use super::response::{ProbeError, ProbeErrorKind};

/// Maps a curl error to its probe failure class, with the fixed message for
/// timeouts and connection failures and the underlying message otherwise.
/// Checked in priority order; the classes are mutually exclusive.
pub(super) fn classify(err: &curl::Error) -> ProbeError {
    let kind = classify_kind(err);
    let message = match kind {
        ProbeErrorKind::Timeout => "Request timed out".to_string(),
        ProbeErrorKind::Connection => "Could not connect".to_string(),
        ProbeErrorKind::Other => err.to_string(),
    };
    ProbeError { kind, message }
}

fn classify_kind(err: &curl::Error) -> ProbeErrorKind {
    if err.is_operation_timedout() {
        return ProbeErrorKind::Timeout;
    }
    if err.is_couldnt_connect()
        || err.is_couldnt_resolve_host()
        || err.is_couldnt_resolve_proxy()
        || err.is_ssl_connect_error()
        || err.is_read_error()
        || err.is_recv_error()
        || err.is_send_error()
        || err.is_got_nothing()
    {
        return ProbeErrorKind::Connection;
    }
    ProbeErrorKind::Other
}
