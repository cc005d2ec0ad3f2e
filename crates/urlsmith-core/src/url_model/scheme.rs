//! Scheme tables governing netloc and params handling.
//!
//! Follows the legacy generic-URL scheme lists; the empty scheme counts as
//! both netloc-using and params-using, so scheme-less URLs split the same way.

/// Schemes that keep an explicit netloc (authority) component.
const USES_NETLOC: &[&str] = &[
    "", "ftp", "http", "gopher", "nntp", "telnet", "imap", "wais", "file", "mms", "https", "shttp",
    "snews", "prospero", "rtsp", "rtsps", "rtspu", "rsync", "svn", "svn+ssh", "sftp", "nfs", "git",
    "git+ssh", "ws", "wss", "itms-services",
];

/// Schemes where decomposition splits `;params` off the path.
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Returns true for characters allowed in a scheme.
pub(super) fn is_scheme_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.')
}

/// Returns true if `scheme` uses an explicit netloc component.
pub(super) fn uses_netloc(scheme: &str) -> bool {
    USES_NETLOC.contains(&scheme)
}

/// Returns true if `scheme` splits path params during decomposition.
pub(super) fn uses_params(scheme: &str) -> bool {
    USES_PARAMS.contains(&scheme)
}
