//! Minimal HTTP/1.1 server for probe integration tests.
//!
//! Serves a single static body. Can redirect the first hop, omit the
//! Content-Type header, or stall without ever answering (to exercise
//! timeouts).

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct ProbeServerOptions {
    /// Status line sent for the final response.
    pub status: &'static str,
    /// `Content-Type` header value; None omits the header entirely.
    pub content_type: Option<&'static str>,
    /// If true, requests for `/` get a 302 to `/final`.
    pub redirect_root: bool,
    /// If true, accept connections but never write a response.
    pub stall: bool,
}

impl Default for ProbeServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_type: Some("text/html"),
            redirect_root: false,
            stall: false,
        }
    }
}

/// Starts a server in a background thread serving `body`. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, ProbeServerOptions::default())
}

/// Like `start` but allows customizing server behavior.
pub fn start_with_options(body: Vec<u8>, opts: ProbeServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: ProbeServerOptions) {
    if opts.stall {
        // Hold the connection open well past any test timeout.
        thread::sleep(Duration::from_secs(30));
        return;
    }
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request_path(request);

    if opts.redirect_root && path == "/" {
        let _ = stream.write_all(
            b"HTTP/1.1 302 Found\r\nLocation: /final\r\nContent-Length: 0\r\n\r\n",
        );
        return;
    }

    let content_type = opts
        .content_type
        .map(|ct| format!("Content-Type: {}\r\n", ct))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        opts.status,
        body.len(),
        content_type
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

/// Request-target of the request line ("/" if unreadable).
fn request_path(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
}
