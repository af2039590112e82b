//! Minimal HTTP/1.1 server for update-flow integration tests.
//!
//! Serves two fixed paths: `/sensors.json` (the dataset body) and
//! `/version` (the version metadata document). Either path can be forced
//! to fail with a given status code.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct ServerOptions {
    pub dataset_status: u16,
    pub version_status: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            dataset_status: 200,
            version_status: 200,
        }
    }
}

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start(dataset_body: Vec<u8>, version_body: Vec<u8>) -> String {
    start_with_options(dataset_body, version_body, ServerOptions::default())
}

/// Like `start` but allows forcing error statuses per endpoint.
pub fn start_with_options(
    dataset_body: Vec<u8>,
    version_body: Vec<u8>,
    opts: ServerOptions,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let dataset_body = Arc::new(dataset_body);
    let version_body = Arc::new(version_body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let dataset_body = Arc::clone(&dataset_body);
            let version_body = Arc::clone(&version_body);
            thread::spawn(move || handle(stream, &dataset_body, &version_body, opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    dataset_body: &[u8],
    version_body: &[u8],
    opts: ServerOptions,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
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
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let (status, body) = match path {
        "/sensors.json" => (opts.dataset_status, dataset_body),
        "/version" => (opts.version_status, version_body),
        _ => (404, &b"not found"[..]),
    };
    let body = if status == 200 { body } else { &b""[..] };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Error",
    }
}
