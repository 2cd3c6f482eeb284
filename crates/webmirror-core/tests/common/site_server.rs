//! Minimal HTTP/1.1 server serving a fixed set of routed paths for
//! integration tests.
//!
//! Each route maps a request path to a canned status and body. GET hits are
//! counted per path so tests can assert how many times a resource was
//! actually fetched.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// One canned response.
#[derive(Debug, Clone)]
pub struct Route {
    pub status: u32,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn with_status(status: u32) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }
}

/// Handle returned by [`start`]: the base URL plus per-path GET counters.
pub struct SiteServer {
    pub base_url: String,
    hits: Arc<HashMap<String, AtomicUsize>>,
}

impl SiteServer {
    /// Number of GETs served for `path` so far.
    pub fn hits(&self, path: &str) -> usize {
        self.hits
            .get(path)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Absolute URL for `path` (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Starts a server in a background thread serving `routes` (path to
/// response). Unknown paths get an uncounted 404. The server runs until the
/// process exits.
pub fn start(routes: Vec<(&str, Route)>) -> SiteServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    let hits: Arc<HashMap<String, AtomicUsize>> = Arc::new(
        routes
            .keys()
            .map(|path| (path.clone(), AtomicUsize::new(0)))
            .collect(),
    );
    let hits_handle = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&hits_handle);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });
    SiteServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    hits: &HashMap<String, AtomicUsize>,
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
    let (method, path) = parse_request_line(request);
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");
        return;
    }
    if let Some(counter) = hits.get(path) {
        counter.fetch_add(1, Ordering::SeqCst);
    }
    match routes.get(path) {
        Some(route) => {
            let reason = match route.status {
                200 => "OK",
                404 => "Not Found",
                500 => "Internal Server Error",
                _ => "Status",
            };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                route.status,
                reason,
                route.body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.write_all(&route.body);
        }
        None => {
            let _ = stream
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        }
    }
}

/// Returns (method, path) from the request line, with any query stripped.
fn parse_request_line(request: &str) -> (&str, &str) {
    let first = request.lines().next().unwrap_or("");
    let mut parts = first.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");
    let path = target.split('?').next().unwrap_or(target);
    (method, path)
}
