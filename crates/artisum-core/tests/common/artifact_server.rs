//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves one static body on every path except `/redirect` (302 to `/artifact`),
//! `/missing` (404) and `/truncated` (200 whose `Content-Length` exceeds the
//! bytes sent before the connection closes). Extra response headers are
//! attached to the 200 response, and the raw header block of every request is
//! recorded.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Clone)]
pub struct ArtifactServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ArtifactServer {
    /// Request header blocks received so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(body: Vec<u8>, headers: Vec<(String, String)>) -> ArtifactServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let body = Arc::new(body);
    let headers = Arc::new(headers);
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let headers = Arc::clone(&headers);
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &body, &headers, &recorded));
        }
    });
    ArtifactServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(
    mut stream: TcpStream,
    body: &[u8],
    headers: &[(String, String)],
    recorded: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => raw.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&raw).to_string();
    let path = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    recorded.lock().unwrap().push(request);

    let response = match path.as_str() {
        "/redirect" => "HTTP/1.1 302 Found\r\nLocation: /artifact\r\n\
                        Digest: md5=AAAAAAAAAAAAAAAAAAAAAA==\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            .to_string(),
        "/missing" => "HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found".to_string(),
        "/truncated" => "HTTP/1.1 200 OK\r\nContent-Length: 100000\r\nConnection: close\r\n\r\npartial-bytes"
            .to_string(),
        _ => {
            let extra: String = headers
                .iter()
                .map(|(k, v)| format!("{}: {}\r\n", k, v))
                .collect();
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
                body.len(),
                extra
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
            return;
        }
    };
    let _ = stream.write_all(response.as_bytes());
}
