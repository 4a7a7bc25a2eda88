//! Minimal single-request HTTP stub used by the client tests.
//!
//! Hand-rolled on std::net so the tests need no mock-server dependency.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;

/// Canned behavior for one stubbed request
pub struct StubResponse {
    status_line: Option<&'static str>,
    body: &'static str,
}

impl StubResponse {
    /// 200 OK with the given JSON body
    pub fn ok(body: &'static str) -> Self {
        Self {
            status_line: Some("200 OK"),
            body,
        }
    }

    /// Arbitrary status line (e.g., "500 Internal Server Error")
    pub fn status(status_line: &'static str, body: &'static str) -> Self {
        Self {
            status_line: Some(status_line),
            body,
        }
    }

    /// Accept the connection and never answer, forcing a client timeout
    pub fn stall() -> Self {
        Self {
            status_line: None,
            body: "",
        }
    }
}

/// Spawn a one-shot stub server and return its base URL
pub fn spawn_stub(response: StubResponse) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            match response.status_line {
                Some(status_line) => {
                    read_request(&mut stream);
                    let reply = format!(
                        "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                         Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status_line,
                        response.body.len(),
                        response.body
                    );
                    let _ = stream.write_all(reply.as_bytes());
                    let _ = stream.flush();
                }
                None => {
                    // Outlive the client's timeout, then drop the socket
                    std::thread::sleep(Duration::from_secs(2));
                }
            }
        }
    });

    format!("http://{}", addr)
}

/// A URL pointing at a port with nothing listening on it
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Drain the full request (headers plus Content-Length body) so the
/// client never sees the connection close mid-write.
fn read_request(stream: &mut TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));

    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
                    break pos + 4;
                }
            }
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
