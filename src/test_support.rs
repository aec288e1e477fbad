//! Test fixtures shared across unit tests.
//!
//! The fetch path talks plain HTTP, so tests get a one-shot responder on an
//! ephemeral loopback port instead of a mocked client.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};

/// One-shot HTTP responder bound to an ephemeral loopback port.
///
/// Serves exactly one canned response on the first connection, then shuts
/// down. Each test gets its own instance and port.
pub struct StubServer {
    addr: SocketAddr,
}

impl StubServer {
    /// Spawn a responder that answers the first request with the given
    /// status line and body.
    pub fn respond_with(status: u16, reason: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener has a local addr");

        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                // Drain the request head before answering.
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { addr }
    }

    /// URL of the served document.
    pub fn url(&self) -> String {
        format!("http://{}/global.d.ts", self.addr)
    }

    /// A loopback URL nothing listens on: the port is bound and released
    /// before the URL is handed out.
    pub fn refused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener has a local addr");
        drop(listener);
        format!("http://{addr}/global.d.ts")
    }
}
