//! Loopback HTTP fixtures for behaviour tests.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// A single-shot HTTP server bound to a loopback port.
pub struct LoopbackServer {
    addr: SocketAddr,
    requests: Receiver<String>,
}

impl LoopbackServer {
    /// Answer the first request with `200 OK` and `body`.
    pub fn answering(body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let (sender, requests) = mpsc::channel();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let head = read_head(&mut stream);
            let request_line = head.lines().next().unwrap_or_default().to_owned();
            sender.send(request_line).expect("report request line");
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .expect("write response");
        });
        Self { addr, requests }
    }

    /// Base URL of the server, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request line of the request the server answered.
    pub fn request_line(&self) -> String {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("server should have received a request")
    }
}

/// A listener that accepts connections into its backlog but never answers.
pub struct SilentServer {
    listener: TcpListener,
}

impl SilentServer {
    /// Bind a silent listener on a loopback port.
    pub fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        Self { listener }
    }

    /// Base URL of the server, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.listener.local_addr().expect("local addr"))
    }
}

/// Base URL of a loopback port with nothing listening.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

fn read_head(stream: &mut impl Read) -> String {
    let mut head = Vec::new();
    let mut buf = [0_u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let read = stream.read(&mut buf).expect("read request");
        if read == 0 {
            break;
        }
        head.extend_from_slice(&buf[..read]);
    }
    String::from_utf8_lossy(&head).into_owned()
}
