use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::sync::Arc;
use std::thread::JoinHandle;

use tempfile::TempDir;
use tiny_http::Server;

use super::{ServeContext, handle_request};
use crate::config::{LiveConfig, test_config};

const AGENT: &str = "/* agent */";

struct Reply {
    status: u16,
    head: String,
    body: Vec<u8>,
}

impl Reply {
    fn content_type(&self) -> Option<&str> {
        self.head.lines().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-type")
                .then_some(value.trim())
        })
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Serve exactly `requests` requests on an ephemeral loopback port.
fn serve(config: LiveConfig, requests: usize) -> (SocketAddr, JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let context = ServeContext {
        config: Arc::new(config),
        agent_js: AGENT.to_string(),
    };

    let handle = std::thread::spawn(move || {
        for _ in 0..requests {
            let request = server.recv().unwrap();
            handle_request(request, &context).unwrap();
        }
    });
    (addr, handle)
}

fn send(addr: SocketAddr, method: &str, path: &str, body: &str) -> Reply {
    send_bytes(addr, method, path, body.as_bytes())
}

fn send_bytes(addr: SocketAddr, method: &str, path: &str, body: &[u8]) -> Reply {
    let mut stream = TcpStream::connect(addr).unwrap();
    write!(
        stream,
        "{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\nContent-Length: {}\r\n\r\n",
        body.len()
    )
    .unwrap();
    stream.write_all(body).unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).unwrap();

    let split = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    let head = String::from_utf8_lossy(&raw[..split]).into_owned();
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap();

    Reply {
        status,
        head,
        body: raw[split + 4..].to_vec(),
    }
}

fn make_config() -> (TempDir, LiveConfig) {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    (dir, config)
}

#[test]
fn test_serve_then_save_round_trip() {
    let (_dir, config) = make_config();
    fs::write(&config.files.document, "<p>hello</p>").unwrap();
    let document = config.files.document.clone();
    let (addr, handle) = serve(config, 2);

    let page = send(addr, "GET", "/", "");
    assert_eq!(page.status, 200);
    assert!(page.content_type().unwrap().starts_with("text/html"));
    assert!(page.text().contains(r#"<p contenteditable="true">hello</p>"#));
    assert!(page.text().contains(AGENT));
    assert_eq!(fs::read_to_string(&document).unwrap(), "<p>hello</p>");

    let saved = send(addr, "POST", "/", r#"<p contenteditable="true">hello</p>"#);
    assert_eq!(saved.status, 200);
    assert!(saved.body.is_empty());
    assert_eq!(fs::read_to_string(&document).unwrap(), "<p>hello</p>");

    handle.join().unwrap();
}

#[test]
fn test_save_keeps_attribute_order() {
    let (_dir, config) = make_config();
    let document = config.files.document.clone();
    let (addr, handle) = serve(config, 1);

    let body = r#"<a id="x" class="c" href="/y" contenteditable="true">go</a><img src="a.png" alt="A" width="10" height="20" contenteditable="true">"#;
    let saved = send(addr, "POST", "/", body);
    assert_eq!(saved.status, 200);
    assert_eq!(
        fs::read_to_string(&document).unwrap(),
        r#"<a id="x" class="c" href="/y">go</a><img src="a.png" alt="A" width="10" height="20">"#
    );

    handle.join().unwrap();
}

#[test]
fn test_invalid_utf8_body_is_saved_lossily() {
    let (_dir, config) = make_config();
    fs::write(&config.files.document, "<p>old</p>").unwrap();
    let document = config.files.document.clone();
    let (addr, handle) = serve(config, 1);

    let saved = send_bytes(addr, "POST", "/", b"<p contenteditable=\"true\">caf\xe9</p>");
    assert_eq!(saved.status, 200);
    assert_eq!(fs::read_to_string(&document).unwrap(), "<p>caf\u{fffd}</p>");

    handle.join().unwrap();
}

#[test]
fn test_any_path_serves_page() {
    let (_dir, config) = make_config();
    fs::write(&config.files.document, "<h1>t</h1>").unwrap();
    let (addr, handle) = serve(config, 1);

    let page = send(addr, "GET", "/some/where", "");
    assert_eq!(page.status, 200);
    assert!(page.text().contains(r#"<h1 contenteditable="true">t</h1>"#));

    handle.join().unwrap();
}

#[test]
fn test_stylesheet_served_byte_identical() {
    let (_dir, config) = make_config();
    fs::write(&config.style.output, "body{color:red}\n").unwrap();
    let (addr, handle) = serve(config, 2);

    let css = send(addr, "GET", "/index.css", "");
    assert_eq!(css.status, 200);
    assert!(css.content_type().unwrap().starts_with("text/css"));
    assert_eq!(css.body, b"body{color:red}\n");

    let busted = send(addr, "GET", "/index.css?t=1712345678", "");
    assert_eq!(busted.body, b"body{color:red}\n");

    handle.join().unwrap();
}

#[test]
fn test_missing_files_fail_with_500() {
    let (_dir, config) = make_config();
    let (addr, handle) = serve(config, 2);

    let page = send(addr, "GET", "/", "");
    assert_eq!(page.status, 500);
    assert!(page.content_type().unwrap().starts_with("text/plain"));

    let css = send(addr, "GET", "/index.css", "");
    assert_eq!(css.status, 500);

    handle.join().unwrap();
}

#[test]
fn test_head_has_no_body() {
    let (_dir, config) = make_config();
    fs::write(&config.files.document, "<p>hello</p>").unwrap();
    let (addr, handle) = serve(config, 1);

    let head = send(addr, "HEAD", "/", "");
    assert_eq!(head.status, 200);
    assert!(head.body.is_empty());
    assert!(head.head.to_ascii_lowercase().contains("cache-control: no-store"));

    handle.join().unwrap();
}

#[test]
fn test_unsupported_method() {
    let (_dir, config) = make_config();
    let (addr, handle) = serve(config, 1);

    let reply = send(addr, "PUT", "/", "x");
    assert_eq!(reply.status, 405);

    handle.join().unwrap();
}
