use std::net::{TcpListener, TcpStream};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tungstenite::WebSocket;
use tungstenite::protocol::Message;

use super::WsActor;
use super::client_io::HANDSHAKE_TIMEOUT;
use crate::reload::message::Notification;

fn make_actor() -> WsActor {
    let (_tx, rx) = mpsc::channel(1);
    WsActor::new(rx)
}

/// Start a client handshake against `listener` in the background.
fn spawn_client(listener: &TcpListener) -> JoinHandle<WebSocket<TcpStream>> {
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let stream = TcpStream::connect(addr).unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let (ws, _) = tungstenite::client(format!("ws://{addr}/"), stream).unwrap();
        ws
    })
}

/// Connect `n` clients to `actor`, returning the client-side sockets.
fn connect_clients(actor: &WsActor, n: usize) -> Vec<WebSocket<TcpStream>> {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    (0..n)
        .map(|_| {
            let handle = spawn_client(&listener);
            let (stream, _) = listener.accept().unwrap();
            actor.add_client(stream);
            handle.join().unwrap()
        })
        .collect()
}

fn expect_text(ws: &mut WebSocket<TcpStream>) -> String {
    match ws.read().unwrap() {
        Message::Text(text) => text.to_string(),
        other => panic!("expected text frame, got {other:?}"),
    }
}

#[test]
fn test_broadcast_reaches_every_client() {
    let actor = make_actor();
    let mut clients = connect_clients(&actor, 3);
    assert_eq!(actor.client_count(), 3);

    actor.broadcast(Notification::Style);

    for ws in &mut clients {
        assert_eq!(expect_text(ws), "style");
    }
}

#[test]
fn test_reload_is_distinct_from_style() {
    let actor = make_actor();
    let mut clients = connect_clients(&actor, 1);

    actor.broadcast(Notification::Reload);

    let text = expect_text(&mut clients[0]);
    assert_ne!(text, "style");
    assert_eq!(text, "reload");
}

#[test]
fn test_closed_client_is_dropped() {
    let actor = make_actor();
    let mut clients = connect_clients(&actor, 3);

    let mut gone = clients.remove(1);
    gone.close(None).unwrap();
    let _ = gone.flush();
    drop(gone);

    let deadline = Instant::now() + Duration::from_secs(5);
    while actor.client_count() > 2 && Instant::now() < deadline {
        WsActor::sweep(&actor.clients);
        std::thread::sleep(Duration::from_millis(20));
    }
    assert_eq!(actor.client_count(), 2);

    actor.broadcast(Notification::Reload);
    for ws in &mut clients {
        assert_eq!(expect_text(ws), "reload");
    }
}

#[test]
fn test_broadcast_without_clients_is_noop() {
    let actor = make_actor();
    actor.broadcast(Notification::Style);
    assert_eq!(actor.client_count(), 0);
}

#[test]
fn test_client_text_is_ignored() {
    let actor = make_actor();
    let mut clients = connect_clients(&actor, 1);

    clients[0].send(Message::Text("hello".into())).unwrap();
    std::thread::sleep(Duration::from_millis(50));
    WsActor::sweep(&actor.clients);
    assert_eq!(actor.client_count(), 1);
}

#[test]
fn test_failed_handshake_is_not_registered() {
    let actor = make_actor();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = std::thread::spawn(move || {
        use std::io::Write;
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();
    });
    let (stream, _) = listener.accept().unwrap();
    handle.join().unwrap();

    actor.add_client(stream);
    assert_eq!(actor.client_count(), 0);
}

#[test]
fn test_silent_peer_handshake_times_out() {
    let actor = make_actor();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    // Connected but never sends the upgrade request
    let idle = TcpStream::connect(addr).unwrap();
    let (stream, _) = listener.accept().unwrap();

    let started = Instant::now();
    actor.add_client(stream);
    assert!(started.elapsed() < HANDSHAKE_TIMEOUT + Duration::from_secs(3));
    assert_eq!(actor.client_count(), 0);
    drop(idle);

    // Later clients still get through
    let mut clients = connect_clients(&actor, 1);
    actor.broadcast(Notification::Style);
    assert_eq!(expect_text(&mut clients[0]), "style");
}
