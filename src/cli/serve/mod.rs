//! Live-editing server.
//!
//! ```text
//! GET/HEAD /index.css*  → compiled stylesheet
//! GET/HEAD anything else → editable page
//! POST anything          → persist edited body
//! ```
//!
//! Requests are handled one at a time, so concurrent saves are serialized
//! and the last one wins.

mod edit;
mod lifecycle;
mod page;
mod response;

#[cfg(test)]
mod tests;

use crate::{
    actor::{coordinator::CHANNEL_BUFFER, messages::WsMsg},
    config::{LiveConfig, cfg},
    embed::serve::{AGENT_JS, AgentVars},
    log,
};
use anyhow::{Context, Result};
use crossbeam::channel;
use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Method, Request, Server};
use tokio::sync::mpsc;

/// Per-server state shared by every request.
struct ServeContext {
    config: Arc<LiveConfig>,
    /// Sync agent, rendered once with the bound WebSocket port
    agent_js: String,
}

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
    ws_port: u16,
    ws_channel: (mpsc::Sender<WsMsg>, mpsc::Receiver<WsMsg>),
    shutdown_rx: channel::Receiver<()>,
    context: ServeContext,
}

/// Bind the HTTP server and the WebSocket listener without starting the request loop
pub fn bind_server() -> Result<BoundServer> {
    let config = cfg();
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    let (ws_tx, ws_rx) = mpsc::channel::<WsMsg>(CHANNEL_BUFFER);
    let ws_port =
        crate::reload::server::start_ws_server(config.serve.interface, config.serve.ws_port, ws_tx.clone())
            .context("failed to start WebSocket listener")?;
    if ws_port != config.serve.ws_port {
        log!("serve"; "ws port {} in use, using {} instead", config.serve.ws_port, ws_port);
    }

    let (shutdown_tx, shutdown_rx) = channel::unbounded::<()>();
    lifecycle::register_server_for_shutdown(Arc::clone(&server), shutdown_tx);

    let agent_js = AGENT_JS.render(&AgentVars::from_config(&config, ws_port));

    Ok(BoundServer {
        server,
        addr,
        ws_port,
        ws_channel: (ws_tx, ws_rx),
        shutdown_rx,
        context: ServeContext { config, agent_js },
    })
}

impl BoundServer {
    /// Start the watcher and the request loop (blocking).
    pub fn run(self) -> Result<()> {
        log!("serve"; "http://{}", self.addr);
        crate::debug!("serve"; "ws://{}:{}", self.addr.ip(), self.ws_port);

        let actor_handle = lifecycle::spawn_actors(
            Arc::clone(&self.context.config),
            self.ws_channel,
            self.shutdown_rx,
        );
        run_request_loop(&self.server, &self.context);
        lifecycle::wait_for_shutdown(actor_handle);
        Ok(())
    }
}

fn run_request_loop(server: &Server, context: &ServeContext) {
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, context) {
            log!("serve"; "request error: {e:#}");
        }
    }
}

/// Handle a single HTTP request
fn handle_request(mut request: Request, context: &ServeContext) -> Result<()> {
    // Early exit if shutdown requested
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let config = &context.config;
    crate::debug!("serve"; "{} {}", request.method(), request.url());

    let method = request.method().clone();
    match method {
        Method::Post => {
            // Bodies are decoded lossily; invalid UTF-8 never rejects an edit
            let mut body = Vec::new();
            let saved = request
                .as_reader()
                .read_to_end(&mut body)
                .context("failed to read request body")
                .and_then(|_| edit::persist_edit(config, &String::from_utf8_lossy(&body)));
            match saved {
                Ok(()) => response::respond_saved(request),
                Err(e) => response::respond_error(request, &e),
            }
        }
        Method::Get | Method::Head if config.style.matches_url(request.url()) => {
            response::respond_css(request, &config.style.output)
        }
        Method::Get | Method::Head => match page::render_page(config, &context.agent_js) {
            Ok(html) => response::respond_page(request, html),
            Err(e) => response::respond_error(request, &e),
        },
        _ => response::respond_method_not_allowed(request),
    }
}
