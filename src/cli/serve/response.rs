//! HTTP response handlers.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::utils::mime::types::{CSS, HTML, PLAIN};

/// Respond with the rendered page.
pub fn respond_page(request: Request, html: String) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, HTML);
    }
    send_body(request, 200, HTML, html.into_bytes())
}

/// Respond with the compiled stylesheet, byte for byte.
pub fn respond_css(request: Request, path: &Path) -> Result<()> {
    let body = match fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))
    {
        Ok(body) => body,
        Err(e) => return respond_error(request, &e),
    };

    if is_head_request(&request) {
        return send_head(request, 200, CSS);
    }
    send_body(request, 200, CSS, body)
}

/// Respond to a saved edit.
pub fn respond_saved(request: Request) -> Result<()> {
    request.respond(Response::empty(StatusCode(200)))?;
    Ok(())
}

/// Respond with 500 and a plain-text description of `error`.
pub fn respond_error(request: Request, error: &anyhow::Error) -> Result<()> {
    crate::log!("error"; "{} {}: {:#}", request.method(), request.url(), error);
    let body = format!("500 Internal Server Error\n\n{error:#}\n");
    send_body(request, 500, PLAIN, body.into_bytes())
}

/// Respond with 405 for methods other than GET/HEAD/POST.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    let response = Response::from_data(b"405 Method Not Allowed".to_vec())
        .with_status_code(StatusCode(405))
        .with_header(make_header("Content-Type", PLAIN))
        .with_header(make_header("Allow", "GET, HEAD, POST"));
    request.respond(response)?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response = Response::empty(StatusCode(status))
        .with_header(make_header("Content-Type", content_type))
        .with_header(make_header("Cache-Control", "no-store"));
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type))
        .with_header(make_header("Cache-Control", "no-store"));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    // Static ASCII, cannot fail
    Header::from_bytes(key, value).unwrap()
}
