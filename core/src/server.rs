//! # Demo HTTP Server
//!
//! Accepts connections on a tokio [`TcpListener`] and answers each one with a
//! single routed response. Connections are handled on their own tasks and the
//! handlers share no state. A client gets [`REQUEST_TIMEOUT`] to deliver its
//! whole request before it is answered with 408 and dropped.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use testbed_common::{debug, error, info, warn};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

use crate::api;
use crate::http::{self, HttpError, Response};

pub const DEFAULT_PORT: u16 = 3000;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)) }
    }
}

pub async fn bind(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind(cfg.bind).await?;
    Ok(listener)
}

/// Serves requests until the returned future is dropped.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    serve_with_timeout(listener, REQUEST_TIMEOUT).await
}

/// Like [`serve`], with a custom limit on how long a client may take to send
/// its request.
pub async fn serve_with_timeout(listener: TcpListener, request_timeout: Duration) -> anyhow::Result<()> {
    let local = listener.local_addr()?;
    info!("Listening on http://{local}");

    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, peer, request_timeout).await {
                        warn!("Connection from {peer} failed: {e}");
                    }
                });
            }
            Err(e) => error!("Accept error: {e}"),
        }
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    request_timeout: Duration,
) -> Result<(), HttpError> {
    let read = match timeout(request_timeout, http::read_request(&mut stream)).await {
        Ok(read) => read,
        Err(_) => {
            debug!("{peer} timed out after {request_timeout:?} without a full request");
            return Ok(Response::text(408, "request timed out").write_to(&mut stream).await?);
        }
    };

    let response = match read {
        Ok(request) => {
            let response = api::route(&request);
            info!("{peer} {} {} -> {}", request.method, request.path, response.status);
            response
        }
        Err(HttpError::ConnectionClosed) => {
            debug!("{peer} closed without sending a request");
            return Ok(());
        }
        Err(HttpError::Io(e)) => return Err(HttpError::Io(e)),
        Err(HttpError::BodyTooLarge) => Response::text(413, &HttpError::BodyTooLarge.to_string()),
        Err(e @ HttpError::UnsupportedEncoding(_)) => {
            warn!("{peer} sent a request we cannot read: {e}");
            Response::text(501, &e.to_string())
        }
        Err(e) => {
            warn!("{peer} sent a bad request: {e}");
            Response::text(400, &e.to_string())
        }
    };

    response.write_to(&mut stream).await?;
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    async fn roundtrip(raw: &[u8]) -> String {
        roundtrip_with_timeout(raw, REQUEST_TIMEOUT).await
    }

    async fn roundtrip_with_timeout(raw: &[u8], request_timeout: Duration) -> String {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_with_timeout(listener, request_timeout));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(raw).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        server.abort();
        response
    }

    #[test]
    fn default_config_binds_localhost() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind.to_string(), "127.0.0.1:3000");
    }

    #[tokio::test]
    async fn serves_a_routed_request() {
        let response = roundtrip(b"GET /api/redirect?page=todo HTTP/1.1\r\nHost: x\r\n\r\n").await;
        assert!(response.starts_with("HTTP/1.1 302 Found\r\n"), "{response}");
        assert!(response.contains("Location: /todo\r\n"));
    }

    #[tokio::test]
    async fn answers_garbage_with_bad_request() {
        let response = roundtrip(b"NOT-HTTP\r\n\r\n").await;
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"), "{response}");
    }

    #[tokio::test]
    async fn rejects_oversized_bodies() {
        let raw = format!("POST /api/forms HTTP/1.1\r\nContent-Length: {}\r\n\r\n", http::MAX_BODY_LEN + 1);
        let response = roundtrip(raw.as_bytes()).await;
        assert!(response.starts_with("HTTP/1.1 413 Payload Too Large\r\n"), "{response}");
    }

    #[tokio::test]
    async fn refuses_chunked_bodies() {
        let raw = b"POST /api/forms HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n4\r\n{}{}\r\n0\r\n\r\n";
        let response = roundtrip(raw).await;
        assert!(response.starts_with("HTTP/1.1 501 Not Implemented\r\n"), "{response}");
    }

    #[tokio::test]
    async fn closes_stalled_connections() {
        let request = roundtrip_with_timeout(b"GET /api/forms HTTP/1.1\r\n", Duration::from_millis(200));
        let response = timeout(Duration::from_secs(5), request)
            .await
            .expect("server kept a stalled connection open");
        assert!(response.starts_with("HTTP/1.1 408 Request Timeout\r\n"), "{response}");
    }
}
