use std::net::{Ipv4Addr, SocketAddr};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// A server bound to an ephemeral loopback port, stopped on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(testbed_core::server::serve(listener));
        Ok(Self { addr, handle })
    }

    /// Sends raw bytes and returns the full response text.
    pub async fn send(&self, raw: &str) -> anyhow::Result<RawResponse> {
        let mut stream = TcpStream::connect(self.addr).await?;
        stream.write_all(raw.as_bytes()).await?;

        let mut text = String::new();
        stream.read_to_string(&mut text).await?;
        RawResponse::parse(&text)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RawResponse {
    fn parse(text: &str) -> anyhow::Result<Self> {
        let (head, body) = text
            .split_once("\r\n\r\n")
            .ok_or_else(|| anyhow::anyhow!("response has no header terminator: {text:?}"))?;
        let mut lines = head.split("\r\n");

        let status_line = lines.next().unwrap_or_default();
        let status = status_line
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| anyhow::anyhow!("bad status line: {status_line}"))?
            .parse()?;

        let headers = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .collect();

        Ok(Self { status, headers, body: body.to_string() })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> anyhow::Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
