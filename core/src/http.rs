//! # Minimal HTTP/1.1
//!
//! Just enough of the protocol to serve the demo endpoints: one request per
//! connection, `Content-Length` bodies only, and responses that always close.
//! Requests that declare a `Transfer-Encoding` are refused.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use url::Url;

/// Upper bound for the request line plus headers.
pub const MAX_HEAD_LEN: usize = 8 * 1024;
/// Upper bound for a request body.
pub const MAX_BODY_LEN: usize = 64 * 1024;

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";
const READ_CHUNK: usize = 1024;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("connection closed before a request was received")]
    ConnectionClosed,
    #[error("request head exceeds {MAX_HEAD_LEN} bytes")]
    HeadTooLarge,
    #[error("request body exceeds {MAX_BODY_LEN} bytes")]
    BodyTooLarge,
    #[error("malformed request: {0}")]
    Malformed(String),
    #[error("transfer encoding '{0}' is not supported")]
    UnsupportedEncoding(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Other(String),
}

impl FromStr for Method {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "PATCH" => Method::Patch,
            "DELETE" => Method::Delete,
            "OPTIONS" => Method::Options,
            other => Method::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Other(other) => other,
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Request {
    /// Builds a request from a method and an origin-form target such as
    /// `/api/redirect?page=forms`.
    pub fn new(method: Method, target: &str) -> Result<Self, HttpError> {
        if !target.starts_with('/') {
            return Err(HttpError::Malformed(format!("unsupported request target '{target}'")));
        }

        let url = Url::parse(&format!("http://localhost{target}"))
            .map_err(|e| HttpError::Malformed(format!("bad request target '{target}': {e}")))?;

        Ok(Self {
            method,
            path: url.path().to_string(),
            query: url.query_pairs().into_owned().collect(),
            headers: Vec::new(),
            body: Vec::new(),
        })
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// First value of a query parameter.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Parses the request line and headers. `head` excludes the blank line.
    pub fn parse_head(head: &str) -> Result<Self, HttpError> {
        let mut lines = head.split("\r\n");
        let request_line = lines
            .next()
            .filter(|line| !line.is_empty())
            .ok_or_else(|| HttpError::Malformed("missing request line".into()))?;

        let mut parts = request_line.split_whitespace();
        let (Some(method), Some(target), Some(version), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(HttpError::Malformed(format!("bad request line '{request_line}'")));
        };

        if !version.starts_with("HTTP/1.") {
            return Err(HttpError::Malformed(format!("unsupported version '{version}'")));
        }

        let method: Method = method.parse().unwrap_or_else(|never| match never {});
        let mut request = Request::new(method, target)?;

        for line in lines.filter(|line| !line.is_empty()) {
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| HttpError::Malformed(format!("bad header line '{line}'")))?;
            request.headers.push((name.trim().to_string(), value.trim().to_string()));
        }

        Ok(request)
    }

    fn content_length(&self) -> Result<usize, HttpError> {
        if let Some(encoding) = self.header("transfer-encoding") {
            return Err(HttpError::UnsupportedEncoding(encoding.to_string()));
        }
        match self.header("content-length") {
            None => Ok(0),
            Some(value) if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => value
                .parse()
                .map_err(|_| HttpError::Malformed(format!("bad content-length '{value}'"))),
            Some(value) => Err(HttpError::Malformed(format!("bad content-length '{value}'"))),
        }
    }
}

/// Reads one request: the head, then a body of `Content-Length` bytes.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, HttpError>
where
    R: AsyncRead + Unpin,
{
    let mut buf: Vec<u8> = Vec::with_capacity(READ_CHUNK);
    let mut chunk = [0u8; READ_CHUNK];

    let head_end = loop {
        if let Some(pos) = find_subslice(&buf, HEAD_TERMINATOR) {
            break pos;
        }
        if buf.len() > MAX_HEAD_LEN {
            return Err(HttpError::HeadTooLarge);
        }

        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            return Err(if buf.is_empty() {
                HttpError::ConnectionClosed
            } else {
                HttpError::Malformed("connection closed mid-request".into())
            });
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    if head_end > MAX_HEAD_LEN {
        return Err(HttpError::HeadTooLarge);
    }

    let head = std::str::from_utf8(&buf[..head_end])
        .map_err(|_| HttpError::Malformed("request head is not valid UTF-8".into()))?;
    let mut request = Request::parse_head(head)?;

    let body_len = request.content_length()?;
    if body_len > MAX_BODY_LEN {
        return Err(HttpError::BodyTooLarge);
    }

    let mut body = buf.split_off(head_end + HEAD_TERMINATOR.len());
    body.truncate(body_len);
    if body.len() < body_len {
        let already = body.len();
        body.resize(body_len, 0);
        reader.read_exact(&mut body[already..]).await?;
    }
    request.body = body;

    Ok(request)
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self { status, headers: Vec::new(), body: Vec::new() }
    }

    pub fn json(status: u16, value: &Value) -> Self {
        Self::new(status)
            .with_header("Content-Type", "application/json; charset=utf-8")
            .with_body(value.to_string())
    }

    pub fn text(status: u16, text: &str) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/plain; charset=utf-8")
            .with_body(text)
    }

    pub fn redirect(status: u16, location: &str) -> Self {
        Self::new(status).with_header("Location", location)
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Parses the body as JSON.
    pub fn json_body(&self) -> serde_json::Result<Value> {
        serde_json::from_slice(&self.body)
    }

    /// Serializes the status line, headers and body.
    ///
    /// `Content-Length` and `Connection: close` are always appended.
    /// Writes the serialized response and shuts the writer down.
    pub async fn write_to<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        writer.write_all(&self.to_bytes()).await?;
        writer.shutdown().await
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!("HTTP/1.1 {} {}\r\n", self.status, reason_phrase(self.status));
        for (name, value) in &self.headers {
            head.push_str(&format!("{name}: {value}\r\n"));
        }
        head.push_str(&format!("Content-Length: {}\r\n", self.body.len()));
        head.push_str("Connection: close\r\n\r\n");

        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        302 => "Found",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        413 => "Payload Too Large",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        _ => "Unknown",
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
