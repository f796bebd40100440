//! Request routing for the demo endpoints.
//!
//! Handlers are plain functions from a [`Request`] to a [`Response`], so they
//! can be exercised without a socket.

use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::http::{Request, Response};

pub mod forms;
pub mod redirect;

pub const FORMS_PATH: &str = "/api/forms";
pub const REDIRECT_PATH: &str = "/api/redirect";

pub fn route(request: &Request) -> Response {
    let path = match request.path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    match path {
        FORMS_PATH => forms::handle(request),
        REDIRECT_PATH => redirect::handle(request),
        _ => Response::json(404, &json!({ "error": "Not found", "path": request.path })),
    }
}

/// Current time as an RFC 3339 UTC string with millisecond precision.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn method_not_allowed(request: &Request, allow: &str) -> Response {
    Response::text(405, &format!("Method {} Not Allowed", request.method)).with_header("Allow", allow)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
