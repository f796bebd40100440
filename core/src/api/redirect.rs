//! The redirect endpoint: maps a short page name to a route of the app.

use serde_json::{Map, Value, json};

use super::{REDIRECT_PATH, method_not_allowed};
use crate::http::{Method, Request, Response};

/// Page alias to route, in listing order.
pub const REDIRECTS: [(&str, &str); 16] = [
    ("forms", "/forms"),
    ("auth", "/auth"),
    ("login", "/auth"),
    ("upload", "/file-upload"),
    ("files", "/file-upload"),
    ("images", "/image-injection"),
    ("todo", "/todo"),
    ("todos", "/todo"),
    ("dynamic", "/dynamic-content"),
    ("scroll", "/infinite-scroll"),
    ("a11y", "/accessibility"),
    ("perf", "/performance"),
    ("errors", "/error-handling"),
    ("test", "/testing-features"),
    ("responsive", "/responsive-demo"),
    ("modal", "/modals"),
];

/// Case-insensitive alias lookup.
pub fn lookup(page: &str) -> Option<&'static str> {
    REDIRECTS
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(page))
        .map(|(_, target)| *target)
}

pub fn handle(request: &Request) -> Response {
    if request.method != Method::Get {
        return method_not_allowed(request, "GET");
    }

    match request.query("page").and_then(lookup) {
        Some(target) => Response::redirect(302, target),
        None => Response::json(200, &listing()),
    }
}

fn listing() -> Value {
    let redirects: Map<String, Value> = REDIRECTS
        .iter()
        .map(|(alias, target)| (alias.to_string(), Value::from(*target)))
        .collect();
    let pages: Vec<&str> = REDIRECTS.iter().map(|(alias, _)| *alias).collect();

    json!({
        "message": "Redirect API",
        "usage": format!("{REDIRECT_PATH}?page=forms"),
        "availablePages": pages,
        "redirects": redirects,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
