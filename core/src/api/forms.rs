//! The forms endpoint: lists the demo forms and acknowledges submissions.

use serde::Serialize;
use serde_json::{Value, json};
use testbed_common::info;

use super::{FORMS_PATH, method_not_allowed, timestamp};
use crate::http::{Method, Request, Response};

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE";

const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Credentials", "true"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET,OPTIONS,PATCH,DELETE,POST,PUT"),
    (
        "Access-Control-Allow-Headers",
        "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version",
    ),
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub path: &'static str,
}

pub const AVAILABLE_FORMS: [FormInfo; 4] = [
    FormInfo { id: "contact", name: "Contact Form", path: "/forms" },
    FormInfo { id: "auth", name: "Authentication Form", path: "/auth" },
    FormInfo { id: "upload", name: "File Upload Form", path: "/file-upload" },
    FormInfo { id: "todo", name: "Todo Form", path: "/todo" },
];

pub fn handle(request: &Request) -> Response {
    let response = match request.method {
        Method::Options => Response::new(200),
        Method::Get => list_forms(),
        Method::Post => submit(request),
        Method::Put => acknowledge("Form updated successfully"),
        Method::Delete => acknowledge("Form deleted successfully"),
        _ => method_not_allowed(request, ALLOWED_METHODS),
    };

    CORS_HEADERS
        .iter()
        .fold(response, |response, (name, value)| response.with_header(name, value))
}

fn list_forms() -> Response {
    Response::json(
        200,
        &json!({
            "message": "Forms endpoint - GET request",
            "endpoint": FORMS_PATH,
            "availableForms": AVAILABLE_FORMS,
            "timestamp": timestamp(),
        }),
    )
}

fn submit(request: &Request) -> Response {
    let payload: Value = if request.body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        match serde_json::from_slice(&request.body) {
            Ok(payload) => payload,
            Err(e) => {
                return Response::json(
                    400,
                    &json!({ "success": false, "message": format!("Invalid JSON body: {e}") }),
                );
            }
        }
    };

    let form_type = payload.get("formType").cloned().unwrap_or(Value::Null);
    let data = payload.get("data").cloned().unwrap_or(Value::Null);
    info!("Form submission received: formType={form_type} data={data}");

    Response::json(
        200,
        &json!({
            "success": true,
            "message": "Form submitted successfully",
            "formType": form_type,
            "submittedData": data,
            "timestamp": timestamp(),
        }),
    )
}

fn acknowledge(message: &str) -> Response {
    Response::json(
        200,
        &json!({ "success": true, "message": message, "timestamp": timestamp() }),
    )
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

    fn request(method: Method) -> Request {
        Request::new(method, FORMS_PATH).unwrap()
    }

    #[test]
    fn test_get_lists_forms() {
        let response = handle(&request(Method::Get));
        assert_eq!(response.status, 200);

        let body = response.json_body().unwrap();
        assert_eq!(body["endpoint"], "/api/forms");
        let ids: Vec<&str> = body["availableForms"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["contact", "auth", "upload", "todo"]);
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn test_every_response_has_cors() {
        for method in [Method::Get, Method::Options, Method::Patch] {
            let response = handle(&request(method));
            assert_eq!(response.header("access-control-allow-origin"), Some("*"));
            assert_eq!(response.header("Access-Control-Allow-Credentials"), Some("true"));
        }
    }

    #[test]
    fn test_options_is_empty() {
        let response = handle(&request(Method::Options));
        assert_eq!(response.status, 200);
        assert!(response.body.is_empty());
    }

    #[test]
    fn test_post_echoes_submission() {
        let body = json!({ "formType": "contact", "data": { "name": "Ada" } }).to_string();
        let response = handle(&request(Method::Post).with_body(body));
        assert_eq!(response.status, 200);

        let json = response.json_body().unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Form submitted successfully");
        assert_eq!(json["formType"], "contact");
        assert_eq!(json["submittedData"]["name"], "Ada");
    }

    #[test]
    fn test_post_without_body_gives_nulls() {
        let json = handle(&request(Method::Post)).json_body().unwrap();
        assert_eq!(json["success"], true);
        assert!(json["formType"].is_null());
        assert!(json["submittedData"].is_null());
    }

    #[test]
    fn test_post_with_bad_json() {
        let response = handle(&request(Method::Post).with_body("{not json"));
        assert_eq!(response.status, 400);
        assert_eq!(response.json_body().unwrap()["success"], false);
    }

    #[test]
    fn test_put_and_delete() {
        let put = handle(&request(Method::Put)).json_body().unwrap();
        assert_eq!(put["message"], "Form updated successfully");

        let delete = handle(&request(Method::Delete)).json_body().unwrap();
        assert_eq!(delete["message"], "Form deleted successfully");
    }

    #[test]
    fn test_other_methods_not_allowed() {
        let response = handle(&request(Method::Patch));
        assert_eq!(response.status, 405);
        assert_eq!(response.header("Allow"), Some("GET, POST, PUT, DELETE"));
        assert_eq!(response.body, b"Method PATCH Not Allowed");
    }
}
