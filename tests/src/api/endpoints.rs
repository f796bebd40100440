use serde_json::json;

use crate::utils::TestServer;

#[tokio::test]
async fn forms_get_over_the_wire() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .send("GET /api/forms HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
    assert_eq!(response.header("Connection"), Some("close"));
    assert_eq!(
        response.header("Content-Length"),
        Some(response.body.len().to_string().as_str())
    );

    let body = response.json().unwrap();
    assert_eq!(body["message"], "Forms endpoint - GET request");
    assert_eq!(body["availableForms"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn forms_post_echoes_payload() {
    let server = TestServer::start().await.unwrap();
    let payload = json!({ "formType": "auth", "data": { "user": "ada", "remember": true } }).to_string();
    let raw = format!(
        "POST /api/forms HTTP/1.1\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        payload.len(),
        payload
    );

    let response = server.send(&raw).await.unwrap();
    assert_eq!(response.status, 200);

    let body = response.json().unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["formType"], "auth");
    assert_eq!(body["submittedData"], json!({ "user": "ada", "remember": true }));
}

#[tokio::test]
async fn forms_post_chunked_is_refused() {
    let server = TestServer::start().await.unwrap();
    let payload = json!({ "formType": "auth", "data": 1 }).to_string();
    let raw = format!(
        "POST /api/forms HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n{:x}\r\n{}\r\n0\r\n\r\n",
        payload.len(),
        payload
    );

    let response = server.send(&raw).await.unwrap();
    assert_eq!(response.status, 501);
    assert!(response.body.contains("chunked"), "{}", response.body);
}

#[tokio::test]
async fn forms_patch_is_not_allowed() {
    let server = TestServer::start().await.unwrap();
    let response = server.send("PATCH /api/forms HTTP/1.1\r\n\r\n").await.unwrap();

    assert_eq!(response.status, 405);
    assert_eq!(response.header("Allow"), Some("GET, POST, PUT, DELETE"));
    assert_eq!(response.body, "Method PATCH Not Allowed");
}

#[tokio::test]
async fn redirect_known_page_case_insensitive() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .send("GET /api/redirect?page=LOGIN HTTP/1.1\r\n\r\n")
        .await
        .unwrap();

    assert_eq!(response.status, 302);
    assert_eq!(response.header("Location"), Some("/auth"));
}

#[tokio::test]
async fn redirect_unknown_page_lists_table() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .send("GET /api/redirect?page=nope HTTP/1.1\r\n\r\n")
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let body = response.json().unwrap();
    assert_eq!(body["redirects"]["perf"], "/performance");
    assert_eq!(body["availablePages"].as_array().unwrap().len(), 16);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server.send("GET /missing HTTP/1.1\r\n\r\n").await.unwrap();
    assert_eq!(response.status, 404);
}

#[tokio::test]
async fn server_keeps_serving_after_bad_request() {
    let server = TestServer::start().await.unwrap();

    let bad = server.send("garbage\r\n\r\n").await.unwrap();
    assert_eq!(bad.status, 400);

    let good = server.send("OPTIONS /api/forms HTTP/1.1\r\n\r\n").await.unwrap();
    assert_eq!(good.status, 200);
    assert!(good.body.is_empty());
}
