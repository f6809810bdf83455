//! Request body decoding: JSON, HTML forms, and everything else.

use serde_json::{json, Value};

use crate::support::{assert_text, start_server};

#[tokio::test]
async fn form_body_creates_book() {
    let server = start_server().await;

    let resp = server
        .client
        .post(server.url("/api/books"))
        .form(&[("title", "Form Book")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "_id": "1", "title": "Form Book" }));
}

#[tokio::test]
async fn form_body_adds_comment() {
    let server = start_server().await;
    let id = server.create("Form Target").await;

    let resp = server
        .client
        .post(server.url(&format!("/api/books/{id}")))
        .form(&[("comment", "via form")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["comments"], json!(["via form"]));
}

#[tokio::test]
async fn no_body_means_missing_title() {
    let server = start_server().await;

    let resp = server
        .client
        .post(server.url("/api/books"))
        .send()
        .await
        .unwrap();
    assert_text(resp, "missing title").await;
}

#[tokio::test]
async fn plain_text_body_is_ignored() {
    let server = start_server().await;

    let resp = server
        .client
        .post(server.url("/api/books"))
        .header("content-type", "text/plain")
        .body("title=Sneaky")
        .send()
        .await
        .unwrap();
    assert_text(resp, "missing title").await;
    assert_eq!(server.service.count().unwrap(), 0);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let server = start_server().await;

    let resp = server
        .client
        .post(server.url("/api/books"))
        .header("content-type", "application/json")
        .body("{\"title\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(server.service.count().unwrap(), 0);
}

#[tokio::test]
async fn non_string_title_means_missing_title() {
    let server = start_server().await;

    for body in [
        json!({ "title": false }),
        json!({ "title": 0 }),
        json!({ "title": 5 }),
        json!({ "title": ["Dune"] }),
        json!({ "title": { "name": "Dune" } }),
    ] {
        let resp = server
            .client
            .post(server.url("/api/books"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_text(resp, "missing title").await;
    }
    assert_eq!(server.service.count().unwrap(), 0);
}

#[tokio::test]
async fn non_string_comment_means_missing_comment() {
    let server = start_server().await;
    let id = server.create("Target").await;

    for body in [json!({ "comment": true }), json!({ "comment": 42 })] {
        let resp = server
            .client
            .post(server.url(&format!("/api/books/{id}")))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_text(resp, "missing comment").await;
    }
    assert!(server.service.get_book(&id).unwrap().comments.is_empty());
}

#[tokio::test]
async fn non_string_comment_on_unknown_book() {
    let server = start_server().await;

    let resp = server
        .client
        .post(server.url("/api/books/77"))
        .json(&json!({ "comment": 1 }))
        .send()
        .await
        .unwrap();
    assert_text(resp, "no book exists").await;
}

#[tokio::test]
async fn unknown_fields_are_ignored() {
    let server = start_server().await;

    let resp = server
        .client
        .post(server.url("/api/books"))
        .json(&json!({ "title": "Extra", "author": "Someone" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "_id": "1", "title": "Extra" }));
}
