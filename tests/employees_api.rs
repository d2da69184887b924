mod support;

use axum::http::StatusCode;
use serde_json::json;
use support::TestApp;

fn jan() -> serde_json::Value {
    json!({ "firstName": "Jan", "lastName": "Nowak", "department": "Tester" })
}

#[tokio::test]
async fn create_acknowledges_without_returning_the_record() {
    let app = TestApp::new();
    let (status, body) = app.post("/api/employees", jan()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "OK" }));
}

#[tokio::test]
async fn create_then_get_by_id_returns_submitted_fields() {
    let app = TestApp::new();
    let id = app.create("employees", jan()).await;
    let (status, body) = app.get(&format!("/api/employees/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "_id": id, "firstName": "Jan", "lastName": "Nowak", "department": "Tester" })
    );
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let app = TestApp::new();
    let id = app.create("employees", jan()).await;
    let (status, body) = app
        .put(&format!("/api/employees/{}", id), json!({ "firstName": "Anna" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "OK" }));

    let (_, body) = app.get(&format!("/api/employees/{}", id)).await;
    assert_eq!(body["firstName"], "Anna");
    assert_eq!(body["lastName"], "Nowak");
    assert_eq!(body["department"], "Tester");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = TestApp::new();
    let id = app.create("employees", jan()).await;
    let (status, body) = app.delete(&format!("/api/employees/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "OK" }));

    let (status, body) = app.get(&format!("/api/employees/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Not found" }));
}

#[tokio::test]
async fn list_returns_every_record_in_insertion_order() {
    let app = TestApp::new();
    for (first, last) in [("Jan", "Nowak"), ("Anna", "Kowalska"), ("Piotr", "Zielinski")] {
        app.create(
            "employees",
            json!({ "firstName": first, "lastName": last, "department": "Marketing" }),
        )
        .await;
    }
    let (status, body) = app.get("/api/employees").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|row| row["firstName"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, ["Jan", "Anna", "Piotr"]);
}

#[tokio::test]
async fn list_of_empty_collection_is_empty_array() {
    let app = TestApp::new();
    assert_eq!(app.get("/api/employees").await, (StatusCode::OK, json!([])));
}

#[tokio::test]
async fn random_on_empty_collection_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/employees/random").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Not found" }));
}

#[tokio::test]
async fn random_on_single_record_returns_it() {
    let app = TestApp::new();
    let id = app.create("employees", jan()).await;
    for _ in 0..5 {
        let (status, body) = app.get("/api/employees/random").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["_id"], id.as_str());
    }
}

#[tokio::test]
async fn random_picks_an_existing_record() {
    let app = TestApp::new();
    let a = app.create("employees", jan()).await;
    let b = app
        .create(
            "employees",
            json!({ "firstName": "Anna", "lastName": "Kowalska", "department": "Marketing" }),
        )
        .await;
    for _ in 0..10 {
        let (_, body) = app.get("/api/employees/random").await;
        let picked = body["_id"].as_str().expect("id").to_string();
        assert!(picked == a || picked == b);
    }
}

#[tokio::test]
async fn invalid_create_is_a_server_error_with_field_errors() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/api/employees", json!({ "firstName": "J", "lastName": ["Nowak"] }))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let errors = &body["message"]["errors"];
    assert_eq!(errors["firstName"]["kind"], "minlength");
    assert_eq!(errors["lastName"]["kind"], "type");
    assert_eq!(errors["department"]["kind"], "required");

    let (_, list) = app.get("/api/employees").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn invalid_update_is_a_server_error_and_keeps_the_record() {
    let app = TestApp::new();
    let id = app.create("employees", jan()).await;
    let (status, _) = app
        .put(&format!("/api/employees/{}", id), json!({ "department": "X" }))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let (_, body) = app.get(&format!("/api/employees/{}", id)).await;
    assert_eq!(body["department"], "Tester");
}

#[tokio::test]
async fn missing_id_on_update_and_delete_is_not_found() {
    let app = TestApp::new();
    let missing = uuid::Uuid::new_v4();
    let (status, body) = app
        .put(&format!("/api/employees/{}", missing), json!({ "firstName": "Anna" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Not found..." }));

    let (status, body) = app.delete(&format!("/api/employees/{}", missing)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Not found..." }));
}

#[tokio::test]
async fn malformed_id_is_a_server_error() {
    let app = TestApp::new();
    for (status, body) in [
        app.get("/api/employees/123").await,
        app.delete("/api/employees/123").await,
        app.put("/api/employees/123", json!({ "firstName": "Anna" })).await,
    ] {
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "invalid identifier: '123'" }));
    }
}

#[tokio::test]
async fn unparseable_body_is_a_server_error() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/employees")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{ not json"))
        .expect("request");
    let (status, body) = app.send_request(request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().expect("message").starts_with("bad request"));
}

#[tokio::test]
async fn oversized_body_is_a_server_error() {
    let app = TestApp::with_body_limit(64);
    let payload = json!({
        "firstName": "Jan",
        "lastName": "Nowak",
        "department": "Tester",
        "notes": "x".repeat(64),
    })
    .to_string();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/employees")
        .header("content-type", "application/json")
        .header("content-length", payload.len())
        .body(axum::body::Body::from(payload))
        .expect("request");
    let (status, body) = app.send_request(request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().expect("message").starts_with("bad request"));
    assert_eq!(app.get("/api/employees").await.1, json!([]));
}

#[tokio::test]
async fn unrouted_method_is_not_found_json() {
    let app = TestApp::new();
    for (method, uri) in [
        ("PATCH", "/api/employees"),
        ("POST", "/api/employees/random"),
        ("PATCH", "/api/employees/123"),
    ] {
        let request = axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .body(axum::body::Body::empty())
            .expect("request");
        let (status, body) = app.send_request(request).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(body, json!({ "message": "Not found..." }));
    }
}
