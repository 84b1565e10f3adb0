//! Wire-level tests for the employees API: each request builder is sent
//! through the production `ehttp::fetch` path against a wiremock server, and
//! the reply goes through the same decoders the UI uses.
//!
//! The ehttp callback is awaited through a flume channel, which is Send-safe
//! and usable from the tokio test runtime.

use staffdesk_business::{
    change_password_request, decode_employee_list, decode_message, delete_request, list_request,
    save_request, ApiError, EmployeePayload, ListQuery, SortColumn, SortOrder,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn fetch(request: ehttp::Request) -> Result<ehttp::Response, String> {
    let (tx, rx) = flume::bounded(1);
    ehttp::fetch(request, move |result| {
        let _ = tx.send(result);
    });
    rx.recv_async().await.expect("ehttp callback dropped")
}

fn sample_payload() -> EmployeePayload {
    EmployeePayload {
        emp_id: "E-31".to_owned(),
        name: "Meera".to_owned(),
        salary: "81000".to_owned(),
        email: "meera@example.com".to_owned(),
        department: "Engineering".to_owned(),
        join_date: Some("2024-01-05".to_owned()),
    }
}

#[tokio::test]
async fn list_fetch_decodes_enveloped_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get_users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "data": [
                {"id": 1, "emp_id": "E-1", "name": "Asha", "salary": 50000.0,
                 "email": "asha@example.com", "department": "QA",
                 "join_date": "15-Mar-2023"},
                {"id": 2, "emp_id": "E-2", "name": "Ravi", "salary": "62000",
                 "email": "ravi@example.com", "department": "Sales",
                 "join_date": null}
            ]
        })))
        .mount(&server)
        .await;

    let result = fetch(list_request(&server.uri(), &ListQuery::default())).await;
    let records = decode_employee_list(result).expect("decode list");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Asha");
    assert_eq!(records[1].join_date, None);
}

#[tokio::test]
async fn list_fetch_sends_search_and_sort_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get_users"))
        .and(query_param("search", "asha"))
        .and(query_param("sort_by", "salary"))
        .and(query_param("order", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let query = ListQuery {
        search: Some("asha".to_owned()),
        sort: Some((SortColumn::Salary, SortOrder::Desc)),
        page: None,
        limit: None,
    };
    let result = fetch(list_request(&server.uri(), &query)).await;
    let records = decode_employee_list(result).expect("decode list");
    assert!(records.is_empty());
}

#[tokio::test]
async fn create_posts_payload_and_yields_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create_user"))
        .and(body_json(serde_json::json!({
            "emp_id": "E-31",
            "name": "Meera",
            "salary": "81000",
            "email": "meera@example.com",
            "department": "Engineering",
            "join_date": "2024-01-05"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "status": "success",
            "message": "User created successfully!"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = save_request(&server.uri(), None, &sample_payload()).expect("build");
    let message = decode_message(fetch(request).await, "Created").expect("decode");
    assert_eq!(message, "User created successfully!");
}

#[tokio::test]
async fn update_puts_to_the_record_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/update_user/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "message": "Employee updated!"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = save_request(&server.uri(), Some(12), &sample_payload()).expect("build");
    let message = decode_message(fetch(request).await, "Updated").expect("decode");
    assert_eq!(message, "Employee updated!");
}

#[tokio::test]
async fn create_conflict_surfaces_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create_user"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "status": "error",
            "message": "Employee ID already exists"
        })))
        .mount(&server)
        .await;

    let request = save_request(&server.uri(), None, &sample_payload()).expect("build");
    let err = decode_message(fetch(request).await, "Created").expect_err("conflict");
    assert_eq!(err.to_string(), "Employee ID already exists");
}

#[tokio::test]
async fn delete_hits_the_record_path_and_tolerates_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/delete_user/4"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let message = decode_message(fetch(delete_request(&server.uri(), 4)).await, "Deleted")
        .expect("decode");
    assert_eq!(message, "Deleted");
}

#[tokio::test]
async fn delete_missing_record_is_a_backend_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/delete_user/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "status": "error",
            "message": "Employee not found"
        })))
        .mount(&server)
        .await;

    let err = decode_message(fetch(delete_request(&server.uri(), 999)).await, "Deleted")
        .expect_err("missing");
    assert_eq!(err.to_string(), "Employee not found");
}

#[tokio::test]
async fn change_password_posts_both_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/change_password"))
        .and(body_json(serde_json::json!({
            "current_password": "old-secret",
            "new_password": "new-secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "message": "Password updated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request =
        change_password_request(&server.uri(), "old-secret", "new-secret").expect("build");
    let message = decode_message(fetch(request).await, "Password changed").expect("decode");
    assert_eq!(message, "Password updated");
}

#[tokio::test]
async fn unreachable_server_maps_to_network_error() {
    // Nothing listens on this port.
    let request = list_request("http://127.0.0.1:1", &ListQuery::default());
    let err = decode_employee_list(fetch(request).await).expect_err("network");
    assert!(matches!(err, ApiError::Network(_)));
}
