//! Tests for pull request HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use super::*;
use crate::inbound::http::test_support::fixture_state;

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(fixture_state()))
        .service(create_pull_request)
        .service(merge_pull_request)
        .service(reassign_reviewer)
}

fn sample_create_payload() -> Value {
    json!({
        "pull_request_id": "pr-1",
        "pull_request_name": "Fix flaky tests",
        "author_id": "a"
    })
}

#[actix_web::test]
async fn create_returns_created_with_assigned_reviewers() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/pullRequest/create")
        .set_json(sample_create_payload())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    let pull_request = &body["pull_request"];
    assert_eq!(pull_request["pull_request_id"].as_str(), Some("pr-1"));
    assert_eq!(
        pull_request["assigned_reviewers"]
            .as_array()
            .expect("reviewers array")
            .iter()
            .map(|reviewer| reviewer.as_str().expect("reviewer id"))
            .collect::<Vec<_>>(),
        vec!["b", "c"]
    );
    assert_eq!(pull_request["status"].as_str(), Some("OPEN"));
    assert!(pull_request.get("merged_at").is_none());
}

#[actix_web::test]
async fn duplicate_pull_request_ids_map_to_conflict() {
    let app = actix_test::init_service(test_app()).await;

    let mut payload = sample_create_payload();
    payload["pull_request_id"] = Value::String("pr-dup".to_owned());

    let request = actix_test::TestRequest::post()
        .uri("/pullRequest/create")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"].as_str(), Some("already_exists"));
}

#[actix_web::test]
async fn unknown_authors_map_to_not_found() {
    let app = actix_test::init_service(test_app()).await;

    let mut payload = sample_create_payload();
    payload["author_id"] = Value::String("ghost".to_owned());

    let request = actix_test::TestRequest::post()
        .uri("/pullRequest/create")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn merge_returns_the_merged_record() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/pullRequest/merge")
        .set_json(json!({"pull_request_id": "pr-1"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["pull_request"]["status"].as_str(), Some("MERGED"));
    assert!(body["pull_request"]["merged_at"].is_string());
}

#[actix_web::test]
async fn merging_unknown_pull_requests_maps_to_not_found() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/pullRequest/merge")
        .set_json(json!({"pull_request_id": "pr-missing"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn reassign_replaces_the_reviewer() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/pullRequest/reassign")
        .set_json(json!({
            "pull_request_id": "pr-1",
            "old_reviewer_id": "b",
            "new_reviewer_id": "d"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body["pull_request"]["assigned_reviewers"][0].as_str(),
        Some("d")
    );
}

#[actix_web::test]
async fn reassigning_on_merged_pull_requests_maps_to_conflict() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/pullRequest/reassign")
        .set_json(json!({
            "pull_request_id": "pr-merged",
            "old_reviewer_id": "b",
            "new_reviewer_id": "d"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"].as_str(), Some("conflict"));
}

#[actix_web::test]
async fn reassigning_an_unassigned_reviewer_maps_to_conflict() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/pullRequest/reassign")
        .set_json(json!({
            "pull_request_id": "pr-1",
            "old_reviewer_id": "z",
            "new_reviewer_id": "d"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"].as_str(), Some("not_assigned"));
}
