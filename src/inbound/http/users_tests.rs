//! Tests for user HTTP handlers.

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
        .service(set_is_active)
        .service(get_review)
}

#[actix_web::test]
async fn set_is_active_returns_the_updated_user() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/users/setIsActive")
        .set_json(json!({"user_id": "a", "is_active": false}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["user"]["user_id"].as_str(), Some("a"));
    assert_eq!(body["user"]["is_active"].as_bool(), Some(false));
    assert_eq!(body["user"]["team_name"].as_str(), Some("payments"));
}

#[actix_web::test]
async fn unknown_users_map_to_not_found() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/users/setIsActive")
        .set_json(json!({"user_id": "ghost", "is_active": true}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn get_review_lists_the_assigned_pull_requests() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/users/getReview?user_id=b")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["user_id"].as_str(), Some("b"));
    let queue = body["pull_requests"].as_array().expect("queue array");
    assert_eq!(queue.len(), 2);
    assert_eq!(queue[0]["pull_request_id"].as_str(), Some("pr-1"));
    assert_eq!(queue[0]["status"].as_str(), Some("OPEN"));
    assert_eq!(queue[1]["author_id"].as_str(), Some("d"));
}

#[actix_web::test]
async fn empty_review_queues_return_an_empty_list() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/users/getReview?user_id=idle")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["pull_requests"].as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn malformed_user_ids_are_rejected() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/users/getReview?user_id=%20u1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["code"].as_str(), Some("invalid_user_id"));
}
