//! Tests for team HTTP handlers.

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
        .service(add_team)
        .service(get_team)
}

fn sample_team_payload() -> Value {
    json!({
        "team_name": "payments",
        "members": [
            {"user_id": "a", "username": "Alice", "is_active": true},
            {"user_id": "b", "username": "Bob", "is_active": false}
        ]
    })
}

#[actix_web::test]
async fn add_team_returns_created_with_the_roster() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/team/add")
        .set_json(sample_team_payload())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body["team"]["team_name"].as_str(),
        Some("payments")
    );
    assert_eq!(body["team"]["members"][0]["user_id"].as_str(), Some("a"));
    assert_eq!(body["team"]["members"][1]["is_active"].as_bool(), Some(false));
}

#[actix_web::test]
async fn duplicate_team_names_map_to_conflict() {
    let app = actix_test::init_service(test_app()).await;

    let mut payload = sample_team_payload();
    payload["team_name"] = Value::String("taken".to_owned());

    let request = actix_test::TestRequest::post()
        .uri("/team/add")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"].as_str(), Some("already_exists"));
}

#[actix_web::test]
async fn blank_team_names_are_rejected() {
    let app = actix_test::init_service(test_app()).await;

    let mut payload = sample_team_payload();
    payload["team_name"] = Value::String(String::new());

    let request = actix_test::TestRequest::post()
        .uri("/team/add")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"].as_str(), Some("invalid_request"));
    assert_eq!(body["details"]["field"].as_str(), Some("team_name"));
}

#[actix_web::test]
async fn get_team_returns_members_in_roster_order() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/team/get?team_name=payments")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let members = body["team"]["members"].as_array().expect("members array");
    assert_eq!(
        members
            .iter()
            .map(|member| member["user_id"].as_str().expect("user_id"))
            .collect::<Vec<_>>(),
        vec!["a", "b"]
    );
}

#[actix_web::test]
async fn unknown_teams_map_to_not_found() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/team/get?team_name=ghosts")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"].as_str(), Some("not_found"));
}
