//! Server construction and wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use reviewboard::ApiDoc;
use reviewboard::inbound::http::health::{HealthState, live, ready};
use reviewboard::inbound::http::pull_requests::{
    create_pull_request, merge_pull_request, reassign_reviewer,
};
use reviewboard::inbound::http::state::HttpState;
use reviewboard::inbound::http::teams::{add_team, get_team};
use reviewboard::inbound::http::users::{get_review, set_is_active};

/// Build the HTTP server from configuration.
///
/// The returned server is not yet running; callers await it after marking
/// the health state ready.
pub fn create_server(
    config: &ServerConfig,
    health_state: web::Data<HealthState>,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(config.db_pool()));
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || build_app(health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    Ok(server)
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    #[cfg_attr(not(debug_assertions), expect(unused_mut))]
    let mut app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(add_team)
        .service(get_team)
        .service(set_is_active)
        .service(get_review)
        .service(create_pull_request)
        .service(merge_pull_request)
        .service(reassign_reviewer)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}
