//! Server construction and route wiring.

mod config;

pub use config::{DatabaseSettings, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use prometheus::Registry;
use tracing::info;
use tracing_actix_web::TracingLogger;

use signup_service::domain::RegistrationService;
use signup_service::inbound::http::metrics::metrics;
use signup_service::inbound::http::signup::signup_resource;
use signup_service::inbound::http::state::HttpState;
use signup_service::inbound::http::welcome::welcome;
use signup_service::outbound::metrics::PrometheusSignupMetrics;
use signup_service::outbound::persistence::DieselUserStore;

/// Build the shared HTTP state from the configured pool and registry.
fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let signup_metrics = PrometheusSignupMetrics::new(&config.registry)
        .map_err(|e| std::io::Error::other(format!("signup metrics registration failed: {e}")))?;
    let store = Arc::new(DieselUserStore::new(config.db_pool.clone()));
    Ok(web::Data::new(HttpState {
        registration: Arc::new(RegistrationService::new(store)),
        metrics: Arc::new(signup_metrics),
    }))
}

fn build_app(
    http_state: web::Data<HttpState>,
    registry: web::Data<Registry>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .app_data(registry)
        .service(signup_resource())
        .service(welcome)
        .service(metrics)
}

/// Construct an Actix HTTP server from the prepared configuration.
///
/// # Parameters
/// - `config`: pre-built [`ServerConfig`] holding the bind address,
///   connection pool, and metrics registry.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when metric registration or socket binding
/// fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(&config)?;
    let registry = web::Data::new(config.registry.clone());
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || {
        build_app(http_state.clone(), registry.clone()).wrap(TracingLogger::default())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "http server listening");
    Ok(server)
}
