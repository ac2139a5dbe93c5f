//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;
use state_builders::build_http_state;

use std::path::PathBuf;

use actix_files::Files;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use travel_backend::Trace;
#[cfg(debug_assertions)]
use travel_backend::doc::ApiDoc;
use travel_backend::domain::UPLOADS_PATH_PREFIX;
use travel_backend::inbound::http::api_scope;
use travel_backend::inbound::http::health::{HealthState, live, ready};
use travel_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    upload_dir: PathBuf,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        upload_dir,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(Files::new(UPLOADS_PATH_PREFIX, upload_dir))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Readiness flips to ready once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when the upload directory cannot be opened,
/// or when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config)?;
    let ServerConfig {
        bind_addr,
        db_pool: _,
        upload_dir,
        upload_max_bytes: _,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            upload_dir: upload_dir.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
