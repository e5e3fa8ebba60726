/// Social Grid Service Library
///
/// HTTP backend for a minimal social grid: profile listing, a post feed,
/// post creation and database diagnostics, over a schemaless document store.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Collection schemas and request/response bodies
/// - `services`: Business logic layer
/// - `normalize`: Rendering of stored records as JSON
/// - `state`: Shared application state and store initialisation
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `logging`: Tracing subscriber setup
/// - `metrics`: Prometheus collectors
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod openapi;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::{AppState, DatabaseHandle};

use actix_cors::Cors;
use actix_web::error::JsonPayloadError;
use actix_web::web;
use config::CorsConfig;
use openapi::ApiDoc;
use utoipa::OpenApi;

/// Name reported to the database driver and in logs
pub const SERVICE_NAME: &str = "social-grid-service";

/// Register every route plus the body and query extractor error handlers.
///
/// Missing fields and wrong field types map to 422, unparsable JSON to 400.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let app_error = match &err {
            JsonPayloadError::Deserialize(e) if e.is_data() => AppError::Validation(e.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        };
        app_error.into()
    });
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into());

    cfg.app_data(json_config)
        .app_data(query_config)
        .app_data(web::Data::new(ApiDoc::openapi()))
        .route("/", web::get().to(handlers::root))
        .route("/test", web::get().to(handlers::database_test))
        .route("/schema", web::get().to(handlers::schema))
        .route(
            ApiDoc::openapi_json_path(),
            web::get().to(handlers::openapi_json),
        )
        .route("/metrics", web::get().to(metrics::serve_metrics))
        .service(
            web::scope("/api")
                .route("/hello", web::get().to(handlers::api_hello))
                .route("/profiles", web::get().to(handlers::list_profiles))
                .route("/feed", web::get().to(handlers::get_feed))
                .route("/posts", web::post().to(handlers::create_post)),
        );
}

/// CORS policy from configuration; `*` allows any origin without credentials
pub fn build_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();
    let mut any_origin = false;
    for origin in config.allowed_origins.split(',') {
        let origin = origin.trim();
        if origin == "*" {
            any_origin = true;
            cors = cors.allow_any_origin();
        } else if !origin.is_empty() {
            cors = cors.allowed_origin(origin);
        }
    }
    if !any_origin {
        cors = cors.supports_credentials();
    }
    cors.allow_any_method().allow_any_header().max_age(3600)
}
