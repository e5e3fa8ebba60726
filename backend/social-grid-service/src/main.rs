use actix_web::{middleware::Logger, web, App, HttpServer};
use social_grid_service::logging::init_tracing;
use social_grid_service::{build_cors, configure_routes, AppState, Config, DatabaseHandle};
use std::io;

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Social Grid Service
///
/// Serves profile listing, the post feed, post creation and database
/// diagnostics. Starts even when the database is missing or unreachable.
#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting social-grid-service v{} (env: {})",
        env!("CARGO_PKG_VERSION"),
        config.app.env
    );

    let database = DatabaseHandle::from_env(social_grid_service::SERVICE_NAME).await;
    let state = AppState::new(config.clone(), database);
    let state_data = web::Data::new(state);

    let bind_address = config.bind_address();
    tracing::info!("Starting HTTP server on {}", bind_address);

    let cors_config = config.cors.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state_data.clone())
            .wrap(build_cors(&cors_config))
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(configure_routes)
    })
    .bind(&bind_address)?
    .workers(config.app.workers)
    .run();

    let server_handle = server.handle();
    let mut server_task = tokio::spawn(server);

    let finished = tokio::select! {
        joined = &mut server_task => Some(joined),
        _ = shutdown_signal() => None,
    };

    let joined = match finished {
        Some(joined) => joined,
        None => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            server_task.await
        }
    };

    tracing::info!("social-grid-service shutting down");
    joined.map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?
}
