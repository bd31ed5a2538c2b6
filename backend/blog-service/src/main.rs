use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use blog_service::{config, routes, AppState, Config};
use db_pool::create_pool;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "blog-service";

async fn run_healthcheck() -> io::Result<()> {
    let port = db_pool::env_utils::env_or("BLOG_SERVICE_PORT", 8080u16);
    let url = format!("http://127.0.0.1:{}/health", port);

    match reqwest::Client::new().get(&url).send().await {
        Ok(resp) if resp.status().is_success() => Ok(()),
        Ok(resp) => {
            eprintln!("healthcheck HTTP status: {}", resp.status());
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"))
        }
        Err(e) => {
            eprintln!("healthcheck HTTP error: {}", e);
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"))
        }
    }
}

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
                tracing::warn!(error = %e, "SIGTERM handler unavailable, waiting for Ctrl+C only");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn build_cors(allowed: impl Iterator<Item = String>) -> Cors {
    let mut cors = Cors::default();
    for origin in allowed {
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(&origin);
        }
    }
    cors.allow_any_method().allow_any_header().max_age(3600)
}

/// Blog Service
///
/// REST API for users, posts, comments, and likes.
///
/// # Routes
///
/// - `POST /users/register`
/// - `GET|POST /posts`, `GET /posts/{id}`
/// - `GET /posts/{id}/comments`
/// - `GET|POST|DELETE /posts/{id}/likes`
/// - `POST /comments`, `GET|DELETE /comments/{id}`
/// - `/health`, `/health/ready`, `/health/live`, `/metrics`
#[actix_web::main]
async fn main() -> io::Result<()> {
    // Container healthcheck: `blog-service healthcheck`
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        return run_healthcheck().await;
    }

    dotenvy::dotenv().ok();

    // JSON lines in production for log aggregation, human-readable otherwise
    let json_logs = config::is_production_env();
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
    );
    if json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting {} v{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let db_cfg = config.database.pool_config(SERVICE_NAME);

    db_cfg.log_config();
    let db_pool = match create_pool(db_cfg).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Connected to database");

    let state = web::Data::new(AppState::new(db_pool.clone()));
    let origins: Vec<String> = config.cors.origins().map(str::to_string).collect();
    let bind_address = config.app.bind_address();

    tracing::info!("Starting HTTP server at {}", bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(build_cors(origins.clone().into_iter()))
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(routes::configure)
    })
    .bind(&bind_address)?
    .workers(config.app.workers)
    .disable_signals()
    .run();

    let server_handle = server.handle();
    let mut server_task = tokio::spawn(server);

    let result = tokio::select! {
        joined = &mut server_task => match joined {
            Ok(result) => result,
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        },
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            match server_task.await {
                Ok(result) => result,
                Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
            }
        }
    };

    db_pool.close().await;
    tracing::info!("Blog-service shutting down");

    result
}
