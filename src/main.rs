use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use pravah_backend::{
    db::postgres::create_pool, graceful_shutdown::shutdown_signal, middlewares::auth::AuthMiddleware,
    routes::configure_routes, settings::AppConfig, AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url)
        .await
        .expect("Failed to create database connection pool");

    let app_state = web::Data::new(AppState::new(&config, pool));

    // Register for auth-state changes before the first session probe so a
    // change landing mid-probe is never dropped.
    if let Err(e) = app_state.session_manager.init().await {
        tracing::error!("Session manager initialization failed: {}", e);
    }

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting Pravah API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(AuthMiddleware)
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
