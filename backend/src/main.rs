use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use html_pdf_backend::config::AppConfig;
use html_pdf_backend::services;
use html_pdf_backend::state::AppState;
use log::{info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    let show_docs = config.docs_enabled();
    let json_limit = config.json_limit;
    let url = format!("http://{}:{}", config.host, config.port);

    info!(
        "Configuration: renderer={}, temp_root={}, timeout={:?}, docs={}",
        config.renderer_bin.display(),
        config.temp_root.display(),
        config.render_timeout,
        show_docs
    );

    let state = web::Data::new(AppState::from_config(&config));

    // Abort in-flight renders on Ctrl+C so graceful shutdown does not wait
    // for them.
    {
        let shutdown = state.shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received shutdown signal, cancelling running renders");
                    shutdown.cancel();
                }
                Err(e) => warn!("Failed to listen for Ctrl+C: {}", e),
            }
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(state.clone())
            .configure(|cfg| services::configure(cfg, show_docs))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
