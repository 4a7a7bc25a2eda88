//! Docsumm HTTP server
//!
//! actix-web surface wiring upload, summarization and export together

mod routes;
mod state;
mod types;

pub use state::AppState;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use docsumm_common::{AppConfig, DocsummError, Result};
use tracing_actix_web::TracingLogger;

/// Maximum accepted upload size (bytes)
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    tracing::info!("Starting docsumm server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES))
            .service(routes::health::health)
            .service(routes::models::get_models)
            .service(routes::summarize::summarize)
            .service(routes::export::export)
    })
    .bind(&bind_addr)
    .map_err(|e| DocsummError::config(format!("Failed to bind {}: {}", bind_addr, e)))?
    .run()
    .await?;

    Ok(())
}
