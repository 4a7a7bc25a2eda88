use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::HealthResponse;

/// GET /health - Ollama liveness check
#[get("/health")]
pub async fn health(state: web::Data<std::sync::Arc<AppState>>) -> HttpResponse {
    let connected = state.client.check_connection().await;

    HttpResponse::Ok().json(HealthResponse {
        connected,
        ollama_url: state.client.base_url().to_string(),
    })
}
