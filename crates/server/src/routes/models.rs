use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::ModelsResponse;

/// GET /models - Available Ollama models
///
/// An empty listing is a 200 with a remediation hint, not an error:
/// the client-side selector simply has nothing to offer.
#[get("/models")]
pub async fn get_models(state: web::Data<std::sync::Arc<AppState>>) -> HttpResponse {
    let models = state.client.list_models().await;

    let hint = if models.is_empty() {
        Some(
            "No models available. Ensure Ollama is running (ollama serve) \
             and pull a model: ollama pull llama3.2"
                .to_string(),
        )
    } else {
        None
    };

    HttpResponse::Ok().json(ModelsResponse {
        models,
        default: state.config.default_model.clone(),
        hint,
    })
}
