use actix_web::{post, web, HttpResponse};
use tracing::error;

use crate::types::{ErrorResponse, ExportRequest};

/// POST /export - Render a summary as a downloadable file
///
/// Pure transformation of the request body; no summarization state is
/// consulted.
#[post("/export")]
pub async fn export(req: web::Json<ExportRequest>) -> HttpResponse {
    let req = req.into_inner();

    if req.summary.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::with_hint(
            "Nothing to export",
            "The summary text is empty",
        ));
    }

    match docsumm_pdf::render(&req.summary, &req.title, &req.strategy, req.format) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(req.format.content_type())
            .insert_header((
                "Content-Disposition",
                format!(
                    "attachment; filename=\"summary.{}\"",
                    req.format.extension()
                ),
            ))
            .body(bytes),
        Err(e) => {
            error!("Export failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::with_hint(
                "Failed to render export",
                e.to_string(),
            ))
        }
    }
}
