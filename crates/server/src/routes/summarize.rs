use actix_web::{post, web, HttpResponse};
use actix_multipart::Multipart;
use futures_util::StreamExt;
use tracing::{error, info};

use docsumm_llm::{calculate_statistics, SummaryLength, Summarizer};
use docsumm_pdf::extract_from_bytes;

use crate::state::AppState;
use crate::types::{ErrorResponse, StrategyKind, SummarizeResponse};

/// Parsed multipart fields of a summarize request
#[derive(Default)]
struct SummarizeForm {
    file_bytes: Vec<u8>,
    filename: String,
    model: Option<String>,
    strategy: Option<String>,
    length: Option<String>,
    custom_prompt: Option<String>,
}

/// POST /summarize - Upload a PDF and produce a summary
///
/// One fully awaited pipeline per request: extract text, build the
/// strategy prompt, call the model, compute statistics. Nothing runs
/// in the background and nothing is persisted.
#[post("/summarize")]
pub async fn summarize(
    payload: Multipart,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let form = read_form(payload).await?;

    if form.file_bytes.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_hint(
            "No file uploaded",
            "Send the PDF in a multipart field named 'file'",
        )));
    }

    let strategy_kind: StrategyKind = match form.strategy.as_deref().unwrap_or("abstractive").parse()
    {
        Ok(kind) => kind,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::with_hint("Invalid strategy", e)));
        }
    };

    let length: SummaryLength = match form.length.as_deref().unwrap_or("medium").parse() {
        Ok(length) => length,
        Err(e) => {
            return Ok(
                HttpResponse::BadRequest().json(ErrorResponse::with_hint("Invalid length", e))
            );
        }
    };

    let strategy = match strategy_kind.into_strategy(length, form.custom_prompt) {
        Ok(strategy) => strategy,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::with_hint("Invalid strategy parameters", e)));
        }
    };

    // Text extraction is CPU-bound; keep it off the executor threads
    let bytes = form.file_bytes;
    let extracted = web::block(move || extract_from_bytes(&bytes))
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;

    let Some(text) = extracted.text else {
        return Ok(HttpResponse::UnprocessableEntity().json(ErrorResponse::with_hint(
            "Could not extract text from PDF",
            "Ensure the PDF contains readable text (not scanned images)",
        )));
    };

    let model = form
        .model
        .unwrap_or_else(|| state.config.default_model.clone());

    info!(
        "Summarize request - File: {}, Pages: {}, Model: {}, Strategy: {}",
        form.filename,
        extracted.pages,
        model,
        strategy.label()
    );

    let summarizer = Summarizer::new(
        state.client.clone(),
        model,
        state.config.input_char_budget,
    );

    let started = std::time::Instant::now();
    let Some(summary) = summarizer.summarize(&text, &strategy).await else {
        error!("Summary generation failed for {}", form.filename);
        return Ok(HttpResponse::BadGateway().json(ErrorResponse::with_hint(
            "Failed to generate summary",
            "Try a different model or a shorter document, and ensure \
             Ollama is running: ollama serve",
        )));
    };
    let processing_secs = started.elapsed().as_secs_f64();

    let statistics = calculate_statistics(&text, &summary.text);

    Ok(HttpResponse::Ok().json(SummarizeResponse {
        summary: summary.text,
        model: summary.model,
        strategy: summary.strategy,
        truncated: summary.truncated,
        pages: extracted.pages,
        statistics,
        processing_secs,
    }))
}

/// Drain the multipart payload into its fields
async fn read_form(mut payload: Multipart) -> actix_web::Result<SummarizeForm> {
    let mut form = SummarizeForm {
        filename: "document.pdf".to_string(),
        ..Default::default()
    };

    while let Some(field) = payload.next().await {
        let mut field = field?;
        let content_disposition = field.content_disposition();

        let Some(name) = content_disposition.get_name().map(str::to_string) else {
            continue;
        };

        if name == "file" {
            if let Some(filename) = content_disposition.get_filename() {
                form.filename = filename.to_string();
            }
            while let Some(chunk) = field.next().await {
                form.file_bytes.extend_from_slice(&chunk?);
            }
        } else {
            let mut data = Vec::new();
            while let Some(chunk) = field.next().await {
                data.extend_from_slice(&chunk?);
            }
            let value = String::from_utf8_lossy(&data).trim().to_string();
            if value.is_empty() {
                continue;
            }

            match name.as_str() {
                "model" => form.model = Some(value),
                "strategy" => form.strategy = Some(value),
                "length" => form.length = Some(value),
                "custom_prompt" => form.custom_prompt = Some(value),
                _ => {}
            }
        }
    }

    Ok(form)
}
