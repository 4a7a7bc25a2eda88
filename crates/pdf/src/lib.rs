//! Docsumm PDF collaborators
//!
//! Text extraction from uploaded PDFs and export of produced summaries

pub mod export;
pub mod extract;

pub use export::{render, ExportFormat};
pub use extract::{extract_from_bytes, PdfText};
