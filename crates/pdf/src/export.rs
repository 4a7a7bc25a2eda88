//! Summary export
//!
//! Renders a produced summary as plain text, Markdown or a formatted
//! PDF. Pure transformation of its inputs; no coupling to the
//! summarization layer.

use chrono::Local;
use docsumm_common::{DocsummError, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use serde::{Deserialize, Serialize};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Text,
    Markdown,
    Pdf,
}

impl ExportFormat {
    /// MIME type for download responses
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Markdown => "text/markdown; charset=utf-8",
            Self::Pdf => "application/pdf",
        }
    }

    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Pdf => "pdf",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!("Unknown export format '{}'", other)),
        }
    }
}

/// Render a summary in the requested format
pub fn render(
    summary: &str,
    title: &str,
    strategy_label: &str,
    format: ExportFormat,
) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Text => Ok(render_text(summary, title, strategy_label).into_bytes()),
        ExportFormat::Markdown => Ok(render_markdown(summary, title, strategy_label).into_bytes()),
        ExportFormat::Pdf => render_pdf(summary, title, strategy_label),
    }
}

fn generated_on() -> String {
    Local::now().format("%B %d, %Y at %I:%M %p").to_string()
}

/// Plain-text rendition with a simple header block
pub fn render_text(summary: &str, title: &str, strategy_label: &str) -> String {
    format!(
        "{title}\n{underline}\n\nSummary type: {strategy}\nGenerated on: {date}\n\n{summary}\n",
        title = title,
        underline = "=".repeat(title.chars().count().max(1)),
        strategy = strategy_label,
        date = generated_on(),
        summary = summary
    )
}

/// Markdown rendition
pub fn render_markdown(summary: &str, title: &str, strategy_label: &str) -> String {
    format!(
        "# {title}\n\n*{strategy} summary, generated on {date}*\n\n{summary}\n",
        title = title,
        strategy = strategy_label,
        date = generated_on(),
        summary = summary
    )
}

// A4 geometry in millimeters
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const LINE_HEIGHT: f32 = 5.5;
const BODY_FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const MAX_LINE_CHARS: usize = 95;

/// Formatted PDF rendition
///
/// Builtin Helvetica covers WinAnsi only, so characters outside
/// Latin-1 are replaced before layout.
pub fn render_pdf(summary: &str, title: &str, strategy_label: &str) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| DocsummError::export(format!("Failed to load builtin font: {}", e)))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| DocsummError::export(format!("Failed to load builtin font: {}", e)))?;

    let mut current_layer = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - MARGIN;

    current_layer.use_text(
        sanitize_line(title),
        TITLE_FONT_SIZE,
        Mm(MARGIN),
        Mm(y),
        &bold,
    );
    y -= LINE_HEIGHT * 2.0;

    current_layer.use_text(
        sanitize_line(&format!(
            "{} summary - generated on {}",
            strategy_label,
            generated_on()
        )),
        BODY_FONT_SIZE,
        Mm(MARGIN),
        Mm(y),
        &font,
    );
    y -= LINE_HEIGHT * 2.0;

    for line in wrap_lines(summary, MAX_LINE_CHARS) {
        if y < MARGIN {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            current_layer = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT - MARGIN;
        }

        if !line.is_empty() {
            current_layer.use_text(
                sanitize_line(&line),
                BODY_FONT_SIZE,
                Mm(MARGIN),
                Mm(y),
                &font,
            );
        }
        y -= LINE_HEIGHT;
    }

    doc.save_to_bytes()
        .map_err(|e| DocsummError::export(format!("Failed to serialize PDF: {}", e)))
}

/// Replace characters the builtin font cannot encode
fn sanitize_line(line: &str) -> String {
    line.chars()
        .map(|c| {
            if c == '\t' {
                ' '
            } else if (c as u32) < 256 && !c.is_control() {
                c
            } else {
                '?'
            }
        })
        .collect()
}

/// Word-boundary wrap; paragraph breaks become empty lines
fn wrap_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if !current.is_empty()
                && current.chars().count() + 1 + word.chars().count() > max_chars
            {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_export_contains_title_and_summary() {
        let out = render_text("- A\n- B", "report.pdf", "Bullet Points");
        assert!(out.contains("report.pdf"));
        assert!(out.contains("Bullet Points"));
        assert!(out.contains("- A\n- B"));
    }

    #[test]
    fn test_markdown_export_has_heading() {
        let out = render_markdown("body text", "My Doc", "Abstractive");
        assert!(out.starts_with("# My Doc"));
        assert!(out.contains("body text"));
    }

    #[test]
    fn test_pdf_export_produces_pdf_bytes() {
        let bytes = render_pdf("A short summary.", "doc.pdf", "Extractive").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_pdf_export_paginates_long_summaries() {
        let long_summary = "word ".repeat(5000);
        let bytes = render_pdf(&long_summary, "doc.pdf", "Custom").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_wrap_lines_respects_max_width() {
        let lines = wrap_lines(&"word ".repeat(100), 20);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert!(lines.len() > 1);
    }

    #[test]
    fn test_sanitize_replaces_non_latin1() {
        assert_eq!(sanitize_line("caf\u{e9} 요약"), "caf\u{e9} ??");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("pdf".parse::<ExportFormat>(), Ok(ExportFormat::Pdf));
        assert_eq!("TXT".parse::<ExportFormat>(), Ok(ExportFormat::Text));
        assert!("docx".parse::<ExportFormat>().is_err());
    }
}
