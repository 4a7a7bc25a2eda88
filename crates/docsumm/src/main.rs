use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docsumm_common::{logger, AppConfig};
use docsumm_llm::{
    calculate_statistics, OllamaClient, SummaryLength, SummaryStrategy, Summarizer,
};
use docsumm_pdf::{extract_from_bytes, ExportFormat};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "docsumm")]
#[command(about = "AI-powered PDF document summarizer over a local Ollama server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8080")]
        port: u16,
    },

    /// Summarize a PDF file in one shot
    Summarize {
        /// Path to the PDF file
        file: PathBuf,

        /// Model name (defaults to the configured model)
        #[arg(long)]
        model: Option<String>,

        /// Strategy: extractive, abstractive, bullet_points, questions,
        /// key_insights
        #[arg(long, default_value = "abstractive")]
        strategy: String,

        /// Summary length for extractive/abstractive: short, medium, long
        #[arg(long, default_value = "medium")]
        length: String,

        /// Custom instructions (overrides --strategy)
        #[arg(long)]
        prompt: Option<String>,

        /// Write the summary to this file (.txt, .md or .pdf)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List models available on the Ollama server
    Models,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root early so
    // CLI argument overrides below win over file values
    load_dotenv_from_project_root();

    match cli.command {
        Commands::Serve { host, port } => {
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());

            let config = AppConfig::from_env()?;
            config.ensure_directories()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("docsumm starting...");
            tracing::info!("  Ollama: {}", config.ollama_base_url);
            tracing::info!("  Default model: {}", config.default_model);
            tracing::info!("  Input budget: {} chars", config.input_char_budget);

            println!("Server listening on http://{}:{}", host, port);

            docsumm_server::start_server(config).await?;
        }

        Commands::Summarize {
            file,
            model,
            strategy,
            length,
            prompt,
            output,
        } => {
            let config = AppConfig::from_env()?;
            logger::setup_console_logging(&config.log_level)?;

            run_summarize(config, file, model, strategy, length, prompt, output).await?;
        }

        Commands::Models => {
            let config = AppConfig::from_env()?;
            logger::setup_console_logging(&config.log_level)?;

            let client = OllamaClient::from_config(&config)?;
            let models = client.list_models().await;

            if models.is_empty() {
                eprintln!(
                    "No models available. Ensure Ollama is running (ollama serve) \
                     and pull a model: ollama pull llama3.2"
                );
                std::process::exit(1);
            }

            for model in models {
                println!("{}", model);
            }
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn run_summarize(
    config: AppConfig,
    file: PathBuf,
    model: Option<String>,
    strategy: String,
    length: String,
    prompt: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let length: SummaryLength = length
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let strategy = parse_strategy(&strategy, length, prompt)?;

    let bytes = std::fs::read(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let extracted = extract_from_bytes(&bytes);
    let Some(text) = extracted.text else {
        eprintln!("Could not extract text from {}", file.display());
        eprintln!("Ensure the PDF contains readable text (not scanned images)");
        std::process::exit(1);
    };

    println!(
        "Extracted {} characters from {} pages",
        text.chars().count(),
        extracted.pages
    );

    let client = OllamaClient::from_config(&config)?;
    let model = model.unwrap_or_else(|| config.default_model.clone());
    let summarizer = Summarizer::new(client, model, config.input_char_budget);

    let started = std::time::Instant::now();
    let Some(summary) = summarizer.summarize(&text, &strategy).await else {
        eprintln!("Failed to generate summary");
        eprintln!(
            "Try a different model or a shorter document, and ensure \
             Ollama is running: ollama serve"
        );
        std::process::exit(1);
    };

    if summary.truncated {
        eprintln!(
            "Note: document was truncated to the first {} characters",
            config.input_char_budget
        );
    }

    println!("\n{}\n", summary.text);

    let stats = calculate_statistics(&text, &summary.text);
    println!(
        "Model: {} | Strategy: {} | {:.1}s",
        summary.model,
        summary.strategy,
        started.elapsed().as_secs_f64()
    );
    println!(
        "Words: {} -> {} ({:.1}% compression)",
        stats.original_word_count, stats.summary_word_count, stats.compression_ratio
    );

    if let Some(output) = output {
        let format = format_for_path(&output)?;
        let title = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "document.pdf".to_string());

        let rendered = docsumm_pdf::render(&summary.text, &title, &summary.strategy, format)?;
        std::fs::write(&output, rendered)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        println!("Saved to {}", output.display());
    }

    Ok(())
}

fn parse_strategy(
    strategy: &str,
    length: SummaryLength,
    prompt: Option<String>,
) -> Result<SummaryStrategy> {
    // Custom instructions take precedence over the named strategies
    if let Some(prompt) = prompt {
        return Ok(SummaryStrategy::Custom(prompt));
    }

    match strategy.to_lowercase().as_str() {
        "extractive" => Ok(SummaryStrategy::Extractive(length)),
        "abstractive" => Ok(SummaryStrategy::Abstractive(length)),
        "bullet_points" | "bullets" => Ok(SummaryStrategy::BulletPoints),
        "questions" => Ok(SummaryStrategy::Questions),
        "key_insights" | "insights" => Ok(SummaryStrategy::KeyInsights),
        other => anyhow::bail!(
            "Unknown strategy '{}' (expected extractive, abstractive, \
             bullet_points, questions or key_insights)",
            other
        ),
    }
}

fn format_for_path(path: &Path) -> Result<ExportFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("txt");

    ext.parse::<ExportFormat>()
        .map_err(|e| anyhow::anyhow!("{} (use .txt, .md or .pdf)", e))
}
