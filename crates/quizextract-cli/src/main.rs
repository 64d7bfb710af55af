use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use quizextract_core::PdfBackend;
use quizextract_core::config_file::{self, ConfigFile};
use quizextract_parsing::{ParsingConfigBuilder, QuestionExtractor};
use quizextract_pdf_mupdf::MupdfBackend;
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;

/// Quiz question extractor - Pull numbered multiple-choice questions out of a PDF into JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the PDF to read questions from
    input_pdf: Option<PathBuf>,

    /// Path of the JSON file to write
    output_json: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    _rest: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Dry run: extract and print questions without writing the JSON file
    #[arg(long)]
    dry_run: bool,

    /// Log per-block decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Path to a config file (replaces the default config lookup)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.config {
        Some(ref path) => config_file::load_from_path(path).ok_or_else(|| {
            anyhow::anyhow!("Config file not found or invalid: {}", path.display())
        })?,
        None => config_file::load_config(),
    };

    let backend = MupdfBackend::new()
        .with_header_exclusion(config.header_exclusion())
        .with_footer_exclusion(config.footer_exclusion());

    let mut stdout = std::io::stdout();
    run(&cli, &config, &backend, &mut stdout)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(
    cli: &Cli,
    config: &ConfigFile,
    backend: &dyn PdfBackend,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let color = ColorMode(!cli.no_color);

    let parsing_config = ParsingConfigBuilder::new()
        .record_defaults(config.record_defaults())
        .build()?;
    let extractor = QuestionExtractor::with_config(parsing_config);

    match (&cli.input_pdf, &cli.output_json) {
        (Some(input), _) if cli.dry_run => dry_run(input, &extractor, backend, color, writer),
        (Some(input), Some(output)) => extract(input, output, &extractor, backend, color, writer),
        _ => {
            output::print_usage(writer)?;
            Ok(())
        }
    }
}

fn extract(
    input: &Path,
    output: &Path,
    extractor: &QuestionExtractor,
    backend: &dyn PdfBackend,
    color: ColorMode,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    output::print_processing(writer, input, color)?;

    let extraction = extractor
        .extract_questions_via_backend(input, backend)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    output::print_extraction_summary(
        writer,
        extraction.questions.len(),
        &extraction.skip_stats,
        color,
    )?;

    quizextract_reporting::write_json(&extraction.questions, output)?;
    output::print_saved(writer, output, color)?;

    Ok(())
}

fn dry_run(
    input: &Path,
    extractor: &QuestionExtractor,
    backend: &dyn PdfBackend,
    color: ColorMode,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let extraction = extractor
        .extract_questions_via_backend(input, backend)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| input.display().to_string());

    output::print_dry_run(writer, &file_name, &extraction, color)?;
    Ok(())
}
