use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;
use quizextract_core::{ExtractionResult, SkipStats};

pub const USAGE: &str = "Usage: quizextract <input_pdf> <output_json>";

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

pub fn print_usage(w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{}", USAGE)
}

pub fn print_processing(w: &mut dyn Write, input: &Path, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "Processing {}...", input.display().bold())
    } else {
        writeln!(w, "Processing {}...", input.display())
    }
}

/// Print the question count and, if any blocks were dropped, why.
pub fn print_extraction_summary(
    w: &mut dyn Write,
    total_questions: usize,
    skip_stats: &SkipStats,
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(w, "Extracted {} potential questions.", total_questions)?;

    if skip_stats.skipped() > 0 {
        let msg = format!(
            "(Skipped {} empty blocks, {} blocks with too few options)",
            skip_stats.empty_blocks, skip_stats.too_few_options
        );
        if color.enabled() {
            writeln!(w, "{}", msg.dimmed())?;
        } else {
            writeln!(w, "{}", msg)?;
        }
    }
    Ok(())
}

pub fn print_saved(w: &mut dyn Write, output: &Path, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{} {}", "Saved to".green(), output.display())
    } else {
        writeln!(w, "Saved to {}", output.display())
    }
}

/// Print every extracted question without writing the output file.
pub fn print_dry_run(
    w: &mut dyn Write,
    file_name: &str,
    extraction: &ExtractionResult,
    color: ColorMode,
) -> std::io::Result<()> {
    let stats = &extraction.skip_stats;

    if color.enabled() {
        writeln!(
            w,
            "{} {} ({} blocks segmented)\n",
            "DRY RUN:".bold().cyan(),
            file_name.bold(),
            stats.total_blocks
        )?;
    } else {
        writeln!(
            w,
            "DRY RUN: {} ({} blocks segmented)\n",
            file_name, stats.total_blocks
        )?;
    }

    for question in &extraction.questions {
        if color.enabled() {
            writeln!(w, "{}", format!("[{}]", question.id).bold().yellow())?;
        } else {
            writeln!(w, "[{}]", question.id)?;
        }
        writeln!(w, "  Question: {}", question.question)?;
        for option in &question.options {
            writeln!(w, "    {}", option)?;
        }
        writeln!(w)?;
    }

    writeln!(
        w,
        "Total: {} questions ({} empty blocks, {} blocks with too few options)",
        extraction.questions.len(),
        stats.empty_blocks,
        stats.too_few_options
    )?;
    Ok(())
}
