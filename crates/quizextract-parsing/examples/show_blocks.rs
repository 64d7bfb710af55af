//! Show how a plain-text dump is segmented into question blocks
//!
//! Usage: cargo run --example show_blocks -- /path/to/dump.txt

use anyhow::{Context, Result};
use quizextract_parsing::QuestionExtractor;
use quizextract_parsing::section::segment_blocks;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        println!("Usage: show_blocks <text-file>");
        return Ok(());
    };

    let text = std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    println!("=== Full text length: {} chars ===\n", text.len());

    let extractor = QuestionExtractor::new();
    let blocks = segment_blocks(&text);
    println!("=== {} blocks ===", blocks.len());

    for (i, block) in blocks.iter().enumerate() {
        match extractor.parse_block(block) {
            None => println!("\n[{}] (empty)", i + 1),
            Some((question, options)) => {
                let verdict = if options.len() >= extractor.config().min_options() {
                    "KEEP"
                } else {
                    "DROP"
                };
                println!("\n[{}] {} {}", i + 1, verdict, question);
                for option in &options {
                    println!("    {}", option);
                }
            }
        }
    }

    let result = extractor.extract_from_text(&text);
    println!(
        "\nTotal: {} questions ({} empty blocks, {} with too few options)",
        result.questions.len(),
        result.skip_stats.empty_blocks,
        result.skip_stats.too_few_options
    );

    Ok(())
}
