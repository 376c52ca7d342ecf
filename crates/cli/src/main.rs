//! CLI for normalizing course slide decks against a style template.

use anyhow::{Context, Result};
use clap::Parser;
use deckfix_pipeline::NormalizeReport;
use std::path::{Path, PathBuf};

/// Rebuild a slide deck on top of a style template: canonical layouts,
/// sections, titles, license slide, slide numbers, and notes footers.
#[derive(Parser, Debug)]
#[command(name = "deckfix")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source deck to normalize
    source: PathBuf,

    /// Style template deck the output is rebuilt on
    #[arg(short, long)]
    template: PathBuf,

    /// Output file (default: "<source stem>-converted.json" next to the source)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep the editing session claimed after finishing, for inspection
    #[arg(long)]
    visible: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let dest = match args.output {
        Some(path) => path,
        None => derive_output_path(&args.source),
    };

    if args.verbose {
        eprintln!("Normalizing: {}", args.source.display());
    }

    let report = deckfix_pipeline::normalize(&args.source, &dest, &args.template, args.visible)
        .with_context(|| format!("Failed to normalize {}", args.source.display()))?;

    print_summary(&report);
    println!("Written to: {}", dest.display());
    Ok(())
}

/// Place the output next to the source, under a "-converted" name.
fn derive_output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let filename = format!("{}-converted.json", stem);
    match source.parent() {
        Some(parent) => parent.join(filename),
        None => PathBuf::from(filename),
    }
}

fn print_summary(report: &NormalizeReport) {
    println!(
        "Normalized {} slides in {} sections ({} deck)",
        report.slides, report.sections, report.language
    );
    println!(
        "  layouts: {} reassigned, {} deleted",
        report.layouts_reassigned, report.layouts_deleted
    );
    println!(
        "  slides: {} license replaced, {} titles rewritten",
        report.licenses_replaced, report.titles_rewritten
    );
}
