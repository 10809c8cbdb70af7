//! CLI tool for converting Markdown decks into slide models.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use slides_core::{Error, OutlineFormatter, SlideModel, SourceNormalizer};
use slides_markdown::SlideParser;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Convert Markdown slide decks into structured slide models.
#[derive(Parser, Debug)]
#[command(name = "md2slides")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown file(s), slides separated by "---"
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Outline)]
    format: OutputFormat,

    /// Slide separator line
    #[arg(short, long, default_value = "---", value_parser = parse_separator)]
    separator: String,

    /// Skip slides with no title and no content instead of failing
    #[arg(long)]
    skip_empty: bool,

    /// Leave speaker notes out of the outline
    #[arg(long)]
    no_notes: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain-text outline for preview
    Outline,
    /// JSON slide model for a renderer
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Outline => "txt",
            Self::Json => "json",
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let normalizer = SourceNormalizer::new();
    let parser = SlideParser::new().with_separator(args.separator.as_str());
    let formatter = OutlineFormatter::new().with_notes(!args.no_notes);

    let mut failures = 0;

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &args, &normalizer, &parser, &formatter) {
            Ok(output) => {
                if args.print {
                    print!("{}", output);
                } else {
                    let output_path =
                        get_output_path(input_path, args.output.as_ref(), args.format)?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} file(s) failed", failures, args.input.len());
    }

    Ok(())
}

/// Reject separators that would match every blank line.
fn parse_separator(value: &str) -> std::result::Result<String, String> {
    match value.trim() {
        "" => Err("separator must contain a non-whitespace character".to_string()),
        trimmed => Ok(trimmed.to_string()),
    }
}

/// Process a single Markdown deck.
fn process_file(
    input_path: &Path,
    args: &Args,
    normalizer: &SourceNormalizer,
    parser: &SlideParser,
    formatter: &OutlineFormatter,
) -> Result<String> {
    let source = normalizer
        .load(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    let slides = if args.skip_empty {
        parse_skipping_empty(parser, &source)?
    } else {
        parser.parse_document(&source)?
    };

    if args.verbose {
        eprintln!("  Found {} slides", slides.len());
    }

    let output = match args.format {
        OutputFormat::Outline => formatter.format_with_newline(&slides),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&slides)
                .context("Failed to serialize slides")?;
            json.push('\n');
            json
        }
    };

    Ok(output)
}

/// Parse a document, dropping slides that have no title and no content.
///
/// Slide positions still come from segmentation, so a skipped first slide
/// does not promote the next one to the title layout.
fn parse_skipping_empty(parser: &SlideParser, source: &str) -> Result<Vec<SlideModel>> {
    let mut slides = Vec::new();

    for (index, chunk) in parser.segment(source)?.into_iter().enumerate() {
        match parser.parse_slide(chunk, index) {
            Ok(slide) => slides.push(slide),
            Err(Error::EmptySlide { index }) => {
                log::warn!("Skipping empty slide {}", index + 1);
            }
            Err(e) => return Err(e.into()),
        }
    }

    if slides.is_empty() {
        return Err(Error::EmptyDocument.into());
    }

    Ok(slides)
}

/// Determine the output path for a processed file.
fn get_output_path(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.{}", stem, format.extension());

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
